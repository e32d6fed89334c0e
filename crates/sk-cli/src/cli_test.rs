use super::*;

#[test]
fn test_no_subcommand_defaults_to_update() {
    let cli = Cli::try_parse_from(["skein"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_subcommands() {
    let cli = Cli::try_parse_from(["skein", "rollback"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Rollback)));

    let cli = Cli::try_parse_from(["skein", "reset"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Reset)));

    let cli = Cli::try_parse_from(["skein", "refresh"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Refresh)));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let err = Cli::try_parse_from(["skein", "upgrade"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
}

#[test]
fn test_global_flags() {
    let cli = Cli::try_parse_from([
        "skein",
        "--dsn",
        "root:@tcp(127.0.0.1:3306)/app",
        "--workspace-dir",
        ".tmp",
        "--timeout-secs",
        "300",
        "update",
    ])
    .unwrap();

    assert_eq!(cli.global.dsn.as_deref(), Some("root:@tcp(127.0.0.1:3306)/app"));
    assert_eq!(cli.global.workspace_dir.as_deref(), Some(".tmp"));
    assert_eq!(cli.global.timeout_secs, Some(300));
    assert!(matches!(cli.command, Some(Commands::Update)));
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["skein", "update", "--verbose"]).unwrap();
    assert!(cli.global.verbose);
}
