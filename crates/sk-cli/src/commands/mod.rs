//! Command implementations for the Skein CLI

pub mod common;
pub mod refresh;
pub mod reset;
pub mod rollback;
pub mod update;
