//! Connection descriptor: driver identifier plus parsed connection string.
//!
//! The connection string uses the `user:pass@proto(host:port)/schema?params`
//! DSN form. The synthesized runner consumes it verbatim, while the schema
//! probe needs a URL, so the descriptor parses the DSN once and can emit
//! both representations.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{CoreError, CoreResult};

/// RFC 3986 unreserved characters stay literal; everything else in the
/// userinfo gets percent-encoded. The DSN form allows '/', '#', '%' and
/// '@' in passwords, none of which survive raw in a URL.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Supported database drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Mysql,
}

impl Driver {
    /// Driver name as it appears in the DSN and the generated source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Driver::Mysql => "mysql",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Driver {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Driver::Mysql),
            other => Err(CoreError::UnknownDriver {
                name: other.to_string(),
            }),
        }
    }
}

/// Driver plus parsed connection string, immutable for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    driver: Driver,
    dsn: String,
    user: String,
    password: String,
    proto: String,
    host: String,
    port: u16,
    schema: String,
    params: Option<String>,
}

impl ConnectionDescriptor {
    /// Parse a `user:pass@proto(host:port)/schema?params` connection string.
    pub fn parse(driver: Driver, dsn: &str) -> CoreResult<Self> {
        let malformed = |reason: &str| CoreError::MalformedDsn {
            dsn: dsn.to_string(),
            reason: reason.to_string(),
        };

        let open = dsn.find('(').ok_or_else(|| malformed("missing 'proto(host:port)' section"))?;
        let close = dsn.find(')').ok_or_else(|| malformed("unterminated 'proto(' section"))?;
        if close < open {
            return Err(malformed("unterminated 'proto(' section"));
        }

        // Credentials end at the last '@' before the protocol section, so
        // passwords containing '@' still parse.
        let at = dsn[..open]
            .rfind('@')
            .ok_or_else(|| malformed("missing '@' between credentials and address"))?;
        let (user, password) = match dsn[..at].split_once(':') {
            Some((u, p)) => (u.to_string(), p.to_string()),
            None => (dsn[..at].to_string(), String::new()),
        };
        if user.is_empty() {
            return Err(malformed("missing user"));
        }

        let proto = dsn[at + 1..open].to_string();
        if proto.is_empty() {
            return Err(malformed("missing protocol"));
        }

        let addr = &dsn[open + 1..close];
        let (host, port) = match addr.split_once(':') {
            Some((h, p)) => {
                let port: u16 = p
                    .parse()
                    .map_err(|_| malformed("invalid port number"))?;
                (h.to_string(), port)
            }
            None => (addr.to_string(), 3306),
        };
        if host.is_empty() {
            return Err(malformed("missing host"));
        }

        let rest = &dsn[close + 1..];
        let rest = rest
            .strip_prefix('/')
            .ok_or_else(|| malformed("missing '/schema' after address"))?;
        let (schema, params) = match rest.split_once('?') {
            Some((s, p)) => (s.to_string(), Some(p.to_string())),
            None => (rest.to_string(), None),
        };
        if schema.is_empty() {
            return Err(malformed("missing schema name"));
        }

        Ok(Self {
            driver,
            dsn: dsn.to_string(),
            user,
            password,
            proto,
            host,
            port,
            schema,
            params,
        })
    }

    /// The driver this descriptor was parsed for.
    pub fn driver(&self) -> Driver {
        self.driver
    }

    /// The raw DSN, exactly as supplied. This is what the synthesized
    /// runner embeds.
    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    /// The schema (database) name.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// The network protocol named in the DSN (`tcp` in the common case).
    pub fn proto(&self) -> &str {
        &self.proto
    }

    /// Query params from the DSN, if any (e.g. `charset=utf8`).
    pub fn params(&self) -> Option<&str> {
        self.params.as_deref()
    }

    /// A URL form of the descriptor for the sqlx probe connection.
    ///
    /// DSN query params (charset and friends) configure the runner's ORM
    /// session and are deliberately not forwarded; the probe only issues
    /// the existence/introspection statements.
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            percent_encode(self.user.as_bytes(), USERINFO),
            percent_encode(self.password.as_bytes(), USERINFO),
            self.host,
            self.port,
            self.schema
        )
    }
}

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod tests;
