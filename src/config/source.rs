use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Keys checked, in order, in both `.env` files and the process environment.
pub const URI_KEYS: [&str; 2] = ["DB_URL", "MONGO_URL"];

pub const DEFAULT_DB_NAME: &str = "opo";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No connection string found (tried {0}); pass --db-url or set DB_URL")]
    MissingUri(String),
    #[error("Could not read env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// One place a connection string may come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionSource {
    Argument(Option<String>),
    EnvFile(PathBuf),
    Environment,
}

impl fmt::Display for ConnectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionSource::Argument(_) => write!(f, "command-line argument"),
            ConnectionSource::EnvFile(path) => write!(f, "env file {}", path.display()),
            ConnectionSource::Environment => write!(f, "process environment"),
        }
    }
}

impl ConnectionSource {
    /// Look this source up. A missing env file is a miss, not an error.
    pub fn lookup(&self) -> Result<Option<String>, ConfigError> {
        match self {
            ConnectionSource::Argument(value) => Ok(non_empty(value.clone())),
            ConnectionSource::EnvFile(path) => {
                if !path.is_file() {
                    return Ok(None);
                }

                let iter = dotenvy::from_path_iter(path).map_err(|source| ConfigError::EnvFile {
                    path: path.clone(),
                    source,
                })?;

                let mut found: Vec<(String, String)> = Vec::new();
                for item in iter {
                    let (key, value) = item.map_err(|source| ConfigError::EnvFile {
                        path: path.clone(),
                        source,
                    })?;
                    if URI_KEYS.contains(&key.as_str()) {
                        found.push((key, value));
                    }
                }

                Ok(URI_KEYS.iter().find_map(|wanted| {
                    found
                        .iter()
                        .find(|(key, _)| key == wanted)
                        .and_then(|(_, value)| non_empty(Some(value.clone())))
                }))
            }
            ConnectionSource::Environment => Ok(URI_KEYS
                .iter()
                .find_map(|key| non_empty(env::var(key).ok()))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUri {
    pub uri: String,
    pub source: ConnectionSource,
}

/// Evaluate `sources` in order and return the first connection string found.
pub fn resolve_uri(sources: &[ConnectionSource]) -> Result<ResolvedUri, ConfigError> {
    for source in sources {
        if let Some(uri) = source.lookup()? {
            return Ok(ResolvedUri {
                uri,
                source: source.clone(),
            });
        }
    }

    let tried = sources
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(ConfigError::MissingUri(tried))
}

/// The usual lookup order: explicit argument, then `./.env`, then the environment.
pub fn default_sources(argument: Option<String>) -> Vec<ConnectionSource> {
    vec![
        ConnectionSource::Argument(argument),
        ConnectionSource::EnvFile(PathBuf::from(".env")),
        ConnectionSource::Environment,
    ]
}

pub fn database_name() -> String {
    non_empty(env::var("DB_NAME").ok()).unwrap_or_else(|| DEFAULT_DB_NAME.to_string())
}

/// Mask the password part of a connection string so it can be logged.
pub fn redact(uri: &str) -> String {
    let Some(scheme_end) = uri.find("://").map(|i| i + 3) else {
        return uri.to_string();
    };
    let rest = &uri[scheme_end..];
    let authority_end = rest.find('/').unwrap_or(rest.len());
    let Some(at) = rest[..authority_end].rfind('@') else {
        return uri.to_string();
    };

    let userinfo = &rest[..at];
    let user = userinfo.split(':').next().unwrap_or_default();
    let masked = if userinfo.contains(':') {
        format!("{}:****", user)
    } else {
        user.to_string()
    };

    format!("{}{}{}", &uri[..scheme_end], masked, &rest[at..])
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
