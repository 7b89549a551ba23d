use std::{env, path::PathBuf, str::FromStr};

use crate::{
    consts::env_const::{
        BIND, LOG_JSON, SEED_FILE, STORE, SURREAL_DB, SURREAL_NS, SURREAL_PASS, SURREAL_URL,
        SURREAL_USER,
    },
    errors::{Error, Result},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Surreal,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "surreal" => Ok(StoreBackend::Surreal),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(Error::Config(format!(
                "{STORE} must be `surreal` or `memory`, got `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurrealConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub bind: String,
    pub store: StoreBackend,
    pub surreal: SurrealConfig,
    pub seed_file: Option<PathBuf>,
    pub log_json: bool,
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let log_json = match get(LOG_JSON, "false").as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            other => {
                return Err(Error::Config(format!(
                    "{LOG_JSON} must be a boolean, got `{other}`"
                )));
            }
        };

        Ok(Config {
            bind: get(BIND, "127.0.0.1:3587"),
            store: get(STORE, "surreal").parse()?,
            surreal: SurrealConfig {
                url: get(SURREAL_URL, "localhost:8050"),
                username: get(SURREAL_USER, "root"),
                password: get(SURREAL_PASS, "secret"),
                namespace: get(SURREAL_NS, "tracker"),
                database: get(SURREAL_DB, "tracker"),
            },
            seed_file: lookup(SEED_FILE)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            log_json,
        })
    }
}
