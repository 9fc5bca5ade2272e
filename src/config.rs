use std::env;

use crate::clapper::Args;
use crate::error::Error;

const DEFAULT_DB_NAME: &str = "TradingApp";

/// Settings for one run, resolved from the CLI args and the environment.
/// The environment is read here, once, and nowhere else.
#[derive(Debug, Clone)]
pub struct Config {
    pub uri: String,
    pub db_name: String,
    pub collection: String,
    pub symbol: Option<String>,
    pub limit: Option<i64>,
}

impl Config {
    pub fn from_env(args: Args) -> Result<Self, Error> {
        let uri = env::var("MONGODB_URI").ok();
        let db_override = env::var("MONGODB_DB").ok();
        Self::resolve(args, uri, db_override)
    }

    fn resolve(
        args: Args,
        uri: Option<String>,
        db_override: Option<String>,
    ) -> Result<Self, Error> {
        let uri = match uri {
            Some(uri) if !uri.is_empty() => uri,
            _ => return Err(Error::MissingUri),
        };

        let db_name = args
            .db_name
            .or(db_override)
            .unwrap_or_else(|| DEFAULT_DB_NAME.to_string());

        Ok(Self {
            uri,
            db_name,
            collection: args.collection,
            symbol: args.symbol,
            limit: args.limit,
        })
    }
}
