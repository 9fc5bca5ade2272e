use clap::Parser;
use futures_util::TryStreamExt;
use mongodb::options::FindOptions;

mod clapper;
mod config;
mod db;
mod error;
mod query;

use clapper::Args;
use config::Config;
use error::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();
    let config = Config::from_env(args)?;

    let collection = db::get_collection(&config).await?;

    let filter = query::build_filter(config.symbol.as_deref());
    let find_ops = FindOptions::builder()
        .limit(query::effective_limit(config.limit))
        .build();
    let mut cursor = collection.find(filter).with_options(find_ops).await?;

    while let Some(document) = cursor.try_next().await? {
        println!("{}", query::render(document));
    }

    Ok(())
}
