use clap::Parser;

/// Print documents from a MongoDB collection, optionally filtered by symbol
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Database to query (default: $MONGODB_DB, else "TradingApp")
    #[arg(long)]
    pub db_name: Option<String>,

    /// Collection to query
    #[arg(long, default_value = "HistoricalData")]
    pub collection: String,

    /// Only print documents whose symbol equals this value (uppercased)
    #[arg(long)]
    pub symbol: Option<String>,

    /// Print at most this many documents
    #[arg(long)]
    pub limit: Option<i64>,
}
