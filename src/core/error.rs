//! Error types for watchlist export

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchlistError {
    #[error("Empty chain: no strikes available")]
    EmptyChain,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No {symbol} options expiring on {date}. Available expirations: {available:?}")]
    NoSuchExpiration {
        symbol: String,
        date: NaiveDate,
        available: Vec<NaiveDate>,
    },

    #[error("Data quality error: {0}")]
    DataQuality(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

pub type WatchlistResult<T> = Result<T, WatchlistError>;

impl WatchlistError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn data_quality(msg: impl Into<String>) -> Self {
        Self::DataQuality(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}
