use thiserror::Error;

#[derive(Error, Debug)]
pub enum DonationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("gateway transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("gateway declined: {0}")]
    Declined(String),
}

pub type Result<T> = std::result::Result<T, DonationError>;
