use pemcoat::collector::client::ConfigError;
use pemcoat::collector::search::SearchError;
use pemcoat::core::io::TableIoError;
use pemcoat::core::models::ValidationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Table(#[from] TableIoError),

    #[error("Search service error: {0}")]
    Search(#[from] SearchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
