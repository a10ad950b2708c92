use lantern_assembly::core::catalog::CatalogError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("part id {0} not found in the catalog")]
    PartNotFound(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render verdict as JSON: {0}")]
    Render(#[from] serde_json::Error),
}
