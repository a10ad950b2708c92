use crate::error::Result;
use lantern_assembly::core::catalog::PartCatalog;
use std::path::Path;
use tracing::info;

pub mod catalog;
pub mod evaluate;

/// Loads the catalog named on the command line, or the builtin demo set.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<PartCatalog> {
    match path {
        Some(path) => {
            info!("Loading part catalog from {:?}", path);
            Ok(PartCatalog::load(path)?)
        }
        None => {
            info!("No catalog given; using the builtin demo set");
            Ok(PartCatalog::builtin())
        }
    }
}
