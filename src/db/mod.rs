pub mod catalog;
pub mod csv_source;

pub use catalog::Catalog;
pub use csv_source::CsvCatalogSource;

use crate::error::AppResult;

/// Source of the catalog tables
///
/// The service only needs the data loaded once into memory; where it comes
/// from is up to the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads every table into memory
    async fn load(&self) -> AppResult<Catalog>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// Loads the catalog from `source`, logging table sizes
pub async fn load_catalog(source: &dyn CatalogSource) -> AppResult<Catalog> {
    tracing::info!(source = source.name(), "Loading catalog");

    let catalog = source.load().await?;

    tracing::info!(
        source = source.name(),
        movies = catalog.movies().len(),
        cast = catalog.cast().len(),
        crew = catalog.crew().len(),
        "Catalog loaded"
    );

    Ok(catalog)
}
