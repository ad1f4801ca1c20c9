use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::{Catalog, CatalogSource};
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{CastCredit, CrewCredit, Movie, MovieRow},
};

/// Catalog source backed by three CSV exports (movies, cast, crew)
#[derive(Debug, Clone)]
pub struct CsvCatalogSource {
    movies_path: PathBuf,
    cast_path: PathBuf,
    crew_path: PathBuf,
}

impl CsvCatalogSource {
    pub fn new(
        movies_path: impl Into<PathBuf>,
        cast_path: impl Into<PathBuf>,
        crew_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            movies_path: movies_path.into(),
            cast_path: cast_path.into(),
            crew_path: crew_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.movies_csv, &config.cast_csv, &config.crew_csv)
    }

    fn load_blocking(&self) -> AppResult<Catalog> {
        let movies: Vec<Movie> = read_rows::<MovieRow>(&self.movies_path)?
            .into_iter()
            .map(Movie::from)
            .collect();
        let cast = read_optional_rows::<CastCredit>(&self.cast_path)?;
        let crew = read_optional_rows::<CrewCredit>(&self.crew_path)?;

        Ok(Catalog::new(movies, cast, crew))
    }
}

#[async_trait::async_trait]
impl CatalogSource for CsvCatalogSource {
    async fn load(&self) -> AppResult<Catalog> {
        let source = self.clone();
        tokio::task::spawn_blocking(move || source.load_blocking())
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    tracing::debug!(path = %path.display(), rows = rows.len(), "Read CSV table");
    Ok(rows)
}

/// Like `read_rows`, but a missing file yields an empty table
fn read_optional_rows<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Table not found, continuing without it");
        return Ok(Vec::new());
    }
    read_rows(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_all_tables() {
        let dir = tempfile::tempdir().unwrap();
        let movies = write_file(
            dir.path(),
            "movies.csv",
            "id,title,overview,release_date,release_year,popularity,vote_count,vote_average,budget,revenue,return\n\
             1,Heat,A thief and a detective,1995-12-15,1995,17.9,1886.0,7.7,60000000,187436818,3.12\n\
             2,Blank,,,,,,,,,\n",
        );
        let cast = write_file(dir.path(), "cast.csv", "cast_name,return\nAl Pacino,3.12\n");
        let crew = write_file(
            dir.path(),
            "crew.csv",
            "crew_name,title,release_year,return,budget,revenue\nMichael Mann,Heat,1995,3.12,60000000,187436818\n",
        );

        let catalog = CsvCatalogSource::new(movies, cast, crew).load().await.unwrap();

        assert_eq!(catalog.movies().len(), 2);
        let heat = &catalog.movies()[0];
        assert_eq!(heat.title, "Heat");
        assert_eq!(heat.vote_count, 1886);
        assert_eq!(heat.release_year, Some(1995));

        let blank = &catalog.movies()[1];
        assert_eq!(blank.overview_text(), "");
        assert_eq!(blank.release_date, None);
        assert_eq!(blank.popularity, 0.0);

        assert_eq!(catalog.cast()[0].return_ratio, Some(3.12));
        assert_eq!(catalog.crew()[0].crew_name, "Michael Mann");
    }

    #[tokio::test]
    async fn test_missing_credit_tables_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let movies = write_file(dir.path(), "movies.csv", "title,overview\nHeat,Crime\n");

        let catalog = CsvCatalogSource::new(
            movies,
            dir.path().join("no_cast.csv"),
            dir.path().join("no_crew.csv"),
        )
        .load()
        .await
        .unwrap();

        assert_eq!(catalog.movies().len(), 1);
        assert!(catalog.cast().is_empty());
        assert!(catalog.crew().is_empty());
    }

    #[tokio::test]
    async fn test_missing_movies_table_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CsvCatalogSource::new(
            dir.path().join("movies.csv"),
            dir.path().join("cast.csv"),
            dir.path().join("crew.csv"),
        )
        .load()
        .await;

        assert!(matches!(result, Err(AppError::Dataset(_))));
    }
}
