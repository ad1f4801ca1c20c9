use crate::{
    models::{CastCredit, CrewCredit, Movie},
    services::recommendations::CorpusRecord,
};

/// Read-only in-memory tables backing every lookup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    cast: Vec<CastCredit>,
    crew: Vec<CrewCredit>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>, cast: Vec<CastCredit>, crew: Vec<CrewCredit>) -> Self {
        Self { movies, cast, crew }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn cast(&self) -> &[CastCredit] {
        &self.cast
    }

    pub fn crew(&self) -> &[CrewCredit] {
        &self.crew
    }

    /// First movie whose title matches exactly
    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.title == title)
    }

    /// Ordered `(title, overview)` records; row `i` is movie `i`
    pub fn corpus(&self) -> Vec<CorpusRecord<'_>> {
        self.movies
            .iter()
            .map(|m| CorpusRecord::new(&m.title, m.overview_text()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_preserves_order_and_normalises_overview() {
        let catalog = Catalog::new(
            vec![Movie::new("B", Some("second")), Movie::new("A", None)],
            vec![],
            vec![],
        );
        let corpus = catalog.corpus();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0], CorpusRecord::new("B", "second"));
        assert_eq!(corpus[1], CorpusRecord::new("A", ""));
    }

    #[test]
    fn test_find_by_title_returns_first_match() {
        let catalog = Catalog::new(
            vec![Movie::new("Twin", Some("first")), Movie::new("Twin", Some("second"))],
            vec![],
            vec![],
        );
        assert_eq!(catalog.find_by_title("Twin").unwrap().overview_text(), "first");
        assert!(catalog.find_by_title("twin").is_none());
    }
}
