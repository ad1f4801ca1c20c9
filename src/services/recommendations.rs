use serde::Serialize;
use thiserror::Error;

use super::similarity::{self, SimilarityError};
use super::vectorizer::TfidfVectorizer;

/// Maximum number of titles returned for one query
pub const MAX_RECOMMENDATIONS: usize = 5;

/// One corpus entry: a title and its synopsis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusRecord<'a> {
    pub title: &'a str,
    pub overview: &'a str,
}

impl<'a> CorpusRecord<'a> {
    pub fn new(title: &'a str, overview: &'a str) -> Self {
        Self { title, overview }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RecommendError {
    #[error("Title not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Similarity(#[from] SimilarityError),
}

/// Outcome of a recommendation query
///
/// `Empty` when the query was the only record, `Partial` when fewer than
/// [`MAX_RECOMMENDATIONS`] candidates exist, `Full` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    Empty,
    Partial(Vec<String>),
    Full(Vec<String>),
}

impl Recommendation {
    fn from_ranked(mut titles: Vec<String>) -> Self {
        match titles.len() {
            0 => Recommendation::Empty,
            n if n < MAX_RECOMMENDATIONS => Recommendation::Partial(titles),
            _ => {
                titles.truncate(MAX_RECOMMENDATIONS);
                Recommendation::Full(titles)
            }
        }
    }

    pub fn titles(&self) -> &[String] {
        match self {
            Recommendation::Empty => &[],
            Recommendation::Partial(titles) | Recommendation::Full(titles) => titles,
        }
    }

    pub fn into_titles(self) -> Vec<String> {
        match self {
            Recommendation::Empty => Vec::new(),
            Recommendation::Partial(titles) | Recommendation::Full(titles) => titles,
        }
    }

    pub fn len(&self) -> usize {
        self.titles().len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles().is_empty()
    }
}

impl Serialize for Recommendation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.titles().serialize(serializer)
    }
}

/// A candidate with its similarity to the query
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub position: usize,
    pub score: f64,
}

/// Position of the first record whose title equals `title` exactly
pub fn resolve(title: &str, corpus: &[CorpusRecord<'_>]) -> Option<usize> {
    corpus.iter().position(|record| record.title == title)
}

/// Scores every record against the record at `query`, ranks them by
/// descending score (earlier positions win ties) and removes the query itself
pub fn rank_candidates(
    query: usize,
    corpus: &[CorpusRecord<'_>],
) -> Result<Vec<ScoredCandidate>, RecommendError> {
    let overviews: Vec<&str> = corpus.iter().map(|record| record.overview).collect();
    let space = TfidfVectorizer::new().fit_transform(&overviews);
    let scores = similarity::score_all(&space, query)?;

    let mut ranked: Vec<ScoredCandidate> = scores
        .into_iter()
        .enumerate()
        .map(|(position, score)| ScoredCandidate { position, score })
        .collect();

    // Stable sort keeps corpus order among equal scores
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.retain(|candidate| candidate.position != query);

    Ok(ranked)
}

/// Recommends up to [`MAX_RECOMMENDATIONS`] titles whose synopses are most
/// similar to the synopsis of `title`
///
/// The vector space is fit over the whole corpus on every call and
/// discarded afterwards.
pub fn recommend(
    title: &str,
    corpus: &[CorpusRecord<'_>],
) -> Result<Recommendation, RecommendError> {
    let query = resolve(title, corpus).ok_or_else(|| RecommendError::NotFound(title.to_string()))?;

    let ranked = rank_candidates(query, corpus)?;

    let titles: Vec<String> = ranked
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|candidate| corpus[candidate.position].title.to_string())
        .collect();

    tracing::debug!(
        query = %title,
        position = query,
        candidates = ranked.len(),
        returned = titles.len(),
        "Ranked recommendation candidates"
    );

    Ok(Recommendation::from_ranked(titles))
}
