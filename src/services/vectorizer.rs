//! TF-IDF vectorization of movie synopses.
//!
//! Text is lowercased, split into tokens of two or more word characters,
//! stripped of English stop words, and expanded into unigrams and bigrams.
//! Each term is weighted by
//!
//! ```text
//! tfidf(t, d) = count(t, d) * idf(t)
//! idf(t)      = ln((1 + n) / (1 + df(t))) + 1
//! ```
//!
//! and every document vector is L2-normalised. Vocabulary dimensions are
//! assigned in lexicographic term order so two fits over the same corpus
//! produce identical spaces.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::OnceLock;

use regex::Regex;

use super::stopwords::StopWords;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Literal pattern, compiled once
    PATTERN.get_or_init(|| Regex::new(r"(?u)\b\w\w+\b").expect("valid token pattern"))
}

/// Sparse document vector: `(dimension, weight)` pairs sorted by dimension
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Builds a vector from entries; entries are sorted by dimension and zero weights dropped
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(dim, _)| dim);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero dimensions
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn get(&self, dim: usize) -> f64 {
        self.entries
            .binary_search_by_key(&dim, |&(d, _)| d)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }
}

/// A fitted vocabulary plus one weight vector per corpus document
///
/// Row `i` corresponds to document `i` of the fitted corpus.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    rows: Vec<SparseVector>,
}

impl VectorSpace {
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Inverse document frequency of a term, if it is in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&dim| self.idf[dim])
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&SparseVector> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// TF-IDF vectorizer over unigrams and bigrams
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    stop_words: StopWords,
    ngram_range: (usize, usize),
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfidfVectorizer {
    /// English stop words, unigrams and bigrams
    pub fn new() -> Self {
        Self {
            stop_words: StopWords::english().clone(),
            ngram_range: (1, 2),
        }
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        let min_n = min_n.max(1);
        self.ngram_range = (min_n, max_n.max(min_n));
        self
    }

    /// Extracts the terms of one document, in order, with repeats
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = token_pattern()
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(t))
            .collect();

        let mut terms = Vec::new();
        for n in self.ngram_range.0..=self.ngram_range.1 {
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }

    /// Learns the vocabulary and IDF weights from `documents` and returns
    /// the weighted, normalised vector of every document
    ///
    /// Empty documents produce all-zero rows; a corpus with no usable
    /// terms yields an empty vocabulary.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> VectorSpace {
        let term_counts: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut counts = BTreeMap::new();
                for term in self.analyze(doc.as_ref()) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let terms: BTreeSet<&String> = term_counts.iter().flat_map(|c| c.keys()).collect();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(dim, term)| (term.clone(), dim))
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        for counts in &term_counts {
            for term in counts.keys() {
                doc_freq[vocabulary[term]] += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = term_counts
            .iter()
            .map(|counts| {
                let weighted: Vec<(usize, f64)> = counts
                    .iter()
                    .map(|(term, &count)| {
                        let dim = vocabulary[term];
                        (dim, count as f64 * idf[dim])
                    })
                    .collect();
                l2_normalize(SparseVector::from_entries(weighted))
            })
            .collect();

        tracing::debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Fitted TF-IDF vector space"
        );

        VectorSpace {
            vocabulary,
            idf,
            rows,
        }
    }
}

fn l2_normalize(vector: SparseVector) -> SparseVector {
    let norm = vector.norm();
    if norm == 0.0 {
        return vector;
    }
    SparseVector {
        entries: vector
            .entries
            .into_iter()
            .map(|(dim, w)| (dim, w / norm))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_drops_stop_words_and_short_tokens() {
        let vectorizer = TfidfVectorizer::new();
        let terms = vectorizer.analyze("The Dark Knight rises a 2nd time");
        assert_eq!(
            terms,
            vec!["dark", "knight", "rises", "2nd", "time", "dark knight", "knight rises", "rises 2nd", "2nd time"]
        );
    }

    #[test]
    fn test_bigrams_span_removed_stop_words() {
        let vectorizer = TfidfVectorizer::new();
        let terms = vectorizer.analyze("king of the hill");
        assert!(terms.contains(&"king hill".to_string()));
    }

    #[test]
    fn test_unigram_only_range() {
        let vectorizer = TfidfVectorizer::new().with_ngram_range(1, 1);
        let terms = vectorizer.analyze("lego batman movie");
        assert_eq!(terms, vec!["lego", "batman", "movie"]);
    }

    #[test]
    fn test_row_count_matches_corpus() {
        let docs = ["space pirates", "", "pirates of the sea"];
        let space = TfidfVectorizer::new().fit_transform(&docs);
        assert_eq!(space.len(), 3);
        assert!(space.row(1).unwrap().is_zero());
    }

    #[test]
    fn test_vocabulary_is_lexicographic() {
        let docs = ["zebra apple", "mango"];
        let space = TfidfVectorizer::new().with_ngram_range(1, 1).fit_transform(&docs);
        assert_eq!(space.vocabulary()["apple"], 0);
        assert_eq!(space.vocabulary()["mango"], 1);
        assert_eq!(space.vocabulary()["zebra"], 2);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let docs = ["city lights city", "lights camera action"];
        let space = TfidfVectorizer::new().fit_transform(&docs);
        for row in space.rows() {
            assert!((row.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_smoothed_idf() {
        let docs = ["robot", "robot dog", "cat"];
        let space = TfidfVectorizer::new().with_ngram_range(1, 1).fit_transform(&docs);
        let expected_robot = (4.0f64 / 3.0).ln() + 1.0;
        let expected_cat = (4.0f64 / 2.0).ln() + 1.0;
        assert!((space.idf("robot").unwrap() - expected_robot).abs() < 1e-12);
        assert!((space.idf("cat").unwrap() - expected_cat).abs() < 1e-12);
        assert_eq!(space.idf("unicorn"), None);
    }

    #[test]
    fn test_rare_terms_outweigh_common_terms() {
        let docs = ["hero saves city", "hero saves ship", "hero saves planet"];
        let space = TfidfVectorizer::new().with_ngram_range(1, 1).fit_transform(&docs);
        let row = space.row(0).unwrap();
        let hero = row.get(space.vocabulary()["hero"]);
        let city = row.get(space.vocabulary()["city"]);
        assert!(city > hero);
    }

    #[test]
    fn test_all_empty_corpus() {
        let docs = ["", "   ", "the and of"];
        let space = TfidfVectorizer::new().fit_transform(&docs);
        assert_eq!(space.vocabulary_size(), 0);
        assert!(space.rows().iter().all(SparseVector::is_zero));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let docs = ["an orphan wizard", "a wizard school", "orphan school days"];
        let a = TfidfVectorizer::new().fit_transform(&docs);
        let b = TfidfVectorizer::new().fit_transform(&docs);
        assert_eq!(a.rows(), b.rows());
        assert_eq!(a.vocabulary(), b.vocabulary());
    }
}
