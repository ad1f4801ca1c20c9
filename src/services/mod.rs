pub mod lookups;
pub mod recommendations;
pub mod similarity;
pub mod stopwords;
pub mod vectorizer;

pub use recommendations::{recommend, CorpusRecord, Recommendation, RecommendError};
