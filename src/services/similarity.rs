use thiserror::Error;

use super::vectorizer::{SparseVector, VectorSpace};

#[derive(Debug, Error, PartialEq)]
pub enum SimilarityError {
    #[error("Row {row} is outside a vector space of {rows} rows")]
    InvalidRow { row: usize, rows: usize },
}

/// Cosine similarity of two sparse vectors, clamped into [0, 1]
///
/// Zero-magnitude vectors have similarity 0 with everything.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot(a, b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Dot product over the shared dimensions of two sorted sparse vectors
fn dot(a: &SparseVector, b: &SparseVector) -> f64 {
    let (xs, ys) = (a.entries(), b.entries());
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;

    while i < xs.len() && j < ys.len() {
        let (dim_a, w_a) = xs[i];
        let (dim_b, w_b) = ys[j];
        match dim_a.cmp(&dim_b) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += w_a * w_b;
                i += 1;
                j += 1;
            }
        }
    }

    sum
}

/// Scores one row of the space against every row, in corpus order
pub fn score_all(space: &VectorSpace, query_row: usize) -> Result<Vec<f64>, SimilarityError> {
    let query = space.row(query_row).ok_or(SimilarityError::InvalidRow {
        row: query_row,
        rows: space.len(),
    })?;

    Ok(space.rows().iter().map(|row| cosine(query, row)).collect())
}
