use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw row of the movies table as it appears in the dataset file
///
/// Every column except `title` is optional so that sparse or partially
/// cleaned exports still load.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRow {
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub release_year: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub popularity: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub vote_count: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub budget: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub revenue: Option<f64>,
    #[serde(default, rename = "return", deserialize_with = "csv::invalid_option")]
    pub return_ratio: Option<f64>,
}

/// A movie in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    pub overview: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub release_year: Option<i32>,
    pub popularity: f64,
    pub vote_count: u64,
    pub vote_average: f64,
    pub budget: f64,
    pub revenue: f64,
    pub return_ratio: f64,
}

impl Movie {
    /// Creates a movie with only a title and synopsis; numeric fields are zero
    pub fn new(title: impl Into<String>, overview: Option<&str>) -> Self {
        Self {
            title: title.into(),
            overview: overview.map(str::to_string),
            release_date: None,
            release_year: None,
            popularity: 0.0,
            vote_count: 0,
            vote_average: 0.0,
            budget: 0.0,
            revenue: 0.0,
            return_ratio: 0.0,
        }
    }

    /// Sets the release date, deriving the release year from it
    pub fn with_release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self.release_year = Some(date.year());
        self
    }

    /// Synopsis text, with a missing overview normalised to the empty string
    pub fn overview_text(&self) -> &str {
        self.overview.as_deref().unwrap_or("")
    }
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        let release_date = row
            .release_date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| {
                // Some exports carry a time component after the date
                let date_part = s.split_whitespace().next().unwrap_or(s);
                NaiveDate::parse_from_str(date_part, RELEASE_DATE_FORMAT).ok()
            });

        let release_year = row
            .release_year
            .map(|y| y as i32)
            .or_else(|| release_date.map(|d| d.year()));

        Movie {
            title: row.title,
            overview: row.overview,
            release_date,
            release_year,
            popularity: row.popularity.unwrap_or(0.0),
            vote_count: row.vote_count.unwrap_or(0.0).max(0.0) as u64,
            vote_average: row.vote_average.unwrap_or(0.0),
            budget: row.budget.unwrap_or(0.0),
            revenue: row.revenue.unwrap_or(0.0),
            return_ratio: row.return_ratio.unwrap_or(0.0),
        }
    }
}
