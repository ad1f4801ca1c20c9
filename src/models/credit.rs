use serde::{Deserialize, Serialize};

/// One row of the cast table: an actor's credit on a film and that film's return
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastCredit {
    pub cast_name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "return", deserialize_with = "csv::invalid_option")]
    pub return_ratio: Option<f64>,
}

/// One row of the crew table: a crew member's credit on a film
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrewCredit {
    pub crew_name: String,
    pub title: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub release_year: Option<f64>,
    #[serde(default, rename = "return", deserialize_with = "csv::invalid_option")]
    pub return_ratio: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub budget: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub revenue: Option<f64>,
}

impl CastCredit {
    pub fn new(cast_name: impl Into<String>, return_ratio: f64) -> Self {
        Self {
            cast_name: cast_name.into(),
            title: None,
            return_ratio: Some(return_ratio),
        }
    }
}

impl CrewCredit {
    pub fn new(crew_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            crew_name: crew_name.into(),
            title: title.into(),
            release_year: None,
            return_ratio: None,
            budget: None,
            revenue: None,
        }
    }

    /// Builder-style setter for the financial columns
    pub fn with_financials(mut self, return_ratio: f64, budget: f64, revenue: f64) -> Self {
        self.return_ratio = Some(return_ratio);
        self.budget = Some(budget);
        self.revenue = Some(revenue);
        self
    }
}
