use serde::Serialize;

pub mod credit;
pub mod movie;

pub use credit::{CastCredit, CrewCredit};
pub use movie::{Movie, MovieRow};

/// Number of movies released in a given month
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthCountResponse {
    pub month: String,
    pub count: usize,
}

/// Number of movies released on a given day of the week
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekdayCountResponse {
    pub weekday: String,
    pub count: usize,
}

/// Release year and popularity score of a title
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreResponse {
    pub title: String,
    pub release_year: Option<i32>,
    pub popularity: f64,
}

/// Vote statistics of a title
///
/// Averages are only reported for titles with enough votes to be meaningful.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VotesResponse {
    Qualified {
        title: String,
        release_year: Option<i32>,
        vote_count: u64,
        vote_average: f64,
    },
    InsufficientVotes {
        title: String,
        vote_count: u64,
        required: u64,
    },
}

/// Aggregate return over every film an actor appears in
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActorSummary {
    pub actor: String,
    pub film_count: usize,
    pub total_return: f64,
    pub average_return: f64,
}

/// Per-film financials for a director
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DirectedFilm {
    pub title: String,
    pub release_year: Option<i32>,
    pub return_ratio: f64,
    pub budget: f64,
    pub revenue: f64,
}

/// Aggregate return and filmography of a director
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DirectorSummary {
    pub director: String,
    pub total_return: f64,
    pub films: Vec<DirectedFilm>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_votes_response_is_tagged() {
        let response = VotesResponse::InsufficientVotes {
            title: "Heat".to_string(),
            vote_count: 12,
            required: 2000,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "insufficient_votes");
        assert_eq!(json["vote_count"], 12);
    }

    #[test]
    fn test_qualified_votes_serialization() {
        let response = VotesResponse::Qualified {
            title: "Heat".to_string(),
            release_year: Some(1995),
            vote_count: 3000,
            vote_average: 7.7,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "qualified");
        assert_eq!(json["release_year"], 1995);
    }
}
