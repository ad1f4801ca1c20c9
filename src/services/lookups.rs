use chrono::{Datelike, Weekday};

use crate::{
    db::Catalog,
    error::{AppError, AppResult},
    models::{
        ActorSummary, DirectedFilm, DirectorSummary, MonthCountResponse, ScoreResponse,
        VotesResponse, WeekdayCountResponse,
    },
};

/// Minimum vote count before a title's average is reported
pub const MIN_VOTES_FOR_AVERAGE: u64 = 2000;

const MONTHS: [(&str, &str); 12] = [
    ("enero", "january"),
    ("febrero", "february"),
    ("marzo", "march"),
    ("abril", "april"),
    ("mayo", "may"),
    ("junio", "june"),
    ("julio", "july"),
    ("agosto", "august"),
    ("septiembre", "september"),
    ("octubre", "october"),
    ("noviembre", "november"),
    ("diciembre", "december"),
];

/// Parses a Spanish or English month name into 1..=12
pub fn parse_month(name: &str) -> Option<u32> {
    let name = name.trim().to_lowercase();
    MONTHS
        .iter()
        .position(|(es, en)| *es == name || *en == name)
        .map(|i| i as u32 + 1)
}

/// Parses a Spanish or English weekday name
///
/// Accented and unaccented Spanish spellings are both accepted.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let weekday = match name.trim().to_lowercase().as_str() {
        "lunes" | "monday" => Weekday::Mon,
        "martes" | "tuesday" => Weekday::Tue,
        "miercoles" | "miércoles" | "wednesday" => Weekday::Wed,
        "jueves" | "thursday" => Weekday::Thu,
        "viernes" | "friday" => Weekday::Fri,
        "sabado" | "sábado" | "saturday" => Weekday::Sat,
        "domingo" | "sunday" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// Counts movies released in the named month
pub fn count_by_month(catalog: &Catalog, month: &str) -> AppResult<MonthCountResponse> {
    let number = parse_month(month)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid month name: {}", month)))?;

    let count = catalog
        .movies()
        .iter()
        .filter_map(|m| m.release_date)
        .filter(|d| d.month() == number)
        .count();

    Ok(MonthCountResponse {
        month: month.trim().to_lowercase(),
        count,
    })
}

/// Counts movies released on the named day of the week
pub fn count_by_weekday(catalog: &Catalog, day: &str) -> AppResult<WeekdayCountResponse> {
    let weekday = parse_weekday(day)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid weekday name: {}", day)))?;

    let count = catalog
        .movies()
        .iter()
        .filter_map(|m| m.release_date)
        .filter(|d| d.weekday() == weekday)
        .count();

    Ok(WeekdayCountResponse {
        weekday: day.trim().to_lowercase(),
        count,
    })
}

/// Release year and popularity of the first movie titled exactly `title`
pub fn score_by_title(catalog: &Catalog, title: &str) -> AppResult<ScoreResponse> {
    let movie = catalog
        .find_by_title(title)
        .ok_or_else(|| AppError::NotFound(format!("Movie '{}' is not in the catalog", title)))?;

    Ok(ScoreResponse {
        title: movie.title.clone(),
        release_year: movie.release_year,
        popularity: movie.popularity,
    })
}

/// Vote statistics of the first movie titled exactly `title`
pub fn votes_by_title(catalog: &Catalog, title: &str) -> AppResult<VotesResponse> {
    let movie = catalog
        .find_by_title(title)
        .ok_or_else(|| AppError::NotFound(format!("Movie '{}' is not in the catalog", title)))?;

    if movie.vote_count < MIN_VOTES_FOR_AVERAGE {
        return Ok(VotesResponse::InsufficientVotes {
            title: movie.title.clone(),
            vote_count: movie.vote_count,
            required: MIN_VOTES_FOR_AVERAGE,
        });
    }

    Ok(VotesResponse::Qualified {
        title: movie.title.clone(),
        release_year: movie.release_year,
        vote_count: movie.vote_count,
        vote_average: movie.vote_average,
    })
}

/// Film count and return of every cast credit whose name contains `name`
pub fn actor_summary(catalog: &Catalog, name: &str) -> AppResult<ActorSummary> {
    let returns: Vec<f64> = catalog
        .cast()
        .iter()
        .filter(|credit| credit.cast_name.contains(name))
        .map(|credit| credit.return_ratio.unwrap_or(0.0))
        .collect();

    if returns.is_empty() {
        return Err(AppError::NotFound(format!("No films found for actor: {}", name)));
    }

    let total_return: f64 = returns.iter().sum();
    Ok(ActorSummary {
        actor: name.to_string(),
        film_count: returns.len(),
        total_return,
        average_return: total_return / returns.len() as f64,
    })
}

/// Total return and filmography of the crew member named exactly `name`
pub fn director_summary(catalog: &Catalog, name: &str) -> AppResult<DirectorSummary> {
    let films: Vec<DirectedFilm> = catalog
        .crew()
        .iter()
        .filter(|credit| credit.crew_name == name)
        .map(|credit| DirectedFilm {
            title: credit.title.clone(),
            release_year: credit.release_year.map(|y| y as i32),
            return_ratio: credit.return_ratio.unwrap_or(0.0),
            budget: credit.budget.unwrap_or(0.0),
            revenue: credit.revenue.unwrap_or(0.0),
        })
        .collect();

    if films.is_empty() {
        return Err(AppError::NotFound(format!("No films found for director: {}", name)));
    }

    Ok(DirectorSummary {
        director: name.to_string(),
        total_return: films.iter().map(|f| f.return_ratio).sum(),
        films,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CastCredit, CrewCredit, Movie};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_catalog() -> Catalog {
        let mut heat = Movie::new("Heat", Some("A thief and a detective")).with_release_date(date(1995, 12, 15));
        heat.vote_count = 3500;
        heat.vote_average = 7.7;
        heat.popularity = 17.9;

        let mut toy_story =
            Movie::new("Toy Story", Some("Toys come alive")).with_release_date(date(1995, 10, 30));
        toy_story.vote_count = 150;

        let jumanji = Movie::new("Jumanji", None).with_release_date(date(1995, 12, 15));
        let undated = Movie::new("Undated", None);

        let cast = vec![
            CastCredit::new("Al Pacino, Robert De Niro, Val Kilmer", 2.5),
            CastCredit::new("Robert De Niro, Jodie Foster", 1.5),
            CastCredit::new("Tom Hanks, Tim Allen", 12.0),
        ];

        let crew = vec![
            CrewCredit::new("Michael Mann", "Heat").with_financials(3.1, 60e6, 187e6),
            CrewCredit::new("Michael Mann", "Collateral").with_financials(3.8, 65e6, 220e6),
            CrewCredit::new("John Lasseter", "Toy Story").with_financials(12.4, 30e6, 373e6),
        ];

        Catalog::new(vec![heat, toy_story, jumanji, undated], cast, crew)
    }

    #[test]
    fn test_parse_month_spanish_and_english() {
        assert_eq!(parse_month("Enero"), Some(1));
        assert_eq!(parse_month("december"), Some(12));
        assert_eq!(parse_month("smarch"), None);
    }

    #[test]
    fn test_parse_weekday_accents() {
        assert_eq!(parse_weekday("Miércoles"), Some(Weekday::Wed));
        assert_eq!(parse_weekday("sabado"), Some(Weekday::Sat));
        assert_eq!(parse_weekday("funday"), None);
    }

    #[test]
    fn test_count_by_month() {
        let catalog = test_catalog();
        assert_eq!(count_by_month(&catalog, "diciembre").unwrap().count, 2);
        assert_eq!(count_by_month(&catalog, "October").unwrap().count, 1);
        assert_eq!(count_by_month(&catalog, "marzo").unwrap().count, 0);
    }

    #[test]
    fn test_count_by_month_invalid() {
        let catalog = test_catalog();
        assert!(matches!(
            count_by_month(&catalog, "notamonth"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_count_by_weekday() {
        let catalog = test_catalog();
        // 1995-12-15 was a Friday, 1995-10-30 a Monday
        assert_eq!(count_by_weekday(&catalog, "viernes").unwrap().count, 2);
        assert_eq!(count_by_weekday(&catalog, "lunes").unwrap().count, 1);
        assert!(count_by_weekday(&catalog, "someday").is_err());
    }

    #[test]
    fn test_score_by_title() {
        let catalog = test_catalog();
        let score = score_by_title(&catalog, "Heat").unwrap();
        assert_eq!(score.release_year, Some(1995));
        assert_eq!(score.popularity, 17.9);
        assert!(matches!(score_by_title(&catalog, "heat"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_votes_by_title() {
        let catalog = test_catalog();
        assert!(matches!(
            votes_by_title(&catalog, "Heat").unwrap(),
            VotesResponse::Qualified { vote_count: 3500, .. }
        ));
        assert!(matches!(
            votes_by_title(&catalog, "Toy Story").unwrap(),
            VotesResponse::InsufficientVotes { vote_count: 150, required: 2000, .. }
        ));
        assert!(votes_by_title(&catalog, "Missing").is_err());
    }

    #[test]
    fn test_actor_summary_substring_match() {
        let catalog = test_catalog();
        let summary = actor_summary(&catalog, "Robert De Niro").unwrap();
        assert_eq!(summary.film_count, 2);
        assert_eq!(summary.total_return, 4.0);
        assert_eq!(summary.average_return, 2.0);
        assert!(actor_summary(&catalog, "Meryl Streep").is_err());
    }

    #[test]
    fn test_director_summary_exact_match() {
        let catalog = test_catalog();
        let summary = director_summary(&catalog, "Michael Mann").unwrap();
        assert_eq!(summary.films.len(), 2);
        assert!((summary.total_return - 6.9).abs() < 1e-9);
        assert_eq!(summary.films[0].title, "Heat");
        assert!(director_summary(&catalog, "Michael").is_err());
    }
}
