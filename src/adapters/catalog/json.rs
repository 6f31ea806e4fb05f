use std::{fs, path::Path};

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::info;

use crate::{
    config::Config,
    domain::{catalog::Catalog, Club, Competition},
};

/// Format of competition dates in the source files
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid {field} for {record}: {value:?}")]
    InvalidNumber {
        record: String,
        field: &'static str,
        value: String,
    },
    #[error("invalid date for {record}: {value:?}")]
    InvalidDate {
        record: String,
        value: String,
        source: chrono::ParseError,
    },
}

#[derive(Deserialize)]
struct ClubsFile {
    clubs: Vec<ClubRecord>,
}

#[derive(Deserialize)]
struct ClubRecord {
    name: String,
    email: String,
    points: Count,
}

#[derive(Deserialize)]
struct CompetitionsFile {
    competitions: Vec<CompetitionRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompetitionRecord {
    name: String,
    date: String,
    number_of_places: Count,
}

/// Counts are stored either as JSON numbers or as decimal strings
#[derive(Deserialize)]
#[serde(untagged)]
enum Count {
    Number(u32),
    Text(String),
}

impl Count {
    fn parse(self, record: &str, field: &'static str) -> Result<u32, Error> {
        match self {
            Count::Number(value) => Ok(value),
            Count::Text(value) => value.trim().parse().map_err(|_| Error::InvalidNumber {
                record: record.to_string(),
                field,
                value,
            }),
        }
    }
}

/// Read both catalog files named by the configuration
pub fn load_catalog(config: &Config) -> Result<Catalog, Error> {
    let clubs = parse_clubs(&read(&config.clubs_path)?)
        .map_err(|err| with_path(err, &config.clubs_path))?;
    let competitions = parse_competitions(&read(&config.competitions_path)?)
        .map_err(|err| with_path(err, &config.competitions_path))?;
    info!(
        clubs = clubs.len(),
        competitions = competitions.len(),
        "catalog loaded"
    );

    Ok(Catalog::new(clubs, competitions))
}

/// Parse a `{"clubs": [...]}` document
pub fn parse_clubs(content: &str) -> Result<Vec<Club>, Error> {
    let file: ClubsFile = serde_json::from_str(content).map_err(|source| Error::Json {
        path: String::new(),
        source,
    })?;

    file.clubs
        .into_iter()
        .map(|record| {
            let points = record.points.parse(&record.name, "points")?;
            Ok(Club::new(record.name, record.email, points))
        })
        .collect()
}

/// Parse a `{"competitions": [...]}` document
pub fn parse_competitions(content: &str) -> Result<Vec<Competition>, Error> {
    let file: CompetitionsFile = serde_json::from_str(content).map_err(|source| Error::Json {
        path: String::new(),
        source,
    })?;

    file.competitions
        .into_iter()
        .map(|record| {
            let places = record
                .number_of_places
                .parse(&record.name, "numberOfPlaces")?;
            let date = NaiveDateTime::parse_from_str(&record.date, DATE_FORMAT).map_err(
                |source| Error::InvalidDate {
                    record: record.name.clone(),
                    value: record.date.clone(),
                    source,
                },
            )?;
            Ok(Competition::new(record.name, date, places))
        })
        .collect()
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })
}

fn with_path(err: Error, path: &Path) -> Error {
    match err {
        Error::Json { source, .. } => Error::Json {
            path: path.display().to_string(),
            source,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use speculoos::prelude::*;

    const CLUBS: &str = r#"{"clubs": [
        {"name": "Simply Lift", "email": "john@simplylift.co", "points": "13"},
        {"name": "Iron Temple", "email": "admin@irontemple.com", "points": 4},
        {"name": "She Lifts", "email": "kate@shelifts.co.uk", "points": "12"}
    ]}"#;

    const COMPETITIONS: &str = r#"{"competitions": [
        {"name": "Spring Festival", "date": "2020-03-27 10:00:00", "numberOfPlaces": "25"},
        {"name": "Fall Classic", "date": "2050-10-22 13:30:00", "numberOfPlaces": 13}
    ]}"#;

    #[test]
    fn test_parse_clubs_keeps_order() {
        let res = parse_clubs(CLUBS);

        assert_that!(res).is_ok().is_equal_to(vec![
            Club::new("Simply Lift", "john@simplylift.co", 13),
            Club::new("Iron Temple", "admin@irontemple.com", 4),
            Club::new("She Lifts", "kate@shelifts.co.uk", 12),
        ]);
    }

    #[test]
    fn test_parse_competitions() {
        let res = parse_competitions(COMPETITIONS);

        let fall_classic = NaiveDate::from_ymd_opt(2050, 10, 22)
            .and_then(|date| date.and_hms_opt(13, 30, 0))
            .unwrap();
        assert_that!(res).is_ok().matches(|competitions| {
            competitions.len() == 2
                && competitions[0].name == "Spring Festival"
                && competitions[0].remaining_places == 25
                && competitions[1].date == fall_classic
        });
    }

    #[test]
    fn test_invalid_points() {
        let res = parse_clubs(
            r#"{"clubs": [{"name": "Iron Temple", "email": "admin@irontemple.com", "points": "-4"}]}"#,
        );

        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::InvalidNumber { field: "points", .. }));
    }

    #[test]
    fn test_invalid_date() {
        let res = parse_competitions(
            r#"{"competitions": [{"name": "Fall Classic", "date": "22/10/2050", "numberOfPlaces": "13"}]}"#,
        );

        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::InvalidDate { .. }));
    }

    #[test_log::test]
    fn test_load_catalog_from_files() {
        let dir = std::env::temp_dir().join(format!("club-booking-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("clubs.json"), CLUBS).unwrap();
        fs::write(dir.join("competitions.json"), COMPETITIONS).unwrap();
        let config = Config {
            clubs_path: dir.join("clubs.json"),
            competitions_path: dir.join("competitions.json"),
        };

        let res = load_catalog(&config);

        assert_that!(res).is_ok().matches(|catalog| {
            catalog.clubs().len() == 3 && catalog.find_competition_by_name("Fall Classic").is_some()
        });
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_sample_data() {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let config = Config {
            clubs_path: data.join("clubs.json"),
            competitions_path: data.join("competitions.json"),
        };

        let res = load_catalog(&config);

        assert_that!(res).is_ok().matches(|catalog| {
            catalog.find_club_by_email("john@simplylift.co").is_some()
                && catalog.find_competition_by_name("Fall Classic 2050").is_some()
        });
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let config = Config {
            clubs_path: "/nonexistent/clubs.json".into(),
            competitions_path: "/nonexistent/competitions.json".into(),
        };

        let res = load_catalog(&config);

        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::Io { .. }));
    }
}
