use std::{env, path::PathBuf};

use tracing::info;

/// Where the initial catalog is read from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub clubs_path: PathBuf,
    pub competitions_path: PathBuf,
}

impl Config {
    pub const CLUBS_PATH_VAR: &'static str = "BOOKING_CLUBS_PATH";
    pub const COMPETITIONS_PATH_VAR: &'static str = "BOOKING_COMPETITIONS_PATH";

    /// Load the configuration from environment variables, falling back to files in the working
    /// directory
    pub fn load() -> Self {
        Self {
            clubs_path: var_or(Self::CLUBS_PATH_VAR, "clubs.json").into(),
            competitions_path: var_or(Self::COMPETITIONS_PATH_VAR, "competitions.json").into(),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[test_log::test]
    fn test_load_defaults_and_overrides() {
        // Process environment is shared by every test in the binary
        env::remove_var(Config::CLUBS_PATH_VAR);
        env::remove_var(Config::COMPETITIONS_PATH_VAR);
        let config = Config::load();
        assert_that!(config.clubs_path).is_equal_to(PathBuf::from("clubs.json"));
        assert_that!(config.competitions_path).is_equal_to(PathBuf::from("competitions.json"));

        env::set_var(Config::CLUBS_PATH_VAR, "/srv/data/clubs.json");
        let config = Config::load();
        assert_that!(config.clubs_path).is_equal_to(PathBuf::from("/srv/data/clubs.json"));
        assert_that!(config.competitions_path).is_equal_to(PathBuf::from("competitions.json"));
        env::remove_var(Config::CLUBS_PATH_VAR);
    }
}
