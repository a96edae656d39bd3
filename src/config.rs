use crate::error::{Error, Result};
use crate::scoring::weights::RawWeights;
use std::env;
use std::str::FromStr;

pub const DEFAULT_DATA_PATH: &str = "data/applicants.csv";
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: String,
    pub top_n: usize,
    pub weights: RawWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let data_path =
            env::var("APPLICANTS_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());

        let top_n = parse_var("TOP_N")?.unwrap_or(DEFAULT_TOP_N);

        let defaults = RawWeights::default();
        let weights = RawWeights {
            test: parse_var("WEIGHT_TEST")?.unwrap_or(defaults.test),
            interview: parse_var("WEIGHT_INTERVIEW")?.unwrap_or(defaults.interview),
            experience: parse_var("WEIGHT_EXPERIENCE")?.unwrap_or(defaults.experience),
            tier: parse_var("WEIGHT_TIER")?.unwrap_or(defaults.tier),
        };

        Ok(Self {
            data_path,
            top_n,
            weights,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            top_n: DEFAULT_TOP_N,
            weights: RawWeights::default(),
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} has an invalid value: {:?}", key, value))),
        Err(_) => Ok(None),
    }
}

/// Per-run ranking parameters, after CLI overrides are applied.
#[derive(Debug, Clone)]
pub struct RankingConfig {
    pub weights: RawWeights,
    pub top_n: usize,
}

impl From<&Config> for RankingConfig {
    fn from(config: &Config) -> Self {
        Self {
            weights: config.weights,
            top_n: config.top_n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_KEYS: [&str; 6] = [
        "APPLICANTS_PATH",
        "TOP_N",
        "WEIGHT_TEST",
        "WEIGHT_INTERVIEW",
        "WEIGHT_EXPERIENCE",
        "WEIGHT_TIER",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_parse_var_valid_invalid_unset() {
        env::set_var("APPLICANT_RANKER_TEST_PARSE_OK", " 12 ");
        env::set_var("APPLICANT_RANKER_TEST_PARSE_BAD", "twelve");
        env::remove_var("APPLICANT_RANKER_TEST_PARSE_UNSET");

        assert_eq!(
            parse_var::<usize>("APPLICANT_RANKER_TEST_PARSE_OK").unwrap(),
            Some(12)
        );
        assert!(matches!(
            parse_var::<usize>("APPLICANT_RANKER_TEST_PARSE_BAD"),
            Err(Error::Config(ref msg)) if msg.contains("APPLICANT_RANKER_TEST_PARSE_BAD")
        ));
        assert_eq!(
            parse_var::<f64>("APPLICANT_RANKER_TEST_PARSE_UNSET").unwrap(),
            None
        );
    }

    // Only test that touches the config variables.
    #[test]
    fn test_from_env_defaults_overrides_and_errors() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.data_path, DEFAULT_DATA_PATH);
        assert_eq!(config.top_n, DEFAULT_TOP_N);
        assert_eq!(config.weights, RawWeights::default());

        env::set_var("APPLICANTS_PATH", "/tmp/other.csv");
        env::set_var("TOP_N", "12");
        env::set_var("WEIGHT_TEST", "1");
        env::set_var("WEIGHT_TIER", "0.5");
        let config = Config::from_env().unwrap();
        assert_eq!(config.data_path, "/tmp/other.csv");
        assert_eq!(config.top_n, 12);
        assert_eq!(config.weights.test, 1.0);
        assert_eq!(config.weights.interview, RawWeights::default().interview);
        assert_eq!(config.weights.tier, 0.5);

        env::set_var("TOP_N", "abc");
        assert!(matches!(Config::from_env(), Err(Error::Config(_))));

        env::set_var("TOP_N", "5");
        env::set_var("WEIGHT_INTERVIEW", "heavy");
        assert!(matches!(Config::from_env(), Err(Error::Config(_))));

        clear_env();
    }

    #[test]
    fn test_ranking_config_from_default_config() {
        let config = Config::default();
        let ranking = RankingConfig::from(&config);
        assert_eq!(ranking.top_n, 5);
        assert_eq!(ranking.weights, RawWeights::default());
    }
}
