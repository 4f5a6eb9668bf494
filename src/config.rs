use crate::domain::TrackType;
use std::collections::HashMap;
use thiserror::Error;

const DEFAULT_TRACK_TYPES: &str = "song,beat,mix";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    /// Ranking size when a request gives no `limit`.
    pub trending_default_limit: usize,
    /// Track categories eligible for the trending ranking.
    pub trending_track_types: Vec<TrackType>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_PATH".to_string()))?;

        let trending_default_limit = env_map
            .get("TRENDING_DEFAULT_LIMIT")
            .map(|s| s.as_str())
            .unwrap_or("20")
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "TRENDING_DEFAULT_LIMIT".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?;

        let trending_track_types = parse_track_types(
            env_map
                .get("TRENDING_TRACK_TYPES")
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TRACK_TYPES),
        )?;

        Ok(Config {
            port,
            database_path,
            trending_default_limit,
            trending_track_types,
        })
    }
}

fn parse_track_types(raw: &str) -> Result<Vec<TrackType>, ConfigError> {
    let mut types: Vec<TrackType> = Vec::new();
    for kind in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let kind = TrackType::new(kind);
        if !types.contains(&kind) {
            types.push(kind);
        }
    }

    if types.is_empty() {
        return Err(ConfigError::InvalidValue(
            "TRENDING_TRACK_TYPES".to_string(),
            "must list at least one track type".to_string(),
        ));
    }
    Ok(types)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_required_env() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("DATABASE_PATH".to_string(), "/tmp/test.db".to_string());
        map
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_env_map(setup_required_env()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.trending_default_limit, 20);
        assert_eq!(
            config.trending_track_types,
            vec![TrackType::new("song"), TrackType::new("beat"), TrackType::new("mix")]
        );
    }

    #[test]
    fn test_missing_database_path() {
        let mut env_map = setup_required_env();
        env_map.remove("DATABASE_PATH");
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::MissingEnv(s)) => assert_eq!(s, "DATABASE_PATH"),
            _ => panic!("Expected MissingEnv error"),
        }
    }

    #[test]
    fn test_invalid_port() {
        let mut env_map = setup_required_env();
        env_map.insert("PORT".to_string(), "not_a_number".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PORT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_default_limit() {
        for bad in ["0", "-3", "ten"] {
            let mut env_map = setup_required_env();
            env_map.insert("TRENDING_DEFAULT_LIMIT".to_string(), bad.to_string());
            match Config::from_env_map(env_map) {
                Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "TRENDING_DEFAULT_LIMIT"),
                _ => panic!("Expected InvalidValue error for {}", bad),
            }
        }
    }

    #[test]
    fn test_track_types_normalized() {
        let mut env_map = setup_required_env();
        env_map.insert("TRENDING_TRACK_TYPES".to_string(), " Song, ,BEAT,song ".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(
            config.trending_track_types,
            vec![TrackType::new("song"), TrackType::new("beat")]
        );
    }

    #[test]
    fn test_empty_track_types_rejected() {
        let mut env_map = setup_required_env();
        env_map.insert("TRENDING_TRACK_TYPES".to_string(), " , ".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "TRENDING_TRACK_TYPES"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
