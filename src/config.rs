use crate::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub team: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("SCOUT_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let team = env::var("SCOUT_TEAM").ok().filter(|t| !t.trim().is_empty());

        Ok(Config {
            data_dir: PathBuf::from(data_dir),
            team,
        })
    }

    /// CLI argument wins over the environment.
    pub fn target_team(&self, cli_team: Option<String>) -> Result<String, AppError> {
        cli_team.or_else(|| self.team.clone()).ok_or_else(|| {
            AppError::ConfigError(
                "no target team given: pass TEAM on the command line or set SCOUT_TEAM in .env"
                    .to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_team_wins_over_env_fallback() {
        let config = Config {
            data_dir: PathBuf::from("data"),
            team: Some("NRG".to_string()),
        };

        assert_eq!(config.target_team(Some("C9".to_string())).unwrap(), "C9");
        assert_eq!(config.target_team(None).unwrap(), "NRG");
    }

    #[test]
    fn missing_team_is_a_config_error() {
        let config = Config {
            data_dir: PathBuf::from("data"),
            team: None,
        };

        assert!(matches!(
            config.target_team(None),
            Err(AppError::ConfigError(_))
        ));
    }
}
