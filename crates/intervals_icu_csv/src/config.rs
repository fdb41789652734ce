use crate::FetchError;
use secrecy::SecretString;

pub const API_KEY_VAR: &str = "INTERVALS_API_KEY";
pub const ATHLETE_ID_VAR: &str = "INTERVALS_ATHLETE_ID";
pub const BASE_URL_VAR: &str = "INTERVALS_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://intervals.icu/api/v1";
/// Athlete id `0` resolves to the athlete that owns the API key.
pub const DEFAULT_ATHLETE_ID: &str = "0";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: Option<SecretString>,
    pub athlete_id: String,
    pub base_url: String,
}

impl Config {
    pub fn new(
        base_url: &str,
        athlete_id: impl Into<String>,
        api_key: Option<SecretString>,
    ) -> Self {
        Self {
            api_key,
            athlete_id: athlete_id.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    ///
    /// A missing API key is not an error here; it is reported by
    /// [`Config::require_api_key`] when a fetch is attempted.
    pub fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let api_key = get(API_KEY_VAR)
            .filter(|k| !k.is_empty())
            .map(|k| SecretString::new(k.into()));
        let athlete_id = get(ATHLETE_ID_VAR)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| DEFAULT_ATHLETE_ID.into());
        let base_url = get(BASE_URL_VAR)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Self::new(&base_url, athlete_id, api_key)
    }

    pub fn require_api_key(&self) -> Result<&SecretString, FetchError> {
        self.api_key.as_ref().ok_or_else(|| {
            FetchError::Config(format!(
                "{API_KEY_VAR} not set; add it to the environment or to a .env file"
            ))
        })
    }
}
