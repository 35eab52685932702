use std::env;

const DEFAULT_API_BASE: &str = "https://www.openligadb.de/api/getmatchdata";
const DEFAULT_LEAGUE: &str = "bl1";

/// Per-run configuration, built once in `main` and passed by reference.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: String,
    pub minute_digits: usize,
    pub min_column_width: usize,
    pub column_gap: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: format!("{DEFAULT_API_BASE}/{DEFAULT_LEAGUE}"),
            minute_digits: 2,
            min_column_width: 15,
            column_gap: 5,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let endpoint = opt_env("MATCHDAY_URL").unwrap_or_else(|| {
            let league = opt_env("MATCHDAY_LEAGUE").unwrap_or_else(|| DEFAULT_LEAGUE.to_string());
            format!("{DEFAULT_API_BASE}/{league}")
        });
        Self {
            endpoint,
            ..Self::default()
        }
    }
}

fn opt_env(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|val| {
        if val.trim().is_empty() {
            None
        } else {
            Some(val.trim().to_string())
        }
    })
}
