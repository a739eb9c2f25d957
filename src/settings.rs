use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;
use tracing::warn;

const ENV_PREFIX: &str = "SQLFUNCS";

/// Ambient HTTP settings, read from `SQLFUNCS_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout. Unset means the client never gives up.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_user_agent() -> String {
    format!("sqlfuncs/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        Self::from_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn from_source(env: Environment) -> Self {
        let loaded = Config::builder()
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize::<Settings>());

        match loaded {
            Ok(s) => s,
            Err(e) => {
                warn!("Ignoring invalid {}_* settings: {}", ENV_PREFIX, e);
                Settings::default()
            }
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(Some(map))
    }

    #[test]
    fn defaults_without_env() {
        let s = Settings::from_source(env(&[]));
        assert!(s.user_agent.starts_with("sqlfuncs/"));
        assert_eq!(s.timeout(), None);
    }

    #[test]
    fn env_overrides() {
        let s = Settings::from_source(env(&[
            ("SQLFUNCS_USER_AGENT", "docbot/2"),
            ("SQLFUNCS_TIMEOUT_SECS", "15"),
        ]));
        assert_eq!(s.user_agent, "docbot/2");
        assert_eq!(s.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn garbage_timeout_falls_back() {
        let s = Settings::from_source(env(&[("SQLFUNCS_TIMEOUT_SECS", "soon")]));
        assert_eq!(s.timeout(), None);
    }
}
