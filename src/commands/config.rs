use anyhow::{Context, Result};
use log::debug;

use crate::{countdown::DEFAULT_LAUNCH_AT, countdown::Target, runtime::Runtime};

/// Form collection endpoint for the signup form.
pub const ENV_FORM_ENDPOINT: &str = "XBESH_FORM_ENDPOINT";
/// RFC 3339 instant the launch countdown runs to.
pub const ENV_LAUNCH_AT: &str = "XBESH_LAUNCH_AT";
/// User agent to classify instead of the host OS.
pub const ENV_USER_AGENT: &str = "XBESH_USER_AGENT";

/// Values given on the command line. They take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub form_endpoint: Option<String>,
    pub launch_at: Option<String>,
    pub user_agent: Option<String>,
}

/// Resolved configuration: command line, then environment, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub form_endpoint: Option<String>,
    pub launch_at: String,
    pub user_agent: String,
}

impl Config {
    pub fn load<R: Runtime>(runtime: &R, overrides: ConfigOverrides) -> Self {
        let from_env = |key: &str| runtime.env_var(key).ok().filter(|v| !v.trim().is_empty());

        let form_endpoint = overrides
            .form_endpoint
            .or_else(|| from_env(ENV_FORM_ENDPOINT));

        let launch_at = overrides
            .launch_at
            .or_else(|| from_env(ENV_LAUNCH_AT))
            .unwrap_or_else(|| DEFAULT_LAUNCH_AT.to_string());

        // Without a browser the host OS name stands in for the user agent.
        let user_agent = overrides
            .user_agent
            .or_else(|| from_env(ENV_USER_AGENT))
            .unwrap_or_else(|| runtime.host_os());

        let config = Self {
            form_endpoint,
            launch_at,
            user_agent,
        };
        debug!("Loaded config: {:?}", config);
        config
    }

    pub fn form_endpoint(&self) -> Result<&str> {
        self.form_endpoint.as_deref().with_context(|| {
            format!(
                "No form endpoint configured. Pass --endpoint or set {}.",
                ENV_FORM_ENDPOINT
            )
        })
    }

    pub fn target(&self) -> Target {
        Target::parse(&self.launch_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use std::env::VarError;

    fn runtime_with(vars: &'static [(&'static str, &'static str)]) -> MockRuntime {
        let mut runtime = MockRuntime::new();
        runtime.expect_env_var().returning(move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
                .ok_or(VarError::NotPresent)
        });
        runtime.expect_host_os().returning(|| "linux".to_string());
        runtime
    }

    #[test]
    fn test_defaults() {
        let runtime = runtime_with(&[]);
        let config = Config::load(&runtime, ConfigOverrides::default());

        assert_eq!(config.form_endpoint, None);
        assert_eq!(config.launch_at, DEFAULT_LAUNCH_AT);
        assert_eq!(config.user_agent, "linux");
        assert!(config.form_endpoint().is_err());
    }

    #[test]
    fn test_env_values() {
        let runtime = runtime_with(&[
            (ENV_FORM_ENDPOINT, "https://forms.example.com/f/1"),
            (ENV_LAUNCH_AT, "2030-01-01T00:00:00Z"),
            (ENV_USER_AGENT, "Mozilla/5.0 (Macintosh)"),
        ]);
        let config = Config::load(&runtime, ConfigOverrides::default());

        assert_eq!(config.form_endpoint().unwrap(), "https://forms.example.com/f/1");
        assert_eq!(config.launch_at, "2030-01-01T00:00:00Z");
        assert_eq!(config.user_agent, "Mozilla/5.0 (Macintosh)");
    }

    #[test]
    fn test_overrides_beat_env() {
        let runtime = runtime_with(&[(ENV_USER_AGENT, "Windows NT")]);
        let overrides = ConfigOverrides {
            user_agent: Some("X11; Linux".into()),
            ..Default::default()
        };
        let config = Config::load(&runtime, overrides);

        assert_eq!(config.user_agent, "X11; Linux");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let runtime = runtime_with(&[(ENV_LAUNCH_AT, "  ")]);
        let config = Config::load(&runtime, ConfigOverrides::default());
        assert_eq!(config.launch_at, DEFAULT_LAUNCH_AT);
    }

    #[test]
    fn test_host_os_not_consulted_when_agent_given() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .with(eq(ENV_USER_AGENT))
            .returning(|_| Ok("Win64".into()));
        for key in [ENV_FORM_ENDPOINT, ENV_LAUNCH_AT] {
            runtime
                .expect_env_var()
                .with(eq(key))
                .returning(|_| Err(VarError::NotPresent));
        }
        runtime.expect_host_os().never();

        let config = Config::load(&runtime, ConfigOverrides::default());
        assert_eq!(config.user_agent, "Win64");
    }
}
