pub const ENV_BASE_URL: &str = "STONKS_BASE_URL";
pub const ENV_USERNAME: &str = "STONKS_USERNAME";
pub const ENV_PASSWORD: &str = "STONKS_PASSWORD";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Runtime configuration. The base URL and login mode are the only knobs:
/// credentials present in the environment auto-submit on startup, otherwise
/// the interactive form is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub credentials: Option<Credentials>,
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[must_use]
pub fn missing_required_env(cli_base_url: Option<&str>) -> Vec<&'static str> {
    if cli_base_url.is_some() {
        return Vec::new();
    }
    [ENV_BASE_URL]
        .into_iter()
        .filter(|key| env_non_empty(key).is_none())
        .collect()
}

#[must_use]
pub fn load(args: &crate::Args) -> Config {
    let base_url = args
        .base_url
        .clone()
        .or_else(|| env_non_empty(ENV_BASE_URL))
        .unwrap_or_default();

    let credentials = match (env_non_empty(ENV_USERNAME), env_non_empty(ENV_PASSWORD)) {
        (Some(username), Some(password)) => Some(Credentials { username, password }),
        _ => None,
    };

    Config {
        base_url,
        credentials,
    }
}

/// Display config guide (when required configuration is absent)
pub fn print_config_guide() {
    eprintln!("configuration error: no exchange base URL");
    eprintln!();
    eprintln!("set the following environment variable:");
    eprintln!("  {ENV_BASE_URL}=<exchange base URL, e.g. http://localhost:4567>");
    eprintln!();
    eprintln!("optional: {ENV_USERNAME} / {ENV_PASSWORD} to sign in automatically");
    eprintln!("optional: STONKS_LOG to adjust log filtering (e.g. error,stonks_terminal=info)");
    eprintln!();
    eprintln!("a .env file in the working directory is honored as well");
}

#[cfg(test)]
mod tests {
    use super::{load, missing_required_env, ENV_BASE_URL, ENV_PASSWORD, ENV_USERNAME};
    use crate::Args;

    struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: Option<&str>) -> Self {
            let previous = std::env::var(key).ok();
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
            Self { key, previous }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(previous) = &self.previous {
                std::env::set_var(self.key, previous);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    // one test covers every env scenario: the variables are process-global
    // and parallel mutation would race
    #[test]
    fn resolves_configuration_from_cli_and_environment() {
        let _base = EnvGuard::set(ENV_BASE_URL, None);
        let _user = EnvGuard::set(ENV_USERNAME, None);
        let _pass = EnvGuard::set(ENV_PASSWORD, None);

        assert_eq!(missing_required_env(None), vec![ENV_BASE_URL]);
        assert!(missing_required_env(Some("http://cli:1")).is_empty());

        let cli = Args {
            base_url: Some("http://cli:1".to_string()),
        };
        assert_eq!(load(&cli).base_url, "http://cli:1");

        std::env::set_var(ENV_BASE_URL, "http://env:2");
        assert!(missing_required_env(None).is_empty());
        let config = load(&Args::default());
        assert_eq!(config.base_url, "http://env:2");
        assert!(config.credentials.is_none());
        // CLI wins over the environment
        assert_eq!(load(&cli).base_url, "http://cli:1");

        // credentials only count when both halves are present
        std::env::set_var(ENV_USERNAME, "alice");
        assert!(load(&Args::default()).credentials.is_none());
        std::env::set_var(ENV_PASSWORD, "pw");
        let credentials = load(&Args::default()).credentials.expect("credentials");
        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password, "pw");
    }
}
