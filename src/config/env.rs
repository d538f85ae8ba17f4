//! Environment overrides applied on top of file configuration.
//!
//! Relay credentials come only from `TELEGRAM_BOT_TOKEN` and
//! `TELEGRAM_ADMIN_CHAT_ID`; both must be set and non-empty.

use crate::error::ConfigError;

use super::{Config, RelayCredentials};

pub(super) const ENV_BIND: &str = "STOREFRONT_BIND";
pub(super) const ENV_RELAY_URL: &str = "STOREFRONT_RELAY_URL";
pub(super) const ENV_RELAY_TIMEOUT_SECS: &str = "STOREFRONT_RELAY_TIMEOUT_SECS";
pub(super) const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub(super) const ENV_ADMIN_CHAT_ID: &str = "TELEGRAM_ADMIN_CHAT_ID";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(bind) = non_empty(env_lookup, ENV_BIND) {
        config.server.bind = bind;
    }
    if let Some(url) = non_empty(env_lookup, ENV_RELAY_URL) {
        config.client.relay_url = url;
    }
    if let Some(timeout) = non_empty(env_lookup, ENV_RELAY_TIMEOUT_SECS) {
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_RELAY_TIMEOUT_SECS} value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        // Clamp to at least 1 second; reqwest treats zero as an immediate timeout.
        config.relay.timeout_secs = parsed.max(1);
    }
    config.relay.credentials = relay_credentials_with(env_lookup);
    Ok(())
}

/// Resolve relay credentials; `None` unless both variables are present.
pub(super) fn relay_credentials_with<FEnv>(env_lookup: &FEnv) -> Option<RelayCredentials>
where
    FEnv: Fn(&str) -> Option<String>,
{
    Some(RelayCredentials {
        bot_token: non_empty(env_lookup, ENV_BOT_TOKEN)?,
        admin_chat_id: non_empty(env_lookup, ENV_ADMIN_CHAT_ID)?,
    })
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn credentials_require_both_variables() {
        assert!(relay_credentials_with(&lookup(&[(ENV_BOT_TOKEN, "t")])).is_none());
        assert!(relay_credentials_with(&lookup(&[(ENV_ADMIN_CHAT_ID, "c")])).is_none());
        assert!(
            relay_credentials_with(&lookup(&[(ENV_BOT_TOKEN, "t"), (ENV_ADMIN_CHAT_ID, "  ")]))
                .is_none()
        );
        let creds =
            relay_credentials_with(&lookup(&[(ENV_BOT_TOKEN, " t "), (ENV_ADMIN_CHAT_ID, "c")]))
                .expect("both set");
        assert_eq!(creds.bot_token, "t");
        assert_eq!(creds.admin_chat_id, "c");
    }

    #[test]
    fn overrides_bind_url_and_timeout() {
        let mut config = Config::default();
        apply_runtime_env_overrides(
            &mut config,
            &lookup(&[
                (ENV_BIND, "0.0.0.0:8080"),
                (ENV_RELAY_URL, "http://relay.test/api/submit-ticket"),
                (ENV_RELAY_TIMEOUT_SECS, "0"),
            ]),
        )
        .expect("valid overrides");
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.client.relay_url, "http://relay.test/api/submit-ticket");
        assert_eq!(config.relay.timeout_secs, 1);
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let mut config = Config::default();
        let err = apply_runtime_env_overrides(
            &mut config,
            &lookup(&[(ENV_RELAY_TIMEOUT_SECS, "soon")]),
        )
        .expect_err("must reject");
        assert!(err.to_string().contains(ENV_RELAY_TIMEOUT_SECS), "got: {err}");
    }
}
