//! Environment configuration for the bot.
//!
//! `DISCORD_TOKEN` carries the bot token; `GUILD_ID` optionally scopes
//! command registration to one guild for fast development sync.

use std::env;

/// Anything shorter than this cannot be a real bot token.
const MIN_TOKEN_LEN: usize = 30;

/// Bot configuration read from the environment.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// The Discord bot token.
    pub token: String,
    /// Optional guild to register commands in.
    pub guild_id: Option<u64>,
}

/// Errors raised while reading the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The token is unset or too short to be real.
    #[error(
        "DISCORD_TOKEN looks missing or invalid; put your bot token in .env as DISCORD_TOKEN=... (no quotes)"
    )]
    BadToken,

    /// GUILD_ID is set but not numeric.
    #[error("GUILD_ID must be a numeric guild id, got '{0}'")]
    BadGuildId(String),
}

impl BotConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("DISCORD_TOKEN").ok(), env::var("GUILD_ID").ok())
    }

    /// Build configuration from raw variable values.
    fn from_vars(token: Option<String>, guild_id: Option<String>) -> Result<Self, ConfigError> {
        let token = token.unwrap_or_default();
        if token.len() < MIN_TOKEN_LEN {
            return Err(ConfigError::BadToken);
        }

        let guild_id = match guild_id {
            Some(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::BadGuildId(raw.trim().to_string()))?,
            ),
            _ => None,
        };

        Ok(Self { token, guild_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "0123456789012345678901234567890123456789";

    #[test]
    fn valid_token_without_guild() {
        let config = BotConfig::from_vars(Some(TOKEN.to_string()), None).unwrap();
        assert_eq!(config.token, TOKEN);
        assert!(config.guild_id.is_none());
    }

    #[test]
    fn missing_token_is_rejected() {
        assert!(matches!(
            BotConfig::from_vars(None, None),
            Err(ConfigError::BadToken)
        ));
    }

    #[test]
    fn short_token_is_rejected() {
        assert!(matches!(
            BotConfig::from_vars(Some("abc".to_string()), None),
            Err(ConfigError::BadToken)
        ));
    }

    #[test]
    fn guild_id_is_parsed() {
        let config =
            BotConfig::from_vars(Some(TOKEN.to_string()), Some(" 123456789 ".to_string())).unwrap();
        assert_eq!(config.guild_id, Some(123456789));
    }

    #[test]
    fn empty_guild_id_means_global() {
        let config = BotConfig::from_vars(Some(TOKEN.to_string()), Some("  ".to_string())).unwrap();
        assert!(config.guild_id.is_none());
    }

    #[test]
    fn non_numeric_guild_id_is_rejected() {
        assert!(matches!(
            BotConfig::from_vars(Some(TOKEN.to_string()), Some("my-guild".to_string())),
            Err(ConfigError::BadGuildId(_))
        ));
    }
}
