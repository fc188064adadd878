use std::{env, str::FromStr};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output mode '{other}'")),
        }
    }
}

/// Settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub output: OutputMode,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_output_var(env::var("RACHA_OUTPUT").ok().as_deref())
    }

    fn from_output_var(value: Option<&str>) -> Result<Self, String> {
        let output = match value {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => OutputMode::default(),
        };
        Ok(Self { output })
    }
}

/// Logs go to stderr so JSON output on stdout stays clean.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unset(None, OutputMode::Text)]
    #[case::blank(Some(""), OutputMode::Text)]
    #[case::text(Some("text"), OutputMode::Text)]
    #[case::json_upper(Some(" JSON "), OutputMode::Json)]
    fn output_mode_from_env_value(#[case] value: Option<&str>, #[case] expected: OutputMode) {
        assert_eq!(
            AppConfig::from_output_var(value),
            Ok(AppConfig { output: expected })
        );
    }

    #[test]
    fn unknown_output_mode_is_rejected() {
        assert_eq!(
            AppConfig::from_output_var(Some("yaml")),
            Err("unknown output mode 'yaml'".to_string())
        );
    }
}
