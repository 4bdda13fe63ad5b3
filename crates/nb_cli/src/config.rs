use nb_core::{Error, Result};

/// Credentials and endpoint overrides, read once at startup. The URL and
/// model overrides exist for tests and self-hosted deployments; absent
/// values fall back to the clients' defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub news_api_key: String,
    pub openai_api_key: String,
    pub news_api_url: Option<String>,
    pub openai_api_url: Option<String>,
    pub openai_model: Option<String>,
    pub news_page_size: Option<u32>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            news_api_key: require("NEWS_API_KEY")?,
            openai_api_key: require("OPENAI_API_KEY")?,
            news_api_url: optional("NEWS_API_URL"),
            openai_api_url: optional("OPENAI_API_URL"),
            openai_model: optional("OPENAI_MODEL"),
            news_page_size: parse_page_size(optional("NEWS_PAGE_SIZE"))?,
        })
    }
}

fn require(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| Error::Config(format!("{} is not set", name)))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_page_size(raw: Option<String>) -> Result<Option<u32>> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .map(Some)
            .ok_or_else(|| {
                Error::Config(format!(
                    "NEWS_PAGE_SIZE must be a positive integer, got '{}'",
                    value
                ))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_variable_is_a_config_error() {
        let err = require("NB_TEST_VAR_THAT_IS_NEVER_SET").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("NB_TEST_VAR_THAT_IS_NEVER_SET"));
    }

    #[test]
    fn blank_required_variable_is_a_config_error() {
        std::env::set_var("NB_TEST_VAR_BLANK", "   ");
        assert!(require("NB_TEST_VAR_BLANK").is_err());
    }

    #[test]
    fn present_required_variable_is_returned() {
        std::env::set_var("NB_TEST_VAR_PRESENT", "value");
        assert_eq!(require("NB_TEST_VAR_PRESENT").unwrap(), "value");
    }

    #[test]
    fn page_size_must_be_a_positive_integer() {
        assert_eq!(parse_page_size(None).unwrap(), None);
        assert_eq!(parse_page_size(Some("5".to_string())).unwrap(), Some(5));
        assert!(parse_page_size(Some("0".to_string())).is_err());
        assert!(parse_page_size(Some("five".to_string())).is_err());
    }
}
