// Server configuration loaded from environment variables.
// Decision: Credentials are required; everything else has a default
// Decision: One timeout per collaborator, shared by the HTTP client and the coach

use anyhow::{anyhow, Context, Result};
use fitcoach_core::CoachConfig;
use fitcoach_openai::DEFAULT_MODEL;
use fitcoach_sheets::{SheetsConfig, SpreadsheetRef, DEFAULT_SPREADSHEET_NAME};
use std::time::Duration;

/// OpenAI settings
#[derive(Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub model: String,
    pub api_url: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Complete server configuration
#[derive(Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for all API routes, e.g. "/api"
    pub api_prefix: String,
    /// Allowed CORS origins; empty means same-origin only
    pub cors_origins: Vec<String>,
    pub openai: OpenAiSettings,
    pub sheets: SheetsConfig,
    pub coach: CoachConfig,
}

impl ApiConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &str| {
            var(name).ok_or_else(|| anyhow!("{} environment variable required", name))
        };
        let seconds = |name: &str, default: u64| -> Result<Duration> {
            match var(name) {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .with_context(|| format!("{} must be a whole number of seconds", name)),
                None => Ok(Duration::from_secs(default)),
            }
        };

        let completion_timeout = seconds("COMPLETION_TIMEOUT_SECS", 60)?;
        let sheets_timeout = seconds("SHEETS_TIMEOUT_SECS", 30)?;

        let openai = OpenAiSettings {
            api_key: required("OPENAI_API_KEY")?,
            model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_url: var("OPENAI_API_URL"),
            timeout: completion_timeout,
        };

        let spreadsheet = match var("SHEETS_SPREADSHEET_ID") {
            Some(id) => SpreadsheetRef::Id(id),
            None => SpreadsheetRef::Name(
                var("SHEETS_SPREADSHEET_NAME")
                    .unwrap_or_else(|| DEFAULT_SPREADSHEET_NAME.to_string()),
            ),
        };
        let sheets = SheetsConfig {
            credentials_json: required("GOOGLE_SHEETS_CREDENTIALS")?,
            spreadsheet,
            worksheet: var("SHEETS_WORKSHEET"),
            timeout: sheets_timeout,
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", raw))?,
            None => 8080,
        };

        // Example: CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
        let cors_origins = var("CORS_ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            api_prefix: var("API_PREFIX").unwrap_or_default(),
            cors_origins,
            openai,
            sheets,
            coach: CoachConfig::default()
                .with_completion_timeout(completion_timeout)
                .with_log_timeout(sheets_timeout),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("OPENAI_API_KEY", "sk-test"),
        ("GOOGLE_SHEETS_CREDENTIALS", "{\"client_email\":\"x\"}"),
    ];

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.api_prefix, "");
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.openai.model, "gpt-3.5-turbo");
        assert!(config.openai.api_url.is_none());
        assert_eq!(
            config.sheets.spreadsheet,
            SpreadsheetRef::Name("AI Fitness Bot Workouts".to_string())
        );
        assert!(config.sheets.worksheet.is_none());
        assert_eq!(config.coach.completion_timeout, Duration::from_secs(60));
        assert_eq!(config.coach.log_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_missing_api_key_fails() {
        let err = ApiConfig::from_lookup(lookup(&[("GOOGLE_SHEETS_CREDENTIALS", "{}")]))
            .err()
            .unwrap();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_missing_credentials_fails() {
        let err = ApiConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")]))
            .err()
            .unwrap();
        assert!(err.to_string().contains("GOOGLE_SHEETS_CREDENTIALS"));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let err = ApiConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "  "),
            ("GOOGLE_SHEETS_CREDENTIALS", "{}"),
        ]))
        .err()
        .unwrap();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("PORT", "9100"),
            ("HOST", "127.0.0.1"),
            ("API_PREFIX", "/api"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("SHEETS_SPREADSHEET_ID", "sheet-123"),
            ("SHEETS_SPREADSHEET_NAME", "ignored"),
            ("SHEETS_WORKSHEET", "Log"),
            ("COMPLETION_TIMEOUT_SECS", "15"),
        ]);
        let config = ApiConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:9100");
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(config.openai.timeout, Duration::from_secs(15));
        assert_eq!(
            config.sheets.spreadsheet,
            SpreadsheetRef::Id("sheet-123".to_string())
        );
        assert_eq!(config.sheets.worksheet.as_deref(), Some("Log"));
    }

    #[test]
    fn test_bad_port_fails() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("PORT", "eighty"));
        let err = ApiConfig::from_lookup(lookup(&vars)).err().unwrap();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ApiConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        assert!(!format!("{:?}", config.openai).contains("sk-test"));
    }
}
