use config::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub history: HistoryConfig,
    #[serde(default)]
    #[validate(nested)]
    pub fetch: FetchConfig,
    #[serde(default)]
    #[validate(nested)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct HistoryConfig {
    /// Authenticated viewing-activity endpoint; the fetcher only appends
    /// the page parameter.
    #[validate(length(min = 1, message = "Base URL cannot be empty"))]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct FetchConfig {
    /// Upper bound on pages fetched before the run is aborted.
    #[serde(default = "default_max_pages")]
    #[validate(range(min = 1, message = "Page limit must be at least 1"))]
    pub max_pages: usize,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, message = "Timeout must be at least 1 second"))]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ReportConfig {
    /// How many entries the title/date rankings keep.
    #[serde(default = "default_top_count")]
    #[validate(range(min = 1, message = "Ranking size must be at least 1"))]
    pub top_count: usize,
    #[serde(default)]
    pub format: ReportFormat,
    /// Optional per-title CSV export path.
    #[serde(default)]
    pub csv_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

fn default_max_pages() -> usize {
    500
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_top_count() -> usize {
    5
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_count: default_top_count(),
            format: ReportFormat::default(),
            csv_path: None,
        }
    }
}

impl AppConfig {
    pub fn load_with_cli_args(cli_args: &crate::cli::CliArgs) -> Result<Self, Box<dyn std::error::Error>> {
        let mut builder = Config::builder()
            .add_source(config::File::with_name("config").required(false));

        if let Some(config_path) = &cli_args.config {
            builder = builder.add_source(config::File::from(config_path.as_path()));
        }

        if let Some(base_url) = &cli_args.base_url {
            builder = builder.set_override("history.base_url", base_url.as_str())?;
        }
        if let Some(max_pages) = cli_args.max_pages {
            builder = builder.set_override("fetch.max_pages", max_pages as i64)?;
        }
        if let Some(timeout) = cli_args.timeout {
            builder = builder.set_override("fetch.timeout_secs", timeout as i64)?;
        }
        if let Some(top) = cli_args.top {
            builder = builder.set_override("report.top_count", top as i64)?;
        }
        if let Some(format) = &cli_args.format {
            builder = builder.set_override("report.format", format.as_str())?;
        }
        if let Some(output) = &cli_args.output {
            builder = builder.set_override(
                "report.csv_path",
                output.to_string_lossy().to_string(),
            )?;
        }

        let app_config: AppConfig = builder.build()?.try_deserialize()?;

        app_config
            .validate()
            .map_err(|e| -> Box<dyn std::error::Error> {
                format!("Configuration validation failed: {}", e).into()
            })?;

        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_sections() {
        let config: AppConfig = serde_json::from_str(
            r#"{"history": {"base_url": "https://example.net/viewingactivity?authURL=t"}}"#,
        )
        .unwrap();

        assert_eq!(config.fetch.max_pages, 500);
        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.report.top_count, 5);
        assert_eq!(config.report.format, ReportFormat::Text);
        assert!(config.report.csv_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_base_url_fails_validation() {
        let config: AppConfig =
            serde_json::from_str(r#"{"history": {"base_url": ""}}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_page_limit_fails_validation() {
        let config: AppConfig = serde_json::from_str(
            r#"{"history": {"base_url": "u"}, "fetch": {"max_pages": 0}}"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn report_format_parses_lowercase_names() {
        let config: AppConfig = serde_json::from_str(
            r#"{"history": {"base_url": "u"}, "report": {"format": "json"}}"#,
        )
        .unwrap();
        assert_eq!(config.report.format, ReportFormat::Json);
    }
}
