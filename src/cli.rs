use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Authenticated viewing-activity URL (overrides the config file)
    #[arg(short, long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Write per-title aggregates to this CSV file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report format (text, json)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Safety bound on the number of history pages fetched
    #[arg(long, value_name = "N")]
    pub max_pages: Option<usize>,

    /// Per-request timeout (in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Number of entries kept in the title/date rankings
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log level '{}'. Valid levels are: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }

        if let Some(format) = &self.format {
            if !["text", "json"].contains(&format.as_str()) {
                return Err(format!(
                    "Invalid format '{format}'. Valid formats are: text, json"
                ));
            }
        }

        if self.max_pages == Some(0) {
            return Err("max-pages must be greater than 0".to_string());
        }

        if self.timeout == Some(0) {
            return Err("timeout must be greater than 0".to_string());
        }

        if self.top == Some(0) {
            return Err("top must be greater than 0".to_string());
        }

        Ok(())
    }
}
