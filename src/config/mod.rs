pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation;

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_JSON_SOURCE: &str = "history_data.json";
pub const DEFAULT_ASC_CSV: &str = "今彩539_2025_update.csv";
pub const DEFAULT_DRAW_CSV: &str = "今彩539_2025_update_f.csv";
pub const DEFAULT_TEMPLATE: &str = "historical_matrix.html";
pub const DEFAULT_OUTPUT: &str = "latest_lottery_report.html";
pub const DEFAULT_YEAR: i32 = 2025;
pub const DEFAULT_PLACEHOLDER: &str = "<!-- JSON_DATA_PLACEHOLDER -->";
pub const DEFAULT_VARIABLE: &str = "HISTORY_DATA";

/// CLI 與 TOML 共用的設定檢查
pub fn validate_settings<C: ConfigProvider>(config: &C) -> Result<()> {
    validation::validate_path("data_dir", config.data_dir())?;
    validation::validate_file_extension("json_source", config.json_source(), &["json"])?;
    validation::validate_file_extension("asc_csv", config.asc_csv(), &["csv"])?;
    validation::validate_file_extension("draw_csv", config.draw_csv(), &["csv"])?;
    validation::validate_file_extension("template", config.template_path(), &["html", "htm"])?;
    validation::validate_file_extension("output", config.output_file(), &["html", "htm"])?;
    validation::validate_range("default_year", config.default_year(), 1, 9999)?;
    validation::validate_non_empty_string("placeholder", config.placeholder())?;
    validation::validate_js_identifier("variable", config.data_variable())?;
    Ok(())
}

#[cfg(feature = "cli")]
pub use self::cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::{
        validate_settings, ConfigProvider, DEFAULT_ASC_CSV, DEFAULT_DATA_DIR, DEFAULT_DRAW_CSV,
        DEFAULT_JSON_SOURCE, DEFAULT_OUTPUT, DEFAULT_PLACEHOLDER, DEFAULT_TEMPLATE,
        DEFAULT_VARIABLE, DEFAULT_YEAR,
    };
    use crate::utils::validation::Validate;
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "draw-report")]
    #[command(about = "Embed lottery draw history into a static HTML report")]
    pub struct CliConfig {
        /// Directory all input and output files are resolved against
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        pub data_dir: String,

        /// Preferred JSON source (array of draw records)
        #[arg(long, default_value = DEFAULT_JSON_SOURCE)]
        pub json_source: String,

        /// Fallback CSV with numbers in ascending order
        #[arg(long, default_value = DEFAULT_ASC_CSV)]
        pub asc_csv: String,

        /// Fallback CSV with numbers in draw order
        #[arg(long, default_value = DEFAULT_DRAW_CSV)]
        pub draw_csv: String,

        #[arg(long, default_value = DEFAULT_TEMPLATE)]
        pub template: String,

        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        pub output: String,

        /// Year applied to dates written as M/D
        #[arg(long, default_value_t = DEFAULT_YEAR)]
        pub default_year: i32,

        #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
        pub placeholder: String,

        /// JavaScript variable the data is assigned to
        #[arg(long, default_value = DEFAULT_VARIABLE)]
        pub variable: String,

        /// Load settings from a TOML file instead of the flags above
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub log_json: bool,

        #[arg(long, help = "Log CPU and memory usage per phase")]
        pub monitor: bool,
    }

    impl ConfigProvider for CliConfig {
        fn data_dir(&self) -> &str {
            &self.data_dir
        }

        fn json_source(&self) -> &str {
            &self.json_source
        }

        fn asc_csv(&self) -> &str {
            &self.asc_csv
        }

        fn draw_csv(&self) -> &str {
            &self.draw_csv
        }

        fn template_path(&self) -> &str {
            &self.template
        }

        fn output_file(&self) -> &str {
            &self.output
        }

        fn default_year(&self) -> i32 {
            self.default_year
        }

        fn placeholder(&self) -> &str {
            &self.placeholder
        }

        fn data_variable(&self) -> &str {
            &self.variable
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> crate::utils::error::Result<()> {
            validate_settings(self)
        }
    }

}
