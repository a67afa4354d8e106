pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::adapters::http::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
    use crate::config::toml_config::TomlConfig;
    use crate::domain::model::{ConsultationType, SortBy};
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_choice, validate_non_empty_string, validate_range, validate_url, Validate,
    };
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "doctor-directory")]
    #[command(about = "Search, filter and sort a doctor listing")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        pub endpoint: String,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        pub timeout_seconds: u64,

        /// TOML file overriding endpoint and timeout
        #[arg(long)]
        pub config: Option<String>,

        /// Initial URL query, e.g. "specialty=Dentist&sortBy=fees"
        #[arg(long, default_value = "")]
        pub query: String,

        #[arg(long)]
        pub search: Option<String>,

        /// video_consult | in_clinic
        #[arg(long)]
        pub consultation_type: Option<String>,

        /// Repeatable; checks the specialty filter
        #[arg(long)]
        pub specialty: Vec<String>,

        /// fees | experience
        #[arg(long)]
        pub sort_by: Option<String>,

        /// Print name suggestions for a partial query instead of results
        #[arg(long)]
        pub suggest: Option<String>,

        #[arg(long)]
        pub list_specialties: bool,

        #[arg(long, help = "Print results as JSON")]
        pub json: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn consultation_type(&self) -> Result<Option<ConsultationType>> {
            validate_choice(
                "consultation_type",
                self.consultation_type.as_deref(),
                ConsultationType::ACCEPTED,
            )
        }

        pub fn sort_by(&self) -> Result<Option<SortBy>> {
            validate_choice("sort_by", self.sort_by.as_deref(), SortBy::ACCEPTED)
        }

        /// 檔案設定優先於命令列預設值
        pub fn apply_file_config(&mut self, file: &TomlConfig) {
            self.endpoint = file.endpoint().to_string();
            self.timeout_seconds = file.timeout_seconds();
            if self.query.is_empty() {
                if let Some(query) = file.default_query() {
                    self.query = query.to_string();
                }
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn endpoint(&self) -> &str {
            &self.endpoint
        }

        fn timeout_seconds(&self) -> u64 {
            self.timeout_seconds
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("endpoint", &self.endpoint)?;
            validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
            self.consultation_type()?;
            self.sort_by()?;
            for specialty in &self.specialty {
                validate_non_empty_string("specialty", specialty)?;
            }
            Ok(())
        }
    }

}
