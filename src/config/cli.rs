use super::toml_config::TomlConfig;
use super::Settings;
use crate::domain::model::FormField;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "contact-portal")]
#[command(about = "Send a message to your teacher through the student contact portal")]
pub struct CliConfig {
    /// Mail backend base URL (the message is posted to <base-url>/send-email)
    #[arg(long, env = "CONTACT_API_URL")]
    pub base_url: Option<String>,

    /// TOML file with [endpoint] and [dismiss] settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub student_id: Option<String>,

    #[arg(long)]
    pub batch: Option<String>,

    #[arg(long)]
    pub subject: Option<String>,

    #[arg(long)]
    pub message: Option<String>,

    /// Keep the result on screen until it auto-dismisses
    #[arg(long)]
    pub wait_dismiss: bool,

    /// Never prompt; fail if a field was not given on the command line
    #[arg(long)]
    pub no_input: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            settings = settings.merge_toml(&file);
        }
        if let Some(url) = &self.base_url {
            settings.base_url = url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Field values passed as flags, in page order.
    pub fn prefilled(&self) -> Vec<(FormField, &str)> {
        FormField::ALL
            .into_iter()
            .filter_map(|field| {
                let value = match field {
                    FormField::Name => &self.name,
                    FormField::Email => &self.email,
                    FormField::StudentId => &self.student_id,
                    FormField::Batch => &self.batch,
                    FormField::Subject => &self.subject,
                    FormField::Message => &self.message,
                };
                value.as_deref().map(|v| (field, v))
            })
            .collect()
    }
}
