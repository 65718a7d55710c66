use crate::config::toml_config::TomlConfig;
use crate::config::{Overrides, SiteSettings};
use crate::domain::model::ContactSubmission;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mabra-site")]
#[command(about = "Render the Mabratech marketing site and talk to its backend")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Site configuration file (TOML)")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "BACKEND_URL", global = true)]
    pub backend_url: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Mount the home page against the backend and write index.html
    Render {
        #[arg(long)]
        output: Option<String>,

        #[arg(long)]
        page_path: Option<String>,

        #[arg(long)]
        referrer: Option<String>,

        #[arg(long)]
        title: Option<String>,
    },

    /// Send a contact message through the backend
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        service: String,

        #[arg(long)]
        message: String,
    },
}

impl CliConfig {
    pub fn settings(&self) -> Result<SiteSettings> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let mut overrides = Overrides {
            backend_url: self.backend_url.clone(),
            timeout_seconds: self.timeout_seconds,
            ..Default::default()
        };

        if let Command::Render {
            output,
            page_path,
            referrer,
            title,
        } = &self.command
        {
            overrides.output_path = output.clone();
            overrides.page_path = page_path.clone();
            overrides.referrer = referrer.clone();
            overrides.page_title = title.clone();
        }

        // 送出前先擋下明顯錯誤的 email
        if let Command::Contact { email, .. } = &self.command {
            validation::validate_email("email", email)?;
        }

        let settings = SiteSettings::resolve(file.as_ref(), overrides);
        settings.validate()?;
        Ok(settings)
    }

    /// The submission carried by the `contact` subcommand.
    pub fn contact_submission(&self) -> Option<ContactSubmission> {
        match &self.command {
            Command::Contact {
                name,
                email,
                phone,
                company,
                service,
                message,
            } => Some(ContactSubmission {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                company: company.clone(),
                service: service.clone(),
                message: message.clone(),
            }),
            Command::Render { .. } => None,
        }
    }
}
