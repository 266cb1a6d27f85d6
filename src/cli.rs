use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use crate::auth::ApiKey;
use crate::provider::Session;

#[derive(Parser)]
#[command(name = "convlens")]
#[command(author, version, about = "Behavioral Analytics Insights Tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output file path (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and shape the behavioral analytics dashboard
    Dashboard {
        /// Analytics provider API key (optional, forwarded as-is; the
        /// provider decides whether a key is valid)
        #[arg(short, long, env = "CONVLENS_API_KEY")]
        api_key: Option<String>,

        /// Analytics provider base URL
        #[arg(short, long, default_value = "http://localhost:8001/api")]
        url: String,
    },
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Dashboard { api_key, url } => {
                info!("Collecting dashboard data from: {}", url);

                let key = ApiKey::from(api_key.clone().unwrap_or_default());
                let mut session = Session::new(url, key)?;
                session.refresh().await?;

                // Serialize to JSON
                let json_output = if self.pretty {
                    serde_json::to_string_pretty(session.data())?
                } else {
                    serde_json::to_string(session.data())?
                };

                // Write to output
                if let Some(output_path) = &self.output {
                    std::fs::write(output_path, json_output)?;
                    info!("Dashboard data written to: {}", output_path.display());
                } else {
                    println!("{}", json_output);
                }

                Ok(())
            }
        }
    }
}
