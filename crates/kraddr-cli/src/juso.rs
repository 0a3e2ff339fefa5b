use anyhow::Context;
use clap::{Args, Subcommand};
use kraddr_core::AppConfig;
use kraddr_juso::{JusoClient, SearchOptions};

#[derive(Debug, Subcommand)]
pub(crate) enum JusoCommands {
    /// Search and print the normalized result as JSON
    Search(SearchArgs),
    /// Search and print the response body exactly as received
    Find(SearchArgs),
}

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Search keyword; may be empty
    pub(crate) keyword: String,
    #[arg(long, default_value_t = 10)]
    pub(crate) count_per_page: u32,
    #[arg(long, default_value_t = 1)]
    pub(crate) current_page: u32,
    /// `json` or `xml`
    #[arg(long, default_value = "json")]
    pub(crate) result_type: String,
    /// Overrides `JUSO_CONFIRM_KEY`
    #[arg(long)]
    pub(crate) confirm_key: Option<String>,
}

impl SearchArgs {
    pub(crate) fn options(&self) -> SearchOptions {
        SearchOptions {
            count_per_page: self.count_per_page,
            current_page: self.current_page,
            result_type: self.result_type.clone(),
            confirm_key: self.confirm_key.clone(),
        }
    }
}

pub(crate) async fn run(command: JusoCommands, config: &AppConfig) -> anyhow::Result<()> {
    let client = JusoClient::from_config(config).context("failed to build Juso client")?;

    match command {
        JusoCommands::Search(args) => {
            let response = client.search(&args.keyword, &args.options()).await?;
            let common = &response.results.common;
            if common.error_code != "0" {
                tracing::warn!(
                    error_code = %common.error_code,
                    error_message = %common.error_message,
                    "juso reported an error"
                );
            }
            tracing::info!(
                total_count = %common.total_count,
                returned = response.results.juso.len(),
                "juso search complete"
            );
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        JusoCommands::Find(args) => {
            // `find` never applies a default key itself; the CLI passes the
            // configured one explicitly.
            let mut options = args.options();
            if options.confirm_key.is_none() {
                options.confirm_key.clone_from(&config.juso_confirm_key);
            }
            let response = client.find(&args.keyword, &options).await?;
            tracing::info!(status = %response.status(), "juso responded");
            println!("{}", response.text().await?);
        }
    }

    Ok(())
}
