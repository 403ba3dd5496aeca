use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::info;

use crate::config::Config;
use crate::core::EmbedEngine;

#[derive(Parser, Debug, Default)]
#[command(name = "video-link-embedder")]
#[command(about = "Turn YouTube and Vimeo links in rendered HTML into embedded players")]
#[command(version)]
pub struct Cli {
    /// Rendered document to filter (stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Where to write the result (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Player width in pixels; invalid values fall back to 516
    #[arg(long, allow_hyphen_values = true)]
    pub width: Option<String>,

    /// Player height in pixels; invalid values fall back to 344
    #[arg(long, allow_hyphen_values = true)]
    pub height: Option<String>,

    /// TOML config file with a [player] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Action the page is rendered for; "edit" leaves links untouched
    #[arg(short, long, default_value = "index")]
    pub action: String,

    /// Print the matches as JSON instead of the filtered document
    #[arg(short, long)]
    pub report: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        let dimensions = Config::load(self.config.as_deref())?
            .with_env()
            .with_overrides(self.width.clone(), self.height.clone())
            .dimensions();
        info!("Player size: {}x{}", dimensions.width, dimensions.height);

        let document = self.read_input().await?;
        let engine = EmbedEngine::new();

        let output = if self.report {
            let reports = engine.scan(&document);
            let mut json = serde_json::to_string_pretty(&reports)?;
            json.push('\n');
            json
        } else {
            engine.filter_compiled_content(&document, &self.action, dimensions)
        };

        self.write_output(&output).await
    }

    async fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display())),
            None => {
                let mut buffer = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut buffer)
                    .await
                    .context("Failed to read stdin")?;
                Ok(buffer)
            }
        }
    }

    async fn write_output(&self, output: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                tokio::fs::write(path, output)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote {}", path.display());
            }
            None => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(output.as_bytes()).await?;
                stdout.flush().await?;
            }
        }
        Ok(())
    }
}
