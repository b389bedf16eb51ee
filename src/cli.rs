use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{render, serve};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "wattcast")]
#[command(about = "Electricity demand forecasting report: web dashboard and static export")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Path of the pre-rendered forecast plot
        ///
        /// Defaults to electricity_consumption_forecast.png in the working directory.
        #[arg(short, long, env = "FORECAST_IMAGE_PATH")]
        image_path: Option<PathBuf>,
    },
    /// Render the report to a standalone HTML file
    Render {
        /// Output file for the rendered page
        #[arg(short, long, default_value = "electricity_demand_report.html")]
        output: PathBuf,

        /// Path of the pre-rendered forecast plot
        #[arg(short, long, env = "FORECAST_IMAGE_PATH")]
        image_path: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = AppConfig::load()?;
        match self.command {
            Commands::Serve { bind_address, image_path } => {
                serve(config.with_overrides(bind_address, image_path)).await?;
            }
            Commands::Render { output, image_path } => {
                render(config.with_overrides(None, image_path), &output).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["wattcast", "render"]).unwrap();
        match cli.command {
            Commands::Render { output, .. } => {
                assert_eq!(output, PathBuf::from("electricity_demand_report.html"));
            }
            Commands::Serve { .. } => panic!("expected render command"),
        }
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "wattcast",
            "serve",
            "--bind-address",
            "127.0.0.1:8080",
            "--image-path",
            "plots/forecast.png",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve { bind_address, image_path } => {
                assert_eq!(bind_address.as_deref(), Some("127.0.0.1:8080"));
                assert_eq!(image_path, Some(PathBuf::from("plots/forecast.png")));
            }
            Commands::Render { .. } => panic!("expected serve command"),
        }
    }
}
