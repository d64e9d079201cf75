use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use assessment_finder::{cmd, config::Config, render::OutputFormat, telemetry};

/// Find assessments that match a job description
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Recommendation service base URL (overrides API_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for queries until EOF or :quit (default)
    Interactive {
        /// Number of recommendations to request (1-20)
        #[arg(short = 'k', long, allow_negative_numbers = true)]
        top_k: Option<i64>,
    },

    /// Run a single query
    Query {
        /// Job description or requirements
        text: String,

        /// Number of recommendations to request (1-20)
        #[arg(short = 'k', long, allow_negative_numbers = true)]
        top_k: Option<i64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write json/html output to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Check that the service is up
    Health,
}

#[tokio::main]
async fn main() {
    telemetry::init();

    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    };
    if let Some(url) = cli.api_url {
        config = config.with_api_base_url(url);
    }

    let result = match cli.command {
        None => cmd::cmd_interactive(&config, config.default_top_k)
            .await
            .map(|_| true),
        Some(Commands::Interactive { top_k }) => {
            cmd::cmd_interactive(&config, top_k.unwrap_or(config.default_top_k))
                .await
                .map(|_| true)
        }
        Some(Commands::Query {
            text,
            top_k,
            format,
            output,
        }) => {
            cmd::cmd_query(
                &config,
                &text,
                top_k.unwrap_or(config.default_top_k),
                format,
                output.as_deref(),
            )
            .await
        }
        Some(Commands::Health) => cmd::cmd_health(&config).await,
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}
