use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use easy_keywords::config::Config;
use easy_keywords::keywords::local::LocalGenerator;
use easy_keywords::keywords::select_text;
use easy_keywords::keywords::traits::KeywordGenerator;

/// Easy Keywords: keyword suggestions for image titles.
///
/// Combines words from a title or description with curated keyword lists.
/// No API key, no model download.
#[derive(Parser)]
#[command(name = "easy-keywords", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides KEYWORDS_BIND)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Generate keywords once and print them
    Generate {
        /// Title to extract keywords from
        #[arg(long)]
        title: Option<String>,

        /// Used when the title is missing or blank
        #[arg(long)]
        description: Option<String>,

        /// Category hint: technology, nature, business, people or art
        #[arg(long)]
        category: Option<String>,

        /// Print a JSON array instead of one keyword per line
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("easy_keywords=info,tower_http=info")
            }),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }

            print_banner(&config);
            info!(port = config.port, bind = %config.bind, "Starting server");

            let generator: Arc<dyn KeywordGenerator> = Arc::new(LocalGenerator);
            easy_keywords::web::run_server(&config, generator).await?;
        }

        Commands::Generate {
            title,
            description,
            category,
            json,
        } => {
            let generator = LocalGenerator;
            let text = select_text(title.as_deref(), description.as_deref());
            let keywords = generator.generate(text, category.as_deref());

            if json {
                println!("{}", serde_json::to_string(&keywords)?);
            } else {
                println!(
                    "{}",
                    format!("=== {} keywords ===", keywords.len()).bold()
                );
                for keyword in &keywords {
                    println!("  {keyword}");
                }
            }
        }
    }

    Ok(())
}

fn print_banner(config: &Config) {
    let local = format!("http://localhost:{}", config.port);

    println!("\n{}", "Easy Keywords backend".bold());
    println!("  Local:  {}", local.bright_green());
    println!("  Health: {local}/api/health");
    println!("\n  Endpoints:");
    for endpoint in easy_keywords::web::ENDPOINTS {
        println!("    {endpoint}");
    }
    println!("\n  {}", "Try it:".dimmed());
    println!(
        "{}",
        format!(
            "    curl -X POST {local}/api/keywords/generate \\\n      \
             -H \"Content-Type: application/json\" \\\n      \
             -d '{{\"title\":\"Digital art background\"}}'"
        )
        .dimmed()
    );
    println!();
}
