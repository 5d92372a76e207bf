use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use showpage_core::url::API_BASE_URL;
use showpage_core::{ClientConfig, Notice, ResultsView, ShowPageService, ShowpageError, TemplateSelection};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "showpage")]
#[command(about = "Search TMDB and generate embeddable show pages", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, env = "TMDB_API_KEY", hide_env_values = true, help = "TMDB v3 API key")]
    api_key: Option<String>,

    #[arg(long, global = true, env = "TMDB_LANGUAGE", default_value = "es-ES", help = "Response language")]
    language: String,

    #[arg(long, global = true, env = "TMDB_BASE_URL", default_value = API_BASE_URL, help = "API root URL")]
    base_url: String,

    #[arg(long, global = true, env = "TMDB_TIMEOUT_SECS", default_value_t = 30, help = "Request timeout in seconds")]
    timeout: u64,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Search TV shows and movies, most popular first")]
    Search {
        #[arg(help = "Free-text query")]
        query: String,
    },

    #[command(about = "Generate the HTML page for a show")]
    Generate {
        #[arg(help = "TMDB show id, as listed by `search`")]
        show_id: u64,

        #[arg(short, long, default_value = "basic", help = "Template: basic or cinemax")]
        template: String,

        #[arg(short, long, default_value = "", help = "Single season for cinemax (2 and up)")]
        season: String,

        #[arg(short, long, help = "Write the page here instead of stdout")]
        output: Option<PathBuf>,
    },

    #[command(about = "Load and count the TV genre list")]
    Genres,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig {
        api_key: cli.api_key.unwrap_or_default(),
        language: cli.language,
        base_url: cli.base_url,
        timeout_secs: cli.timeout,
    };
    let service = ShowPageService::new(config).map_err(localized)?;

    match cli.command {
        Commands::Search { query } => {
            eprintln!("{}", Notice::searching().text);
            let view = service.search_results(&query).await.map_err(localized)?;
            print_results(&view);
        }
        Commands::Generate {
            show_id,
            template,
            season,
            output,
        } => {
            let selection = TemplateSelection::parse(&template, &season).map_err(localized)?;
            eprintln!("{}", Notice::loading(&selection).text);

            // Genres only improve the genre line; a failure is already logged
            let _ = service.load_genres().await;

            let page = service.generate(show_id, &selection).await.map_err(localized)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &page.html)?;
                    eprintln!("{}", page.summary());
                    tracing::info!(path = %path.display(), "Page written");
                }
                None => println!("{}", page.html),
            }
        }
        Commands::Genres => {
            let count = service.load_genres().await.map_err(localized)?;
            println!("{} genres loaded", count);
        }
    }

    Ok(())
}

fn print_results(view: &ResultsView) {
    match view {
        ResultsView::Empty { notice } => println!("{}", notice),
        ResultsView::Cards { cards } => {
            for card in cards {
                println!("{:>8}  {} ({})", card.show_id, card.title, card.year);
                println!("          {}", card.overview);
            }
        }
    }
}

/// Keeps the operator-facing message and logs the detailed one
fn localized(err: ShowpageError) -> Box<dyn std::error::Error> {
    tracing::debug!(error = %err, "Operation failed");
    err.user_message().into()
}
