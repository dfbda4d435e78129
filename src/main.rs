use rescort::api;
use rescort::commands::{CommandHandler, Flow};
use rescort::config::ProviderConfig;
use rescort::error::AppError;
use rescort::food::SearchOrchestrator;
use rescort::i18n::Language;
use rescort::preferences::{PreferenceStore, Preferences, Theme};
use rescort::providers::GeminiProvider;
use std::net::SocketAddr;
use std::sync::Arc;
use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Look up any dish: description, ingredients, recipe and photos", long_about = None)]
struct Args {
    #[arg(short, long)]
    api_key: Option<String>,

    /// Serve the JSON API instead of the interactive prompt
    #[arg(long)]
    api: bool,

    #[arg(long, default_value = "3000")]
    port: u16,

    /// Language for this session (en, hi, ur); not saved
    #[arg(long)]
    lang: Option<Language>,

    /// Theme for this session (light, dark); not saved
    #[arg(long)]
    theme: Option<Theme>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let orchestrator = Arc::new(build_orchestrator(&args)?);

    if args.api {
        run_api_server(orchestrator, args.port).await?;
    } else {
        run_cli_mode(orchestrator).await?;
    }
    Ok(())
}

fn build_orchestrator(args: &Args) -> Result<SearchOrchestrator, AppError> {
    let config = ProviderConfig::from_env(args.api_key.clone())?;
    let provider = GeminiProvider::new(config)?;

    let store = match PreferenceStore::from_env() {
        Ok(store) => {
            info!("Preferences stored at {}", store.path().display());
            Some(store)
        }
        Err(e) => {
            warn!("Preferences will not be saved: {}", e);
            None
        }
    };

    let mut preferences = match &store {
        Some(store) => store.load(),
        None => Preferences {
            theme: Theme::from_system(),
            ..Preferences::default()
        },
    };
    if let Some(language) = args.lang {
        preferences.language = language;
    }
    if let Some(theme) = args.theme {
        preferences.theme = theme;
    }
    info!("Starting with language {} and {} theme", preferences.language, preferences.theme);

    let orchestrator = SearchOrchestrator::new(Arc::new(provider), preferences);
    Ok(match store {
        Some(store) => orchestrator.with_store(store),
        None => orchestrator,
    })
}

async fn run_cli_mode(orchestrator: Arc<SearchOrchestrator>) -> anyhow::Result<()> {
    let mut command_handler = CommandHandler::new(orchestrator);
    command_handler.print_banner();

    let mut rl = Editor::<(), DefaultHistory>::new()?;

    loop {
        match rl.readline("🍽️  ") {
            Ok(line) => {
                let input = line.trim();
                if !input.is_empty() {
                    let _ = rl.add_history_entry(input);
                }

                match command_handler.handle_command(input).await {
                    Ok(Flow::Exit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) => println!("{}", e.red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

async fn run_api_server(orchestrator: Arc<SearchOrchestrator>, port: u16) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = api::create_api(orchestrator);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("API server listening on {}", addr);
    println!("Server successfully bound to {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}
