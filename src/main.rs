use clap::Parser;
use receipt_chef::{
    api::{handlers::AppState, routes},
    cli::{commands, Cli, Commands},
    config::{catalog::CatalogFile, Settings},
    extract::NaiveExtractor,
    gemini::{GeminiClient, GeminiConfig},
    recommend::{Catalog, Recommender},
    Error, Result,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,receipt_chef=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    settings.validate()?;

    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, port, host).await?;
        }
        Commands::Recommend { input, json } => {
            let recommender = build_recommender(&settings)?;
            commands::recommend(&recommender, &input, json).await?;
        }
        Commands::Ingredients { input } => {
            let recommender = build_recommender(&settings)?;
            commands::ingredients(&recommender, &input).await?;
        }
        Commands::Recipes => {
            let recommender = build_recommender(&settings)?;
            commands::list_recipes(recommender.catalog());
        }
        Commands::CheckCatalog { path } => {
            commands::check_catalog(&path)?;
        }
    }

    Ok(())
}

/// Assemble the pipeline from settings: catalog, vocabulary, weights and the
/// optional Gemini extractor
fn build_recommender(settings: &Settings) -> Result<Recommender> {
    let mut recommender = match &settings.catalog.path {
        Some(path) => {
            let file = CatalogFile::from_file(path)?;
            info!(
                "Loaded recipe catalog from {}: {} recipes",
                path.display(),
                file.recipes.len()
            );
            let recommender = Recommender::new(file.catalog());
            match file.vocabulary() {
                Some(vocabulary) => {
                    info!("Using {} custom vocabulary groups", vocabulary.len());
                    recommender.with_naive_extractor(NaiveExtractor::new(vocabulary))
                }
                None => recommender,
            }
        }
        None => Recommender::new(Catalog::builtin()),
    }
    .with_weights(settings.ranking);

    let gemini_config = GeminiConfig::from_env();
    if gemini_config.is_enabled() {
        match GeminiClient::new(gemini_config) {
            Ok(client) => {
                info!("Gemini ingredient extraction enabled");
                recommender = recommender.with_extractor(Arc::new(client));
            }
            Err(e) => {
                warn!("Failed to initialize Gemini client: {}", e.log_safe());
            }
        }
    } else {
        info!("GEMINI_API_KEY not set, using keyword extraction only");
    }

    Ok(recommender)
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }

    info!("Starting Receipt Chef server");
    info!("Server: {}:{}", settings.server.host, settings.server.port);

    let recommender = build_recommender(&settings)?;
    info!(
        "Recipe catalog ready: {} recipes",
        recommender.catalog().len()
    );
    let ai_enabled = recommender.has_extractor();

    let state = AppState {
        recommender: Arc::new(recommender),
    };

    let app = routes::create_router(state, &settings);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Receipt Chef Server");
    println!("========================================");
    println!("Address: http://{addr}");
    println!(
        "AI extraction: {}",
        if ai_enabled { "Gemini" } else { "disabled (keyword scan)" }
    );
    println!("\nAPI Endpoints:");
    println!("  POST /api/recommend");
    println!("  POST /api/ingredients");
    println!("  GET  /api/recipes");
    println!("  GET  /health");
    println!("  GET  /ready");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}
