// src/main.rs

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use recipebox::{PageRequest, catalog, db, import};
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { db_path } => {
            info!("Initializing recipe database at: {}", db_path);
            db::init(&db_path)?;
            println!("Database initialized successfully at: {}", db_path);
            Ok(())
        }
        Commands::Import { file, db_path } => {
            db::init(&db_path)?;
            let recipes = import::RecipeFile::load(&file)?;
            let mut conn = db::open(&db_path)?;
            let ids = import::import(&mut conn, recipes)
                .with_context(|| format!("Failed to import {}", file.display()))?;
            println!("Imported {} recipes", ids.len());
            Ok(())
        }
        Commands::Show { id, db_path } => {
            let mut conn = db::open(&db_path)?;
            let recipe = db::read_snapshot(&mut conn, |tx| catalog::recipe_json(tx, id))?;
            println!("{}", serde_json::to_string_pretty(&recipe)?);
            Ok(())
        }
        Commands::List {
            page,
            per_page,
            db_path,
        } => {
            let request = PageRequest::new(page, per_page);
            let mut conn = db::open(&db_path)?;
            let page = db::read_snapshot(&mut conn, |tx| catalog::recipe_page(tx, request))?;
            println!("{}", serde_json::to_string_pretty(&page)?);
            Ok(())
        }
        Commands::Serve {
            config,
            bind,
            db_path,
        } => serve(config, bind, db_path),
    }
}

fn serve(
    config_path: Option<std::path::PathBuf>,
    bind: Option<String>,
    db_path: Option<std::path::PathBuf>,
) -> Result<()> {
    use recipebox::server::{RecipeBoxConfig, run_server};

    let file_config = match &config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            RecipeBoxConfig::load(path)?
        }
        None => RecipeBoxConfig::default(),
    };

    let mut config = file_config.to_server_config()?;
    if let Some(bind) = bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;
    }
    if let Some(db_path) = db_path {
        config.db_path = db_path;
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(run_server(config))
}
