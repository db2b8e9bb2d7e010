// src/cli.rs
//! CLI definitions for recipebox
//!
//! This module contains the command-line interface definitions using clap.

use clap::{Parser, Subcommand};
use recipebox::db::DEFAULT_DB_PATH;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipebox")]
#[command(version)]
#[command(about = "Recipe catalog with a browsing UI and a paginated JSON API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new recipe database
    Init {
        /// Path to the database file
        #[arg(short, long, default_value = DEFAULT_DB_PATH)]
        db_path: String,
    },

    /// Import recipes from a TOML file
    Import {
        /// TOML file with [[recipe]] entries
        file: PathBuf,

        /// Path to the database file
        #[arg(short, long, default_value = DEFAULT_DB_PATH)]
        db_path: String,
    },

    /// Print one recipe as JSON
    Show {
        /// Recipe ID
        id: i64,

        /// Path to the database file
        #[arg(short, long, default_value = DEFAULT_DB_PATH)]
        db_path: String,
    },

    /// Print a page of recipes as JSON
    List {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Recipes per page
        #[arg(long, default_value_t = recipebox::pagination::DEFAULT_PER_PAGE)]
        per_page: u32,

        /// Path to the database file
        #[arg(short, long, default_value = DEFAULT_DB_PATH)]
        db_path: String,
    },

    /// Run the HTTP server
    Serve {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to bind to (overrides the config file)
        #[arg(short, long)]
        bind: Option<String>,

        /// Path to the database file (overrides the config file)
        #[arg(short, long)]
        db_path: Option<PathBuf>,
    },
}
