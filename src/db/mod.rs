// src/db/mod.rs

//! SQLite entity store for recipes
//!
//! All state lives in a single SQLite database. Connections are cheap and
//! opened per unit of work; the server opens one per request.

pub mod models;
pub mod schema;

use crate::error::{Error, Result};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::path::Path;
use tracing::{debug, info};

/// Default database location used by the CLI
pub const DEFAULT_DB_PATH: &str = "/var/lib/recipebox/recipebox.db";

/// Create the database file (and its parent directory) and apply the schema
pub fn init(db_path: &str) -> Result<()> {
    let path = Path::new(db_path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::InitError(format!(
                "Failed to create database directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let conn = open(path)?;
    schema::migrate(&conn)?;

    info!("Database ready at {}", db_path);
    Ok(())
}

/// Open a connection with foreign key enforcement enabled
pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Connection> {
    let path = db_path.as_ref();
    debug!("Opening database {}", path.display());

    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(conn)
}

/// Run `f` inside a write transaction, committing only if it succeeds
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}

/// Run `f` against a consistent read snapshot
///
/// Every query issued by `f` observes the same database state.
pub fn read_snapshot<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction_with_behavior(TransactionBehavior::Deferred)?;
    let value = f(&tx)?;
    tx.finish()?;
    Ok(value)
}
