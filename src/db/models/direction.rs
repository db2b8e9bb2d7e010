// src/db/models/direction.rs

//! Direction model - ordered preparation steps of a recipe

use crate::error::Result;
use rusqlite::{Connection, Row, params};

/// A single step in a recipe's preparation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Direction {
    pub id: Option<i64>,
    pub recipe_id: Option<i64>,
    /// Zero-based position among the recipe's directions
    pub position: i64,
    pub step: String,
}

impl Direction {
    /// Create a new, unsaved Direction
    pub fn new(step: impl Into<String>) -> Self {
        Self {
            id: None,
            recipe_id: None,
            position: 0,
            step: step.into(),
        }
    }

    /// Insert this direction at `position` for the given recipe
    pub fn insert(&mut self, conn: &Connection, recipe_id: i64, position: i64) -> Result<i64> {
        conn.execute(
            "INSERT INTO directions (recipe_id, position, step) VALUES (?1, ?2, ?3)",
            params![recipe_id, position, &self.step],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        self.recipe_id = Some(recipe_id);
        self.position = position;
        Ok(id)
    }

    /// Find all directions of a recipe in step order
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, recipe_id, position, step FROM directions
             WHERE recipe_id = ?1 ORDER BY position, id",
        )?;

        let directions = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(directions)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            recipe_id: Some(row.get(1)?),
            position: row.get(2)?,
            step: row.get(3)?,
        })
    }
}
