// src/db/models/category.rs

//! Category model - shared tags linked to many recipes
//!
//! Categories are unique by title and outlive the recipes that use them.
//! Membership lives in the `recipe_categories` link table.

use crate::error::Result;
use rusqlite::{Connection, Row, params};

/// A shared label such as "dessert" or "vegetarian"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Option<i64>,
    pub title: String,
}

impl Category {
    /// Create a new, unsaved Category
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
        }
    }

    /// Return the stored category with this title, creating it if needed
    ///
    /// Updates `self.id` with the stored row id.
    pub fn find_or_create(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT OR IGNORE INTO categories (title) VALUES (?1)",
            [&self.title],
        )?;

        let id: i64 = conn.query_row(
            "SELECT id FROM categories WHERE title = ?1",
            [&self.title],
            |row| row.get(0),
        )?;

        self.id = Some(id);
        Ok(id)
    }

    /// Find the categories linked to a recipe, in the order they were attached
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT c.id, c.title FROM categories c
             JOIN recipe_categories rc ON rc.category_id = c.id
             WHERE rc.recipe_id = ?1
             ORDER BY rc.rowid",
        )?;

        let categories = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    /// Attach a category to a recipe; attaching twice is a no-op
    pub fn link(conn: &Connection, recipe_id: i64, category_id: i64) -> Result<()> {
        conn.execute(
            "INSERT OR IGNORE INTO recipe_categories (recipe_id, category_id) VALUES (?1, ?2)",
            params![recipe_id, category_id],
        )?;
        Ok(())
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            title: row.get(1)?,
        })
    }
}
