// src/db/models/ingredient.rs

//! Ingredient model - components used by a recipe

use crate::error::Result;
use rusqlite::{Connection, Row, params};

/// A component of a recipe, e.g. "2 cups flour"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: Option<i64>,
    pub recipe_id: Option<i64>,
    /// Amount as written ("2", "1/2", "a pinch")
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub item: String,
}

impl Ingredient {
    /// Create a new, unsaved Ingredient
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            id: None,
            recipe_id: None,
            quantity: None,
            unit: None,
            item: item.into(),
        }
    }

    /// Set the amount
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Set the unit of measure
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Insert this ingredient for the given recipe
    pub fn insert(&mut self, conn: &Connection, recipe_id: i64) -> Result<i64> {
        conn.execute(
            "INSERT INTO ingredients (recipe_id, quantity, unit, item) VALUES (?1, ?2, ?3, ?4)",
            params![recipe_id, &self.quantity, &self.unit, &self.item],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        self.recipe_id = Some(recipe_id);
        Ok(id)
    }

    /// Find all ingredients of a recipe in insertion order
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, recipe_id, quantity, unit, item FROM ingredients
             WHERE recipe_id = ?1 ORDER BY id",
        )?;

        let ingredients = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            recipe_id: Some(row.get(1)?),
            quantity: row.get(2)?,
            unit: row.get(3)?,
            item: row.get(4)?,
        })
    }
}
