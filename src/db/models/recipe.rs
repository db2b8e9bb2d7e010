// src/db/models/recipe.rs

//! Recipe model - the top-level catalog entry
//!
//! A recipe owns its directions and ingredients and links to shared
//! categories. Lookups return recipes with all three collections loaded.

use super::{Category, Direction, Ingredient};
use crate::error::Result;
use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// A dish in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: Option<i64>,
    pub title: String,
    /// Number of servings, if known
    pub quantity: Option<i64>,
    /// RFC 3339 UTC timestamp, assigned on insert
    pub created_at: Option<String>,
    pub directions: Vec<Direction>,
    pub ingredients: Vec<Ingredient>,
    pub categories: Vec<Category>,
}

impl Recipe {
    /// Create a new, unsaved Recipe
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            quantity: None,
            created_at: None,
            directions: Vec::new(),
            ingredients: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Set the number of servings
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Append a preparation step
    pub fn with_direction(mut self, step: impl Into<String>) -> Self {
        self.directions.push(Direction::new(step));
        self
    }

    /// Add an ingredient
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Tag with a category
    pub fn with_category(mut self, title: impl Into<String>) -> Self {
        self.categories.push(Category::new(title));
        self
    }

    /// Heading shown on the recipe page: "title (quantity)" or just "title"
    pub fn heading(&self) -> String {
        match self.quantity {
            Some(quantity) => format!("{} ({})", self.title, quantity),
            None => self.title.clone(),
        }
    }

    /// Insert this recipe together with its directions, ingredients and
    /// category links
    ///
    /// `created_at` is stamped here unless the caller already set it.
    /// Run inside [`crate::db::transaction`] so a failure leaves no partial
    /// recipe behind.
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        let created_at = self
            .created_at
            .get_or_insert_with(|| Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true))
            .clone();

        conn.execute(
            "INSERT INTO recipes (title, quantity, created_at) VALUES (?1, ?2, ?3)",
            params![&self.title, &self.quantity, &created_at],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);

        for (position, direction) in self.directions.iter_mut().enumerate() {
            direction.insert(conn, id, position as i64)?;
        }

        for ingredient in &mut self.ingredients {
            ingredient.insert(conn, id)?;
        }

        for category in &mut self.categories {
            let category_id = category.find_or_create(conn)?;
            Category::link(conn, id, category_id)?;
        }

        Ok(id)
    }

    /// Find a recipe by ID, with its collections loaded
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, title, quantity, created_at FROM recipes WHERE id = ?1",
        )?;

        let recipe = stmt.query_row([id], Self::from_row).optional()?;

        match recipe {
            Some(mut recipe) => {
                recipe.load_relations(conn)?;
                Ok(Some(recipe))
            }
            None => Ok(None),
        }
    }

    /// Count all recipes
    pub fn count(conn: &Connection) -> Result<u64> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    /// List a window of recipes ordered by ID, with collections loaded
    pub fn list_page(conn: &Connection, limit: u32, offset: u64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, title, quantity, created_at FROM recipes
             ORDER BY id LIMIT ?1 OFFSET ?2",
        )?;

        let offset = i64::try_from(offset).unwrap_or(i64::MAX);
        let recipes = stmt
            .query_map(params![limit, offset], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Self::with_relations(conn, recipes)
    }

    /// Find the recipe at `offset` in ID order
    pub fn find_nth(conn: &Connection, offset: u64) -> Result<Option<Self>> {
        let mut recipes = Self::list_page(conn, 1, offset)?;
        Ok(recipes.pop())
    }

    /// Find recipes tagged with the category of exactly this title
    pub fn find_by_category(conn: &Connection, title: &str) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT r.id, r.title, r.quantity, r.created_at FROM recipes r
             JOIN recipe_categories rc ON rc.recipe_id = r.id
             JOIN categories c ON c.id = rc.category_id
             WHERE c.title = ?1
             ORDER BY r.id",
        )?;

        let recipes = stmt
            .query_map([title], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Self::with_relations(conn, recipes)
    }

    /// Delete a recipe; its directions, ingredients and category links go
    /// with it, the categories themselves remain
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(())
    }

    /// Load directions, ingredients and categories from the store
    pub fn load_relations(&mut self, conn: &Connection) -> Result<()> {
        let Some(id) = self.id else {
            return Err(crate::error::Error::DataIntegrity(
                "Cannot load relations of a recipe without ID".to_string(),
            ));
        };

        self.directions = Direction::find_by_recipe(conn, id)?;
        self.ingredients = Ingredient::find_by_recipe(conn, id)?;
        self.categories = Category::find_by_recipe(conn, id)?;
        Ok(())
    }

    fn with_relations(conn: &Connection, mut recipes: Vec<Self>) -> Result<Vec<Self>> {
        for recipe in &mut recipes {
            recipe.load_relations(conn)?;
        }
        Ok(recipes)
    }

    /// Convert a database row to a Recipe without its collections
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            title: row.get(1)?,
            quantity: row.get(2)?,
            created_at: row.get(3)?,
            directions: Vec::new(),
            ingredients: Vec::new(),
            categories: Vec::new(),
        })
    }
}
