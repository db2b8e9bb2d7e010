// src/import.rs

//! Bulk import of recipes from TOML files
//!
//! ```toml
//! [[recipe]]
//! title = "Pancakes"
//! quantity = 4
//! directions = ["Mix", "Fry"]
//! categories = ["breakfast"]
//!
//! [[recipe.ingredients]]
//! quantity = 2
//! unit = "cups"
//! item = "flour"
//! ```

use crate::db::{self, models::{Ingredient, Recipe}};
use crate::error::{Error, Result};
use rusqlite::Connection;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Parsed import file
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeFile {
    #[serde(default, rename = "recipe")]
    pub recipes: Vec<RecipeEntry>,
}

/// One recipe as written in an import file
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeEntry {
    pub title: String,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub directions: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// One ingredient as written in an import file
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientEntry {
    #[serde(default)]
    pub quantity: Option<Amount>,
    #[serde(default)]
    pub unit: Option<String>,
    pub item: String,
}

/// Ingredient amount, written either as a number or as text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Amount {
    fn into_text(self) -> String {
        match self {
            Amount::Integer(n) => n.to_string(),
            Amount::Float(n) => n.to_string(),
            Amount::Text(s) => s,
        }
    }
}

impl RecipeFile {
    /// Read and parse an import file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Parse import file contents
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ParseError(e.to_string()))
    }

    /// Check every entry before anything is written
    pub fn validate(&self) -> Result<()> {
        for (index, entry) in self.recipes.iter().enumerate() {
            if entry.title.trim().is_empty() {
                return Err(Error::ValidationError(format!(
                    "recipe #{} has an empty title",
                    index + 1
                )));
            }
            if entry.directions.iter().any(|step| step.trim().is_empty()) {
                return Err(Error::ValidationError(format!(
                    "recipe '{}' has an empty direction",
                    entry.title
                )));
            }
            if entry.ingredients.iter().any(|i| i.item.trim().is_empty()) {
                return Err(Error::ValidationError(format!(
                    "recipe '{}' has an ingredient without an item",
                    entry.title
                )));
            }
        }
        Ok(())
    }
}

impl From<RecipeEntry> for Recipe {
    fn from(entry: RecipeEntry) -> Self {
        let mut recipe = Recipe::new(entry.title);
        recipe.quantity = entry.quantity;

        for step in entry.directions {
            recipe = recipe.with_direction(step);
        }
        for ingredient in entry.ingredients {
            let mut model = Ingredient::new(ingredient.item);
            model.quantity = ingredient.quantity.map(Amount::into_text);
            model.unit = ingredient.unit;
            recipe = recipe.with_ingredient(model);
        }
        for category in entry.categories {
            recipe = recipe.with_category(category);
        }

        recipe
    }
}

/// Insert every recipe of `file` in one transaction, returning the new IDs
pub fn import(conn: &mut Connection, file: RecipeFile) -> Result<Vec<i64>> {
    file.validate()?;

    let ids = db::transaction(conn, |tx| {
        file.recipes
            .into_iter()
            .map(|entry| Recipe::from(entry).insert(tx))
            .collect::<Result<Vec<_>>>()
    })?;

    info!("Imported {} recipes", ids.len());
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[[recipe]]
title = "Pancakes"
quantity = 4
directions = ["Mix", "Rest", "Fry"]
categories = ["breakfast", "sweet"]

[[recipe.ingredients]]
quantity = 2
unit = "cups"
item = "flour"

[[recipe.ingredients]]
quantity = "a pinch"
item = "salt"

[[recipe]]
title = "Tea"
"#;

    fn create_test_db() -> (NamedTempFile, Connection) {
        let temp_file = NamedTempFile::new().unwrap();
        let conn = db::open(temp_file.path()).unwrap();
        schema::migrate(&conn).unwrap();
        (temp_file, conn)
    }

    #[test]
    fn test_parse_sample() {
        let file = RecipeFile::parse(SAMPLE).unwrap();
        assert_eq!(file.recipes.len(), 2);
        assert_eq!(file.recipes[0].quantity, Some(4));
        assert_eq!(file.recipes[0].ingredients[0].quantity, Some(Amount::Integer(2)));
        assert_eq!(
            file.recipes[0].ingredients[1].quantity,
            Some(Amount::Text("a pinch".to_string()))
        );
        assert!(file.recipes[1].directions.is_empty());
    }

    #[test]
    fn test_import_inserts_everything() {
        let (_temp, mut conn) = create_test_db();
        let file = RecipeFile::parse(SAMPLE).unwrap();

        let ids = import(&mut conn, file).unwrap();
        assert_eq!(ids.len(), 2);

        let pancakes = Recipe::find_by_id(&conn, ids[0]).unwrap().unwrap();
        assert_eq!(pancakes.directions.len(), 3);
        assert_eq!(pancakes.ingredients[0].quantity.as_deref(), Some("2"));
        assert_eq!(pancakes.ingredients[1].unit, None);
        assert_eq!(pancakes.categories.len(), 2);

        let tea = Recipe::find_by_id(&conn, ids[1]).unwrap().unwrap();
        assert_eq!(tea.quantity, None);
    }

    #[test]
    fn test_invalid_entry_aborts_import() {
        let (_temp, mut conn) = create_test_db();
        let file = RecipeFile::parse(
            r#"
[[recipe]]
title = "Fine"

[[recipe]]
title = "  "
"#,
        )
        .unwrap();

        let err = import(&mut conn, file).unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
        assert_eq!(Recipe::count(&conn).unwrap(), 0);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            RecipeFile::parse("[[recipe]]\nquantity = 1\n"),
            Err(Error::ParseError(_))
        ));
    }
}
