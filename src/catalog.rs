// src/catalog.rs

//! Read operations behind the UI and JSON API
//!
//! Each operation works against one connection (normally a read snapshot)
//! and reports absent data as [`Error::NotFound`].

use crate::db::models::Recipe;
use crate::error::{Error, Result};
use crate::pagination::{Page, PageRequest};
use crate::serializer;
use rand::Rng;
use rusqlite::Connection;
use serde_json::{Map, Value};
use tracing::debug;

/// Serialized recipe object
pub type RecipeJson = Map<String, Value>;

/// Look up one recipe
pub fn get_recipe(conn: &Connection, id: i64) -> Result<Recipe> {
    Recipe::find_by_id(conn, id)?.ok_or_else(|| Error::NotFound(format!("Recipe {}", id)))
}

/// Look up one recipe and serialize it
pub fn recipe_json(conn: &Connection, id: i64) -> Result<RecipeJson> {
    let recipe = get_recipe(conn, id)?;
    serializer::dump(&recipe)
}

/// One page of recipes ordered by ID
pub fn recipe_listing(conn: &Connection, request: PageRequest) -> Result<Page<Recipe>> {
    let total = Recipe::count(conn)?;
    request.paginate(total, |limit, offset| Recipe::list_page(conn, limit, offset))
}

/// One page of recipes ordered by ID, serialized
pub fn recipe_page(conn: &Connection, request: PageRequest) -> Result<Page<RecipeJson>> {
    recipe_listing(conn, request)?.try_map(|recipe| serializer::dump(&recipe))
}

/// Pick a recipe uniformly at random
pub fn random_recipe(conn: &Connection) -> Result<Recipe> {
    let total = Recipe::count(conn)?;
    if total == 0 {
        return Err(Error::NotFound("Recipe".to_string()));
    }

    let offset = rand::thread_rng().gen_range(0..total);
    debug!("Picked random recipe offset {} of {}", offset, total);

    Recipe::find_nth(conn, offset)?.ok_or_else(|| Error::NotFound("Recipe".to_string()))
}

/// Recipes tagged with the category of exactly this title
pub fn recipes_in_category(conn: &Connection, title: &str) -> Result<Vec<Recipe>> {
    let recipes = Recipe::find_by_category(conn, title)?;
    if recipes.is_empty() {
        return Err(Error::NotFound(format!("Category '{}'", title)));
    }
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{self, models::Ingredient, schema};
    use tempfile::NamedTempFile;

    fn create_test_db() -> (NamedTempFile, Connection) {
        let temp_file = NamedTempFile::new().unwrap();
        let conn = db::open(temp_file.path()).unwrap();
        schema::migrate(&conn).unwrap();
        (temp_file, conn)
    }

    fn insert(conn: &Connection, recipe: Recipe) -> i64 {
        let mut recipe = recipe;
        recipe.insert(conn).unwrap()
    }

    #[test]
    fn test_get_missing_recipe() {
        let (_temp, conn) = create_test_db();
        let err = recipe_json(&conn, 42).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_recipe_json() {
        let (_temp, conn) = create_test_db();
        let id = insert(
            &conn,
            Recipe::new("json")
                .with_direction("boil")
                .with_ingredient(Ingredient::new("water").with_unit("l").with_quantity("1")),
        );

        let object = recipe_json(&conn, id).unwrap();
        assert_eq!(object["id"], Value::from(id));
        assert_eq!(object["title"], "json");
        assert_eq!(object["quantity"], Value::Null);
        assert_eq!(object["directions"][0]["step"], "boil");
        assert_eq!(object["ingredients"][0]["unit"], "l");
    }

    #[test]
    fn test_recipe_page_empty() {
        let (_temp, conn) = create_test_db();
        let page = recipe_page(&conn, PageRequest::default()).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.pages, 1);
    }

    #[test]
    fn test_recipe_page_orders_by_id() {
        let (_temp, conn) = create_test_db();
        let ids: Vec<i64> = (0..25)
            .map(|n| insert(&conn, Recipe::new(format!("recipe {n}"))))
            .collect();

        let last = recipe_page(&conn, PageRequest::new(3, 10)).unwrap();
        assert_eq!(last.items.len(), 5);
        let page_ids: Vec<i64> = last.items.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(page_ids, ids[20..].to_vec());

        let again = recipe_page(&conn, PageRequest::new(3, 10)).unwrap();
        assert_eq!(last, again);
    }

    #[test]
    fn test_random_recipe() {
        let (_temp, conn) = create_test_db();
        assert!(random_recipe(&conn).unwrap_err().is_not_found());

        insert(&conn, Recipe::new("only one"));
        assert_eq!(random_recipe(&conn).unwrap().title, "only one");
    }

    #[test]
    fn test_recipes_in_category() {
        let (_temp, conn) = create_test_db();
        assert!(recipes_in_category(&conn, "None").unwrap_err().is_not_found());

        insert(&conn, Recipe::new("title").with_quantity(10).with_category("category"));
        let recipes = recipes_in_category(&conn, "category").unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "title");
    }
}
