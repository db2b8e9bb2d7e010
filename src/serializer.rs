// src/serializer.rs

//! Allowlist-driven JSON serialization of catalog entities
//!
//! Every entity type declares the exact, ordered list of fields that may
//! appear in its JSON form. [`dump`] walks that list and asks the entity
//! for each value; nothing outside the list is ever emitted, so a new
//! struct field stays private until it is added to `FIELDS`.
//!
//! Nested entities never expose their own ids, foreign keys or positions.

use crate::db::models::{Category, Direction, Ingredient, Recipe};
use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Declarative field allowlist for one entity type
pub trait Schema {
    /// Entity name used in error messages
    const ENTITY: &'static str;

    /// Fields emitted by [`dump`], in output order
    const FIELDS: &'static [&'static str];

    /// Value of one allowlisted field
    ///
    /// Returns `Ok(None)` for names the entity does not know, which
    /// [`dump`] reports as a data-integrity error.
    fn field(&self, name: &str) -> Result<Option<Value>>;
}

/// Serialize an entity to a JSON object holding exactly its allowlisted fields
pub fn dump<T: Schema>(entity: &T) -> Result<Map<String, Value>> {
    let mut object = Map::with_capacity(T::FIELDS.len());

    for &name in T::FIELDS {
        let value = entity.field(name)?.ok_or_else(|| {
            Error::DataIntegrity(format!("{} has no accessor for field '{}'", T::ENTITY, name))
        })?;
        object.insert(name.to_string(), value);
    }

    Ok(object)
}

/// Serialize a sequence of entities to a JSON array, preserving order
pub fn dump_many<T: Schema>(entities: &[T]) -> Result<Value> {
    entities
        .iter()
        .map(|entity| dump(entity).map(Value::Object))
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

fn optional_text(value: &Option<String>) -> Value {
    value.clone().map(Value::String).unwrap_or(Value::Null)
}

fn missing(entity: &str, field: &str) -> Error {
    Error::DataIntegrity(format!("{entity} is missing required field '{field}'"))
}

impl Schema for Recipe {
    const ENTITY: &'static str = "recipe";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "quantity",
        "created_at",
        "directions",
        "ingredients",
        "categories",
    ];

    fn field(&self, name: &str) -> Result<Option<Value>> {
        let value = match name {
            "id" => Value::from(self.id.ok_or_else(|| missing(Self::ENTITY, "id"))?),
            "title" => Value::String(self.title.clone()),
            "quantity" => self.quantity.map(Value::from).unwrap_or(Value::Null),
            "created_at" => Value::String(
                self.created_at
                    .clone()
                    .ok_or_else(|| missing(Self::ENTITY, "created_at"))?,
            ),
            "directions" => dump_many(&self.directions)?,
            "ingredients" => dump_many(&self.ingredients)?,
            "categories" => dump_many(&self.categories)?,
            _ => return Ok(None),
        };
        Ok(Some(value))
    }
}

impl Schema for Direction {
    const ENTITY: &'static str = "direction";
    const FIELDS: &'static [&'static str] = &["step"];

    fn field(&self, name: &str) -> Result<Option<Value>> {
        Ok(match name {
            "step" => Some(Value::String(self.step.clone())),
            _ => None,
        })
    }
}

impl Schema for Ingredient {
    const ENTITY: &'static str = "ingredient";
    const FIELDS: &'static [&'static str] = &["quantity", "unit", "item"];

    fn field(&self, name: &str) -> Result<Option<Value>> {
        Ok(match name {
            "quantity" => Some(optional_text(&self.quantity)),
            "unit" => Some(optional_text(&self.unit)),
            "item" => Some(Value::String(self.item.clone())),
            _ => None,
        })
    }
}

impl Schema for Category {
    const ENTITY: &'static str = "category";
    const FIELDS: &'static [&'static str] = &["title"];

    fn field(&self, name: &str) -> Result<Option<Value>> {
        Ok(match name {
            "title" => Some(Value::String(self.title.clone())),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored(recipe: Recipe) -> Recipe {
        let mut recipe = recipe;
        recipe.id = Some(7);
        recipe.created_at = Some("2024-03-01T12:00:00Z".to_string());
        recipe
    }

    fn keys(object: &Map<String, Value>) -> Vec<&str> {
        object.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_recipe_keys_follow_allowlist() {
        let recipe = stored(Recipe::new("Soup"));
        let object = dump(&recipe).unwrap();
        assert_eq!(keys(&object), Recipe::FIELDS.to_vec());
    }

    #[test]
    fn test_null_quantity_is_present() {
        let recipe = stored(Recipe::new("Soup"));
        let object = dump(&recipe).unwrap();
        assert_eq!(object.get("quantity"), Some(&Value::Null));
    }

    #[test]
    fn test_full_recipe_shape() {
        let mut recipe = stored(
            Recipe::new("Pancakes")
                .with_quantity(4)
                .with_direction("Whisk")
                .with_direction("Fry")
                .with_ingredient(Ingredient::new("flour").with_quantity("2").with_unit("cups"))
                .with_ingredient(Ingredient::new("salt"))
                .with_category("breakfast"),
        );
        // Stored ids on children must not leak
        recipe.directions[0].id = Some(99);
        recipe.directions[0].recipe_id = Some(7);
        recipe.categories[0].id = Some(3);

        let object = dump(&recipe).unwrap();
        assert_eq!(
            Value::Object(object),
            json!({
                "id": 7,
                "title": "Pancakes",
                "quantity": 4,
                "created_at": "2024-03-01T12:00:00Z",
                "directions": [{"step": "Whisk"}, {"step": "Fry"}],
                "ingredients": [
                    {"quantity": "2", "unit": "cups", "item": "flour"},
                    {"quantity": null, "unit": null, "item": "salt"}
                ],
                "categories": [{"title": "breakfast"}]
            })
        );
    }

    #[test]
    fn test_directions_preserve_order() {
        let steps = ["c", "a", "b", "d"];
        let recipe = steps
            .iter()
            .fold(stored(Recipe::new("Ordered")), |r, s| r.with_direction(*s));

        let object = dump(&recipe).unwrap();
        let dumped: Vec<&str> = object["directions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["step"].as_str().unwrap())
            .collect();
        assert_eq!(dumped, steps);
    }

    #[test]
    fn test_missing_required_fields() {
        let mut no_id = stored(Recipe::new("Soup"));
        no_id.id = None;
        assert!(matches!(dump(&no_id), Err(Error::DataIntegrity(_))));

        let mut no_created_at = stored(Recipe::new("Soup"));
        no_created_at.created_at = None;
        assert!(matches!(dump(&no_created_at), Err(Error::DataIntegrity(_))));
    }

    #[test]
    fn test_empty_title_is_a_value() {
        let object = dump(&stored(Recipe::new(""))).unwrap();
        assert_eq!(object["title"], "");
    }

    struct Leaky;

    impl Schema for Leaky {
        const ENTITY: &'static str = "leaky";
        const FIELDS: &'static [&'static str] = &["declared", "forgotten"];

        fn field(&self, name: &str) -> Result<Option<Value>> {
            Ok(match name {
                "declared" => Some(Value::Bool(true)),
                _ => None,
            })
        }
    }

    #[test]
    fn test_allowlisted_field_without_accessor_fails() {
        let err = dump(&Leaky).unwrap_err();
        assert!(err.to_string().contains("forgotten"));
    }

    #[test]
    fn test_dump_many_empty() {
        let categories: Vec<Category> = Vec::new();
        assert_eq!(dump_many(&categories).unwrap(), json!([]));
    }
}
