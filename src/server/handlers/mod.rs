// src/server/handlers/mod.rs
//! HTTP request handlers for the recipe server

pub mod api;
pub mod pages;

use crate::pagination::{PageLimits, PageRequest};

/// Raw pagination query parameters
///
/// Built from the decoded key/value pairs rather than a typed struct so
/// malformed or repeated values are clamped instead of rejected. The first
/// occurrence of a key wins.
#[derive(Debug, Default, PartialEq)]
pub struct PageQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl PageQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "per_page" => &mut query.per_page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn to_request(&self, limits: &PageLimits) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.per_page.as_deref(), limits)
    }
}

/// Parse a path segment as a recipe ID; anything else cannot name a recipe
fn parse_recipe_id(raw: &str) -> crate::Result<i64> {
    raw.parse()
        .map_err(|_| crate::Error::NotFound(format!("Recipe '{}'", raw)))
}
