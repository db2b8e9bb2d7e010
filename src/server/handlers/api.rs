// src/server/handlers/api.rs
//! JSON API handlers
//!
//! - `GET /api/v1/:id` returns one serialized recipe
//! - `GET /api/v1/recipes?page=&per_page=` returns a page envelope

use super::{PageQuery, parse_recipe_id};
use crate::catalog::{self, RecipeJson};
use crate::pagination::Page;
use crate::server::ServerState;
use crate::server::error::ApiResult;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

/// GET /api/v1/:id
pub async fn get_recipe(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<RecipeJson>> {
    let id = parse_recipe_id(&id)?;
    let recipe = state.read(move |tx| catalog::recipe_json(tx, id)).await?;
    Ok(Json(recipe))
}

/// GET /api/v1/recipes
pub async fn list_recipes(
    State(state): State<Arc<ServerState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Page<RecipeJson>>> {
    let request = PageQuery::from_pairs(pairs).to_request(&state.config.page_limits);

    let page = state.read(move |tx| catalog::recipe_page(tx, request)).await?;
    Ok(Json(page))
}
