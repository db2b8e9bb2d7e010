// src/server/handlers/pages.rs
//! HTML handlers for the browsing UI

use super::{PageQuery, parse_recipe_id};
use crate::catalog;
use crate::server::ServerState;
use crate::server::error::PageResult;
use crate::server::views;
use axum::extract::{Path, Query, State};
use maud::Markup;
use std::sync::Arc;

/// GET /
pub async fn index(
    State(state): State<Arc<ServerState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> PageResult<Markup> {
    let request = PageQuery::from_pairs(pairs).to_request(&state.config.page_limits);

    let page = state
        .read(move |tx| catalog::recipe_listing(tx, request))
        .await?;
    Ok(views::index(&page))
}

/// GET /random
pub async fn random(State(state): State<Arc<ServerState>>) -> PageResult<Markup> {
    let recipe = state.read(|tx| catalog::random_recipe(tx)).await?;
    Ok(views::recipe(&recipe))
}

/// GET /:id
pub async fn recipe(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> PageResult<Markup> {
    let id = parse_recipe_id(&id)?;
    let recipe = state.read(move |tx| catalog::get_recipe(tx, id)).await?;
    Ok(views::recipe(&recipe))
}

/// GET /categories/:title
pub async fn category(
    State(state): State<Arc<ServerState>>,
    Path(title): Path<String>,
) -> PageResult<Markup> {
    let lookup = title.clone();
    let recipes = state
        .read(move |tx| catalog::recipes_in_category(tx, &lookup))
        .await?;
    Ok(views::category(&title, &recipes))
}
