// src/server/views.rs
//! HTML templates for the browsing UI

use crate::db::models::Recipe;
use crate::pagination::Page;
use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

/// Link to a category page, percent-encoding the title as one path segment
pub fn category_href(title: &str) -> String {
    // form encoding turns spaces into '+' and escapes literal '+' as %2B
    let encoded: String = url::form_urlencoded::byte_serialize(title.as_bytes()).collect();
    format!("/categories/{}", encoded.replace('+', "%20"))
}

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " · Recipes" }
            }
            body {
                nav {
                    a href="/" { "All recipes" }
                    " | "
                    a href="/random" { "Random recipe" }
                }
                main { (content) }
            }
        }
    }
}

fn recipe_list(recipes: &[Recipe]) -> Markup {
    html! {
        ul class="recipes" {
            @for recipe in recipes {
                li {
                    @if let Some(id) = recipe.id {
                        a href={ "/" (id) } { (recipe.heading()) }
                    } @else {
                        (recipe.heading())
                    }
                }
            }
        }
    }
}

/// Front page listing
pub fn index(page: &Page<Recipe>) -> Markup {
    layout(
        "Recipes",
        html! {
            h1 { "Recipes" }
            @if page.items.is_empty() {
                p { "No entries." }
            } @else {
                (recipe_list(&page.items))
            }
            @if page.has_prev || page.has_next {
                p class="pager" {
                    @if let Some(prev) = page.prev_page() {
                        a href={ "/?page=" (prev) } { "Previous" }
                        " "
                    }
                    "Page " (page.page) " of " (page.pages)
                    @if let Some(next) = page.next_page() {
                        " "
                        a href={ "/?page=" (next) } { "Next" }
                    }
                }
            }
        },
    )
}

/// Single recipe page
pub fn recipe(recipe: &Recipe) -> Markup {
    layout(
        &recipe.title,
        html! {
            article {
                h1 { (recipe.heading()) }
                @if !recipe.categories.is_empty() {
                    p class="categories" {
                        @for (i, category) in recipe.categories.iter().enumerate() {
                            @if i > 0 { ", " }
                            a href=(category_href(&category.title)) { (category.title) }
                        }
                    }
                }
                @if !recipe.ingredients.is_empty() {
                    h2 { "Ingredients" }
                    ul class="ingredients" {
                        @for ingredient in &recipe.ingredients {
                            li {
                                @if let Some(quantity) = &ingredient.quantity { (quantity) " " }
                                @if let Some(unit) = &ingredient.unit { (unit) " " }
                                (ingredient.item)
                            }
                        }
                    }
                }
                @if !recipe.directions.is_empty() {
                    h2 { "Directions" }
                    ol class="directions" {
                        @for direction in &recipe.directions {
                            li { (direction.step) }
                        }
                    }
                }
            }
        },
    )
}

/// Recipes of one category
pub fn category(title: &str, recipes: &[Recipe]) -> Markup {
    layout(
        title,
        html! {
            h1 { (title) }
            (recipe_list(recipes))
        },
    )
}

/// Page shown for failed requests
pub fn error_page(status: StatusCode) -> Markup {
    let reason = status.canonical_reason().unwrap_or("Error");
    layout(
        reason,
        html! {
            h1 { (status.as_u16()) " " (reason) }
        },
    )
}
