// src/db/models/mod.rs

//! Data models for recipe catalog entities
//!
//! This module defines Rust structs that correspond to database tables
//! and provides methods for creating, reading and deleting records.

mod category;
mod direction;
mod ingredient;
mod recipe;

pub use category::Category;
pub use direction::Direction;
pub use ingredient::Ingredient;
pub use recipe::Recipe;
