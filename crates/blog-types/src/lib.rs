//! Blog Types - Pure type definitions shared by the storage and HTTP layers
//!
//! This crate contains only plain data types and their validation rules, with
//! no async runtime or database dependencies.

pub mod api;
pub mod error;
pub mod post;

pub use api::*;
pub use error::*;
pub use post::*;
