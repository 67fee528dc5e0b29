//! Core types for the Sakura Keramika storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod rating;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::{Currency, Price};
pub use rating::{Rating, RatingError};
