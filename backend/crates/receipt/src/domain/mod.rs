//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Value objects (Money, PurchaseDate, PurchaseTime)
//! - Entities (Receipt, ReceiptItem) built by parse-and-validate factories
//! - Validation errors
//! - Domain services (points calculation)
//! - Repository traits (store and points cache interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod validation;
pub mod value_objects;
