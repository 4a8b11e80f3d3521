//! Receipt Processor Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects, entities, validation, points rules, repository traits
//! - `application/` - Use cases
//! - `infra/` - In-memory store and points cache
//! - `presentation/` - HTTP handlers
//!
//! ## Processing Model
//! - A receipt is validated in full before anything is stored; the first
//!   violated rule is reported and no partial receipt is ever kept
//! - Ids are random UUID v4 values generated by the server
//! - Points are computed lazily on first request and cached per id

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ReceiptConfig;
pub use domain::services::calculate_points;
pub use error::{ReceiptError, ReceiptResult};
pub use infra::memory::MemoryReceiptRepository;
pub use presentation::router::{receipt_router, receipt_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use kernel::id::ReceiptId;
