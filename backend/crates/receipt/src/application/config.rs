//! Application Configuration
//!
//! Configuration for the receipt application layer.

/// Default request body limit (64 KiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Receipt application configuration
#[derive(Debug, Clone)]
pub struct ReceiptConfig {
    /// Largest accepted request body, in bytes
    pub max_body_bytes: usize,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ReceiptConfig {
    pub fn with_max_body_bytes(max_body_bytes: usize) -> Self {
        Self { max_body_bytes }
    }
}
