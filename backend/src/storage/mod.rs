//! Storage layer: abstraction traits plus the JSON file-backed backend.

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::{KeyValueStore, ReceiptStorage, SessionStorage};
