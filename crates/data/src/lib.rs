//! Catalog loading and validation, config files and the player save store.

pub mod load;
pub mod schema;
pub mod store;

pub use load::*;
pub use schema::*;
pub use store::*;
