pub mod error;
pub mod limits;
pub mod registry;
pub mod schema;
pub mod serde;
pub mod types;
