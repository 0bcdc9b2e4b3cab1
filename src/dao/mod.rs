/// Database model definitions.
pub mod models;
/// MongoDB connection management and document repositories.
pub mod mongodb;
