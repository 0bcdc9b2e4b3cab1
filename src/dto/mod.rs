//! Request and response shapes exposed over HTTP.

pub mod assets;
pub mod common;
pub mod health;
pub mod scores;
