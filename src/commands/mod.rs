//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and executes the operation against the database.

pub mod browse;
pub mod config;
pub mod ident;
pub mod import;
pub mod info;
pub mod player;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use config::execute as config;
pub use ident::execute as ident;
pub use import::execute as import;
pub use info::execute as info;
pub use player::execute as player;
