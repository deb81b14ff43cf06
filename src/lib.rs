pub mod cli;
pub mod core;
pub mod error;
pub mod setup;
pub mod types;
pub mod utils;


// Re-export commonly used items
pub use error::{SetupError, SetupResult};
