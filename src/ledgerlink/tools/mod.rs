pub mod client;
pub mod config;
pub mod error;
pub mod flatten;
pub mod io;
pub mod model;
pub mod paginate;

pub use error::{Result, ToolError};
