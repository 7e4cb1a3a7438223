pub mod config;
pub mod errors;
pub mod handler;
pub mod logger;
pub mod models;
pub mod shutdown;

pub use config::Config;
pub use handler::{router, HeaderMode};
