pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod normalize;
pub mod reports;
pub mod schema;

pub use cli::{Cli, Commands, ReportCommand};
pub use config::Config;
pub use db::Database;
pub use error::ReportError;
