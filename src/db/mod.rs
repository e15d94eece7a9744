pub mod connection;
pub mod lookup;

pub use connection::Database;
