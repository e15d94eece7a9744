pub mod tables;
pub mod types;
pub mod verify;

pub use tables::*;
pub use types::*;
pub use verify::*;
