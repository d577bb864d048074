pub mod components;
pub mod error;
pub mod utils;

pub use error::*;
