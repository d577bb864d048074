mod component;
mod variants;

pub use component::*;
pub use variants::*;
