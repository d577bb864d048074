mod component;
mod state;

pub use component::*;
pub use state::*;
