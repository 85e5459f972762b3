mod routing;
mod types;

pub use routing::*;
pub use types::*;
