mod path;
mod point;
mod route;

pub use path::*;
pub use point::*;
pub use route::*;
