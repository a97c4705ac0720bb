pub mod hello_world;
pub mod movies;
pub mod status;

pub use hello_world::*;
pub use movies::*;
pub use status::*;
