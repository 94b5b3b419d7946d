pub mod health;
pub mod ready;

pub use health::*;
pub use ready::*;
