pub mod config;
pub mod detection;
pub mod draft;
pub mod input_bar;

pub use config::*;
pub use detection::*;
pub use draft::*;
pub use input_bar::*;
