pub mod cli;
pub mod detect;
pub mod io;
pub mod model;
pub mod ops;
pub mod util;
