pub mod offering_handler;

pub use offering_handler::*;
