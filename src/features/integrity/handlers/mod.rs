pub mod integrity_handler;

pub use integrity_handler::*;
