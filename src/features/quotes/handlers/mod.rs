pub mod quote_handler;

pub use quote_handler::*;
