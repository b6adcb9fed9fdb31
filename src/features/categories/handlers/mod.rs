pub mod category_handler;
pub mod subcategory_handler;

pub use category_handler::*;
pub use subcategory_handler::*;
