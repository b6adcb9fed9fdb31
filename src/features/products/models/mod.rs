mod product;

pub use product::{CategoryAssignment, NewProduct, Product, ProductChanges, ProductFilter};
