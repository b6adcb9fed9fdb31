mod brand;

pub use brand::{Brand, BrandChanges, NewBrand};
