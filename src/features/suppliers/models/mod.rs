mod supplier;

pub use supplier::{NewSupplier, Supplier, SupplierAddress};
