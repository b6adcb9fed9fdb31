mod offering;

pub use offering::{NewOffering, Offering, OfferingChanges};
