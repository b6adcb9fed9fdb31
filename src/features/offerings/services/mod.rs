mod offering_service;

pub use offering_service::OfferingService;
