mod integrity_service;

pub use integrity_service::IntegrityService;
