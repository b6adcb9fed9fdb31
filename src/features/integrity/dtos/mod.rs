mod integrity_dto;

pub use integrity_dto::{IntegrityIssue, IntegrityReportDto};
