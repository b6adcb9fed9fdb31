mod offering_dto;

pub use offering_dto::{CreateOfferingDto, OfferingResponseDto, UpdateOfferingDto};
