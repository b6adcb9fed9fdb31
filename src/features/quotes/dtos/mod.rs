mod quote_dto;

pub use quote_dto::{CreateQuoteDto, QuoteResponseDto, UpdateQuoteStatusDto};
