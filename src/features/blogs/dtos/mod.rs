mod blog_dto;

pub use blog_dto::{
    BlogResponseDto, BlogSummaryDto, BlogVerificationDto, CreateBlogDto, UpdateBlogDto,
    VerifyBlogDto,
};
