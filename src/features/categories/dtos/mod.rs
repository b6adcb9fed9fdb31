mod category_dto;

pub use category_dto::{
    CategoryResponseDto, CategoryTreeDto, CreateCategoryDto, CreateSubcategoryDto,
    ListCategoriesQuery, NestedSubcategoriesQuery, SubcategoryResponseDto, UpdateCategoryDto,
    UpdateSubcategoryDto,
};
