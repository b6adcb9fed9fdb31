/// Maximum number of gallery images on a product
pub const MAX_GALLERY_IMAGES: usize = 10;
