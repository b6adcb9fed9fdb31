mod blog;

pub use blog::{Blog, BlogChanges, BlogStatus, NewBlog};
