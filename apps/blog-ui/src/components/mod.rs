//! Shared Blog Components

mod comment_section;
mod image_uploader;
mod navbar;
mod post_card;

pub use comment_section::CommentSection;
pub use image_uploader::ImageUploader;
pub use navbar::Navbar;
pub use post_card::PostCard;
