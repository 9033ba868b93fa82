//! Image handling components
//!
//! Pick a local image file and hand its bytes to the site.

pub mod image_upload;

pub use image_upload::ImageUpload;
