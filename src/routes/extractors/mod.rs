mod image_upload;
mod json_body;

pub use image_upload::ImageUpload;
pub use json_body::JsonBody;
