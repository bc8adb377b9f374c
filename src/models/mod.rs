pub mod prelude;

pub mod profile;
pub mod profile_details;
pub mod profile_images;
pub mod profile_posts;
