mod delete_entry;
mod get_images;
mod get_posts;
mod post_imgonly;
mod post_post;
mod post_textonly;

pub use delete_entry::{post_delete_imgpost, post_delete_post, DeleteEntryRequest};
pub use get_images::{get_images, ImageResponseBody};
pub use get_posts::get_posts;
pub use post_imgonly::{post_imgonly, ImagePostResponseBody};
pub use post_post::{post_post, PostResponseBody};
pub use post_textonly::{post_textonly, TextPostRequest};

pub use delete_entry::__path_post_delete_imgpost;
pub use delete_entry::__path_post_delete_post;
pub use get_images::__path_get_images;
pub use get_posts::__path_get_posts;
pub use post_imgonly::__path_post_imgonly;
pub use post_post::__path_post_post;
pub use post_textonly::__path_post_textonly;
