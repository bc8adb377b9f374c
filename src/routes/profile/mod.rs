mod delete_profile;
mod get_data;
mod post_update_data;

pub use delete_profile::delete_profile;
pub use get_data::{get_data, ProfileDataResponseBody};
pub use post_update_data::{post_update_data, UpdateDataRequest, UpdateDataResponseBody};

pub use delete_profile::__path_delete_profile;
pub use get_data::__path_get_data;
pub use post_update_data::__path_post_update_data;
