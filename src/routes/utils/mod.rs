mod status;

pub use status::{get_status, post_status, StatusRequest, StatusResponseBody};

pub use status::{__path_get_status, __path_post_status};
