mod post_delete_img;
mod post_upload_picture;

pub use post_delete_img::{post_delete_img, DeleteImageRequest};
pub use post_upload_picture::{post_upload_background, post_upload_profile};

pub use post_delete_img::__path_post_delete_img;
pub use post_upload_picture::__path_post_upload_background;
pub use post_upload_picture::__path_post_upload_profile;

use crate::models::profile_details;

/// Which picture column of `profile_details` a route works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureSlot {
    Profile,
    Background,
}

impl PictureSlot {
    /// Anything but `"profile_background"` addresses the profile picture.
    pub fn from_field(what: &str) -> Self {
        match what {
            "profile_background" => Self::Background,
            _ => Self::Profile,
        }
    }

    pub fn column(self) -> profile_details::Column {
        match self {
            Self::Profile => profile_details::Column::ProfilePic,
            Self::Background => profile_details::Column::ProfileBackground,
        }
    }

    /// Filename currently stored in this slot.
    pub fn current(self, details: profile_details::Model) -> Option<String> {
        match self {
            Self::Profile => details.profile_pic,
            Self::Background => details.profile_background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_background_field_selects_background() {
        assert_eq!(
            PictureSlot::from_field("profile_background"),
            PictureSlot::Background
        );
        assert_eq!(PictureSlot::from_field("profile_pic"), PictureSlot::Profile);
        assert_eq!(PictureSlot::from_field(""), PictureSlot::Profile);
    }
}
