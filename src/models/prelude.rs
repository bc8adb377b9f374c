pub use super::profile::Entity as Profile;
pub use super::profile_details::Entity as ProfileDetails;
pub use super::profile_images::Entity as ProfileImages;
pub use super::profile_posts::Entity as ProfilePosts;
