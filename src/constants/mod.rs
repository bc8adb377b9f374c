pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Literal the client sends for an empty registration field.
pub const NULL_PLACEHOLDER: &str = "null";

/// Form field that carries uploaded images.
pub const IMAGE_FIELD: &str = "image";

/// Prefix of in-flight upload files inside a profile directory.
pub const TEMP_UPLOAD_PREFIX: &str = ".upload-";

pub const MSG_NULL_INPUT: &str = "You can't insert null! Try again.";
pub const MSG_EMAIL_TAKEN: &str = "User with that E-mail already exists!";
pub const MSG_REGISTERED: &str = "Successfully registered, you can now login.";
pub const MSG_PROFILE_DELETED: &str = "Profile is deleted successfully.";
pub const MSG_UPDATED: &str = "Updated";
pub const MSG_ERROR: &str = "Error";
