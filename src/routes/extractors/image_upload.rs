use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::StatusCode,
    Json,
};
use std::{collections::HashMap, sync::Arc};
use tracing::debug;

use crate::{
    constants::IMAGE_FIELD,
    routes::ErrorResponseBody,
    storage::UploadedFile,
    utils::{build_err_resp, parse_id},
    AppState,
};

/// A multipart submission whose first `image` part has already been written
/// to the submitting profile's directory.
///
/// The profile is taken from the `id` text field. Parts are buffered first,
/// so `id` may come before or after the file.
#[derive(Debug)]
pub struct ImageUpload {
    pub profile_id: i32,
    /// Generated name of the stored image, if the form carried one.
    pub stored: Option<String>,
    fields: HashMap<String, String>,
}

impl ImageUpload {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[async_trait]
impl FromRequest<Arc<AppState>> for ImageUpload {
    type Rejection = (StatusCode, Json<ErrorResponseBody>);

    async fn from_request(req: Request, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| build_err_resp("Rejected multipart body", e))?;

        let mut fields = HashMap::new();
        let mut image: Option<UploadedFile> = None;
        let mut ignored = 0;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| build_err_resp("Failed to read multipart field", e))?
        {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);

            match file_name {
                Some(file_name) if name == IMAGE_FIELD && image.is_none() => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| build_err_resp("Failed to read uploaded file", e))?;
                    image = Some(UploadedFile {
                        field: name,
                        file_name: Some(file_name),
                        bytes,
                    });
                }
                Some(_) => {
                    // Drain the part so the stream can advance.
                    field
                        .bytes()
                        .await
                        .map_err(|e| build_err_resp("Failed to read uploaded file", e))?;
                    ignored += 1;
                }
                None => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| build_err_resp("Failed to read form field", e))?;
                    fields.insert(name, value);
                }
            }
        }

        if ignored > 0 {
            debug!("ignored {} extra file part(s)", ignored);
        }

        let profile_id = parse_id(fields.get("id").map(String::as_str).unwrap_or_default())?;

        let stored = match image {
            Some(image) => Some(
                state
                    .store
                    .save(profile_id, &image)
                    .await
                    .map_err(|e| build_err_resp("Failed to store uploaded file", e))?,
            ),
            None => None,
        };

        Ok(Self {
            profile_id,
            stored,
            fields,
        })
    }
}
