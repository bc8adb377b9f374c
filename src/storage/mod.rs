//! Per-profile image directories under `<public>/images/<id>`.

mod sweep;

pub use sweep::{SweepReport, Sweeper};

use axum::body::Bytes;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};
use std::{
    collections::HashSet,
    io,
    path::{Path, PathBuf},
};
use tokio::{fs, io::AsyncWriteExt};
use tracing::{debug, warn};

use crate::{
    constants::TEMP_UPLOAD_PREFIX,
    models::{prelude::*, profile_images, profile_posts},
};

/// Upper bound on `-<n>` suffixes tried when a generated name is taken.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// A file part received in a multipart form, not yet on disk.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Form field the file arrived in.
    pub field: String,
    /// Client-side filename, only used for its extension.
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn profile_dir(&self, profile_id: i32) -> PathBuf {
        self.root.join(profile_id.to_string())
    }

    /// Writes `file` into the profile directory and returns the generated name.
    pub async fn save(&self, profile_id: i32, file: &UploadedFile) -> io::Result<String> {
        self.save_at(profile_id, file, chrono::Utc::now().timestamp_millis())
            .await
    }

    /// The file is fully written to a temp name first and then hard-linked to
    /// the first free generated name, so readers never see a partial file and
    /// two uploads in the same millisecond cannot overwrite each other.
    pub(crate) async fn save_at(
        &self,
        profile_id: i32,
        file: &UploadedFile,
        millis: i64,
    ) -> io::Result<String> {
        let dir = self.profile_dir(profile_id);
        fs::create_dir_all(&dir).await?;

        let temp_path = dir.join(format!("{}{}", TEMP_UPLOAD_PREFIX, uuid::Uuid::new_v4()));
        let result = claim_name(&dir, &temp_path, file, millis).await;

        if let Err(e) = fs::remove_file(&temp_path).await {
            if e.kind() != io::ErrorKind::NotFound {
                warn!("error removing temp upload {}: {}", temp_path.display(), e);
            }
        }

        result
    }

    /// Removes one file. Returns `false` when there was nothing to remove or
    /// the name is not a plain file name.
    pub async fn remove(&self, profile_id: i32, name: &str) -> io::Result<bool> {
        if !is_bare_file_name(name) {
            return Ok(false);
        }

        match fs::remove_file(self.profile_dir(profile_id).join(name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Cleanup after a committed database write: failures are logged only.
    pub async fn discard(&self, profile_id: i32, name: &str) {
        match self.remove(profile_id, name).await {
            Ok(true) => debug!("images/{}/{} was deleted", profile_id, name),
            Ok(false) => debug!("images/{}/{} not present, nothing to delete", profile_id, name),
            Err(e) => warn!("error deleting images/{}/{}: {}", profile_id, name, e),
        }
    }

    /// Like [`ImageStore::discard`], but keeps the file while any row of the
    /// profile still points at it.
    pub async fn discard_unreferenced<C: ConnectionTrait>(
        &self,
        db: &C,
        profile_id: i32,
        name: &str,
    ) {
        if name.is_empty() {
            return;
        }
        match referenced_files(db, profile_id).await {
            Ok(referenced) if referenced.contains(name) => {
                debug!("images/{}/{} is still referenced, kept", profile_id, name)
            }
            Ok(_) => self.discard(profile_id, name).await,
            Err(e) => warn!("error checking references of images/{}/{}: {}", profile_id, name, e),
        }
    }

    /// Removes the whole profile directory, logging failures.
    pub async fn discard_profile_dir(&self, profile_id: i32) {
        match fs::remove_dir_all(self.profile_dir(profile_id)).await {
            Ok(()) => debug!("images/{} was deleted", profile_id),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("error deleting images/{}: {}", profile_id, e),
        }
    }
}

/// Every filename a row of the profile points at.
pub async fn referenced_files<C: ConnectionTrait>(
    db: &C,
    profile_id: i32,
) -> Result<HashSet<String>, DbErr> {
    let mut names = HashSet::new();

    if let Some(details) = ProfileDetails::find_by_id(profile_id).one(db).await? {
        names.extend(details.profile_pic);
        names.extend(details.profile_background);
    }

    let pics: Vec<String> = ProfilePosts::find()
        .select_only()
        .column(profile_posts::Column::Pics)
        .filter(profile_posts::Column::Id.eq(profile_id))
        .into_tuple()
        .all(db)
        .await?;
    names.extend(pics.into_iter().filter(|name| !name.is_empty()));

    let images: Vec<String> = ProfileImages::find()
        .select_only()
        .column(profile_images::Column::Image)
        .filter(profile_images::Column::Id.eq(profile_id))
        .into_tuple()
        .all(db)
        .await?;
    names.extend(images);

    Ok(names)
}

async fn claim_name(
    dir: &Path,
    temp_path: &Path,
    file: &UploadedFile,
    millis: i64,
) -> io::Result<String> {
    let mut temp = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(temp_path)
        .await?;
    temp.write_all(&file.bytes).await?;
    temp.sync_all().await?;
    drop(temp);

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let name = generate_name(&file.field, file.file_name.as_deref(), millis, attempt);
        match fs::hard_link(temp_path, dir.join(&name)).await {
            Ok(()) => return Ok(name),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("no free file name for field {:?}", file.field),
    ))
}

/// `<field>_<millis><ext>`, with `-<attempt>` before the extension on retries.
pub fn generate_name(field: &str, original: Option<&str>, millis: i64, attempt: u32) -> String {
    let field: String = field
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    let field = if field.is_empty() { "file" } else { field.as_str() };

    let ext = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    match attempt {
        0 => format!("{}_{}{}", field, millis, ext),
        n => format!("{}_{}-{}{}", field, millis, n, ext),
    }
}

/// True for a single path component that stays inside its directory.
pub fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(|c: char| c == '/' || c == '\\' || c == '\0')
}
