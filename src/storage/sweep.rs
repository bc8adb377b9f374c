use sea_orm::{DbErr, EntityTrait};
use std::{collections::HashSet, sync::Arc, time::Duration};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{referenced_files, ImageStore};
use crate::{models::prelude::*, AppState};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepReport {
    pub removed_dirs: usize,
    pub removed_files: usize,
}

/// Reconciles the image directories with the rows that reference them.
///
/// A directory whose profile is gone is removed whole. Inside a live
/// profile's directory, files no row points at are removed once they are
/// older than the grace period, which covers uploads whose database write
/// is still in flight.
pub struct Sweeper {
    app_state: Arc<AppState>,
}

impl Sweeper {
    pub fn new(app_state: Arc<AppState>) -> Self {
        Self { app_state }
    }

    pub async fn run(&self) -> Result<SweepReport, DbErr> {
        let store = &self.app_state.store;
        let db = &self.app_state.db;
        let grace = self.app_state.env.sweep_grace;
        let mut report = SweepReport::default();

        for profile_id in profile_dirs(store).await {
            if Profile::find_by_id(profile_id).one(db).await?.is_none() {
                store.discard_profile_dir(profile_id).await;
                report.removed_dirs += 1;
                continue;
            }

            let referenced = referenced_files(db, profile_id).await?;
            report.removed_files += sweep_dir(store, profile_id, &referenced, grace).await;
        }

        Ok(report)
    }

    /// Runs once right away and then on every tick of the configured interval.
    pub fn spawn(app_state: Arc<AppState>) -> JoinHandle<()> {
        let interval = app_state.env.sweep_interval;
        let sweeper = Self::new(app_state);

        tokio::spawn(async move {
            loop {
                match sweeper.run().await {
                    Ok(report) => info!(
                        "orphan sweep removed {} dirs and {} files",
                        report.removed_dirs, report.removed_files
                    ),
                    Err(e) => warn!("orphan sweep failed: {}", e),
                }

                match interval {
                    Some(interval) => tokio::time::sleep(interval).await,
                    None => break,
                }
            }
        })
    }
}

/// Numeric subdirectories of the image root.
async fn profile_dirs(store: &ImageStore) -> Vec<i32> {
    let mut ids = Vec::new();
    let mut entries = match tokio::fs::read_dir(store.root()).await {
        Ok(entries) => entries,
        Err(e) => {
            debug!("image root not readable: {}", e);
            return ids;
        }
    };

    while let Ok(Some(entry)) = entries.next_entry().await {
        let is_dir = entry
            .file_type()
            .await
            .map(|kind| kind.is_dir())
            .unwrap_or(false);
        if !is_dir {
            continue;
        }
        if let Some(id) = entry.file_name().to_str().and_then(|s| s.parse().ok()) {
            ids.push(id);
        }
    }
    ids
}

async fn sweep_dir(
    store: &ImageStore,
    profile_id: i32,
    referenced: &HashSet<String>,
    grace: Duration,
) -> usize {
    let mut removed = 0;
    let mut entries = match tokio::fs::read_dir(store.profile_dir(profile_id)).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("error reading images/{}: {}", profile_id, e);
            return removed;
        }
    };

    while let Ok(Some(entry)) = entries.next_entry().await {
        let name = entry.file_name().to_string_lossy().to_string();
        if referenced.contains(&name) {
            continue;
        }

        let old_enough = match entry.metadata().await.and_then(|meta| meta.modified()) {
            Ok(modified) => modified
                .elapsed()
                .map(|age| age >= grace)
                .unwrap_or(grace.is_zero()),
            Err(_) => false,
        };
        if !old_enough {
            continue;
        }

        match store.remove(profile_id, &name).await {
            Ok(true) => {
                debug!("orphan images/{}/{} was deleted", profile_id, name);
                removed += 1;
            }
            Ok(false) => {}
            Err(e) => warn!("error deleting orphan images/{}/{}: {}", profile_id, name, e),
        }
    }
    removed
}
