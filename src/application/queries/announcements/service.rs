// src/application/queries/announcements/service.rs
use std::sync::Arc;

use crate::domain::announcement::{
    AnnouncementId, AnnouncementReadRepository, AnnouncementWriteRepository,
};

pub struct AnnouncementQueryService {
    pub(super) read_repo: Arc<dyn AnnouncementReadRepository>,
    // Held only for the fire-and-forget view counter.
    pub(super) write_repo: Arc<dyn AnnouncementWriteRepository>,
}

impl AnnouncementQueryService {
    pub fn new(
        read_repo: Arc<dyn AnnouncementReadRepository>,
        write_repo: Arc<dyn AnnouncementWriteRepository>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
        }
    }

    pub(super) fn bump_view_count(&self, id: AnnouncementId) {
        let repo = Arc::clone(&self.write_repo);
        tokio::spawn(async move {
            if let Err(err) = repo.increment_view_count(id).await {
                tracing::debug!(
                    error = %err,
                    announcement_id = i64::from(id),
                    "view count increment failed"
                );
            }
        });
    }
}
