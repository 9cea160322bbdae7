// src/application/queries/pages/service.rs
use std::sync::Arc;

use crate::domain::page::{PageId, PageReadRepository, PageWriteRepository};

pub struct PageQueryService {
    pub(super) read_repo: Arc<dyn PageReadRepository>,
    // Held only for the fire-and-forget view counter.
    pub(super) write_repo: Arc<dyn PageWriteRepository>,
}

impl PageQueryService {
    pub fn new(
        read_repo: Arc<dyn PageReadRepository>,
        write_repo: Arc<dyn PageWriteRepository>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
        }
    }

    /// Best-effort view counter: spawned, never awaited by the request
    /// path. Lost increments under concurrent load are accepted by design.
    pub(super) fn bump_view_count(&self, id: PageId) {
        let repo = Arc::clone(&self.write_repo);
        tokio::spawn(async move {
            if let Err(err) = repo.increment_view_count(id).await {
                tracing::debug!(error = %err, page_id = i64::from(id), "view count increment failed");
            }
        });
    }
}
