// src/application/commands/announcements/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        announcement::{AnnouncementReadRepository, AnnouncementWriteRepository},
        services::SlugAssignment,
    },
};

pub struct AnnouncementCommandService {
    pub(super) write_repo: Arc<dyn AnnouncementWriteRepository>,
    pub(super) read_repo: Arc<dyn AnnouncementReadRepository>,
    pub(super) slug_assignment: Arc<SlugAssignment>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AnnouncementCommandService {
    pub fn new(
        write_repo: Arc<dyn AnnouncementWriteRepository>,
        read_repo: Arc<dyn AnnouncementReadRepository>,
        slug_assignment: Arc<SlugAssignment>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_assignment,
            clock,
        }
    }
}
