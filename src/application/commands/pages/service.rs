// src/application/commands/pages/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        page::{PageReadRepository, PageWriteRepository},
        services::SlugAssignment,
    },
};

pub struct PageCommandService {
    pub(super) write_repo: Arc<dyn PageWriteRepository>,
    pub(super) read_repo: Arc<dyn PageReadRepository>,
    pub(super) slug_assignment: Arc<SlugAssignment>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PageCommandService {
    pub fn new(
        write_repo: Arc<dyn PageWriteRepository>,
        read_repo: Arc<dyn PageReadRepository>,
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
