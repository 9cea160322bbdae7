// src/application/queries/home.rs
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    application::{
        dto::{AnnouncementDto, PageDto, SliderDto},
        error::ApplicationResult,
    },
    domain::{
        announcement::AnnouncementReadRepository, page::PageReadRepository,
        slider::SliderRepository,
    },
};

const RECENT_PAGES_LIMIT: u32 = 6;
const ANNOUNCEMENTS_LIMIT: u32 = 5;

/// What `GET /` returns: the dedicated homepage when one is flagged,
/// otherwise the landing summary (sliders, recent pages, announcements).
#[derive(Debug, Serialize, Deserialize)]
pub struct HomeDto {
    pub page: Option<PageDto>,
    #[serde(default)]
    pub sliders: Vec<SliderDto>,
    #[serde(default)]
    pub recent_pages: Vec<PageDto>,
    #[serde(default)]
    pub announcements: Vec<AnnouncementDto>,
}

pub struct HomeQueryService {
    page_repo: Arc<dyn PageReadRepository>,
    announcement_repo: Arc<dyn AnnouncementReadRepository>,
    slider_repo: Arc<dyn SliderRepository>,
}

impl HomeQueryService {
    pub fn new(
        page_repo: Arc<dyn PageReadRepository>,
        announcement_repo: Arc<dyn AnnouncementReadRepository>,
        slider_repo: Arc<dyn SliderRepository>,
    ) -> Self {
        Self {
            page_repo,
            announcement_repo,
            slider_repo,
        }
    }

    pub async fn home(&self) -> ApplicationResult<HomeDto> {
        if let Some(page) = self.page_repo.find_homepage().await? {
            if page.is_active {
                return Ok(HomeDto {
                    page: Some(page.into()),
                    sliders: Vec::new(),
                    recent_pages: Vec::new(),
                    announcements: Vec::new(),
                });
            }
        }

        let sliders = self.slider_repo.list_active().await?;
        let recent_pages = self.page_repo.list_recent_active(RECENT_PAGES_LIMIT).await?;
        let announcements = self
            .announcement_repo
            .list_active(ANNOUNCEMENTS_LIMIT)
            .await?;

        Ok(HomeDto {
            page: None,
            sliders: sliders.into_iter().map(Into::into).collect(),
            recent_pages: recent_pages.into_iter().map(Into::into).collect(),
            announcements: announcements.into_iter().map(Into::into).collect(),
        })
    }
}
