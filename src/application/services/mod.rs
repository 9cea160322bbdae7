// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            announcements::AnnouncementCommandService, menus::MenuCommandService,
            pages::PageCommandService, sliders::SliderCommandService,
        },
        ports::{time::Clock, util::SlugGenerator},
        queries::{
            announcements::AnnouncementQueryService, home::HomeQueryService,
            menus::MenuQueryService, pages::PageQueryService, sliders::SliderQueryService,
        },
    },
    domain::{
        announcement::{AnnouncementReadRepository, AnnouncementWriteRepository},
        menu::MenuRepository,
        page::{PageReadRepository, PageWriteRepository},
        services::SlugAssignment,
        slider::SliderRepository,
    },
};

pub struct ApplicationServices {
    pub page_commands: Arc<PageCommandService>,
    pub page_queries: Arc<PageQueryService>,
    pub announcement_commands: Arc<AnnouncementCommandService>,
    pub announcement_queries: Arc<AnnouncementQueryService>,
    pub menu_commands: Arc<MenuCommandService>,
    pub menu_queries: Arc<MenuQueryService>,
    pub slider_commands: Arc<SliderCommandService>,
    pub slider_queries: Arc<SliderQueryService>,
    pub home_queries: Arc<HomeQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        page_read_repo: Arc<dyn PageReadRepository>,
        page_write_repo: Arc<dyn PageWriteRepository>,
        announcement_read_repo: Arc<dyn AnnouncementReadRepository>,
        announcement_write_repo: Arc<dyn AnnouncementWriteRepository>,
        menu_repo: Arc<dyn MenuRepository>,
        slider_repo: Arc<dyn SliderRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_assignment = Arc::new(SlugAssignment::new(Arc::clone(&slugger)));

        let page_commands = Arc::new(PageCommandService::new(
            Arc::clone(&page_write_repo),
            Arc::clone(&page_read_repo),
            Arc::clone(&slug_assignment),
            Arc::clone(&clock),
        ));
        let page_queries = Arc::new(PageQueryService::new(
            Arc::clone(&page_read_repo),
            Arc::clone(&page_write_repo),
        ));

        let announcement_commands = Arc::new(AnnouncementCommandService::new(
            Arc::clone(&announcement_write_repo),
            Arc::clone(&announcement_read_repo),
            Arc::clone(&slug_assignment),
            Arc::clone(&clock),
        ));
        let announcement_queries = Arc::new(AnnouncementQueryService::new(
            Arc::clone(&announcement_read_repo),
            Arc::clone(&announcement_write_repo),
        ));

        let menu_commands = Arc::new(MenuCommandService::new(
            Arc::clone(&menu_repo),
            Arc::clone(&clock),
        ));
        let menu_queries = Arc::new(MenuQueryService::new(Arc::clone(&menu_repo)));

        let slider_commands = Arc::new(SliderCommandService::new(
            Arc::clone(&slider_repo),
            Arc::clone(&clock),
        ));
        let slider_queries = Arc::new(SliderQueryService::new(Arc::clone(&slider_repo)));

        let home_queries = Arc::new(HomeQueryService::new(
            Arc::clone(&page_read_repo),
            Arc::clone(&announcement_read_repo),
            Arc::clone(&slider_repo),
        ));

        Self {
            page_commands,
            page_queries,
            announcement_commands,
            announcement_queries,
            menu_commands,
            menu_queries,
            slider_commands,
            slider_queries,
            home_queries,
        }
    }
}
