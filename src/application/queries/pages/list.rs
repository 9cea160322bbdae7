// src/application/queries/pages/list.rs
use super::service::PageQueryService;
use crate::application::{
    dto::{OffsetPage, PageDto, pagination},
    error::ApplicationResult,
};

pub struct ListPagesQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
}

impl PageQueryService {
    pub async fn list_pages(&self, query: ListPagesQuery) -> ApplicationResult<OffsetPage<PageDto>> {
        let (page, per_page, offset) = pagination::normalize(query.page, query.per_page);
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let (records, total) = self.read_repo.list_page(offset, per_page, search).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(OffsetPage::new(items, total, page, per_page))
    }
}
