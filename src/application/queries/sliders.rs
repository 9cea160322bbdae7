// src/application/queries/sliders.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::SliderDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slider::{SliderId, SliderRepository},
};

pub struct SliderQueryService {
    repo: Arc<dyn SliderRepository>,
}

impl SliderQueryService {
    pub fn new(repo: Arc<dyn SliderRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_sliders(&self) -> ApplicationResult<Vec<SliderDto>> {
        let sliders = self.repo.list_all().await?;
        Ok(sliders.into_iter().map(Into::into).collect())
    }

    pub async fn get_slider_by_id(&self, id: i64) -> ApplicationResult<SliderDto> {
        let id = SliderId::new(id)?;
        let slider = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("slider not found"))?;
        Ok(slider.into())
    }
}
