// src/domain/slider.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub const SLIDER_TITLE_MAX_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliderId(pub i64);

impl SliderId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("slider id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<SliderId> for i64 {
    fn from(value: SliderId) -> Self {
        value.0
    }
}

/// Landing-page carousel entry. The image path is stored verbatim; upload
/// handling lives outside this service.
#[derive(Debug, Clone)]
pub struct Slider {
    pub id: SliderId,
    pub title: String,
    pub description: Option<String>,
    pub image_path: String,
    pub link: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub open_in_new_tab: bool,
    pub button_text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSlider {
    pub title: String,
    pub description: Option<String>,
    pub image_path: String,
    pub link: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub open_in_new_tab: bool,
    pub button_text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewSlider {
    pub fn validate(&self) -> DomainResult<()> {
        validate_slider_fields(&self.title, &self.image_path)
    }
}

#[derive(Debug, Clone)]
pub struct SliderUpdate {
    pub id: SliderId,
    pub title: String,
    pub description: Option<String>,
    pub image_path: String,
    pub link: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub open_in_new_tab: bool,
    pub button_text: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl SliderUpdate {
    pub fn validate(&self) -> DomainResult<()> {
        validate_slider_fields(&self.title, &self.image_path)
    }
}

fn validate_slider_fields(title: &str, image_path: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation(
            "slider title cannot be empty".into(),
        ));
    }
    if title.chars().count() > SLIDER_TITLE_MAX_LEN {
        return Err(DomainError::Validation(format!(
            "slider title cannot exceed {SLIDER_TITLE_MAX_LEN} characters"
        )));
    }
    if image_path.trim().is_empty() {
        return Err(DomainError::Validation(
            "slider image path cannot be empty".into(),
        ));
    }
    Ok(())
}

#[async_trait]
pub trait SliderRepository: Send + Sync {
    async fn insert(&self, slider: NewSlider) -> DomainResult<Slider>;
    async fn update(&self, update: SliderUpdate) -> DomainResult<Slider>;
    async fn delete(&self, id: SliderId) -> DomainResult<()>;
    async fn find_by_id(&self, id: SliderId) -> DomainResult<Option<Slider>>;
    async fn list_all(&self) -> DomainResult<Vec<Slider>>;
    async fn list_active(&self) -> DomainResult<Vec<Slider>>;
}
