use crate::domain::slider::Slider;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderDto {
    pub id: i64,
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

impl From<Slider> for SliderDto {
    fn from(slider: Slider) -> Self {
        Self {
            id: slider.id.into(),
            title: slider.title,
            description: slider.description,
            image_path: slider.image_path,
            link: slider.link,
            position: slider.position,
            is_active: slider.is_active,
            open_in_new_tab: slider.open_in_new_tab,
            button_text: slider.button_text,
            created_at: slider.created_at,
            updated_at: slider.updated_at,
        }
    }
}
