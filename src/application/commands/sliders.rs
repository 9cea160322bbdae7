// src/application/commands/sliders.rs
use std::sync::Arc;

use crate::{
    application::{dto::SliderDto, error::ApplicationResult, ports::time::Clock},
    domain::slider::{NewSlider, SliderId, SliderRepository, SliderUpdate},
};

pub struct CreateSliderCommand {
    pub title: String,
    pub description: Option<String>,
    pub image_path: String,
    pub link: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub open_in_new_tab: bool,
    pub button_text: Option<String>,
}

pub struct UpdateSliderCommand {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_path: String,
    pub link: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub open_in_new_tab: bool,
    pub button_text: Option<String>,
}

pub struct DeleteSliderCommand {
    pub id: i64,
}

pub struct SliderCommandService {
    repo: Arc<dyn SliderRepository>,
    clock: Arc<dyn Clock>,
}

impl SliderCommandService {
    pub fn new(repo: Arc<dyn SliderRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn create_slider(&self, command: CreateSliderCommand) -> ApplicationResult<SliderDto> {
        let now = self.clock.now();
        let slider = NewSlider {
            title: command.title,
            description: command.description,
            image_path: command.image_path,
            link: command.link,
            position: command.position,
            is_active: command.is_active,
            open_in_new_tab: command.open_in_new_tab,
            button_text: command.button_text,
            created_at: now,
            updated_at: now,
        };
        slider.validate()?;
        Ok(self.repo.insert(slider).await?.into())
    }

    pub async fn update_slider(&self, command: UpdateSliderCommand) -> ApplicationResult<SliderDto> {
        let update = SliderUpdate {
            id: SliderId::new(command.id)?,
            title: command.title,
            description: command.description,
            image_path: command.image_path,
            link: command.link,
            position: command.position,
            is_active: command.is_active,
            open_in_new_tab: command.open_in_new_tab,
            button_text: command.button_text,
            updated_at: self.clock.now(),
        };
        update.validate()?;
        Ok(self.repo.update(update).await?.into())
    }

    pub async fn delete_slider(&self, command: DeleteSliderCommand) -> ApplicationResult<()> {
        let id = SliderId::new(command.id)?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
