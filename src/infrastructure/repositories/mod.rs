// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_announcement;
mod postgres_menu;
mod postgres_page;
mod postgres_slider;

pub use error::map_sqlx;
pub use postgres_announcement::{
    PostgresAnnouncementReadRepository, PostgresAnnouncementWriteRepository,
};
pub use postgres_menu::PostgresMenuRepository;
pub use postgres_page::{PostgresPageReadRepository, PostgresPageWriteRepository};
pub use postgres_slider::PostgresSliderRepository;
