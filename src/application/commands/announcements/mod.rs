mod create;
mod delete;
mod service;
mod update;

pub use create::CreateAnnouncementCommand;
pub use delete::DeleteAnnouncementCommand;
pub use service::AnnouncementCommandService;
pub use update::UpdateAnnouncementCommand;
