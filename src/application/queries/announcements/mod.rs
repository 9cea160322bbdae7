mod get;
mod list;
mod service;

pub use get::{GetAnnouncementByIdQuery, GetPublishedAnnouncementQuery};
pub use list::{ListAnnouncementsQuery, ListPublishedAnnouncementsQuery};
pub use service::AnnouncementQueryService;
