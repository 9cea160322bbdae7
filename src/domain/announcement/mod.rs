pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Announcement, AnnouncementUpdate, NewAnnouncement};
pub use repository::{AnnouncementReadRepository, AnnouncementWriteRepository};
pub use value_objects::{AnnouncementBody, AnnouncementId, AnnouncementTitle};
