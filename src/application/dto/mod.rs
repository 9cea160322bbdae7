pub mod announcements;
pub mod menus;
pub mod pages;
pub mod pagination;
pub mod sliders;

pub use announcements::AnnouncementDto;
pub use menus::{MenuDto, MenuNodeDto};
pub use pages::PageDto;
pub use pagination::OffsetPage;
pub use sliders::SliderDto;
