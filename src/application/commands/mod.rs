pub mod announcements;
pub mod menus;
pub mod pages;
pub mod sliders;
