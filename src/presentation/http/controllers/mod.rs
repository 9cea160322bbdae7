pub mod announcements;
pub mod content;
pub mod menus;
pub mod pages;
pub mod sliders;
