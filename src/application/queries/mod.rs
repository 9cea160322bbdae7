pub mod announcements;
pub mod home;
pub mod menus;
pub mod pages;
pub mod sliders;
