pub mod announcement;
pub mod errors;
pub mod menu;
pub mod page;
pub mod services;
pub mod slider;
pub mod slug;
