mod create;
mod delete;
mod service;
mod set_homepage;
mod update;

pub use create::CreatePageCommand;
pub use delete::DeletePageCommand;
pub use service::PageCommandService;
pub use set_homepage::SetHomepageCommand;
pub use update::UpdatePageCommand;
