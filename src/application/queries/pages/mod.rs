mod get_by_id;
mod list;
mod resolve;
mod service;

pub use get_by_id::GetPageByIdQuery;
pub use list::ListPagesQuery;
pub use resolve::{PathResolution, RESERVED_PREFIXES, ResolvePathQuery};
pub use service::PageQueryService;
