use serde::{Deserialize, Serialize};

/// Offset-paginated envelope used by the admin listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> OffsetPage<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, per_page: u32) -> Self {
        Self {
            items,
            total,
            page,
            per_page,
        }
    }
}

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

/// Clamp raw query parameters into (page, per_page, offset).
pub fn normalize(page: u32, per_page: u32) -> (u32, u32, u64) {
    let page = page.max(1);
    let per_page = if per_page == 0 {
        DEFAULT_PER_PAGE
    } else {
        per_page.min(MAX_PER_PAGE)
    };
    let offset = u64::from(page - 1) * u64::from(per_page);
    (page, per_page, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_out_of_range_values() {
        assert_eq!(normalize(0, 0), (1, DEFAULT_PER_PAGE, 0));
        assert_eq!(normalize(3, 10), (3, 10, 20));
        assert_eq!(normalize(1, 10_000), (1, MAX_PER_PAGE, 0));
    }
}
