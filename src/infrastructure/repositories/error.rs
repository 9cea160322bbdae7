use crate::domain::errors::DomainError;

const CNT_PAGE_SLUG: &str = "pages_slug_key";
const CNT_ANNOUNCEMENT_SLUG: &str = "announcements_slug_key";
const CNT_PAGE_SINGLE_HOMEPAGE: &str = "pages_single_homepage_idx";
const CNT_MENU_PARENT: &str = "menus_parent_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_PAGE_SLUG | CNT_ANNOUNCEMENT_SLUG => {
                        DomainError::Conflict("slug already in use".into())
                    }
                    CNT_PAGE_SINGLE_HOMEPAGE => {
                        DomainError::Conflict("another page is already the homepage".into())
                    }
                    CNT_MENU_PARENT => DomainError::Conflict(
                        "menu has child entries and cannot be deleted".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
