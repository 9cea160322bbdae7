// src/domain/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugIndex};

/// Domain service deciding which slug a record gets and rejecting
/// collisions. One instance serves every content type; the uniqueness scope
/// comes from the `SlugIndex` the caller passes in.
pub struct SlugAssignment {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugAssignment {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Resolve the slug for a create or edit: an explicitly provided value
    /// is validated and used as-is, a blank one is derived from the title.
    /// Either way the result must be free in the owning content type's
    /// table, excluding the record being edited.
    pub async fn assign(
        &self,
        index: &dyn SlugIndex,
        title: &str,
        requested: Option<&str>,
        exclude_id: Option<i64>,
    ) -> DomainResult<Slug> {
        let slug = match requested.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Slug::parse(raw)?,
            None => {
                let derived = self.generator.slugify(title);
                if derived.is_empty() {
                    return Err(DomainError::Validation(
                        "title does not contain any slug-mappable characters".into(),
                    ));
                }
                Slug::parse(derived)?
            }
        };
        self.ensure_unique(index, &slug, exclude_id).await?;
        Ok(slug)
    }

    /// Read-only collision check. A taken slug is a hard failure for the
    /// caller to surface; the candidate is never suffixed or mutated.
    pub async fn ensure_unique(
        &self,
        index: &dyn SlugIndex,
        slug: &Slug,
        exclude_id: Option<i64>,
    ) -> DomainResult<()> {
        match index.find_owner(slug).await? {
            Some(owner) if exclude_id == Some(owner) => Ok(()),
            Some(_) => Err(DomainError::Conflict("slug already in use".into())),
            None => Ok(()),
        }
    }
}
