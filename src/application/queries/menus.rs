// src/application/queries/menus.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{MenuDto, MenuNodeDto},
        error::ApplicationResult,
    },
    domain::menu::{Menu, MenuRepository},
};

pub struct MenuQueryService {
    repo: Arc<dyn MenuRepository>,
}

impl MenuQueryService {
    pub fn new(repo: Arc<dyn MenuRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_menus(&self) -> ApplicationResult<Vec<MenuDto>> {
        let menus = self.repo.list_all().await?;
        Ok(menus.into_iter().map(Into::into).collect())
    }

    /// Active entries arranged as a tree for site navigation.
    pub async fn navigation(&self) -> ApplicationResult<Vec<MenuNodeDto>> {
        let menus = self.repo.list_active().await?;
        Ok(build_tree(&menus))
    }
}

/// Nest children under their parents, keeping sibling order by position.
/// Entries whose parent is missing (inactive or deleted) surface at the top
/// level rather than disappearing.
fn build_tree(menus: &[Menu]) -> Vec<MenuNodeDto> {
    let mut ordered: Vec<&Menu> = menus.iter().collect();
    ordered.sort_by_key(|m| (m.position, i64::from(m.id)));

    let known: std::collections::HashSet<i64> =
        menus.iter().map(|m| i64::from(m.id)).collect();

    let mut roots = Vec::new();
    for menu in &ordered {
        let is_root = menu
            .parent_id
            .is_none_or(|parent| !known.contains(&i64::from(parent)));
        if is_root {
            let mut node = MenuNodeDto::leaf(menu);
            attach_children(&mut node, &ordered);
            roots.push(node);
        }
    }
    roots
}

fn attach_children(node: &mut MenuNodeDto, ordered: &[&Menu]) {
    for menu in ordered {
        if menu.parent_id.map(i64::from) == Some(node.id) {
            let mut child = MenuNodeDto::leaf(menu);
            attach_children(&mut child, ordered);
            node.children.push(child);
        }
    }
}
