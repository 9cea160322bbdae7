// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use corporate_cms::application::ports::time::Clock;
use corporate_cms::domain::announcement::{
    Announcement, AnnouncementId, AnnouncementReadRepository, AnnouncementUpdate,
    AnnouncementWriteRepository, NewAnnouncement,
};
use corporate_cms::domain::errors::{DomainError, DomainResult};
use corporate_cms::domain::menu::{Menu, MenuId, MenuRepository, MenuUpdate, NewMenu};
use corporate_cms::domain::page::{
    NewPage, Page, PageId, PageReadRepository, PageUpdate, PageWriteRepository,
};
use corporate_cms::domain::slider::{NewSlider, Slider, SliderId, SliderRepository, SliderUpdate};
use corporate_cms::domain::slug::{Slug, SlugIndex};

/// Deterministic clock that moves forward one second per `now()` call, so
/// consecutive writes always get distinct timestamps.
pub struct TickingClock {
    now: Mutex<DateTime<Utc>>,
}

impl Default for TickingClock {
    fn default() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut guard = self.now.lock().unwrap();
        let current = *guard;
        *guard = current + Duration::seconds(1);
        current
    }
}

fn slug_conflict() -> DomainError {
    DomainError::Conflict("slug already in use".into())
}

// ---------------------------------------------------------------------------
// Pages

#[derive(Default)]
pub struct InMemoryPages {
    rows: Mutex<HashMap<i64, Page>>,
    next_id: AtomicI64,
}

impl InMemoryPages {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn view_count(&self, id: i64) -> Option<i64> {
        self.rows.lock().unwrap().get(&id).map(|p| p.view_count)
    }

    pub fn homepage_ids(&self) -> Vec<i64> {
        let rows = self.rows.lock().unwrap();
        let mut ids: Vec<i64> = rows
            .values()
            .filter(|p| p.is_homepage)
            .map(|p| p.id.into())
            .collect();
        ids.sort_unstable();
        ids
    }
}

#[async_trait]
impl PageWriteRepository for InMemoryPages {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|p| p.slug == page.slug) {
            return Err(slug_conflict());
        }
        let id = self.next_id();
        let stored = Page {
            id: PageId::new(id)?,
            title: page.title,
            slug: page.slug,
            body: page.body,
            meta_description: page.meta_description,
            meta_keywords: page.meta_keywords,
            is_active: page.is_active,
            is_homepage: false,
            view_count: 0,
            created_at: page.created_at,
            updated_at: page.updated_at,
        };
        rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PageUpdate) -> DomainResult<Page> {
        let mut rows = self.rows.lock().unwrap();
        let id: i64 = update.id.into();
        if let Some(slug) = &update.slug {
            if rows
                .values()
                .any(|p| p.slug == *slug && i64::from(p.id) != id)
            {
                return Err(slug_conflict());
            }
        }
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("page not found".into()))?;
        if row.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "page was modified concurrently".into(),
            ));
        }
        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(slug) = update.slug {
            row.slug = slug;
        }
        if let Some(body) = update.body {
            row.body = body;
        }
        if let Some(meta_description) = update.meta_description {
            row.meta_description = meta_description;
        }
        if let Some(meta_keywords) = update.meta_keywords {
            row.meta_keywords = meta_keywords;
        }
        if let Some(is_active) = update.is_active {
            row.is_active = is_active;
        }
        if update.clear_homepage {
            row.is_homepage = false;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: PageId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("page not found".into()))
    }

    async fn set_homepage(&self, id: PageId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let target: i64 = id.into();
        if !rows.contains_key(&target) {
            return Err(DomainError::NotFound("page not found".into()));
        }
        for row in rows.values_mut() {
            row.is_homepage = i64::from(row.id) == target;
        }
        Ok(())
    }

    async fn increment_view_count(&self, id: PageId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.get_mut(&i64::from(id)) {
            row.view_count += 1;
        }
        Ok(())
    }
}

#[async_trait]
impl SlugIndex for InMemoryPages {
    async fn find_owner(&self, slug: &Slug) -> DomainResult<Option<i64>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .find(|p| p.slug == *slug)
            .map(|p| p.id.into()))
    }
}

#[async_trait]
impl PageReadRepository for InMemoryPages {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        Ok(self.rows.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|p| p.slug == *slug).cloned())
    }

    async fn find_homepage(&self) -> DomainResult<Option<Page>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|p| p.is_homepage).cloned())
    }

    async fn list_page(
        &self,
        offset: u64,
        limit: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Page>, u64)> {
        let rows = self.rows.lock().unwrap();
        let needle = search.map(str::to_lowercase);
        let mut matched: Vec<Page> = rows
            .values()
            .filter(|p| match &needle {
                Some(n) => p.title.as_str().to_lowercase().contains(n),
                None => true,
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        let total = matched.len() as u64;
        let items = matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((items, total))
    }

    async fn list_recent_active(&self, limit: u32) -> DomainResult<Vec<Page>> {
        let rows = self.rows.lock().unwrap();
        let mut active: Vec<Page> = rows
            .values()
            .filter(|p| p.is_active && !p.is_homepage)
            .cloned()
            .collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        active.truncate(limit as usize);
        Ok(active)
    }
}

// ---------------------------------------------------------------------------
// Announcements

#[derive(Default)]
pub struct InMemoryAnnouncements {
    rows: Mutex<HashMap<i64, Announcement>>,
    next_id: AtomicI64,
}

impl InMemoryAnnouncements {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn view_count(&self, id: i64) -> Option<i64> {
        self.rows.lock().unwrap().get(&id).map(|a| a.view_count)
    }
}

fn announcement_order(a: &Announcement, b: &Announcement) -> std::cmp::Ordering {
    b.is_pinned
        .cmp(&a.is_pinned)
        .then(b.created_at.cmp(&a.created_at))
        .then(i64::from(b.id).cmp(&i64::from(a.id)))
}

#[async_trait]
impl AnnouncementWriteRepository for InMemoryAnnouncements {
    async fn insert(&self, announcement: NewAnnouncement) -> DomainResult<Announcement> {
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|a| a.slug == announcement.slug) {
            return Err(slug_conflict());
        }
        let id = self.next_id();
        let stored = Announcement {
            id: AnnouncementId::new(id)?,
            title: announcement.title,
            slug: announcement.slug,
            summary: announcement.summary,
            body: announcement.body,
            is_active: announcement.is_active,
            is_pinned: announcement.is_pinned,
            publish_date: announcement.publish_date,
            tags: announcement.tags,
            view_count: 0,
            created_at: announcement.created_at,
            updated_at: announcement.updated_at,
        };
        rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: AnnouncementUpdate) -> DomainResult<Announcement> {
        let mut rows = self.rows.lock().unwrap();
        let id: i64 = update.id.into();
        if let Some(slug) = &update.slug {
            if rows
                .values()
                .any(|a| a.slug == *slug && i64::from(a.id) != id)
            {
                return Err(slug_conflict());
            }
        }
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("announcement not found".into()))?;
        if row.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "announcement was modified concurrently".into(),
            ));
        }
        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(slug) = update.slug {
            row.slug = slug;
        }
        if let Some(summary) = update.summary {
            row.summary = summary;
        }
        if let Some(body) = update.body {
            row.body = body;
        }
        if let Some(is_active) = update.is_active {
            row.is_active = is_active;
        }
        if let Some(is_pinned) = update.is_pinned {
            row.is_pinned = is_pinned;
        }
        if let Some(publish_date) = update.publish_date {
            row.publish_date = publish_date;
        }
        if let Some(tags) = update.tags {
            row.tags = tags;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: AnnouncementId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("announcement not found".into()))
    }

    async fn increment_view_count(&self, id: AnnouncementId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.get_mut(&i64::from(id)) {
            row.view_count += 1;
        }
        Ok(())
    }
}

#[async_trait]
impl SlugIndex for InMemoryAnnouncements {
    async fn find_owner(&self, slug: &Slug) -> DomainResult<Option<i64>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .find(|a| a.slug == *slug)
            .map(|a| a.id.into()))
    }
}

#[async_trait]
impl AnnouncementReadRepository for InMemoryAnnouncements {
    async fn find_by_id(&self, id: AnnouncementId) -> DomainResult<Option<Announcement>> {
        Ok(self.rows.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Announcement>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|a| a.slug == *slug).cloned())
    }

    async fn list_page(
        &self,
        offset: u64,
        limit: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Announcement>, u64)> {
        let rows = self.rows.lock().unwrap();
        let needle = search.map(str::to_lowercase);
        let mut matched: Vec<Announcement> = rows
            .values()
            .filter(|a| match &needle {
                Some(n) => a.title.as_str().to_lowercase().contains(n),
                None => true,
            })
            .cloned()
            .collect();
        matched.sort_by(announcement_order);
        let total = matched.len() as u64;
        let items = matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((items, total))
    }

    async fn list_active(&self, limit: u32) -> DomainResult<Vec<Announcement>> {
        let rows = self.rows.lock().unwrap();
        let mut active: Vec<Announcement> =
            rows.values().filter(|a| a.is_active).cloned().collect();
        active.sort_by(announcement_order);
        active.truncate(limit as usize);
        Ok(active)
    }
}

// ---------------------------------------------------------------------------
// Menus

#[derive(Default)]
pub struct InMemoryMenus {
    rows: Mutex<HashMap<i64, Menu>>,
    next_id: AtomicI64,
}

impl InMemoryMenus {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenus {
    async fn insert(&self, menu: NewMenu) -> DomainResult<Menu> {
        let mut rows = self.rows.lock().unwrap();
        let id = self.next_id();
        let stored = Menu {
            id: MenuId::new(id)?,
            title: menu.title,
            url: menu.url,
            parent_id: menu.parent_id,
            position: menu.position,
            is_active: menu.is_active,
            is_external: menu.is_external,
            css_class: menu.css_class,
            icon: menu.icon,
            created_at: menu.created_at,
        };
        rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: MenuUpdate) -> DomainResult<Menu> {
        let mut rows = self.rows.lock().unwrap();
        let id: i64 = update.id.into();
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("menu not found".into()))?;
        row.title = update.title;
        row.url = update.url;
        row.parent_id = update.parent_id;
        row.position = update.position;
        row.is_active = update.is_active;
        row.is_external = update.is_external;
        row.css_class = update.css_class;
        row.icon = update.icon;
        Ok(row.clone())
    }

    async fn delete(&self, id: MenuId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("menu not found".into()))
    }

    async fn find_by_id(&self, id: MenuId) -> DomainResult<Option<Menu>> {
        Ok(self.rows.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Menu>> {
        let rows = self.rows.lock().unwrap();
        let mut menus: Vec<Menu> = rows.values().cloned().collect();
        menus.sort_by_key(|m| (m.position, i64::from(m.id)));
        Ok(menus)
    }

    async fn list_active(&self) -> DomainResult<Vec<Menu>> {
        let rows = self.rows.lock().unwrap();
        let mut menus: Vec<Menu> = rows.values().filter(|m| m.is_active).cloned().collect();
        menus.sort_by_key(|m| (m.position, i64::from(m.id)));
        Ok(menus)
    }

    async fn has_children(&self, id: MenuId) -> DomainResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().any(|m| m.parent_id == Some(id)))
    }
}

// ---------------------------------------------------------------------------
// Sliders

#[derive(Default)]
pub struct InMemorySliders {
    rows: Mutex<HashMap<i64, Slider>>,
    next_id: AtomicI64,
}

impl InMemorySliders {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl SliderRepository for InMemorySliders {
    async fn insert(&self, slider: NewSlider) -> DomainResult<Slider> {
        let mut rows = self.rows.lock().unwrap();
        let id = self.next_id();
        let stored = Slider {
            id: SliderId::new(id)?,
            title: slider.title,
            description: slider.description,
            image_path: slider.image_path,
            link: slider.link,
            position: slider.position,
            is_active: slider.is_active,
            open_in_new_tab: slider.open_in_new_tab,
            button_text: slider.button_text,
            created_at: slider.created_at,
            updated_at: slider.updated_at,
        };
        rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: SliderUpdate) -> DomainResult<Slider> {
        let mut rows = self.rows.lock().unwrap();
        let id: i64 = update.id.into();
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("slider not found".into()))?;
        row.title = update.title;
        row.description = update.description;
        row.image_path = update.image_path;
        row.link = update.link;
        row.position = update.position;
        row.is_active = update.is_active;
        row.open_in_new_tab = update.open_in_new_tab;
        row.button_text = update.button_text;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: SliderId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("slider not found".into()))
    }

    async fn find_by_id(&self, id: SliderId) -> DomainResult<Option<Slider>> {
        Ok(self.rows.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Slider>> {
        let rows = self.rows.lock().unwrap();
        let mut sliders: Vec<Slider> = rows.values().cloned().collect();
        sliders.sort_by_key(|s| (s.position, i64::from(s.id)));
        Ok(sliders)
    }

    async fn list_active(&self) -> DomainResult<Vec<Slider>> {
        let rows = self.rows.lock().unwrap();
        let mut sliders: Vec<Slider> = rows.values().filter(|s| s.is_active).cloned().collect();
        sliders.sort_by_key(|s| (s.position, i64::from(s.id)));
        Ok(sliders)
    }
}
