// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, Response, StatusCode, header::CONTENT_TYPE};
use corporate_cms::application::ports::{time::Clock, util::SlugGenerator};
use corporate_cms::application::services::ApplicationServices;
use corporate_cms::domain::announcement::{AnnouncementReadRepository, AnnouncementWriteRepository};
use corporate_cms::domain::menu::MenuRepository;
use corporate_cms::domain::page::{PageReadRepository, PageWriteRepository};
use corporate_cms::domain::slider::SliderRepository;
use corporate_cms::infrastructure::util::TurkishSlugGenerator;
use corporate_cms::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{
    InMemoryAnnouncements, InMemoryMenus, InMemoryPages, InMemorySliders, TickingClock,
};

/// Router plus handles on the backing stores, so tests can assert on state
/// the HTTP surface doesn't expose (view counters, homepage flags).
pub struct TestContext {
    pub router: Router,
    pub pages: Arc<InMemoryPages>,
    pub announcements: Arc<InMemoryAnnouncements>,
    pub menus: Arc<InMemoryMenus>,
    pub sliders: Arc<InMemorySliders>,
}

pub fn build_test_context() -> TestContext {
    let pages = Arc::new(InMemoryPages::default());
    let announcements = Arc::new(InMemoryAnnouncements::default());
    let menus = Arc::new(InMemoryMenus::default());
    let sliders = Arc::new(InMemorySliders::default());

    let clock: Arc<dyn Clock> = Arc::new(TickingClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(TurkishSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&pages) as Arc<dyn PageReadRepository>,
        Arc::clone(&pages) as Arc<dyn PageWriteRepository>,
        Arc::clone(&announcements) as Arc<dyn AnnouncementReadRepository>,
        Arc::clone(&announcements) as Arc<dyn AnnouncementWriteRepository>,
        Arc::clone(&menus) as Arc<dyn MenuRepository>,
        Arc::clone(&sliders) as Arc<dyn SliderRepository>,
        clock,
        slugger,
    ));

    let router = build_router(
        HttpState { services },
        &["http://localhost:3000".to_string()],
    );

    TestContext {
        router,
        pages,
        announcements,
        menus,
        sliders,
    }
}

pub fn make_test_router() -> Router {
    build_test_context().router
}

pub async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match payload {
        Some(value) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let value = body_json(response).await;
    (status, value)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}

/// Background view-counter bumps run on a spawned task; poll until the
/// condition holds or the deadline passes.
pub async fn wait_until<F>(mut condition: F)
where
    F: FnMut() -> bool,
{
    for _ in 0..100 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not reached within deadline");
}
