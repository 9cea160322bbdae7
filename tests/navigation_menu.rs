// tests/navigation_menu.rs
use axum::http::StatusCode;
use serde_json::json;

mod support;

async fn create_menu(ctx: &support::TestContext, payload: serde_json::Value) -> i64 {
    let (status, body) =
        support::send_json(&ctx.router, "POST", "/admin/api/menus", Some(payload)).await;
    assert_eq!(status, StatusCode::OK, "fixture menu create failed: {body}");
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn navigation_nests_children_under_their_parent() {
    let ctx = support::build_test_context();
    let corporate = create_menu(
        &ctx,
        json!({ "title": "Kurumsal", "url": "/kurumsal", "position": 1 }),
    )
    .await;
    create_menu(
        &ctx,
        json!({ "title": "İletişim", "url": "/iletisim", "position": 2 }),
    )
    .await;
    create_menu(
        &ctx,
        json!({
            "title": "Tarihçe",
            "url": "/kurumsal/tarihce",
            "parent_id": corporate,
            "position": 1
        }),
    )
    .await;

    let (status, body) = support::send_json(&ctx.router, "GET", "/api/navigation", None).await;

    assert_eq!(status, StatusCode::OK);
    let roots = body.as_array().unwrap();
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0]["title"], "Kurumsal");
    assert_eq!(roots[0]["children"][0]["title"], "Tarihçe");
    assert!(roots[1]["children"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn navigation_excludes_inactive_entries() {
    let ctx = support::build_test_context();
    create_menu(&ctx, json!({ "title": "Visible", "url": "/a" })).await;
    create_menu(
        &ctx,
        json!({ "title": "Hidden", "url": "/b", "is_active": false }),
    )
    .await;

    let (status, body) = support::send_json(&ctx.router, "GET", "/api/navigation", None).await;

    assert_eq!(status, StatusCode::OK);
    let roots = body.as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["title"], "Visible");
}

#[tokio::test]
async fn child_of_an_inactive_parent_surfaces_at_top_level() {
    let ctx = support::build_test_context();
    let parent = create_menu(
        &ctx,
        json!({ "title": "Retired", "url": "/old", "is_active": false }),
    )
    .await;
    create_menu(
        &ctx,
        json!({ "title": "Still Linked", "url": "/old/live", "parent_id": parent }),
    )
    .await;

    let (status, body) = support::send_json(&ctx.router, "GET", "/api/navigation", None).await;

    assert_eq!(status, StatusCode::OK);
    let roots = body.as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["title"], "Still Linked");
}

#[tokio::test]
async fn menu_cannot_be_its_own_parent() {
    let ctx = support::build_test_context();
    let id = create_menu(&ctx, json!({ "title": "Loop", "url": "/loop" })).await;

    let (status, _) = support::send_json(
        &ctx.router,
        "PUT",
        &format!("/admin/api/menus/{id}"),
        Some(json!({ "title": "Loop", "url": "/loop", "parent_id": id })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_parent_is_rejected() {
    let ctx = support::build_test_context();

    let (status, _) = support::send_json(
        &ctx.router,
        "POST",
        "/admin/api/menus",
        Some(json!({ "title": "Orphan", "url": "/x", "parent_id": 999 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_menu_with_children_is_refused() {
    let ctx = support::build_test_context();
    let parent = create_menu(&ctx, json!({ "title": "Parent", "url": "/p" })).await;
    let child = create_menu(
        &ctx,
        json!({ "title": "Child", "url": "/p/c", "parent_id": parent }),
    )
    .await;

    let (status, _) = support::send_json(
        &ctx.router,
        "DELETE",
        &format!("/admin/api/menus/{parent}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Remove the child first, then the parent goes through.
    let (status, _) = support::send_json(
        &ctx.router,
        "DELETE",
        &format!("/admin/api/menus/{child}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = support::send_json(
        &ctx.router,
        "DELETE",
        &format!("/admin/api/menus/{parent}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn admin_listing_is_flat_and_ordered_by_position() {
    let ctx = support::build_test_context();
    create_menu(&ctx, json!({ "title": "Second", "url": "/2", "position": 2 })).await;
    create_menu(&ctx, json!({ "title": "First", "url": "/1", "position": 1 })).await;

    let (status, body) = support::send_json(&ctx.router, "GET", "/admin/api/menus", None).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items[0]["title"], "First");
    assert_eq!(items[1]["title"], "Second");
}

#[tokio::test]
async fn reparenting_under_a_descendant_is_rejected() {
    let ctx = support::build_test_context();
    let parent = create_menu(&ctx, json!({ "title": "Kurumsal", "url": "/kurumsal" })).await;
    let child = create_menu(
        &ctx,
        json!({ "title": "Tarihçe", "url": "/kurumsal/tarihce", "parent_id": parent }),
    )
    .await;

    // Moving the parent under its own child would orphan both entries.
    let (status, body) = support::send_json(
        &ctx.router,
        "PUT",
        &format!("/admin/api/menus/{parent}"),
        Some(json!({ "title": "Kurumsal", "url": "/kurumsal", "parent_id": child })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");

    // The tree still has its root.
    let (status, body) = support::send_json(&ctx.router, "GET", "/api/navigation", None).await;
    assert_eq!(status, StatusCode::OK);
    let roots = body.as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["title"], "Kurumsal");
    assert_eq!(roots[0]["children"][0]["title"], "Tarihçe");
}
