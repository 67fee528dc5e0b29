//! Integration tests for cart behavior over HTTP.
//!
//! Each test builds its own in-process storefront; the `TestContext` keeps
//! the session cookie, so a sequence of requests behaves like one browser.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use sakura_integration_tests::TestContext;

#[tokio::test]
async fn test_add_then_drawer_shows_line() {
    let mut ctx = TestContext::new();

    let (status, badge) = ctx.post_form("/cart/add", "product_id=4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(badge.contains(">1<"), "badge should show one line: {badge}");

    let (status, drawer) = ctx.get("/cart/drawer").await;
    assert_eq!(status, StatusCode::OK);
    assert!(drawer.contains("Пиала Момидзи"));
    assert!(drawer.contains("Количество: 1"));
    assert!(drawer.contains("1800 ₽"));
}

#[tokio::test]
async fn test_add_same_product_twice_merges_lines() {
    let mut ctx = TestContext::new();

    ctx.post_form("/cart/add", "product_id=1").await;
    let (_, badge) = ctx.post_form("/cart/add", "product_id=1").await;

    // Still one line, quantity 2
    assert!(badge.contains(">1<"), "badge counts lines, not units: {badge}");

    let (_, drawer) = ctx.get("/cart/drawer").await;
    assert_eq!(drawer.matches("Ваза Сакура").count(), 1);
    assert!(drawer.contains("Количество: 2"));
    assert!(drawer.contains("7000 ₽"));
}

#[tokio::test]
async fn test_remove_absent_id_is_noop() {
    let mut ctx = TestContext::new();

    ctx.post_form("/cart/add", "product_id=2").await;
    let (status, drawer) = ctx.post_form("/cart/remove", "product_id=999").await;

    assert_eq!(status, StatusCode::OK);
    assert!(drawer.contains("Набор пиал"));
    assert!(drawer.contains("4200 ₽"));

    let (_, badge) = ctx.get("/cart/count").await;
    assert!(badge.contains(">1<"));
}

#[tokio::test]
async fn test_remove_deletes_whole_line() {
    let mut ctx = TestContext::new();

    ctx.post_form("/cart/add", "product_id=5").await;
    ctx.post_form("/cart/add", "product_id=5").await;
    let (_, drawer) = ctx.post_form("/cart/remove", "product_id=5").await;

    assert!(drawer.contains("Корзина пуста"));

    let (_, badge) = ctx.get("/cart/count").await;
    assert!(badge.contains(">0<"));
    assert!(badge.contains("is-hidden"));
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let mut ctx = TestContext::new();

    let (status, _) = ctx.post_form("/cart/add", "product_id=999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Nothing was stored
    let (_, badge) = ctx.get("/cart/count").await;
    assert!(badge.contains(">0<"));
}

#[tokio::test]
async fn test_toggle_twice_restores_visibility() {
    let mut ctx = TestContext::new();

    let (_, drawer) = ctx.get("/cart/drawer").await;
    assert!(!drawer.contains("is-open"));

    let (_, drawer) = ctx.post_form("/cart/toggle", "").await;
    assert!(drawer.contains("is-open"));

    let (_, drawer) = ctx.post_form("/cart/toggle", "").await;
    assert!(!drawer.contains("is-open"));
}

#[tokio::test]
async fn test_toggle_is_independent_of_contents() {
    let mut ctx = TestContext::new();

    let (_, drawer) = ctx.post_form("/cart/toggle", "").await;
    assert!(drawer.contains("is-open"));
    assert!(drawer.contains("Корзина пуста"));

    // Adding does not close the drawer
    ctx.post_form("/cart/add", "product_id=6").await;
    let (_, drawer) = ctx.get("/cart/drawer").await;
    assert!(drawer.contains("is-open"));
    assert!(drawer.contains("Декоративная тарелка"));
}

#[tokio::test]
async fn test_end_to_end_cart_scenario() {
    // One unit of id=4 (1800) and two of id=1 (3500): two lines, total 8800.
    let mut ctx = TestContext::new();

    ctx.post_form("/cart/add", "product_id=4").await;
    ctx.post_form("/cart/add", "product_id=1").await;
    let (_, badge) = ctx.post_form("/cart/add", "product_id=1").await;
    assert!(badge.contains(">2<"), "two distinct lines: {badge}");

    let (_, drawer) = ctx.get("/cart/drawer").await;

    // First-added order is preserved
    let bowl_pos = drawer.find("Пиала Момидзи").unwrap();
    let vase_pos = drawer.find("Ваза Сакура").unwrap();
    assert!(bowl_pos < vase_pos);

    assert!(drawer.contains("Количество: 1"));
    assert!(drawer.contains("Количество: 2"));
    assert!(drawer.contains("8800 ₽"));
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let mut first = TestContext::new();
    let mut second = TestContext::new();

    first.post_form("/cart/add", "product_id=1").await;

    let (_, badge) = second.get("/cart/count").await;
    assert!(badge.contains(">0<"), "a fresh session has an empty cart");
}
