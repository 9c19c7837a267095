use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

mod common;
use common::{body_string, create_test_app, get};

#[tokio::test]
async fn test_every_page_answers_ok() {
    let app = create_test_app();

    for uri in [
        "/",
        "/?slide=2",
        "/products",
        "/products?topic=plans&expanded=true",
        "/products?card=resources",
        "/about",
        "/blog",
        "/blog/ai-now-and-beyond",
        "/contact",
        "/contact?option=calendar",
        "/contact?option=form",
        "/playground",
    ] {
        let (status, _) = get(&app.router, uri).await;
        assert_eq!(status, StatusCode::OK, "GET {uri}");
    }
}

#[tokio::test]
async fn test_unknown_pages_render_not_found() {
    let app = create_test_app();

    let (status, html) = get(&app.router, "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("404"));

    let (status, _) = get(&app.router, "/blog/not-a-post").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_returns_json() {
    let app = create_test_app();

    let (status, body) = get(&app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_pages_link_their_canonical_url() {
    let app = create_test_app();

    let (_, html) = get(&app.router, "/about").await;
    assert!(html.contains(r#"<link rel="canonical" href="http://localhost:3000/about">"#));

    let (_, html) = get(&app.router, "/blog/ai-now-and-beyond?utm=x").await;
    assert!(html.contains(
        r#"<link rel="canonical" href="http://localhost:3000/blog/ai-now-and-beyond">"#
    ));
}

#[tokio::test]
async fn test_landing_carousel_follows_slide_query() {
    let app = create_test_app();

    let (_, html) = get(&app.router, "/").await;
    assert!(html.contains("Flying Nimbus"));
    assert!(html.contains("/?slide=1"));
    assert!(html.contains("/?slide=2"));

    let (_, html) = get(&app.router, "/?slide=1").await;
    assert!(html.contains("Build and Manage Websites"));

    // out of range and garbage both fall back to the first slide
    for uri in ["/?slide=3", "/?slide=-1", "/?slide=abc"] {
        let (status, html) = get(&app.router, uri).await;
        assert_eq!(status, StatusCode::OK, "GET {uri}");
        assert!(html.contains("Dream Big (or small)"), "GET {uri}");
    }
}

#[tokio::test]
async fn test_landing_lists_latest_posts() {
    let app = create_test_app();

    let (_, html) = get(&app.router, "/").await;
    assert!(html.contains("/blog/ai-now-and-beyond"));
    assert!(html.contains("/blog/reimagining-consumerism"));
}

#[tokio::test]
async fn test_blog_post_renders_article() {
    let app = create_test_app();

    let (_, html) = get(&app.router, "/blog").await;
    let newest = html.find("/blog/ai-now-and-beyond").unwrap();
    let oldest = html.find("/blog/reimagining-consumerism").unwrap();
    assert!(newest < oldest);

    let (_, html) = get(&app.router, "/blog/ai-now-and-beyond").await;
    assert!(html.contains("January 15, 2025"));
    assert!(html.contains("TL;DR"));
    assert!(html.contains("Related posts"));
}

#[tokio::test]
async fn test_static_assets_are_embedded() {
    let app = create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/static/css/site.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert_eq!(content_type.to_str().unwrap(), "text/css");
    assert!(body_string(response).await.contains("--brand-font"));

    let (status, _) = get(&app.router, "/static/css/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cache_headers_split_static_and_pages() {
    let app = create_test_app();
    let router = app.router.layer(axum::middleware::from_fn(
        arcalab::middleware::cache_control_middleware,
    ));

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/static/css/site.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let cache = response.headers().get(header::CACHE_CONTROL).unwrap();
    assert!(cache.to_str().unwrap().contains("immutable"));

    let response = router
        .oneshot(Request::builder().uri("/about").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let cache = response.headers().get(header::CACHE_CONTROL).unwrap();
    assert!(cache.to_str().unwrap().starts_with("no-store"));
}
