//! Integration tests for the HTTP page surface.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use agrisite_catalog::BuiltinCatalog;
use agrisite_web::app::build_app;
use agrisite_web::contact::{ContactReceipt, ContactSink, ContactSubmission};
use agrisite_web::services::SiteServices;

fn site() -> Router {
    let services = SiteServices::build(&BuiltinCatalog).expect("builtin catalog is valid");
    build_app(Arc::new(services))
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, location, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn home_renders_the_category_grid() {
    let router = site();
    let (status, _, body) = get(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Phosphite Range"));
    assert!(body.contains("Biostimulant Range"));
    assert!(body.contains("/products/trace-element-range"));
}

#[tokio::test]
async fn bare_products_index_shows_the_same_grid() {
    let router = site();
    let (status, _, body) = get(&router, "/products").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Our Ranges"));
}

#[tokio::test]
async fn category_listing_shows_all_eight_phosphite_products_in_order() {
    let router = site();
    let (status, _, body) = get(&router, "/products/phosphite-range").await;
    assert_eq!(status, StatusCode::OK);
    let names = [
        "Kickstart™",
        "Tensile™",
        "Sirius™",
        "DP98",
        "Quantum™",
        "PK Force™",
        "Beet Raiser™",
        "Cereal Raiser™",
    ];
    let mut last = 0;
    for name in names {
        let pos = body.find(name).unwrap_or_else(|| panic!("{name} missing"));
        assert!(pos > last, "{name} out of configured order");
        last = pos;
    }
}

#[tokio::test]
async fn bespoke_product_page_renders_the_tensile_unit() {
    let router = site();
    let (status, _, body) = get(&router, "/products/phosphite-range/tensile").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Tensile™"));
    assert!(body.contains("Application Rates"));
    assert!(body.contains("Typical Analysis"));
    assert!(body.contains("GS30–GS32"));
}

#[tokio::test]
async fn unknown_product_redirects_to_its_category() {
    let router = site();
    let (status, location, _) = get(&router, "/products/phosphite-range/not-a-real-product").await;
    assert!(status.is_redirection(), "got {status}");
    assert_eq!(location.as_deref(), Some("/products/phosphite-range"));
}

#[tokio::test]
async fn unknown_category_redirects_home() {
    let router = site();
    let (status, location, _) = get(&router, "/products/not-a-real-category").await;
    assert!(status.is_redirection(), "got {status}");
    assert_eq!(location.as_deref(), Some("/"));

    // With a product segment too, the category miss still wins.
    let (status, location, _) = get(&router, "/products/not-a-real-category/tensile").await;
    assert!(status.is_redirection());
    assert_eq!(location.as_deref(), Some("/"));
}

#[tokio::test]
async fn catalog_valid_product_without_bespoke_unit_gets_the_generic_page() {
    let router = site();
    let (status, _, body) = get(&router, "/products/phosphite-range/beet-raiser").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Beet Raiser™"));
    assert!(body.contains("Contact Us"));
    // The bespoke-only sections are absent.
    assert!(!body.contains("Application Rates"));
}

#[tokio::test]
async fn cross_listed_product_is_reachable_under_both_categories() {
    let router = site();
    for uri in [
        "/products/foliar-range/multi-mix",
        "/products/trace-element-range/multi-mix",
    ] {
        let (status, _, body) = get(&router, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("Multi-Mix™"));
    }
}

#[tokio::test]
async fn static_pages_all_respond() {
    let router = site();
    for (uri, marker) in [
        ("/about", "About Us"),
        ("/contact", "Contact"),
        ("/how-to-buy", "How to Buy"),
        ("/regulatory", "Regulatory Information"),
        ("/product-guide", "Product Guide"),
        ("/testimonials", "Testimonials"),
        ("/media", "Media"),
    ] {
        let (status, _, body) = get(&router, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains(marker), "{uri} missing {marker}");
    }
}

#[tokio::test]
async fn wildcard_paths_render_not_found() {
    let router = site();
    for uri in ["/no-such-page", "/no/such/page", "/products/a/b/c"] {
        let (status, _, body) = get(&router, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body.contains("Page not found"));
    }
}

#[tokio::test]
async fn health_is_ok() {
    let router = site();
    let (status, _, _) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn api_contact_returns_a_receipt() {
    let router = site();
    let payload = json!({
        "name": "A Grower",
        "email": "grower@example.com",
        "message": "Programme advice please."
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let receipt: Value = serde_json::from_slice(&body).unwrap();
    assert!(receipt.get("id").is_some());
    assert!(receipt.get("received_at").is_some());
}

#[tokio::test]
async fn api_contact_rejects_blank_required_fields() {
    let router = site();
    let payload = json!({"name": "", "email": "x@example.com", "message": "hi"});
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["error"], "validation_error");
}

#[tokio::test]
async fn contact_form_submission_renders_an_acknowledgment() {
    let router = site();
    let request = Request::builder()
        .method("POST")
        .uri("/contact/submit")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(
            "name=A+Grower&email=grower%40example.com&message=Advice+please",
        ))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("Thank you, A Grower"));
    assert!(body.contains("Reference:"));
}

#[tokio::test]
async fn contact_form_with_missing_field_is_rejected() {
    let router = site();
    let request = Request::builder()
        .method("POST")
        .uri("/contact/submit")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from("name=&email=x%40example.com&message=hi"))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[derive(Default)]
struct RecordingSink {
    seen: Mutex<Vec<ContactSubmission>>,
}

impl ContactSink for RecordingSink {
    fn submit(&self, submission: ContactSubmission) -> ContactReceipt {
        self.seen.lock().unwrap().push(submission);
        ContactReceipt {
            id: uuid::Uuid::nil(),
            received_at: chrono::Utc::now(),
        }
    }
}

#[tokio::test]
async fn contact_sink_receives_the_payload() {
    let sink = Arc::new(RecordingSink::default());
    struct Forward(Arc<RecordingSink>);
    impl ContactSink for Forward {
        fn submit(&self, submission: ContactSubmission) -> ContactReceipt {
            self.0.submit(submission)
        }
    }
    let services = SiteServices::build(&BuiltinCatalog)
        .unwrap()
        .with_contact_sink(Box::new(Forward(sink.clone())));
    let router = build_app(Arc::new(services));

    let payload = json!({"name": "N", "email": "n@example.com", "message": "m"});
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let seen = sink.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].email, "n@example.com");
}
