//! Router construction and request handlers.

use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{Extension, OriginalUri, Path},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect as HttpRedirect, Response},
    routing::{get, post},
};

use agrisite_core::StaticPageKind;
use agrisite_resolver::{NavigationRequest, Resolution, ResolvedView};

use crate::contact::ContactSubmission;
use crate::render::{content, page};
use crate::services::SiteServices;

/// Build the site router over shared services.
pub fn build_app(services: Arc<SiteServices>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(home))
        .route("/products", get(home))
        .route("/products/:category", get(category_listing))
        .route("/products/:category/:product", get(product_detail))
        .route("/about", get(page_about))
        .route("/contact", get(page_contact))
        .route("/how-to-buy", get(page_how_to_buy))
        .route("/regulatory", get(page_regulatory))
        .route("/product-guide", get(page_product_guide))
        .route("/testimonials", get(page_testimonials))
        .route("/media", get(page_media))
        .route("/contact/submit", post(contact_submit))
        .route("/api/contact", post(api_contact))
        .fallback(catch_all)
        .layer(Extension(services))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn home(Extension(services): Extension<Arc<SiteServices>>) -> Response {
    render_resolution(&services, services.resolver().resolve(&NavigationRequest::home()))
}

async fn category_listing(
    Extension(services): Extension<Arc<SiteServices>>,
    Path(category): Path<String>,
) -> Response {
    let request = NavigationRequest::category(category);
    render_resolution(&services, services.resolver().resolve(&request))
}

async fn product_detail(
    Extension(services): Extension<Arc<SiteServices>>,
    Path((category, product)): Path<(String, String)>,
) -> Response {
    let request = NavigationRequest::product(category, product);
    render_resolution(&services, services.resolver().resolve(&request))
}

/// Wildcard catch-all: everything outside the routed surface runs through the
/// same resolver so redirects and the not-found page stay consistent.
async fn catch_all(
    Extension(services): Extension<Arc<SiteServices>>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    render_resolution(&services, services.resolver().resolve_path(uri.path()))
}

macro_rules! static_page_handler {
    ($name:ident, $kind:expr) => {
        async fn $name(Extension(services): Extension<Arc<SiteServices>>) -> Response {
            render_static(&services, $kind)
        }
    };
}

static_page_handler!(page_about, StaticPageKind::About);
static_page_handler!(page_contact, StaticPageKind::Contact);
static_page_handler!(page_how_to_buy, StaticPageKind::HowToBuy);
static_page_handler!(page_regulatory, StaticPageKind::Regulatory);
static_page_handler!(page_product_guide, StaticPageKind::ProductGuide);
static_page_handler!(page_testimonials, StaticPageKind::Testimonials);
static_page_handler!(page_media, StaticPageKind::Media);

fn render_static(services: &SiteServices, kind: StaticPageKind) -> Response {
    Html(page::static_page(services.menu(), kind)).into_response()
}

/// Turn a resolution into an HTTP response: views render, redirects redirect.
fn render_resolution(services: &SiteServices, resolution: Resolution<'_>) -> Response {
    match resolution {
        Resolution::Redirect(redirect) => {
            let location = redirect.location();
            tracing::debug!(%location, "corrective redirect");
            HttpRedirect::to(&location).into_response()
        }
        Resolution::View(view) => {
            tracing::debug!(view = view.kind(), "rendering view");
            render_view(services, &view)
        }
    }
}

fn render_view(services: &SiteServices, view: &ResolvedView<'_>) -> Response {
    let menu = services.menu();
    match view {
        ResolvedView::Home => Html(page::home(menu, services.registry())).into_response(),
        ResolvedView::CategoryListing(category) => {
            Html(page::category_listing(menu, category)).into_response()
        }
        ResolvedView::ProductDetail { category, product } => {
            match content::content_for(product.slug()) {
                Some(record) => {
                    Html(page::product_detail(menu, category, product, record)).into_response()
                }
                // Dispatch table and content records are built from the same
                // list, so this arm is unreachable in practice; degrade the
                // same way the resolver would have.
                None => Html(page::generic_product(menu, category, product)).into_response(),
            }
        }
        ResolvedView::GenericProductDetail { category, product } => {
            Html(page::generic_product(menu, category, product)).into_response()
        }
        ResolvedView::StaticPage(kind) => render_static(services, *kind),
        ResolvedView::NotFound => {
            (StatusCode::NOT_FOUND, Html(page::not_found(menu))).into_response()
        }
    }
}

async fn contact_submit(
    Extension(services): Extension<Arc<SiteServices>>,
    Form(submission): Form<ContactSubmission>,
) -> Response {
    if let Err(e) = submission.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Html(format!(
                "<p>{}</p><p><a href=\"/contact\">Back to the contact page</a></p>",
                crate::render::layout::escape(&e.to_string())
            )),
        )
            .into_response();
    }
    let name = submission.name.clone();
    let receipt = services.contact().submit(submission);
    Html(page::contact_ack(services.menu(), &name, &receipt)).into_response()
}

async fn api_contact(
    Extension(services): Extension<Arc<SiteServices>>,
    Json(submission): Json<ContactSubmission>,
) -> Response {
    if let Err(e) = submission.validate() {
        return json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string());
    }
    let receipt = services.contact().submit(submission);
    (StatusCode::OK, Json(receipt)).into_response()
}

fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
