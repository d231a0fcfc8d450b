use askama::Template;
use axum::{Router, response::Html, routing::get};
use shared::errors::HttpError;
use tracing::error;

/// Server-rendered shell of the shop page. The product grid itself is filled
/// in by the page script from `/api/products` after load.
#[derive(Template, Debug)]
#[template(path = "storefront.html")]
pub struct StorefrontTemplate<'a> {
    pub title: &'a str,
}

pub async fn storefront_page() -> Result<Html<String>, HttpError> {
    let template = StorefrontTemplate {
        title: "Café Delivery",
    };

    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            error!("❌ Failed to render storefront page: {}", e);
            Err(HttpError::Internal("Internal server error".to_string()))
        }
    }
}

pub fn storefront_routes() -> Router {
    Router::new().route("/", get(storefront_page))
}
