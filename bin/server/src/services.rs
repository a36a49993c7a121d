//! Shared services handed to server functions as request extensions.

use crate::error::SiteError;
use axum::Extension;
use lichtpunt_blog::BlogSource;
use lichtpunt_contact::ContactSink;
use std::sync::Arc;

pub type SharedContactSink = Arc<dyn ContactSink>;
pub type SharedBlogSource = Arc<dyn BlogSource>;

async fn extension<T: Clone + Send + Sync + 'static>(name: &'static str) -> Result<T, SiteError> {
    let Extension(value): Extension<T> = leptos_axum::extract().await.map_err(|e| {
        tracing::error!(error = %e, service = name, "Missing request extension");
        SiteError::MissingService { name }
    })?;
    Ok(value)
}

pub async fn contact_sink() -> Result<SharedContactSink, SiteError> {
    extension("contact sink").await
}

pub async fn blog_source() -> Result<SharedBlogSource, SiteError> {
    extension("blog source").await
}
