use askama::Template;
use axum::response::Html;

use crate::errors::AppError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct Index {
    pub accepted_types: &'static str,
}

/// GET /
/// Serves the single-page UI. All interaction state lives in the browser;
/// the server re-renders the same page for every visit.
pub async fn index_handler() -> Result<Html<String>, AppError> {
    let template = Index {
        accepted_types: ".pdf",
    };
    let page = template
        .render()
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(Html(page))
}
