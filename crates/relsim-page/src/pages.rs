//! Page handlers.
//!
//! Each handler builds its view and renders an Askama template.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::PageState;
use crate::views::{StatusView, hostname};

fn render<T: Template>(tmpl: T) -> Html<String> {
    Html(tmpl.render().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "template render failed");
        format!("<pre>Template error: {e}</pre>")
    }))
}

#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusTemplate {
    pub view: StatusView,
}

/// GET /
pub async fn status(State(state): State<PageState>) -> Html<String> {
    let view = StatusView::new(&state.config, hostname(), chrono::Local::now());
    render(StatusTemplate { view })
}
