use askama::Template;
use axum::{extract::State, response::Html};

use crate::{error::AppError, routes::AppState};

#[derive(Template)]
#[template(path = "legal.html")]
struct LegalTemplate<'a> {
    title: &'a str,
    brand_name: &'a str,
    body: String,
}

fn render(app_state: &AppState, title: &str, markdown: &str) -> Result<Html<String>, AppError> {
    let template = LegalTemplate {
        title,
        brand_name: &app_state.config.theme.brand_name,
        body: crate::markdown::to_html(markdown),
    };

    Ok(Html(template.render()?))
}

/// GET /privacy - Privacy Policy page
pub async fn privacy(State(app_state): State<AppState>) -> Result<Html<String>, AppError> {
    render(
        &app_state,
        "Privacy Policy",
        include_str!("../../content/privacy.md"),
    )
}

/// GET /cookies - Cookie Policy page
pub async fn cookies(State(app_state): State<AppState>) -> Result<Html<String>, AppError> {
    render(
        &app_state,
        "Cookie Policy",
        include_str!("../../content/cookies.md"),
    )
}
