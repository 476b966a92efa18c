//! Public single-card preview page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Extension, Path, Query, State};

use super::card_context;
use crate::domain::entities::Session;
use crate::error::AppError;
use crate::state::AppState;
use crate::ui::{LinkCard, LinkCardProps};
use crate::web::dto::card::CardQuery;

#[derive(Template, WebTemplate)]
#[template(path = "preview.html")]
pub struct PreviewTemplate {
    pub short_label: String,
    pub card: String,
}

/// Renders one link as a standalone card.
///
/// # Endpoint
///
/// `GET /l/{slug}?hide_created_at=true`
///
/// Anyone may view the page. A signed-in owner also gets the edit and
/// delete actions in the options menu.
///
/// # Errors
///
/// - `400 Bad Request` if the slug is malformed
/// - `404 Not Found` if no link has this slug
pub async fn card_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<CardQuery>,
    session: Option<Extension<Session>>,
) -> Result<PreviewTemplate, AppError> {
    let link = state.link_service.get_link(&slug).await?;

    let props = LinkCardProps::new(link, session.map(|Extension(s)| s))
        .hide_created_at_time(query.hide_created_at());
    let card = LinkCard::build(props, &card_context(&state))?;

    Ok(PreviewTemplate {
        short_label: card.short_label.clone(),
        card: card.render()?,
    })
}
