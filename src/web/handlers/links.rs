//! Signed-in user's card list.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Extension, Query, State};

use super::card_context;
use crate::domain::entities::Session;
use crate::error::AppError;
use crate::state::AppState;
use crate::ui::{LinkCard, LinkCardProps};
use crate::web::dto::pagination::PaginationParams;

/// Template for the links page.
///
/// Cards arrive pre-rendered; the page lays them out in a grid with
/// pagination below.
#[derive(Template, WebTemplate)]
#[template(path = "links.html")]
pub struct LinksTemplate {
    pub user_name: String,
    pub cards: Vec<String>,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total: i64,
    pub prev_page: Option<u32>,
    pub next_page: Option<u32>,
}

/// Renders one page of the user's links as cards.
///
/// # Endpoint
///
/// `GET /dashboard/links?page=1&page_size=25`
///
/// # Errors
///
/// - `400 Bad Request` for a zero page or an out-of-range page size
/// - `500 Internal Server Error` on database or template errors
pub async fn links_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(params): Query<PaginationParams>,
) -> Result<LinksTemplate, AppError> {
    let (page, page_size) = params.resolve(state.default_page_size)?;

    let links = state
        .link_service
        .list_for_owner(session.user_id, page, page_size)
        .await?;

    let ctx = card_context(&state);
    let (prev_page, next_page, total_pages) =
        (links.prev_page(), links.next_page(), links.total_pages());

    let cards = links
        .records
        .into_iter()
        .map(|link| {
            LinkCard::build(LinkCardProps::new(link, Some(session.clone())), &ctx)?.render()
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        user_id = session.user_id,
        page,
        cards = cards.len(),
        "Rendered links page"
    );

    Ok(LinksTemplate {
        user_name: session.user_name,
        cards,
        page,
        page_size,
        total_pages,
        total: links.total,
        prev_page,
        next_page,
    })
}
