//! Short link lookup service backing the card pages.

use std::sync::Arc;

use crate::domain::entities::ShortLinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::slug::validate_slug;
use serde_json::json;

/// One page of a user's links.
#[derive(Debug, Clone)]
pub struct LinkPage {
    pub records: Vec<ShortLinkRecord>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}

impl LinkPage {
    /// Number of pages, at least 1.
    pub fn total_pages(&self) -> u32 {
        let size = i64::from(self.page_size.max(1));
        let pages = (self.total + size - 1) / size;
        u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
    }

    pub fn prev_page(&self) -> Option<u32> {
        (self.page > 1).then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        (self.page < self.total_pages()).then(|| self.page + 1)
    }
}

/// Service for fetching the records rendered as link cards.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Retrieves a link by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the slug is malformed.
    /// Returns [`AppError::NotFound`] if no link has this slug.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link(&self, slug: &str) -> Result<ShortLinkRecord, AppError> {
        validate_slug(slug)?;

        self.link_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "slug": slug })))
    }

    /// Lists one page of links created by `owner_id`, newest first.
    ///
    /// `page` is 1-indexed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_for_owner(
        &self,
        owner_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<LinkPage, AppError> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(page_size);

        let records = self
            .link_repository
            .list_by_owner(owner_id, offset, i64::from(page_size))
            .await?;
        let total = self.link_repository.count_by_owner(owner_id).await?;

        Ok(LinkPage {
            records,
            total,
            page,
            page_size,
        })
    }

    /// Checks that the link store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if it is not.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}
