//! Query parameters for the card preview page.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// `GET /l/{slug}` query string.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct CardQuery {
    /// Omit the creation time from the card.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub hide_created_at: Option<bool>,
}

impl CardQuery {
    pub fn hide_created_at(&self) -> bool {
        self.hide_created_at.unwrap_or(false)
    }
}
