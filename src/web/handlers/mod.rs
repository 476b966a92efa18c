//! Page and health handlers.

mod card;
mod health;
mod links;
mod login;

pub use card::card_handler;
pub use health::health_handler;
pub use links::links_handler;
pub use login::{login_form_handler, login_handler, logout_handler};

use chrono::Utc;

use crate::state::AppState;
use crate::ui::CardContext;

/// Card collaborators for one request, pinned to the current time.
fn card_context(state: &AppState) -> CardContext<'_> {
    CardContext {
        base_url: &state.base_url,
        options_menu: state.options_menu.as_ref(),
        now: Utc::now(),
    }
}
