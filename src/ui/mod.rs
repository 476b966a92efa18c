//! Presentational components shared by the web dashboard and the admin CLI.
//!
//! - [`link_card`] - Short link card
//! - [`copy_button`] - Copy-to-clipboard button
//! - [`options_menu`] - Injected per-card options menu
//! - [`clipboard`], [`notify`] - Boundaries driven by the copy button
//! - [`format`], [`favicon`], [`base_url`] - Label and URL helpers

pub mod base_url;
pub mod clipboard;
pub mod copy_button;
pub mod favicon;
pub mod format;
pub mod link_card;
pub mod notify;
pub mod options_menu;

pub use base_url::BaseUrl;
pub use copy_button::CopyButton;
pub use link_card::{CardContext, LinkCard, LinkCardProps};
pub use options_menu::{LinkOptionsDropdown, OptionsMenu, OptionsMenuProps};
