//! Options menu collaborator injected into link cards.
//!
//! The card only hands over the record and the viewer; which actions exist
//! and who may use them is decided here.

use askama::Template;

use crate::domain::entities::{Session, ShortLinkRecord};

/// CSS classes positioning the menu in the card's top-right corner.
pub const OPTIONS_MENU_CLASS: &str = "absolute right-2 top-3";

/// Input handed to an [`OptionsMenu`].
///
/// `link.url` is already percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsMenuProps {
    pub link: ShortLinkRecord,
    pub session: Option<Session>,
    pub disabled: bool,
    pub class_name: String,
}

/// Renders the per-card options menu.
#[cfg_attr(test, mockall::automock)]
pub trait OptionsMenu: Send + Sync {
    /// Renders the menu markup for one card.
    ///
    /// # Errors
    ///
    /// Returns a template error if rendering fails.
    fn render(&self, props: &OptionsMenuProps) -> Result<String, askama::Error>;
}

/// Action offered by the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Share,
    Edit,
    Delete,
}

impl MenuAction {
    pub fn name(&self) -> &'static str {
        match self {
            MenuAction::Share => "share",
            MenuAction::Edit => "edit",
            MenuAction::Delete => "delete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Share => "Share",
            MenuAction::Edit => "Edit",
            MenuAction::Delete => "Delete",
        }
    }
}

/// Default dropdown: share for everyone, edit and delete for the owner.
///
/// Actions are rendered as `data-action` buttons. `static/link-cards.js`
/// turns a click into a `linkcard:action` DOM event for the host page.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkOptionsDropdown;

#[derive(Template)]
#[template(path = "components/options_menu.html")]
struct OptionsMenuTemplate<'a> {
    slug: &'a str,
    destination: &'a str,
    class_name: &'a str,
    disabled: bool,
    actions: Vec<MenuAction>,
}

impl LinkOptionsDropdown {
    /// Actions available to the viewer of a link.
    pub fn actions_for(props: &OptionsMenuProps) -> Vec<MenuAction> {
        if props.disabled {
            return Vec::new();
        }

        let owner = props
            .session
            .as_ref()
            .is_some_and(|s| s.owns(props.link.created_by));

        if owner {
            vec![MenuAction::Share, MenuAction::Edit, MenuAction::Delete]
        } else {
            vec![MenuAction::Share]
        }
    }
}

impl OptionsMenu for LinkOptionsDropdown {
    fn render(&self, props: &OptionsMenuProps) -> Result<String, askama::Error> {
        OptionsMenuTemplate {
            slug: &props.link.slug,
            destination: &props.link.url,
            class_name: &props.class_name,
            disabled: props.disabled,
            actions: Self::actions_for(props),
        }
        .render()
    }
}
