//! Link card: one short link rendered as a dashboard card.

use askama::Template;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Session, ShortLinkRecord};
use crate::ui::base_url::{BaseUrl, display_label};
use crate::ui::copy_button::CopyButton;
use crate::ui::favicon::favicon_src;
use crate::ui::format::{Notation, format_number, format_relative, format_timestamp};
use crate::ui::options_menu::{OPTIONS_MENU_CLASS, OptionsMenu, OptionsMenuProps};
use crate::utils::destination::decode_destination;

/// Inputs a page hands to a card.
#[derive(Debug, Clone)]
pub struct LinkCardProps {
    pub link: ShortLinkRecord,
    pub session: Option<Session>,
    pub disable_options: bool,
    pub hide_created_at_time: bool,
}

impl LinkCardProps {
    pub fn new(link: ShortLinkRecord, session: Option<Session>) -> Self {
        Self {
            link,
            session,
            disable_options: false,
            hide_created_at_time: false,
        }
    }

    pub fn disable_options(mut self, disable: bool) -> Self {
        self.disable_options = disable;
        self
    }

    pub fn hide_created_at_time(mut self, hide: bool) -> Self {
        self.hide_created_at_time = hide;
        self
    }
}

/// Collaborators shared by every card on a page.
pub struct CardContext<'a> {
    pub base_url: &'a BaseUrl,
    pub options_menu: &'a dyn OptionsMenu,
    pub now: DateTime<Utc>,
}

/// Relative creation label with its exact timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAtLabel {
    pub relative: String,
    pub exact: String,
}

/// Render-ready card.
///
/// Every field is derived from [`LinkCardProps`] and [`CardContext`] in
/// [`LinkCard::build`]; the template only lays them out.
#[derive(Template, Debug, Clone)]
#[template(path = "components/link_card.html")]
pub struct LinkCard {
    pub slug: String,
    pub favicon_src: String,
    pub short_url: String,
    pub short_label: String,
    pub copy_button: CopyButton,
    pub copy_button_html: String,
    pub views_compact: String,
    pub views_standard: String,
    /// Decoded destination, or the stored text if it could not be decoded.
    pub destination: String,
    /// Set only for `http`/`https` destinations.
    pub destination_href: Option<String>,
    pub description: Option<String>,
    pub options_menu_html: String,
    pub created_at: Option<CreatedAtLabel>,
}

impl LinkCard {
    /// Derives a card from a record.
    ///
    /// A destination that fails to decode does not fail the card: the stored
    /// text is shown as-is and the favicon falls back to a placeholder.
    ///
    /// # Errors
    ///
    /// Returns a template error if the copy button or the options menu fail
    /// to render.
    pub fn build(props: LinkCardProps, ctx: &CardContext<'_>) -> Result<Self, askama::Error> {
        let LinkCardProps {
            link,
            session,
            disable_options,
            hide_created_at_time,
        } = props;

        let decoded = match decode_destination(&link.url) {
            Ok(dest) => Some(dest),
            Err(e) => {
                tracing::warn!(slug = %link.slug, error = %e, "Stored destination is malformed");
                None
            }
        };

        let destination = decoded
            .as_ref()
            .map_or_else(|| link.url.clone(), |d| d.as_str().to_string());
        let destination_href = decoded
            .as_ref()
            .filter(|d| d.is_web())
            .map(|d| d.as_str().to_string());

        let short_url = ctx.base_url.shorten(&link.slug);
        let short_label = display_label(&short_url).to_string();
        let copy_button = CopyButton::new(short_url.clone());
        let copy_button_html = copy_button.render()?;

        let created_at = (!hide_created_at_time).then(|| CreatedAtLabel {
            relative: format_relative(link.created_at, ctx.now),
            exact: format_timestamp(link.created_at),
        });

        let description = link.visible_description().map(str::to_string);

        let options_menu_html = ctx.options_menu.render(&OptionsMenuProps {
            link: link.with_url(destination.clone()),
            session,
            disabled: disable_options,
            class_name: OPTIONS_MENU_CLASS.to_string(),
        })?;

        metrics::counter!("link_cards_rendered_total").increment(1);

        Ok(Self {
            favicon_src: favicon_src(decoded.as_ref()),
            views_compact: format_number(link.views, Notation::Compact),
            views_standard: format_number(link.views, Notation::Standard),
            slug: link.slug,
            short_url,
            short_label,
            copy_button,
            copy_button_html,
            destination,
            destination_href,
            description,
            options_menu_html,
            created_at,
        })
    }
}
