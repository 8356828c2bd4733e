//! Askama Templates
//!
//! Template structs for rendering HTML pages.

use askama::Template;
use askama_web::WebTemplate;

use crate::{
    defaults::{ResolvedProfile, ACCENT_COLOR, BUTTON_BACKGROUND},
    profile::{Action, Footer, SocialLink},
};

/// Profile landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub title: String,
    pub handle: String,
    pub background: String,
    pub logo: String,
    pub logo_alt: String,
    pub badge_color: &'static str,
    pub button_background: &'static str,
    pub accent: &'static str,
    pub actions: Vec<ButtonView>,
    pub socials: Vec<ButtonView>,
    pub footer: Option<Footer>,
}

impl ProfileTemplate {
    pub fn new(profile: ResolvedProfile) -> Self {
        let logo_alt = format!("{} logo", profile.name.as_deref().unwrap_or(&profile.handle));

        Self {
            title: profile.handle.clone(),
            handle: profile.handle,
            background: profile.background,
            logo: profile.logo,
            logo_alt,
            badge_color: BUTTON_BACKGROUND,
            button_background: BUTTON_BACKGROUND,
            accent: ACCENT_COLOR,
            actions: profile.actions.into_iter().map(ButtonView::from).collect(),
            socials: profile.socials.into_iter().map(ButtonView::from).collect(),
            footer: profile.footer,
        }
    }
}

/// One full-width link button.
///
/// Colors come from the page, never from the item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub id: String,
    pub href: String,
    /// Title, prefixed with the icon when there is one.
    pub label: String,
    pub subtitle: Option<String>,
    pub opens_new_context: bool,
}

/// Links to `http(s)` targets open in a new browsing context; `tel:` and
/// other schemes open inline.
pub fn opens_new_context(href: &str) -> bool {
    href.starts_with("http")
}

impl From<Action> for ButtonView {
    fn from(action: Action) -> Self {
        let label = match action.icon.as_deref() {
            Some(icon) if !icon.is_empty() => format!("{icon} {}", action.title),
            _ => action.title,
        };
        Self {
            opens_new_context: opens_new_context(&action.href),
            id: action.id,
            href: action.href,
            label,
            subtitle: action.subtitle.filter(|s| !s.is_empty()),
        }
    }
}

impl From<SocialLink> for ButtonView {
    fn from(social: SocialLink) -> Self {
        Self {
            opens_new_context: opens_new_context(&social.href),
            id: social.id,
            href: social.href,
            label: social.title,
            subtitle: social.subtitle.filter(|s| !s.is_empty()),
        }
    }
}
