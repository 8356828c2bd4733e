//! Profile Defaults
//!
//! Every display field of the page falls back to a fixed value when the
//! fetched profile leaves it absent or empty. The fallbacks live in one
//! table of [`Fallback`] entries consumed by [`merge`].

use crate::profile::{Action, CompanyProfile, Footer, SocialLink};

/// Text color of every button. Not overridable by profile data.
pub const ACCENT_COLOR: &str = "#fff";

/// Background color of every button and of the logo badge.
pub const BUTTON_BACKGROUND: &str = "#0a3c69";

/// A default value for one field plus the predicate deciding when the
/// fetched value counts as missing.
pub struct Fallback<T> {
    pub default: fn() -> T,
    pub is_empty: fn(&T) -> bool,
}

impl<T> Fallback<T> {
    /// Returns the fetched value unless it is absent or empty.
    pub fn resolve(&self, fetched: Option<T>) -> T {
        match fetched {
            Some(value) if !(self.is_empty)(&value) => value,
            _ => (self.default)(),
        }
    }
}

pub const BACKGROUND: Fallback<String> = Fallback {
    default: default_background,
    is_empty: String::is_empty,
};

pub const LOGO: Fallback<String> = Fallback {
    default: default_logo,
    is_empty: String::is_empty,
};

pub const HANDLE: Fallback<String> = Fallback {
    default: default_handle,
    is_empty: String::is_empty,
};

pub const ACTIONS: Fallback<Vec<Action>> = Fallback {
    default: default_actions,
    is_empty: Vec::is_empty,
};

pub const SOCIALS: Fallback<Vec<SocialLink>> = Fallback {
    default: default_socials,
    is_empty: Vec::is_empty,
};

fn default_background() -> String {
    "#ffffff".to_string()
}

fn default_logo() -> String {
    "/ogo.png".to_string()
}

fn default_handle() -> String {
    "kengmakon".to_string()
}

fn default_actions() -> Vec<Action> {
    vec![
        Action::new("call", "Звонок", "tel:+998983003676")
            .with_subtitle("Позвоните для подробной информации")
            .with_icon("📞"),
        Action::new("catalog", "Каталог", "https://kengmakon.uz/catalog/spalnyy-garnitur")
            .with_subtitle("Ознакомьтесь с нашим каталогом")
            .with_icon("📘"),
    ]
}

fn default_socials() -> Vec<SocialLink> {
    vec![
        SocialLink::new("telegram", "Telegram", "https://t.me/kengmakonuz")
            .with_subtitle("Подпишитесь на наш канал"),
        SocialLink::new("instagram", "Instagram", "https://www.instagram.com/kengmakon.uzb/")
            .with_subtitle("Следите за новостями"),
        SocialLink::new(
            "facebook",
            "Facebook",
            "https://www.facebook.com/profile.php?id=100085820027934",
        )
        .with_subtitle("Будьте в курсе новостей"),
    ]
}

/// A profile with every display field resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedProfile {
    pub handle: String,
    pub name: Option<String>,
    pub background: String,
    pub logo: String,
    pub actions: Vec<Action>,
    pub socials: Vec<SocialLink>,
    /// No default: absent stays absent.
    pub footer: Option<Footer>,
}

/// Merges a fetched profile with the default table.
///
/// `primary_color` and `about` are dropped here; the page never shows them.
pub fn merge(fetched: CompanyProfile) -> ResolvedProfile {
    ResolvedProfile {
        handle: HANDLE.resolve(Some(fetched.handle)),
        name: fetched.name.filter(|name| !name.is_empty()),
        background: BACKGROUND.resolve(fetched.background),
        logo: LOGO.resolve(fetched.logo),
        actions: ACTIONS.resolve(fetched.actions),
        socials: SOCIALS.resolve(fetched.socials),
        footer: fetched.footer,
    }
}
