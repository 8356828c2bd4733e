//! Profile Data Provider
//!
//! Serves the company profile record. The record is either the built-in
//! literal below or fetched per request from an upstream URL.

use crate::{
    client::ProfileClient,
    error::SiteResult,
    profile::{Action, CompanyProfile, Footer, SocialLink},
};

/// Where the provider gets its record from.
#[derive(Clone, Debug)]
pub enum ProfileSource {
    /// The built-in profile, constructed fresh on every call.
    Builtin,
    /// An upstream endpoint queried on every call. Failures propagate; no
    /// default record is substituted.
    Upstream { url: String, client: ProfileClient },
}

impl ProfileSource {
    /// Picks the upstream source when a URL is configured.
    pub fn from_upstream_url(url: Option<&str>, client: ProfileClient) -> Self {
        match url {
            Some(url) => Self::Upstream {
                url: url.to_string(),
                client,
            },
            None => Self::Builtin,
        }
    }

    /// Loads the profile record.
    pub async fn load(&self) -> SiteResult<CompanyProfile> {
        match self {
            Self::Builtin => Ok(builtin_profile()),
            Self::Upstream { url, client } => client.fetch(url).await,
        }
    }
}

/// The built-in company profile.
pub fn builtin_profile() -> CompanyProfile {
    CompanyProfile {
        handle: "higolduzbekistan".into(),
        name: Some("Higold Uzbekistan".into()),
        primary_color: Some("#002a50".into()),
        background: Some("#f5f7fb".into()),
        logo: Some("/logo-higold.svg".into()),
        about: Some("Premium furniture fittings and accessories in Uzbekistan".into()),
        actions: Some(vec![
            Action::new("call", "Звонок", "tel:+998900000000")
                .with_subtitle("Позвоните для подробной информации")
                .with_icon("📞"),
            Action::new("catalog", "Каталог", "https://example.com/catalog.pdf")
                .with_subtitle("Ознакомьтесь с нашим каталогом")
                .with_icon("📘"),
            Action::new(
                "location",
                "Локация",
                "https://maps.google.com/?q=Higold%20Uzbekistan",
            )
            .with_subtitle("Приходите в наш шоурум")
            .with_icon("📍"),
        ]),
        socials: Some(vec![
            SocialLink::new("facebook", "Facebook", "https://facebook.com/higolduzbekistan")
                .with_subtitle("Будьте в курсе новостей и подпишитесь на наш фейсбук"),
            SocialLink::new("instagram", "Instagram", "https://instagram.com/higolduzbekistan")
                .with_subtitle("Следите за новостями в нашем инстаграме"),
            SocialLink::new("tiktok", "Tik tok", "https://tiktok.com/@higolduzbekistan")
                .with_subtitle("Получайте полезную информацию про фурнитуру"),
            SocialLink::new("youtube", "Youtube", "https://youtube.com/@higolduzbekistan")
                .with_subtitle("Подписывайтесь на наш ютуб канал"),
        ]),
        footer: Some(Footer {
            text: "Сделано на".into(),
            link_text: "Taplink.ru".into(),
            href: "https://taplink.cc/higolduzbekistan".into(),
        }),
    }
}
