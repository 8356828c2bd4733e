//! Company Profile
//!
//! Wire types for the company profile record served by the provider
//! and consumed by the page renderer.

use serde::{Deserialize, Deserializer, Serialize};

/// The company profile record.
///
/// Every field except `handle` is optional on the wire. A missing or null
/// `handle` deserializes to an empty string and is resolved by the
/// renderer's defaults like any other empty field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Accepted and re-served, never applied by the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socials: Option<Vec<SocialLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

/// A primary call-to-action link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A secondary link to a social platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub href: String,
}

/// Attribution line shown at the bottom of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub text: String,
    pub link_text: String,
    pub href: String,
}

impl Action {
    /// Creates an action without subtitle or icon.
    pub fn new(id: impl Into<String>, title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            href: href.into(),
            icon: None,
        }
    }

    /// Sets the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the icon shown before the title.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl SocialLink {
    /// Creates a social link without subtitle.
    pub fn new(id: impl Into<String>, title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            href: href.into(),
        }
    }

    /// Sets the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn minimal_record_deserializes() {
        let profile: CompanyProfile = serde_json::from_str(r#"{"handle":"x"}"#).unwrap();

        assert_eq!(profile.handle, "x");
        assert_eq!(profile.actions, None);
        assert_eq!(profile.socials, None);
        assert_eq!(profile.footer, None);
    }

    #[test]
    fn missing_handle_becomes_empty() {
        let profile: CompanyProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.handle.is_empty());
    }

    #[test]
    fn null_handle_becomes_empty() {
        let profile: CompanyProfile =
            serde_json::from_str(r#"{"handle":null,"logo":null,"actions":null}"#).unwrap();
        assert!(profile.handle.is_empty());
        assert_eq!(profile.logo, None);
        assert_eq!(profile.actions, None);
    }

    #[test]
    fn primary_color_survives_the_wire() {
        let profile: CompanyProfile =
            serde_json::from_str(r##"{"handle":"x","primaryColor":"#002a50"}"##).unwrap();
        assert_eq!(profile.primary_color.as_deref(), Some("#002a50"));

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["primaryColor"], "#002a50");
    }

    #[test]
    fn absent_fields_are_omitted() {
        let json = serde_json::to_value(CompanyProfile {
            handle: "x".into(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(json, serde_json::json!({ "handle": "x" }));
    }

    #[test]
    fn footer_uses_camel_case_link_text() {
        let footer: Footer =
            serde_json::from_str(r#"{"text":"Made with","linkText":"Taplink","href":"https://taplink.cc"}"#)
                .unwrap();
        assert_eq!(footer.link_text, "Taplink");
    }
}
