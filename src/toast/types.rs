//! Toast request types
//!
//! `Variant` is a closed set; anything the caller sends that is not
//! `destructive` or `success` is treated as the neutral style.

use serde::{Deserialize, Serialize};
use std::{convert::Infallible, str::FromStr};

/// Visual treatment of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
    Success,
}

impl FromStr for Variant {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "destructive" => Variant::Destructive,
            "success" => Variant::Success,
            _ => Variant::Default,
        })
    }
}

impl From<Option<String>> for Variant {
    fn from(value: Option<String>) -> Self {
        value
            .as_deref()
            .map(|s| s.parse::<Variant>().unwrap_or_default())
            .unwrap_or_default()
    }
}

/// A single notification to show
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToastRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub variant: Variant,
}

impl ToastRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: Variant::Default,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

/// Inline style override passed to the display backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStyle {
    pub width: &'static str,
    pub color: &'static str,
}

/// Options bag handed to a display primitive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    pub description: Option<String>,
    pub style: Option<ToastStyle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_str() {
        assert_eq!("destructive".parse::<Variant>().unwrap(), Variant::Destructive);
        assert_eq!("success".parse::<Variant>().unwrap(), Variant::Success);
        assert_eq!("default".parse::<Variant>().unwrap(), Variant::Default);
        assert_eq!("warning".parse::<Variant>().unwrap(), Variant::Default);
        assert_eq!("".parse::<Variant>().unwrap(), Variant::Default);
    }

    #[test]
    fn test_request_deserializes_loose_variants() {
        let req: ToastRequest =
            serde_json::from_str(r#"{"title":"Saved","variant":"success"}"#).unwrap();
        assert_eq!(req.variant, Variant::Success);
        assert!(req.description.is_none());

        let req: ToastRequest =
            serde_json::from_str(r#"{"title":"Hm","description":"x","variant":"info"}"#).unwrap();
        assert_eq!(req.variant, Variant::Default);
        assert_eq!(req.description.as_deref(), Some("x"));

        let req: ToastRequest = serde_json::from_str(r#"{"title":"Hi","variant":null}"#).unwrap();
        assert_eq!(req.variant, Variant::Default);

        let req: ToastRequest = serde_json::from_str(r#"{"title":"Hi"}"#).unwrap();
        assert_eq!(req.variant, Variant::Default);
    }

    #[test]
    fn test_variant_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Variant::Destructive).unwrap(), r#""destructive""#);
    }

    #[test]
    fn test_request_builder() {
        let req = ToastRequest::new("Deleted")
            .description("3 files removed")
            .variant(Variant::Destructive);
        assert_eq!(req.title, "Deleted");
        assert_eq!(req.description.as_deref(), Some("3 files removed"));
        assert_eq!(req.variant, Variant::Destructive);
    }
}
