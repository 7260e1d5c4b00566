//! Visibility classification
//!
//! Whether a space or post shows up in a result depends on two independent
//! sources: the `hidden` flag on its on-chain struct and whether its JSON
//! document could be fetched from IPFS.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The four visibility filters.
///
/// - `OnlyVisible` – the `hidden` flag on the struct is `false`.
/// - `OnlyHidden` – the `hidden` flag on the struct is `true`.
/// - `OnlyPublic` – the `hidden` flag is `false` and the content document exists.
/// - `OnlyUnlisted` – the `hidden` flag is `true` or the content document is missing.
///
/// Every entity is in exactly one of visible/hidden and exactly one of
/// public/unlisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    OnlyVisible,
    OnlyHidden,
    OnlyPublic,
    OnlyUnlisted,
}

impl Visibility {
    pub const ALL: [Visibility; 4] = [
        Visibility::OnlyVisible,
        Visibility::OnlyHidden,
        Visibility::OnlyPublic,
        Visibility::OnlyUnlisted,
    ];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnlyVisible => "onlyVisible",
            Self::OnlyHidden => "onlyHidden",
            Self::OnlyPublic => "onlyPublic",
            Self::OnlyUnlisted => "onlyUnlisted",
        }
    }

    /// Whether the `hidden` flag alone already excludes an entity.
    ///
    /// Entities rejected here never need their content fetched.
    pub fn rejects_by_flag(&self, hidden: bool) -> bool {
        match self {
            Self::OnlyVisible | Self::OnlyPublic => hidden,
            Self::OnlyHidden => !hidden,
            Self::OnlyUnlisted => false,
        }
    }

    /// Check an entity against this filter
    pub fn matches(&self, hidden: bool, has_content: bool) -> bool {
        match self {
            Self::OnlyVisible => !hidden,
            Self::OnlyHidden => hidden,
            Self::OnlyPublic => !hidden && has_content,
            Self::OnlyUnlisted => hidden || !has_content,
        }
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "onlyVisible" => Ok(Self::OnlyVisible),
            "onlyHidden" => Ok(Self::OnlyHidden),
            "onlyPublic" => Ok(Self::OnlyPublic),
            "onlyUnlisted" => Ok(Self::OnlyUnlisted),
            other => Err(format!("unknown visibility filter: {}", other)),
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Include/exclude decision for one entity. No filter includes everything.
pub fn classify(hidden: bool, has_content: bool, filter: Option<Visibility>) -> bool {
    match filter {
        Some(visibility) => visibility.matches(hidden, has_content),
        None => true,
    }
}

/// Visibility filter plus the content-only requirement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default)]
    pub visibility: Option<Visibility>,
    /// Drop entities whose document could not be fetched, whatever the filter
    #[serde(default)]
    pub with_content_only: bool,
}

impl Filters {
    /// No filtering at all
    pub fn all() -> Self {
        Self::default()
    }

    /// Not hidden and with content
    pub fn public() -> Self {
        Self {
            visibility: Some(Visibility::OnlyPublic),
            with_content_only: true,
        }
    }

    /// Hidden or without content. Content is not required here since an
    /// unlisted entity may lack it.
    pub fn unlisted() -> Self {
        Self {
            visibility: Some(Visibility::OnlyUnlisted),
            with_content_only: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_content_only(mut self, with_content_only: bool) -> Self {
        self.with_content_only = with_content_only;
        self
    }

    /// Whether an entity can be dropped before its content is fetched
    pub fn rejects_by_flag(&self, hidden: bool) -> bool {
        self.visibility.map_or(false, |v| v.rejects_by_flag(hidden))
    }

    /// Final decision once content presence is known
    pub fn accepts(&self, hidden: bool, has_content: bool) -> bool {
        if self.with_content_only && !has_content {
            return false;
        }
        classify(hidden, has_content, self.visibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_table() {
        use Visibility::*;

        // (filter, hidden, has_content, expected)
        let cases = [
            (OnlyVisible, false, false, true),
            (OnlyVisible, false, true, true),
            (OnlyVisible, true, false, false),
            (OnlyVisible, true, true, false),
            (OnlyHidden, false, false, false),
            (OnlyHidden, false, true, false),
            (OnlyHidden, true, false, true),
            (OnlyHidden, true, true, true),
            (OnlyPublic, false, false, false),
            (OnlyPublic, false, true, true),
            (OnlyPublic, true, false, false),
            (OnlyPublic, true, true, false),
            (OnlyUnlisted, false, false, true),
            (OnlyUnlisted, false, true, false),
            (OnlyUnlisted, true, false, true),
            (OnlyUnlisted, true, true, true),
        ];

        for (filter, hidden, has_content, expected) in cases {
            assert_eq!(
                classify(hidden, has_content, Some(filter)),
                expected,
                "{} hidden={} has_content={}",
                filter,
                hidden,
                has_content
            );
        }
    }

    #[test]
    fn test_no_filter_includes_everything() {
        for hidden in [false, true] {
            for has_content in [false, true] {
                assert!(classify(hidden, has_content, None));
            }
        }
    }

    #[test]
    fn test_public_and_unlisted_partition() {
        for hidden in [false, true] {
            for has_content in [false, true] {
                let public = Visibility::OnlyPublic.matches(hidden, has_content);
                let unlisted = Visibility::OnlyUnlisted.matches(hidden, has_content);
                assert_ne!(public, unlisted);

                let visible = Visibility::OnlyVisible.matches(hidden, has_content);
                let hidden_match = Visibility::OnlyHidden.matches(hidden, has_content);
                assert_ne!(visible, hidden_match);
            }
        }
    }

    #[test]
    fn test_rejects_by_flag_never_contradicts_matches() {
        for filter in Visibility::ALL {
            for hidden in [false, true] {
                if filter.rejects_by_flag(hidden) {
                    assert!(!filter.matches(hidden, true));
                    assert!(!filter.matches(hidden, false));
                }
            }
        }
    }

    #[test]
    fn test_filters() {
        assert!(Filters::all().accepts(true, false));

        // Content-only applies on top of a flag-only filter
        let visible_with_content = Filters::all()
            .with_visibility(Visibility::OnlyVisible)
            .with_content_only(true);
        assert!(visible_with_content.accepts(false, true));
        assert!(!visible_with_content.accepts(false, false));

        assert!(Filters::public().rejects_by_flag(true));
        assert!(!Filters::unlisted().rejects_by_flag(true));
        assert!(!Filters::unlisted().rejects_by_flag(false));
        assert!(Filters::unlisted().accepts(false, false));
    }

    #[test]
    fn test_string_roundtrip() {
        for filter in Visibility::ALL {
            assert_eq!(filter.as_str().parse::<Visibility>().unwrap(), filter);
        }
        assert!("public".parse::<Visibility>().is_err());

        let json = serde_json::to_string(&Visibility::OnlyUnlisted).unwrap();
        assert_eq!(json, "\"onlyUnlisted\"");
    }
}
