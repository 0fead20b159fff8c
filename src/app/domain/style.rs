//! Typographic control state and the CSS-level style derived from it.
//!
//! `ControlState` is the only source of truth. `DerivedStyle::derive` is a pure
//! projection of it, so any sequence of control changes ends in the same style
//! as deriving from the final state directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::{AppError, Result};

/// Version of the family build shown in the footer and about dialog.
pub const FAMILY_VERSION: &str = "6.400";
pub const FAMILY_COPYRIGHT: &str = "Copyright 2021 negset";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Weight {
    #[default]
    Regular,
    Bold,
}

impl Weight {
    pub fn css_value(self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::Bold => 700,
        }
    }

    pub fn from_bold(bold: bool) -> Self {
        if bold { Self::Bold } else { Self::Regular }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Slant {
    #[default]
    Normal,
    Italic,
}

impl Slant {
    pub fn css_keyword(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }

    pub fn from_italic(italic: bool) -> Self {
        if italic { Self::Italic } else { Self::Normal }
    }
}

/// The two independent style axes. Changing one never touches the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleAxes {
    pub weight: Weight,
    pub slant: Slant,
}

impl StyleAxes {
    pub fn subfamily(self) -> Subfamily {
        match (self.weight, self.slant) {
            (Weight::Regular, Slant::Normal) => Subfamily::Regular,
            (Weight::Bold, Slant::Normal) => Subfamily::Bold,
            (Weight::Regular, Slant::Italic) => Subfamily::Italic,
            (Weight::Bold, Slant::Italic) => Subfamily::BoldItalic,
        }
    }
}

/// Combined weight/slant selector used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Subfamily {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl Subfamily {
    pub fn all() -> &'static [Subfamily] {
        &[Self::Regular, Self::Bold, Self::Italic, Self::BoldItalic]
    }

    pub fn axes(self) -> StyleAxes {
        let (weight, slant) = match self {
            Self::Regular => (Weight::Regular, Slant::Normal),
            Self::Bold => (Weight::Bold, Slant::Normal),
            Self::Italic => (Weight::Regular, Slant::Italic),
            Self::BoldItalic => (Weight::Bold, Slant::Italic),
        };
        StyleAxes { weight, slant }
    }

    /// Value used by selectors and the settings file.
    pub fn key(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bold-italic",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::BoldItalic => "Bold Italic",
        }
    }

    /// Suffix used in face file names, e.g. `Firple-BoldItalic.ttf`.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::BoldItalic => "BoldItalic",
        }
    }
}

impl FromStr for Subfamily {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|sub| sub.key() == s)
            .ok_or_else(|| AppError::UnknownSubfamily(s.to_string()))
    }
}

impl fmt::Display for Subfamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FamilyChoice {
    #[default]
    Firple,
    FirpleSlim,
}

impl FamilyChoice {
    pub fn all() -> &'static [FamilyChoice] {
        &[Self::Firple, Self::FirpleSlim]
    }

    /// Exact font-family value written to the preview.
    pub fn family_name(self) -> &'static str {
        match self {
            Self::Firple => "Firple",
            Self::FirpleSlim => "Firple Slim",
        }
    }

    pub fn file_prefix(self) -> &'static str {
        match self {
            Self::Firple => "Firple",
            Self::FirpleSlim => "FirpleSlim",
        }
    }
}

/// A four-character OpenType feature tag such as `cv33` or `ss11`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FeatureTag(String);

impl FeatureTag {
    pub fn new(tag: &str) -> Result<Self> {
        if tag.len() == 4 && tag.bytes().all(|b| b.is_ascii_alphanumeric()) {
            Ok(Self(tag.to_string()))
        } else {
            Err(AppError::Config(format!("invalid feature tag '{}'", tag)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FeatureTag {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<FeatureTag> for String {
    fn from(tag: FeatureTag) -> Self {
        tag.0
    }
}

impl AsRef<str> for FeatureTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Feature toggles in a fixed declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSet {
    entries: Vec<(FeatureTag, bool)>,
}

impl FeatureSet {
    /// Build a set with every declared tag disabled. Duplicate tags are rejected.
    pub fn new(declared: &[FeatureTag]) -> Result<Self> {
        let mut entries: Vec<(FeatureTag, bool)> = Vec::with_capacity(declared.len());
        for tag in declared {
            if entries.iter().any(|(t, _)| t == tag) {
                return Err(AppError::Config(format!("duplicate feature tag '{}'", tag)));
            }
            entries.push((tag.clone(), false));
        }
        Ok(Self { entries })
    }

    pub fn set(&mut self, tag: &str, enabled: bool) -> Result<()> {
        let entry = self.entry_mut(tag)?;
        entry.1 = enabled;
        Ok(())
    }

    /// Flip one tag and return its new value.
    pub fn toggle(&mut self, tag: &str) -> Result<bool> {
        let entry = self.entry_mut(tag)?;
        entry.1 = !entry.1;
        Ok(entry.1)
    }

    pub fn is_enabled(&self, tag: &str) -> bool {
        self.entries.iter().any(|(t, on)| *on && t.as_str() == tag)
    }

    pub fn enabled(&self) -> impl Iterator<Item = &FeatureTag> {
        self.entries.iter().filter(|(_, on)| *on).map(|(t, _)| t)
    }

    /// `"cv33" 1, "ss11" 1` for the enabled tags in declared order, or an
    /// empty string when nothing is enabled.
    pub fn settings_string(&self) -> String {
        self.enabled()
            .map(|tag| format!("\"{}\" 1", tag))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn entry_mut(&mut self, tag: &str) -> Result<&mut (FeatureTag, bool)> {
        self.entries
            .iter_mut()
            .find(|(t, _)| t.as_str() == tag)
            .ok_or_else(|| AppError::UnknownFeature(tag.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub axes: StyleAxes,
    pub family: FamilyChoice,
    pub size_px: u32,
    pub ligatures: bool,
    pub features: FeatureSet,
}

impl ControlState {
    pub fn subfamily(&self) -> Subfamily {
        self.axes.subfamily()
    }
}

/// CSS-level presentation applied to the preview region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedStyle {
    pub font_family: &'static str,
    pub font_weight: u16,
    pub font_style: &'static str,
    pub font_size_px: u32,
    pub font_variant_ligatures: &'static str,
    pub font_feature_settings: String,
}

impl DerivedStyle {
    pub fn derive(state: &ControlState) -> Self {
        Self {
            font_family: state.family.family_name(),
            font_weight: state.axes.weight.css_value(),
            font_style: state.axes.slant.css_keyword(),
            font_size_px: state.size_px,
            font_variant_ligatures: if state.ligatures { "normal" } else { "none" },
            font_feature_settings: state.features.settings_string(),
        }
    }

    /// Text mirrored into the size label next to the slider.
    pub fn size_label(&self) -> String {
        format!("{}px", self.font_size_px)
    }

    /// Declaration block for the style readout. `font-feature-settings` is
    /// left out entirely when no feature is enabled.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "font-family: \"{}\"; font-weight: {}; font-style: {}; font-size: {}px; font-variant-ligatures: {};",
            self.font_family,
            self.font_weight,
            self.font_style,
            self.font_size_px,
            self.font_variant_ligatures,
        );
        if !self.font_feature_settings.is_empty() {
            css.push_str(&format!(" font-feature-settings: {};", self.font_feature_settings));
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<FeatureTag> {
        names.iter().map(|n| FeatureTag::new(n).unwrap()).collect()
    }

    fn state() -> ControlState {
        ControlState {
            axes: StyleAxes::default(),
            family: FamilyChoice::Firple,
            size_px: 16,
            ligatures: true,
            features: FeatureSet::new(&tags(&["cv33", "ss11"])).unwrap(),
        }
    }

    #[test]
    fn test_subfamily_axes_round_trip() {
        for sub in Subfamily::all() {
            assert_eq!(sub.axes().subfamily(), *sub);
        }
    }

    #[test]
    fn test_subfamily_parse() {
        assert_eq!("bold-italic".parse::<Subfamily>().unwrap(), Subfamily::BoldItalic);
        assert_eq!("regular".parse::<Subfamily>().unwrap(), Subfamily::Regular);
        let err = "semibold".parse::<Subfamily>().unwrap_err();
        assert!(matches!(err, AppError::UnknownSubfamily(ref v) if v == "semibold"));
    }

    #[test]
    fn test_subfamily_serialization() {
        let json = serde_json::to_string(&Subfamily::BoldItalic).unwrap();
        assert_eq!(json, "\"bold-italic\"");
    }

    #[test]
    fn test_family_names() {
        assert_eq!(FamilyChoice::Firple.family_name(), "Firple");
        assert_eq!(FamilyChoice::FirpleSlim.family_name(), "Firple Slim");
    }

    #[test]
    fn test_feature_tag_validation() {
        assert!(FeatureTag::new("cv33").is_ok());
        assert!(FeatureTag::new("liga").is_ok());
        assert!(FeatureTag::new("cv3").is_err());
        assert!(FeatureTag::new("ss\"1").is_err());
        assert!(serde_json::from_str::<FeatureTag>("\"toolong\"").is_err());
    }

    #[test]
    fn test_feature_set_rejects_duplicates() {
        let err = FeatureSet::new(&tags(&["cv33", "cv33"])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_feature_string_uses_declared_order() {
        let mut a = FeatureSet::new(&tags(&["cv33", "ss11"])).unwrap();
        a.toggle("ss11").unwrap();
        a.toggle("cv33").unwrap();
        assert_eq!(a.settings_string(), "\"cv33\" 1, \"ss11\" 1");
    }

    #[test]
    fn test_feature_string_omits_disabled() {
        let mut set = FeatureSet::new(&tags(&["cv33", "ss11"])).unwrap();
        assert_eq!(set.settings_string(), "");
        set.toggle("ss11").unwrap();
        assert_eq!(set.settings_string(), "\"ss11\" 1");
        set.toggle("ss11").unwrap();
        assert_eq!(set.settings_string(), "");
        assert!(!set.settings_string().contains(" 0"));
    }

    #[test]
    fn test_feature_unknown_tag() {
        let mut set = FeatureSet::new(&tags(&["cv33"])).unwrap();
        assert!(matches!(set.toggle("zero"), Err(AppError::UnknownFeature(_))));
        assert!(matches!(set.set("zero", true), Err(AppError::UnknownFeature(_))));
    }

    #[test]
    fn test_derive_defaults() {
        let style = DerivedStyle::derive(&state());
        assert_eq!(style.font_family, "Firple");
        assert_eq!(style.font_weight, 400);
        assert_eq!(style.font_style, "normal");
        assert_eq!(style.font_size_px, 16);
        assert_eq!(style.font_variant_ligatures, "normal");
        assert_eq!(style.font_feature_settings, "");
        assert_eq!(style.size_label(), "16px");
    }

    #[test]
    fn test_derive_bold_italic_slim() {
        let mut s = state();
        s.axes = Subfamily::BoldItalic.axes();
        s.family = FamilyChoice::FirpleSlim;
        s.ligatures = false;
        let style = DerivedStyle::derive(&s);
        assert_eq!(style.font_family, "Firple Slim");
        assert_eq!(style.font_weight, 700);
        assert_eq!(style.font_style, "italic");
        assert_eq!(style.font_variant_ligatures, "none");
        assert_eq!(s.subfamily(), Subfamily::BoldItalic);
    }

    #[test]
    fn test_css_readout() {
        let mut s = state();
        let css = DerivedStyle::derive(&s).to_css();
        assert_eq!(
            css,
            "font-family: \"Firple\"; font-weight: 400; font-style: normal; font-size: 16px; font-variant-ligatures: normal;"
        );

        s.features.toggle("cv33").unwrap();
        let css = DerivedStyle::derive(&s).to_css();
        assert!(css.ends_with(" font-feature-settings: \"cv33\" 1;"));
    }
}
