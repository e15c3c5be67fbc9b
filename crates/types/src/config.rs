//! Layout parameters for a cheat sheet.

use crate::error::ModelError;
use crate::geometry::Size;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
}

impl PaperSize {
    /// Portrait dimensions in points.
    pub fn dimensions_pt(&self) -> Size {
        match self {
            PaperSize::Letter => Size::new(612.0, 792.0),
            PaperSize::A4 => Size::new(595.2756, 841.8898),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaperSize::Letter => "letter",
            PaperSize::A4 => "a4",
        }
    }
}

impl FromStr for PaperSize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "letter" => Ok(PaperSize::Letter),
            "a4" => Ok(PaperSize::A4),
            _ => Err(ModelError::UnknownPaperSize(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl FromStr for Orientation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(ModelError::UnknownOrientation(s.to_string())),
        }
    }
}

macro_rules! string_enum_serde {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(de::Error::custom)
            }
        }
    };
}

string_enum_serde!(PaperSize);
string_enum_serde!(Orientation);

/// Numeric and mode parameters that drive layout.
///
/// Built from a configuration mapping, only recognized option names are bound;
/// anything else in the mapping is ignored. Missing options take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub font_size: f32,
    pub header_font_size: f32,
    pub margin: f32,
    pub columns: u32,
    pub row_height: f32,
    pub section_spacing: f32,
    pub subsection_spacing: f32,
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    /// Two rows of frames per page; the top row fills before the bottom row.
    pub fill_top_half: bool,
    /// Drop the inter-section spacing when a section starts at the top of a frame.
    pub section_align_flush: bool,
    /// Never split sections with fewer than three hotkeys.
    pub section_no_awkward_breaks: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_size: 7.0,
            header_font_size: 10.0,
            margin: 25.0,
            columns: 5,
            row_height: 11.0,
            section_spacing: 8.0,
            subsection_spacing: 4.0,
            paper_size: PaperSize::Letter,
            orientation: Orientation::Portrait,
            fill_top_half: false,
            section_align_flush: true,
            section_no_awkward_breaks: true,
        }
    }
}

impl LayoutConfig {
    /// Page dimensions in points after applying the orientation.
    pub fn page_size(&self) -> Size {
        let portrait = self.paper_size.dimensions_pt();
        match self.orientation {
            Orientation::Portrait => portrait,
            Orientation::Landscape => portrait.transposed(),
        }
    }

    /// Checks the ranges layout depends on.
    pub fn validate(&self) -> Result<(), ModelError> {
        self.problems()
            .into_iter()
            .next()
            .map_or(Ok(()), |problem| Err(ModelError::InvalidConfig(problem)))
    }

    /// Every range violation, in field order.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.columns < 1 {
            problems.push(format!("columns must be at least 1, got {}", self.columns));
        }
        for (name, value) in [
            ("font_size", self.font_size),
            ("header_font_size", self.header_font_size),
            ("row_height", self.row_height),
        ] {
            if !(value > 0.0) {
                problems.push(format!("{name} must be positive, got {value}"));
            }
        }
        for (name, value) in [
            ("margin", self.margin),
            ("section_spacing", self.section_spacing),
            ("subsection_spacing", self.subsection_spacing),
        ] {
            if !(value >= 0.0) {
                problems.push(format!("{name} must not be negative, got {value}"));
            }
        }
        problems
    }
}
