//! Size presets. Purely presentational: no preset changes behavior.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three presentational presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Small
    Sm,
    /// Medium
    #[default]
    Md,
    /// Large
    Lg,
}

/// Error returned when parsing an unknown size name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown size '{0}' (expected sm, md or lg)")]
pub struct SizeParseError(pub String);

impl Size {
    pub const ALL: [Size; 3] = [Size::Sm, Size::Md, Size::Lg];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }

    /// Class tokens for the checkbox box, its label and its glyph.
    pub fn checkbox(self) -> CheckboxPreset {
        match self {
            Size::Sm => CheckboxPreset {
                control: "w-3 h-3",
                label: "text-sm",
                glyph: "w-2 h-2",
            },
            Size::Md => CheckboxPreset {
                control: "w-4 h-4",
                label: "text-base",
                glyph: "w-3 h-3",
            },
            Size::Lg => CheckboxPreset {
                control: "w-5 h-5",
                label: "text-lg",
                glyph: "w-4 h-4",
            },
        }
    }

    /// Track and thumb dimensions for the switch, in spacing units.
    pub fn switch(self) -> SwitchMetrics {
        match self {
            Size::Sm => SwitchMetrics::new(8, 4, 3),
            Size::Md => SwitchMetrics::new(10, 5, 4),
            Size::Lg => SwitchMetrics::new(12, 6, 5),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sm" => Ok(Size::Sm),
            "md" => Ok(Size::Md),
            "lg" => Ok(Size::Lg),
            other => Err(SizeParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxPreset {
    pub control: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
}

/// Switch geometry in spacing units.
///
/// `travel` is derived so that a checked thumb ends flush with the far edge
/// of the track: `thumb + travel == track_width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchMetrics {
    pub track_width: u8,
    pub track_height: u8,
    pub thumb: u8,
    pub travel: u8,
}

impl SwitchMetrics {
    const fn new(track_width: u8, track_height: u8, thumb: u8) -> Self {
        Self {
            track_width,
            track_height,
            thumb,
            travel: track_width - thumb,
        }
    }

    pub fn track_classes(&self) -> String {
        format!("w-{} h-{}", self.track_width, self.track_height)
    }

    pub fn thumb_classes(&self) -> String {
        format!("w-{0} h-{0}", self.thumb)
    }

    /// Thumb offset class for the given checked value.
    pub fn translate_class(&self, checked: bool) -> String {
        let offset = if checked { self.travel } else { 0 };
        format!("translate-x-{offset}")
    }
}
