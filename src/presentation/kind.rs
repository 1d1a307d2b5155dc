use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Modal presentation style of a stack level.
///
/// Closed set: new styles are added as variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationKind {
    /// Full-height card sliding over the presenter.
    Sheet,
    /// Partial-height sheet anchored to the bottom edge.
    BottomSheet,
    /// Alert-style surface drawn over a dimmed backdrop.
    Overlay,
}

impl PresentationKind {
    pub const ALL: [PresentationKind; 3] = [
        PresentationKind::Sheet,
        PresentationKind::BottomSheet,
        PresentationKind::Overlay,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PresentationKind::Sheet => "sheet",
            PresentationKind::BottomSheet => "bottom_sheet",
            PresentationKind::Overlay => "overlay",
        }
    }
}

impl fmt::Display for PresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown presentation kind '{input}' (expected sheet, bottom_sheet or overlay)")]
pub struct ParseKindError {
    pub input: String,
}

impl FromStr for PresentationKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sheet" => Ok(PresentationKind::Sheet),
            "bottom_sheet" | "bottom-sheet" | "bottomsheet" => Ok(PresentationKind::BottomSheet),
            "overlay" => Ok(PresentationKind::Overlay),
            _ => Err(ParseKindError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_both_bottom_sheet_spellings() {
        assert_eq!(
            "bottom-sheet".parse::<PresentationKind>(),
            Ok(PresentationKind::BottomSheet)
        );
        assert_eq!(
            "Bottom_Sheet".parse::<PresentationKind>(),
            Ok(PresentationKind::BottomSheet)
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "popover".parse::<PresentationKind>().unwrap_err();
        assert_eq!(err.input, "popover");
    }

    #[test]
    fn display_matches_serde_name() {
        for kind in PresentationKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }
}
