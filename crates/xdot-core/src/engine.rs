//! Layout engine selection.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// A Graphviz layout program able to emit xdot output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutEngine {
    /// Hierarchical layout for directed graphs
    #[default]
    Dot,
    /// Spring model layout
    Neato,
    /// Force-directed placement
    Fdp,
    /// Scalable force-directed placement for large graphs
    Sfdp,
    /// Circular layout
    Circo,
    /// Radial layout
    Twopi,
    /// Layout for clustered graphs
    Osage,
    /// Squarified treemap layout
    Patchwork,
}

impl LayoutEngine {
    /// All engines, in the order they are listed to users.
    pub const ALL: [LayoutEngine; 8] = [
        Self::Dot,
        Self::Neato,
        Self::Fdp,
        Self::Sfdp,
        Self::Circo,
        Self::Twopi,
        Self::Osage,
        Self::Patchwork,
    ];

    /// Returns the program name of the engine
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Neato => "neato",
            Self::Fdp => "fdp",
            Self::Sfdp => "sfdp",
            Self::Circo => "circo",
            Self::Twopi => "twopi",
            Self::Osage => "osage",
            Self::Patchwork => "patchwork",
        }
    }
}

impl fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|engine| engine.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let valid = Self::ALL.map(Self::as_str).join(", ");
                format!("invalid layout engine `{s}`, valid values: {valid}")
            })
    }
}
