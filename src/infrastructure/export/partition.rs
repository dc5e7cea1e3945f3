use std::fmt;

use crate::domain::Asset;

/// Export categories keyed by source-file extension. `General` holds
/// everything that is not `.ai`/`.eps`/`.svg` and falls back to the full
/// set when that bucket would otherwise be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportCategory {
    Ai,
    Eps,
    Svg,
    General,
}

impl ExportCategory {
    pub const ALL: [ExportCategory; 4] = [
        ExportCategory::Ai,
        ExportCategory::Eps,
        ExportCategory::Svg,
        ExportCategory::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportCategory::Ai => "AI",
            ExportCategory::Eps => "EPS",
            ExportCategory::Svg => "SVG",
            ExportCategory::General => "General",
        }
    }

    pub fn csv_file_name(&self) -> &'static str {
        match self {
            ExportCategory::Ai => "metadata_ai.csv",
            ExportCategory::Eps => "metadata_eps.csv",
            ExportCategory::Svg => "metadata_svg.csv",
            ExportCategory::General => "metadata_general.csv",
        }
    }

    fn matches(&self, extension: Option<&str>) -> bool {
        match self {
            ExportCategory::Ai => extension == Some("ai"),
            ExportCategory::Eps => extension == Some("eps"),
            ExportCategory::Svg => extension == Some("svg"),
            ExportCategory::General => !matches!(extension, Some("ai") | Some("eps") | Some("svg")),
        }
    }
}

impl fmt::Display for ExportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn partition_assets(assets: &[Asset]) -> Vec<(ExportCategory, Vec<&Asset>)> {
    ExportCategory::ALL
        .iter()
        .map(|category| {
            let mut members: Vec<&Asset> = assets
                .iter()
                .filter(|a| category.matches(a.source.extension().as_deref()))
                .collect();

            if *category == ExportCategory::General && members.is_empty() {
                members = assets.iter().collect();
            }

            (*category, members)
        })
        .collect()
}
