//! Sheet-role classification.
//!
//! Works purely on sheet names: matching is case-insensitive with whitespace
//! and underscores stripped, so "Media Mix", "media_mix" and "MEDIAMIX" all
//! compare equal. Classification never fails; a role with no matching sheet
//! gets an empty name and downstream processing produces an empty table.

use serde::{Deserialize, Serialize};

/// The semantic purpose assigned to a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SheetRole {
    Raw,
    MediaMix,
    MediaDetail,
    Unclassified,
}

/// Role assignment for one workbook's sheet names.
///
/// Names are pairwise distinct across roles: the raw sheet never doubles as
/// the media-mix sheet and neither appears among the detail sheets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRoles {
    pub raw_name: String,
    pub media_mix_name: String,
    pub media_detail_names: Vec<String>,
}

impl SheetRoles {
    /// Look up the role assigned to a sheet name.
    #[must_use]
    pub fn role_of(&self, name: &str) -> SheetRole {
        if !self.raw_name.is_empty() && name == self.raw_name {
            SheetRole::Raw
        } else if !self.media_mix_name.is_empty() && name == self.media_mix_name {
            SheetRole::MediaMix
        } else if self.media_detail_names.iter().any(|n| n == name) {
            SheetRole::MediaDetail
        } else {
            SheetRole::Unclassified
        }
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect()
}

fn find_media_mix(names: &[String], normalized: &[String], raw_name: &str) -> String {
    let candidates = || {
        names
            .iter()
            .zip(normalized.iter())
            .filter(|(name, _)| name.as_str() != raw_name)
    };

    if let Some((name, _)) = candidates().find(|(_, n)| n.contains("mediamix")) {
        return name.clone();
    }

    if let Some((name, _)) = candidates().find(|(_, n)| {
        n.contains("budget") || n.contains("plan") || n.contains("goal") || n.contains("mix") || n.contains("믹스")
    }) {
        return name.clone();
    }

    if let Some((name, _)) = candidates().find(|(_, n)| {
        !n.contains("raw") && (n.contains("summary") || n.contains("total") || n.contains("종합"))
    }) {
        return name.clone();
    }

    String::new()
}

/// Assign roles to a workbook's sheet names.
///
/// Raw: the first name carrying a raw/source-data marker, else the first
/// sheet. Media mix: tiered matching ("mediamix", then budget/plan/goal/mix
/// tokens, then summary/total markers that are not themselves raw). Media
/// detail: the sheets authored before the mix sheet when it sits past the
/// front of the workbook, otherwise everything left over; the raw sheet is
/// never a detail sheet.
#[must_use]
pub fn classify(sheet_names: &[String]) -> SheetRoles {
    let normalized: Vec<String> = sheet_names.iter().map(|n| normalize(n)).collect();

    let raw_name = sheet_names
        .iter()
        .zip(normalized.iter())
        .find(|(_, n)| n.contains("raw") || n.contains("로데이터"))
        .map(|(name, _)| name.clone())
        .or_else(|| sheet_names.first().cloned())
        .unwrap_or_default();

    let media_mix_name = find_media_mix(sheet_names, &normalized, &raw_name);

    let mix_position = sheet_names.iter().position(|n| *n == media_mix_name);
    let media_detail_names: Vec<String> = match mix_position {
        Some(pos) if pos > 0 => sheet_names[..pos]
            .iter()
            .filter(|n| **n != raw_name)
            .cloned()
            .collect(),
        _ => sheet_names
            .iter()
            .filter(|n| **n != raw_name && **n != media_mix_name)
            .cloned()
            .collect(),
    };

    SheetRoles {
        raw_name,
        media_mix_name,
        media_detail_names,
    }
}
