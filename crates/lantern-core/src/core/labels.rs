use crate::core::models::part::PartType;
use phf::{Map, phf_map};

/// Label reported when a pairing has no dedicated entry in the table.
pub const ORDINARY_CONNECTION: &str = "ordinary connection";

static CONNECTION_LABELS: Map<&'static str, &'static str> = phf_map! {
    "frame-panel" => "frame-to-panel joint",
    "panel-decoration" => "panel-to-ornament joint",
    "decoration-light" => "ornament-to-wick joint",
    "frame-connector" => "frame-to-connector joint",
};

/// Display name used when naming a part type in user-facing feedback.
pub fn type_label(part_type: PartType) -> &'static str {
    match part_type {
        PartType::Frame => "frame",
        PartType::Panel => "lantern panel",
        PartType::Decoration => "ornament",
        PartType::Light => "wick",
        PartType::Connector => "connector",
    }
}

/// Display name for a pairing of part types. The table is keyed on ordered
/// pairs; both orders are tried before falling back to the generic label.
pub fn connection_label(a: PartType, b: PartType) -> &'static str {
    let forward = format!("{}-{}", a.as_str(), b.as_str());
    if let Some(label) = CONNECTION_LABELS.get(forward.as_str()) {
        return label;
    }
    let reverse = format!("{}-{}", b.as_str(), a.as_str());
    CONNECTION_LABELS
        .get(reverse.as_str())
        .copied()
        .unwrap_or(ORDINARY_CONNECTION)
}
