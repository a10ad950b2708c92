use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of structural roles a lantern part can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    /// Load-bearing skeleton of the lantern.
    Frame,
    /// A translucent face mounted on the frame.
    Panel,
    /// Ornamental attachment (tassels, carvings).
    Decoration,
    /// The light source at the heart of the lantern.
    Light,
    /// A fitting that bridges frame segments.
    Connector,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown part type '{0}'")]
pub struct ParsePartTypeError(String);

impl PartType {
    pub const ALL: [PartType; 5] = [
        PartType::Frame,
        PartType::Panel,
        PartType::Decoration,
        PartType::Light,
        PartType::Connector,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Frame => "frame",
            PartType::Panel => "panel",
            PartType::Decoration => "decoration",
            PartType::Light => "light",
            PartType::Connector => "connector",
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartType {
    type Err = ParsePartTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "frame" => Ok(PartType::Frame),
            "panel" => Ok(PartType::Panel),
            "decoration" => Ok(PartType::Decoration),
            "light" => Ok(PartType::Light),
            "connector" => Ok(PartType::Connector),
            other => Err(ParsePartTypeError(other.to_string())),
        }
    }
}

/// How a connection point physically engages its counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Socket,
    Tenon,
    Hook,
}

/// A labeled attachment offset on a part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionPoint {
    /// Offset from the part origin, in design units.
    pub offset: Vector3<f64>,
    pub kind: PointKind,
}

impl ConnectionPoint {
    pub fn new(offset: Vector3<f64>, kind: PointKind) -> Self {
        Self { offset, kind }
    }
}

/// An immutable description of one lantern part, owned by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDescriptor {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub part_type: PartType,
    /// Types this part may legally join to. The check is directional: this
    /// list gates what *this* part accepts, not what accepts it.
    #[serde(default)]
    pub compatible_types: Vec<PartType>,
    #[serde(default)]
    pub connection_points: Vec<ConnectionPoint>,
    /// Craft difficulty rating, at least 1. Higher ratings tighten the
    /// accuracy a joint attempt can achieve.
    #[serde(default = "default_difficulty")]
    pub difficulty: u32,
}

fn default_difficulty() -> u32 {
    1
}

impl PartDescriptor {
    pub fn new(id: u32, name: &str, part_type: PartType) -> Self {
        Self {
            id,
            name: name.to_string(),
            part_type,
            compatible_types: Vec::new(),
            connection_points: Vec::new(),
            difficulty: default_difficulty(),
        }
    }

    pub fn is_compatible_with(&self, other: PartType) -> bool {
        self.compatible_types.contains(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_type_round_trips_through_its_string_form() {
        for part_type in PartType::ALL {
            assert_eq!(part_type.as_str().parse::<PartType>(), Ok(part_type));
        }
    }

    #[test]
    fn part_type_parsing_trims_whitespace() {
        assert_eq!(" panel ".parse::<PartType>(), Ok(PartType::Panel));
    }

    #[test]
    fn part_type_parsing_rejects_unknown_names() {
        let err = "candle".parse::<PartType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown part type 'candle'");
    }

    #[test]
    fn new_descriptor_defaults_to_no_points_and_difficulty_one() {
        let part = PartDescriptor::new(7, "spare rib", PartType::Frame);
        assert!(part.compatible_types.is_empty());
        assert!(part.connection_points.is_empty());
        assert_eq!(part.difficulty, 1);
    }

    #[test]
    fn compatibility_consults_only_the_declared_list() {
        let mut frame = PartDescriptor::new(1, "main frame", PartType::Frame);
        frame.compatible_types = vec![PartType::Panel, PartType::Connector];

        assert!(frame.is_compatible_with(PartType::Panel));
        assert!(frame.is_compatible_with(PartType::Connector));
        assert!(!frame.is_compatible_with(PartType::Light));
        assert!(!frame.is_compatible_with(PartType::Frame));
    }

    #[test]
    fn descriptor_deserializes_with_missing_optional_fields() {
        let part: PartDescriptor =
            toml::from_str("id = 3\nname = \"wick\"\ntype = \"light\"").unwrap();
        assert_eq!(part.part_type, PartType::Light);
        assert!(part.compatible_types.is_empty());
        assert!(part.connection_points.is_empty());
        assert_eq!(part.difficulty, 1);
    }
}
