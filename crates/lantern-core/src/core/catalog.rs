use crate::core::models::part::{ConnectionPoint, PartDescriptor, PartType, PointKind};
use nalgebra::Vector3;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file '{path}'", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file '{path}'", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate part id {0} in catalog")]
    DuplicateId(u32),

    #[error("part {id} ('{name}') has difficulty {difficulty}; the minimum rating is 1")]
    InvalidDifficulty { id: u32, name: String, difficulty: u32 },
}

/// On-disk catalog format: a flat list of `[[parts]]` entries.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    parts: Vec<PartDescriptor>,
}

/// The collaborator that owns part descriptors, keyed by part id.
///
/// The evaluator itself never touches the catalog; callers look parts up here
/// and hand plain descriptors to [`crate::workflows::evaluate`].
#[derive(Debug, Default, Clone)]
pub struct PartCatalog {
    parts: BTreeMap<u32, PartDescriptor>,
}

impl PartCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a catalog from a TOML file, validating every entry.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile = toml::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_parts(file.parts)
    }

    pub fn from_parts(
        parts: impl IntoIterator<Item = PartDescriptor>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for part in parts {
            catalog.insert(part)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, part: PartDescriptor) -> Result<(), CatalogError> {
        if part.difficulty < 1 {
            return Err(CatalogError::InvalidDifficulty {
                id: part.id,
                name: part.name,
                difficulty: part.difficulty,
            });
        }
        if self.parts.contains_key(&part.id) {
            return Err(CatalogError::DuplicateId(part.id));
        }
        self.parts.insert(part.id, part);
        Ok(())
    }

    pub fn get(&self, id: u32) -> Option<&PartDescriptor> {
        self.parts.get(&id)
    }

    /// Iterates descriptors in ascending id order.
    pub fn parts(&self) -> impl Iterator<Item = &PartDescriptor> {
        self.parts.values()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The demo set of lantern parts shipped with the original craft game.
    pub fn builtin() -> Self {
        let mut frame = PartDescriptor::new(1, "main frame", PartType::Frame);
        frame.compatible_types = vec![PartType::Panel, PartType::Connector];
        frame.connection_points = vec![
            ConnectionPoint::new(Vector3::new(0.0, 0.5, 0.0), PointKind::Socket),
            ConnectionPoint::new(Vector3::new(0.0, -0.5, 0.0), PointKind::Socket),
        ];
        frame.difficulty = 1;

        let mut panel = PartDescriptor::new(2, "triangular panel", PartType::Panel);
        panel.compatible_types = vec![PartType::Frame, PartType::Decoration];
        panel.connection_points = vec![
            ConnectionPoint::new(Vector3::new(0.5, 0.0, 0.0), PointKind::Tenon),
            ConnectionPoint::new(Vector3::new(-0.5, 0.0, 0.0), PointKind::Tenon),
        ];
        panel.difficulty = 2;

        let mut tassel = PartDescriptor::new(3, "tassel ornament", PartType::Decoration);
        tassel.compatible_types = vec![PartType::Panel, PartType::Light];
        tassel.connection_points = vec![ConnectionPoint::new(
            Vector3::new(0.0, 0.3, 0.0),
            PointKind::Hook,
        )];
        tassel.difficulty = 3;

        let mut wick = PartDescriptor::new(4, "wick", PartType::Light);
        wick.compatible_types = vec![PartType::Decoration];
        wick.difficulty = 4;

        let mut connector = PartDescriptor::new(5, "bamboo connector", PartType::Connector);
        connector.compatible_types = vec![PartType::Frame];
        connector.connection_points = vec![ConnectionPoint::new(
            Vector3::new(0.0, 0.0, 0.2),
            PointKind::Tenon,
        )];
        connector.difficulty = 2;

        Self::from_parts([frame, panel, tassel, wick, connector])
            .unwrap_or_else(|_| unreachable!("builtin catalog entries are valid"))
    }
}
