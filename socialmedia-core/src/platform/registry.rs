//! Platform Registry
//!
//! Provides the fixed list of platforms a block offers, in registry order.
//! Registry order is the fallback ordering whenever weights tie.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The two block variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// "Follow us" block: one outbound link per platform.
    Follow,
    /// "Share this page" block: one on/off switch per platform.
    Share,
}

impl BlockKind {
    /// Returns the stable identifier of the block kind.
    pub fn id(&self) -> &'static str {
        match self {
            BlockKind::Follow => "follow",
            BlockKind::Share => "share",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when parsing a block kind from an unrecognized string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown block kind: {0}")]
pub struct UnknownBlockKind(pub String);

impl FromStr for BlockKind {
    type Err = UnknownBlockKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "follow" | "links" => Ok(BlockKind::Follow),
            "share" | "sharing" => Ok(BlockKind::Share),
            _ => Err(UnknownBlockKind(s.to_string())),
        }
    }
}

/// A supported platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Platform {
    /// Stable identifier (lowercase, no spaces, e.g. "facebook").
    id: String,
    /// Source display name, also used as the translation key (e.g. "Google+").
    display_name: String,
}

impl Platform {
    /// Creates a new platform definition.
    pub fn new(id: &str, display_name: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
        }
    }

    /// Returns the platform's unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the untranslated display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

const FOLLOW_PLATFORMS: [(&str, &str); 6] = [
    ("facebook", "Facebook"),
    ("linkedin", "Linkedin"),
    ("twitter", "Twitter"),
    ("googleplus", "Google+"),
    ("instagram", "Instagram"),
    ("reddit", "Reddit"),
];

const SHARE_PLATFORMS: [(&str, &str); 6] = [
    ("facebook", "Facebook"),
    ("linkedin", "Linkedin"),
    ("twitter", "Twitter"),
    ("googleplus", "Google+"),
    ("reddit", "Reddit"),
    ("mail", "Mail"),
];

/// Ordered, immutable list of platforms available to one block kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRegistry {
    kind: BlockKind,
    platforms: Vec<Platform>,
}

impl PlatformRegistry {
    /// Creates a registry from an explicit platform list.
    ///
    /// Later duplicates of an id are dropped so every id appears once.
    pub fn new(kind: BlockKind, platforms: Vec<Platform>) -> Self {
        let mut unique: Vec<Platform> = Vec::with_capacity(platforms.len());
        for platform in platforms {
            if !unique.iter().any(|p| p.id == platform.id) {
                unique.push(platform);
            }
        }
        Self {
            kind,
            platforms: unique,
        }
    }

    /// Platforms offered by the follow block.
    pub fn follow() -> Self {
        Self::from_table(BlockKind::Follow, &FOLLOW_PLATFORMS)
    }

    /// Platforms offered by the sharing block.
    pub fn share() -> Self {
        Self::from_table(BlockKind::Share, &SHARE_PLATFORMS)
    }

    /// Returns the built-in registry for a block kind.
    pub fn for_kind(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Follow => Self::follow(),
            BlockKind::Share => Self::share(),
        }
    }

    fn from_table(kind: BlockKind, table: &[(&str, &str)]) -> Self {
        Self {
            kind,
            platforms: table
                .iter()
                .map(|(id, name)| Platform::new(id, name))
                .collect(),
        }
    }

    /// Returns the block kind this registry belongs to.
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Returns all platforms in registry order.
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Returns all platform ids in registry order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.platforms.iter().map(|p| p.id())
    }

    /// Gets a platform by id. Ids are case-sensitive.
    pub fn get(&self, id: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    /// Returns true if the id belongs to this registry.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns the position of a platform in registry order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.platforms.iter().position(|p| p.id == id)
    }

    /// Returns the number of platforms in the registry.
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
