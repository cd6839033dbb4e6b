use serde::{Deserialize, Serialize};
use std::fmt;

/// Combine requests need at least two source images.
pub const MIN_COMBINE_IMAGES: usize = 2;
/// Combine requests accept at most eight source images.
pub const MAX_COMBINE_IMAGES: usize = 8;
/// Generation accepts at most eight reference images.
pub const MAX_REFERENCE_IMAGES: usize = 8;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    Generate,
    Edit,
    Combine,
}

impl GenerationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationKind::Generate => "generate",
            GenerationKind::Edit => "edit",
            GenerationKind::Combine => "combine",
        }
    }
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend model tiers. `Flash` is the default tier; `Pro` is the only
/// tier that honors reference images.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Flash,
    Pro,
}

impl ModelTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Flash => "flash",
            ModelTier::Pro => "pro",
        }
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
