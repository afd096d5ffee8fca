//! Crop and growth stage types shared by the registries and the page generator

use serde::Serialize;

/// Number of display stages on every crop page
pub const STAGE_COUNT: usize = 10;

/// Crop type whose stage table is used when a crop's own type has none
pub const DEFAULT_CROP_TYPE: &str = "default";

/// A crop species with its own reference page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropRecord {
    /// URL/filename-safe identifier, also the image asset folder name
    pub slug: &'static str,
    pub display_name: &'static str,
    pub latin_name: &'static str,
    /// Selects the stage table (e.g. "cereal", "legume")
    pub crop_type: &'static str,
}

impl CropRecord {
    pub const fn new(
        slug: &'static str,
        display_name: &'static str,
        latin_name: &'static str,
        crop_type: &'static str,
    ) -> Self {
        Self {
            slug,
            display_name,
            latin_name,
            crop_type,
        }
    }
}

/// Ten BBCH display stages for one crop type.
///
/// Index `i` of every array describes the same growth phase.
#[derive(Debug, PartialEq, Eq)]
pub struct StageTable {
    pub codes: [&'static str; STAGE_COUNT],
    pub names: [&'static str; STAGE_COUNT],
    pub descriptions: [&'static str; STAGE_COUNT],
    pub alts: [&'static str; STAGE_COUNT],
}

/// One column of a stage table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    /// 1-based stage number, as used in image file names
    pub number: usize,
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub alt: &'static str,
}

impl StageTable {
    /// Iterate the stages in growth order
    pub fn stages(&self) -> impl Iterator<Item = Stage> + '_ {
        (0..STAGE_COUNT).map(move |i| Stage {
            number: i + 1,
            code: self.codes[i],
            name: self.names[i],
            description: self.descriptions[i],
            alt: self.alts[i],
        })
    }
}
