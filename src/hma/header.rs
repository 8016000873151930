//! Fixed header of an HMA file

use tracing::{debug, warn};

use super::cursor::HmaCursor;
use super::descriptor::{ArmorFacings, TechProfile};
use super::types::{ArmorKind, ChassisKind, EngineKind, TechBase};
use crate::error::Result;

const VERSION_LEN: usize = 5;
const COMPONENT_REGION_LEN: usize = 92;
const OMNI_MARKER: &[u8] = b"omni";

/// Everything before the weapon list
#[derive(Debug, Clone, PartialEq)]
pub struct HmaHeader {
    pub version: String,
    pub design_flags: u16,
    pub chassis: ChassisKind,
    pub name: String,
    pub rules_level: u16,
    pub year: u16,
    pub omni: bool,
    pub tech: TechProfile,
    pub engine_rating: u16,
    pub engine_kind: EngineKind,
    pub cruise_mp: u16,
    pub armor: ArmorFacings,
}

impl HmaHeader {
    pub const DESIGN_STANDARD: u16 = 0x1;
    pub const DESIGN_MODIFIED: u16 = 0x2;
    pub const DESIGN_CUSTOM: u16 = 0x4;

    /// Parse the header, leaving the cursor on the weapon count
    pub fn parse(cursor: &mut HmaCursor<'_>) -> Result<Self> {
        let version = String::from_utf8_lossy(cursor.read_blob(VERSION_LEN)?).into_owned();
        let design_flags = cursor.read_u16()?;
        let chassis = ChassisKind::try_from(cursor.read_u16()?)?;
        cursor.skip(18)?;

        let name = cursor.read_prefixed_text()?;
        cursor.skip(3)?;
        let rules_level = cursor.read_u16()?;
        let year = cursor.read_u16()?;
        cursor.skip(40)?;

        let summary = cursor.read_prefixed_blob()?;
        let omni = contains_omni(summary);

        let region_start = cursor.position();
        let base = tech_or_default(cursor.read_u16()?, "unit");
        let mut components = [0u16; 4];
        for component in components.iter_mut() {
            *component = cursor.read_u16()?;
        }
        let tech = if base == TechBase::Mixed {
            // Leading entry is the internal structure tech and does not affect lookups
            TechProfile {
                base,
                engine: tech_or_default(components[1], "engine"),
                targeting_computer: tech_or_default(components[2], "targeting computer"),
                armor: tech_or_default(components[3], "armor"),
            }
        } else {
            TechProfile::uniform(base)
        };
        let armor_kind = ArmorKind::try_from(cursor.read_u16()?)?;
        let consumed = (cursor.position() - region_start) as usize;
        cursor.skip(COMPONENT_REGION_LEN - consumed)?;

        let engine_rating = cursor.read_u16()?;
        let engine_kind = EngineKind::try_from(cursor.read_u16()?)?;
        let cruise_mp = cursor.read_u16()?;

        let front = cursor.read_u16()?;
        cursor.skip(2)?;
        let left = cursor.read_u16()?;
        cursor.skip(10)?;
        let rear = cursor.read_u16()?;
        cursor.skip(2)?;
        let right = cursor.read_u16()?;
        cursor.skip(2)?;
        cursor.skip(8)?;

        cursor.skip(if omni { 12 } else { 14 })?;

        debug!(
            "Header: {} ({}, {}), {} {} engine, omni={}",
            name, chassis, base, engine_rating, engine_kind, omni
        );

        Ok(Self {
            version,
            design_flags,
            chassis,
            name,
            rules_level,
            year,
            omni,
            tech,
            engine_rating,
            engine_kind,
            cruise_mp,
            armor: ArmorFacings {
                kind: armor_kind,
                front,
                left,
                right,
                rear,
            },
        })
    }
}

fn tech_or_default(code: u16, part: &str) -> TechBase {
    TechBase::try_from(code).unwrap_or_else(|_| {
        warn!("Unknown {} tech base {}, assuming Inner Sphere", part, code);
        TechBase::InnerSphere
    })
}

fn contains_omni(summary: &[u8]) -> bool {
    summary
        .windows(OMNI_MARKER.len())
        .any(|window| window == OMNI_MARKER)
}
