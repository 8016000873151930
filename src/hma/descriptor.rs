//! Decoded unit output model

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use super::artemis::FireControlLink;
use super::resolver::{EquipmentSymbol, UnresolvedSymbol};
use super::types::{
    ArmorKind, ChassisKind, EngineKind, MovementKind, TechBase, WeaponLocation,
};
use crate::error::{Error, Result};

/// Equipment counts per location.
///
/// Locations iterate in enum order and symbols by name. A stored count is
/// always positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentPlacement {
    locations: BTreeMap<WeaponLocation, BTreeMap<EquipmentSymbol, u32>>,
}

impl EquipmentPlacement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` of `symbol` at `location`. A zero count is ignored.
    pub fn add(&mut self, location: WeaponLocation, symbol: EquipmentSymbol, count: u32) {
        if count == 0 {
            return;
        }
        *self
            .locations
            .entry(location)
            .or_default()
            .entry(symbol)
            .or_insert(0) += count;
    }

    pub fn count(&self, location: WeaponLocation, name: &str) -> u32 {
        self.locations
            .get(&location)
            .and_then(|items| items.get(name))
            .copied()
            .unwrap_or(0)
    }

    /// Items at one location, by name
    pub fn at(&self, location: WeaponLocation) -> impl Iterator<Item = (&EquipmentSymbol, u32)> {
        self.locations
            .get(&location)
            .into_iter()
            .flat_map(|items| items.iter().map(|(symbol, count)| (symbol, *count)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeaponLocation, &EquipmentSymbol, u32)> {
        self.locations.iter().flat_map(|(location, items)| {
            items
                .iter()
                .map(move |(symbol, count)| (*location, symbol, *count))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, _, count)| count).sum()
    }
}

impl Serialize for EquipmentPlacement {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.locations.len()))?;
        for (location, items) in &self.locations {
            let by_name: BTreeMap<&str, u32> =
                items.iter().map(|(symbol, count)| (symbol.name, *count)).collect();
            map.serialize_entry(location, &by_name)?;
        }
        map.end()
    }
}

/// Base tech plus the tech of each component that may differ on Mixed designs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechProfile {
    pub base: TechBase,
    pub engine: TechBase,
    pub targeting_computer: TechBase,
    pub armor: TechBase,
}

impl TechProfile {
    pub fn uniform(base: TechBase) -> Self {
        Self {
            base,
            engine: base,
            targeting_computer: base,
            armor: base,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArmorFacings {
    pub kind: ArmorKind,
    pub front: u16,
    pub left: u16,
    pub right: u16,
    pub rear: u16,
}

impl ArmorFacings {
    pub fn total(&self) -> u32 {
        u32::from(self.front) + u32::from(self.left) + u32::from(self.right) + u32::from(self.rear)
    }
}

/// Everything decoded from one HMA file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitDescriptor {
    pub version: String,
    pub design_flags: u16,
    pub name: String,
    pub rules_level: u16,
    pub year: u16,
    pub chassis: ChassisKind,
    pub movement: MovementKind,
    pub tech: TechProfile,
    pub omni: bool,
    pub engine_rating: u16,
    pub engine_kind: EngineKind,
    pub cruise_mp: u16,
    pub armor: ArmorFacings,
    pub transport_capacity: u32,
    pub artemis: u16,
    pub fluff: Option<String>,
    pub placements: EquipmentPlacement,
    pub fire_control: Vec<FireControlLink>,
    pub unresolved: Vec<UnresolvedSymbol>,
}

impl UnitDescriptor {
    /// Reject chassis classes entity construction cannot handle
    pub fn ensure_supported(&self) -> Result<()> {
        if self.chassis.is_supported() {
            Ok(())
        } else {
            Err(Error::UnsupportedChassis(self.chassis))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_accumulates() {
        let mut placements = EquipmentPlacement::new();
        placements.add(WeaponLocation::Front, EquipmentSymbol::named("ISMediumLaser"), 2);
        placements.add(WeaponLocation::Front, EquipmentSymbol::named("ISMediumLaser"), 1);
        placements.add(WeaponLocation::Rear, EquipmentSymbol::named("ISCASE"), 0);

        assert_eq!(placements.count(WeaponLocation::Front, "ISMediumLaser"), 3);
        assert_eq!(placements.count(WeaponLocation::Rear, "ISCASE"), 0);
        assert_eq!(placements.at(WeaponLocation::Rear).count(), 0);
        assert_eq!(placements.total(), 3);
    }

    #[test]
    fn test_placement_order() {
        let mut placements = EquipmentPlacement::new();
        placements.add(WeaponLocation::Body, EquipmentSymbol::named("Supercharger"), 1);
        placements.add(WeaponLocation::Front, EquipmentSymbol::named("ISSRM6"), 1);
        placements.add(WeaponLocation::Front, EquipmentSymbol::named("ISLRM10"), 1);

        let order: Vec<_> = placements
            .iter()
            .map(|(location, symbol, _)| (location, symbol.name))
            .collect();
        assert_eq!(
            order,
            vec![
                (WeaponLocation::Front, "ISLRM10"),
                (WeaponLocation::Front, "ISSRM6"),
                (WeaponLocation::Body, "Supercharger"),
            ]
        );
    }

    #[test]
    fn test_placement_json() {
        let mut placements = EquipmentPlacement::new();
        placements.add(WeaponLocation::Left, EquipmentSymbol::named("ISPPC"), 2);
        let json = serde_json::to_string(&placements).unwrap();
        assert_eq!(json, r#"{"Left":{"ISPPC":2}}"#);
    }
}
