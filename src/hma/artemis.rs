//! Artemis fire-control linking
//!
//! The trailer carries one bitfield for the whole unit:
//!
//! | Bit | Value | Meaning                |
//! |-----|-------|------------------------|
//! | 0   | 1     | Artemis IV on SRMs     |
//! | 1   | 2     | Artemis IV on LRMs     |
//! | 2   | 4     | Artemis V on SRMs      |
//! | 3   | 8     | Artemis V on LRMs      |
//!
//! Artemis IV wins when both generations are flagged for the same family.

use serde::Serialize;
use tracing::debug;

use super::descriptor::EquipmentPlacement;
use super::resolver::{EquipmentRegistry, EquipmentSymbol};
use super::types::{Lineage, WeaponLocation};

pub const ARTEMIS_IV_SRM: u16 = 0x1;
pub const ARTEMIS_IV_LRM: u16 = 0x2;
pub const ARTEMIS_V_SRM: u16 = 0x4;
pub const ARTEMIS_V_LRM: u16 = 0x8;

/// One fire-control unit attached to one launcher instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FireControlLink {
    pub location: WeaponLocation,
    pub launcher: EquipmentSymbol,
    pub fire_control: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Generation {
    IV,
    V,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LauncherFamily {
    LongRange,
    ShortRange,
}

impl LauncherFamily {
    fn of(name: &str) -> Option<Self> {
        let base = Lineage::strip(name);
        if base.contains(" Ammo") {
            None
        } else if base.starts_with("LRM") {
            Some(LauncherFamily::LongRange)
        } else if base.starts_with("SRM") {
            Some(LauncherFamily::ShortRange)
        } else {
            None
        }
    }

    fn generation(self, bits: u16) -> Option<Generation> {
        let (iv, v) = match self {
            LauncherFamily::LongRange => (ARTEMIS_IV_LRM, ARTEMIS_V_LRM),
            LauncherFamily::ShortRange => (ARTEMIS_IV_SRM, ARTEMIS_V_SRM),
        };
        if bits & iv == iv {
            Some(Generation::IV)
        } else if bits & v == v {
            Some(Generation::V)
        } else {
            None
        }
    }
}

fn fire_control_name(generation: Generation, lineage: Lineage) -> &'static str {
    match (generation, lineage) {
        (Generation::IV, Lineage::Clan) => "CLArtemisIV",
        (Generation::V, Lineage::Clan) => "CLArtemisV",
        (Generation::IV, _) => "ISArtemisIV",
        (Generation::V, _) => "ISArtemisV",
    }
}

/// Link fire control to every LRM/SRM launcher instance flagged by `bits`.
pub fn link(
    placements: &EquipmentPlacement,
    bits: u16,
    registry: &dyn EquipmentRegistry,
) -> Vec<FireControlLink> {
    let mut links = Vec::new();
    if bits == 0 {
        return links;
    }

    for (location, launcher, count) in placements.iter() {
        let Some(generation) = LauncherFamily::of(launcher.name).and_then(|f| f.generation(bits))
        else {
            continue;
        };
        let fire_control = fire_control_name(generation, Lineage::of_symbol(launcher.name));
        if !registry.contains(fire_control) {
            debug!("Skipping {} for {}: not defined", fire_control, launcher);
            continue;
        }
        for _ in 0..count {
            links.push(FireControlLink {
                location,
                launcher: *launcher,
                fire_control,
            });
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hma::resolver::PermissiveRegistry;
    use std::collections::HashSet;

    fn placements() -> EquipmentPlacement {
        let mut placements = EquipmentPlacement::new();
        placements.add(WeaponLocation::Front, EquipmentSymbol::named("ISLRM10"), 2);
        placements.add(WeaponLocation::Left, EquipmentSymbol::named("CLSRM6"), 1);
        placements.add(WeaponLocation::Front, EquipmentSymbol::named("ISMediumLaser"), 1);
        placements
    }

    #[test]
    fn test_no_bits_no_links() {
        assert!(link(&placements(), 0, &PermissiveRegistry).is_empty());
    }

    #[test]
    fn test_lrm_artemis_iv_per_instance() {
        let links = link(&placements(), ARTEMIS_IV_LRM, &PermissiveRegistry);
        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|l| l.fire_control == "ISArtemisIV"
            && l.launcher.name == "ISLRM10"
            && l.location == WeaponLocation::Front));
    }

    #[test]
    fn test_generation_and_lineage() {
        let links = link(
            &placements(),
            ARTEMIS_V_SRM | ARTEMIS_V_LRM,
            &PermissiveRegistry,
        );
        let names: Vec<_> = links.iter().map(|l| l.fire_control).collect();
        assert_eq!(names, vec!["ISArtemisV", "ISArtemisV", "CLArtemisV"]);

        let links = link(
            &placements(),
            ARTEMIS_IV_SRM | ARTEMIS_V_SRM,
            &PermissiveRegistry,
        );
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].fire_control, "CLArtemisIV");
        assert_eq!(links[0].location, WeaponLocation::Left);
    }

    #[test]
    fn test_ammo_lots_not_linked() {
        let mut placements = placements();
        placements.add(WeaponLocation::Body, EquipmentSymbol::named("ISLRM10 Ammo"), 2);
        placements.add(WeaponLocation::Body, EquipmentSymbol::named("CLSRM6 Ammo"), 1);

        let links = link(&placements, ARTEMIS_IV_LRM | ARTEMIS_IV_SRM, &PermissiveRegistry);
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|l| l.location != WeaponLocation::Body));
        assert_eq!(LauncherFamily::of("ISSRM6 Ammo"), None);
        assert_eq!(LauncherFamily::of("CLLRM20 Ammo"), None);
        assert_eq!(LauncherFamily::of("CLLRM20"), Some(LauncherFamily::LongRange));
    }

    #[test]
    fn test_unknown_fire_control_skipped() {
        let registry: HashSet<String> = ["ISLRM10".to_string()].into_iter().collect();
        assert!(link(&placements(), ARTEMIS_IV_LRM, &registry).is_empty());
    }
}
