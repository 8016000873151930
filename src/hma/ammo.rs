//! Conversion of requested shot counts into whole ammunition lots

use serde::Serialize;

use super::catalog::{half_lot, AmmoLot};
use super::types::Lineage;
use crate::error::{Error, Result};

/// Whole lots of one ammunition item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub lot: &'static AmmoLot,
    pub lots: u32,
}

impl Allocation {
    /// Shots actually carried, never more than requested
    pub fn shots(&self) -> u32 {
        self.lots * u32::from(self.lot.shots_per_lot)
    }
}

/// Allocate `requested` shots of `lot`.
///
/// Counts that do not divide evenly fall back to the half-ton lot of the same
/// machine-gun family. Anything else that does not divide is fatal.
pub fn reconcile(requested: u32, lot: &'static AmmoLot) -> Result<Allocation> {
    let shots = u32::from(lot.shots_per_lot);
    if shots > 0 && requested % shots == 0 {
        return Ok(Allocation {
            lot,
            lots: requested / shots,
        });
    }

    let substitute = half_lot(lot.family, Lineage::of_symbol(lot.name)).ok_or(
        Error::AmmoReconciliation {
            ammo: lot.name,
            shots_per_lot: lot.shots_per_lot,
            requested,
        },
    )?;

    Ok(Allocation {
        lot: substitute,
        lots: requested / u32::from(substitute.shots_per_lot),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hma::catalog::{AmmoFamily, SymbolCatalog};
    use crate::hma::types::TechBase;

    static IS_MG: AmmoLot = AmmoLot::machine_gun("ISMG Ammo (200)", 200, AmmoFamily::MachineGun);
    static CL_HEAVY_MG: AmmoLot =
        AmmoLot::machine_gun("CLHeavyMG Ammo (100)", 100, AmmoFamily::HeavyMachineGun);
    static AC10: AmmoLot = AmmoLot::new("ISAC10 Ammo", 10);

    #[test]
    fn test_even_lots_keep_item() {
        let allocation = reconcile(30, &AC10).unwrap();
        assert_eq!(allocation.lot.name, "ISAC10 Ammo");
        assert_eq!(allocation.lots, 3);
        assert_eq!(reconcile(0, &AC10).unwrap().lots, 0);
    }

    #[test]
    fn test_machine_gun_half_lot() {
        let allocation = reconcile(150, &IS_MG).unwrap();
        assert_eq!(allocation.lot.name, "ISMG Ammo (100)");
        assert_eq!(allocation.lots, 1);
        assert_eq!(allocation.shots(), 100);

        let allocation = reconcile(100, &IS_MG).unwrap();
        assert_eq!(allocation.lot.name, "ISMG Ammo (100)");
        assert_eq!(allocation.lots, 1);

        let allocation = reconcile(125, &CL_HEAVY_MG).unwrap();
        assert_eq!(allocation.lot.name, "CLHeavyMG Ammo (50)");
        assert_eq!(allocation.lots, 2);
    }

    #[test]
    fn test_uneven_non_mg_is_fatal() {
        match reconcile(15, &AC10) {
            Err(Error::AmmoReconciliation {
                ammo,
                shots_per_lot,
                requested,
            }) => {
                assert_eq!(ammo, "ISAC10 Ammo");
                assert_eq!(shots_per_lot, 10);
                assert_eq!(requested, 15);
            }
            other => panic!("expected reconciliation error, got {:?}", other),
        }
    }

    #[test]
    fn test_shots_are_conserved() {
        let catalog = SymbolCatalog::builtin();
        let lots = [
            catalog.ammo(0x4F, TechBase::InnerSphere).unwrap(),
            catalog.ammo(0x46, TechBase::Clan).unwrap(),
            catalog.ammo(0xAD, TechBase::Clan).unwrap(),
            catalog.ammo(0xAE, TechBase::Clan).unwrap(),
            catalog.ammo(0x61, TechBase::InnerSphere).unwrap(),
        ];
        for lot in lots {
            for requested in 0..=1000u32 {
                match reconcile(requested, lot) {
                    Ok(allocation) => {
                        assert!(allocation.shots() <= requested);
                        let size = u32::from(allocation.lot.shots_per_lot);
                        assert_eq!(allocation.shots(), requested / size * size);
                    }
                    Err(_) => assert_eq!(lot.family, AmmoFamily::Standard),
                }
            }
        }
    }
}
