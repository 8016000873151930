//! Static equipment and ammunition symbol tables
//!
//! Codes are looked up per [`TechBase`]:
//!
//! - equipment: the generic table first, then the tech-specific table
//! - ammunition: the tech-specific table only, keyed by the weapon code it feeds
//!
//! Mixed designs use the Inner Sphere tables with a Clan overlay that wins at
//! equal codes.

use phf::phf_map;
use serde::Serialize;

use super::types::{Lineage, TechBase};

/// Which half-size lot, if any, can stand in for a lot of this ammunition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AmmoFamily {
    Standard,
    MachineGun,
    LightMachineGun,
    HeavyMachineGun,
}

/// One ton of ammunition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AmmoLot {
    pub name: &'static str,
    pub shots_per_lot: u16,
    pub family: AmmoFamily,
}

impl AmmoLot {
    pub const fn new(name: &'static str, shots_per_lot: u16) -> Self {
        Self {
            name,
            shots_per_lot,
            family: AmmoFamily::Standard,
        }
    }

    pub const fn machine_gun(name: &'static str, shots_per_lot: u16, family: AmmoFamily) -> Self {
        Self {
            name,
            shots_per_lot,
            family,
        }
    }
}

static IS_MG_HALF: AmmoLot = AmmoLot::machine_gun("ISMG Ammo (100)", 100, AmmoFamily::MachineGun);
static CL_MG_HALF: AmmoLot = AmmoLot::machine_gun("CLMG Ammo (100)", 100, AmmoFamily::MachineGun);
static CL_LIGHT_MG_HALF: AmmoLot =
    AmmoLot::machine_gun("CLLightMG Ammo (100)", 100, AmmoFamily::LightMachineGun);
static CL_HEAVY_MG_HALF: AmmoLot =
    AmmoLot::machine_gun("CLHeavyMG Ammo (50)", 50, AmmoFamily::HeavyMachineGun);

/// Half-ton lot for machine-gun ammunition. Other families have none.
pub fn half_lot(family: AmmoFamily, lineage: Lineage) -> Option<&'static AmmoLot> {
    match family {
        AmmoFamily::Standard => None,
        AmmoFamily::MachineGun if lineage == Lineage::Clan => Some(&CL_MG_HALF),
        AmmoFamily::MachineGun => Some(&IS_MG_HALF),
        AmmoFamily::LightMachineGun => Some(&CL_LIGHT_MG_HALF),
        AmmoFamily::HeavyMachineGun => Some(&CL_HEAVY_MG_HALF),
    }
}

/// Codes wider than 15 bits carry flags in the upper half; keep the low 16.
pub fn normalize_code(code: u32) -> u16 {
    if code > i16::MAX as u32 {
        (code & 0xFFFF) as u16
    } else {
        code as u16
    }
}

pub struct EquipmentTables {
    pub generic: &'static phf::Map<u16, &'static str>,
    pub inner_sphere: &'static phf::Map<u16, &'static str>,
    pub clan: &'static phf::Map<u16, &'static str>,
    pub mixed_overlay: &'static phf::Map<u16, &'static str>,
}

pub struct AmmoTables {
    pub inner_sphere: &'static phf::Map<u16, AmmoLot>,
    pub clan: &'static phf::Map<u16, AmmoLot>,
    pub mixed_overlay: &'static phf::Map<u16, AmmoLot>,
}

/// Read-only code tables shared by every decode
pub struct SymbolCatalog {
    equipment: EquipmentTables,
    ammo: AmmoTables,
}

static BUILTIN: SymbolCatalog = SymbolCatalog::new(
    EquipmentTables {
        generic: &GENERIC_EQUIPMENT,
        inner_sphere: &IS_EQUIPMENT,
        clan: &CLAN_EQUIPMENT,
        mixed_overlay: &MIXED_EQUIPMENT,
    },
    AmmoTables {
        inner_sphere: &IS_AMMO,
        clan: &CLAN_AMMO,
        mixed_overlay: &MIXED_AMMO,
    },
);

impl SymbolCatalog {
    pub const fn new(equipment: EquipmentTables, ammo: AmmoTables) -> Self {
        Self { equipment, ammo }
    }

    /// The tables shipped with the crate
    pub fn builtin() -> &'static SymbolCatalog {
        &BUILTIN
    }

    pub fn equipment(&self, code: u32, tech: TechBase) -> Option<&'static str> {
        let code = normalize_code(code);
        if let Some(name) = self.equipment.generic.get(&code) {
            return Some(*name);
        }
        let tables = &self.equipment;
        match tech {
            TechBase::InnerSphere => tables.inner_sphere.get(&code),
            TechBase::Clan => tables.clan.get(&code),
            TechBase::Mixed => tables
                .mixed_overlay
                .get(&code)
                .or_else(|| tables.inner_sphere.get(&code)),
        }
        .copied()
    }

    /// Companion ammunition for a weapon code
    pub fn ammo(&self, code: u32, tech: TechBase) -> Option<&'static AmmoLot> {
        let code = normalize_code(code);
        let tables = &self.ammo;
        match tech {
            TechBase::InnerSphere => tables.inner_sphere.get(&code),
            TechBase::Clan => tables.clan.get(&code),
            TechBase::Mixed => tables
                .mixed_overlay
                .get(&code)
                .or_else(|| tables.inner_sphere.get(&code)),
        }
    }
}

static GENERIC_EQUIPMENT: phf::Map<u16, &'static str> = phf_map! {
    0x0Bu16 => "Jump Jet",
    0x14u16 => "Endo Steel",
    0x15u16 => "Ferro-Fibrous",
};

static IS_EQUIPMENT: phf::Map<u16, &'static str> = phf_map! {
    0x0Au16 => "ISDouble Heat Sink",
    0x0Bu16 => "Jump Jet",
    0x12u16 => "ISTargeting Computer",
    0x14u16 => "Endo Steel",
    0x15u16 => "Ferro-Fibrous",
    0x17u16 => "ISMASC",
    0x18u16 => "ISArtemisIV",
    0x19u16 => "ISCASE",
    0x33u16 => "ISERLargeLaser",
    0x34u16 => "ISERPPC",
    0x35u16 => "ISFlamer",
    0x36u16 => "ISLaserAMS",
    0x37u16 => "ISLargeLaser",
    0x38u16 => "ISMediumLaser",
    0x39u16 => "ISSmallLaser",
    0x3Au16 => "ISPPC",
    0x3Bu16 => "ISLargePulseLaser",
    0x3Cu16 => "ISMediumPulseLaser",
    0x3Du16 => "ISSmallPulseLaser",
    0x3Eu16 => "ISAC2",
    0x3Fu16 => "ISAC5",
    0x40u16 => "ISAC10",
    0x41u16 => "ISAC20",
    0x42u16 => "ISAntiMissileSystem",
    0x43u16 => "Long Tom Cannon",
    0x44u16 => "Sniper Cannon",
    0x45u16 => "Thumper Cannon",
    0x46u16 => "ISLightGaussRifle",
    0x47u16 => "ISGaussRifle",
    0x48u16 => "ISLargeXPulseLaser",
    0x49u16 => "ISMediumXPulseLaser",
    0x4Au16 => "ISSmallXPulseLaser",
    0x4Bu16 => "ISLBXAC2",
    0x4Cu16 => "ISLBXAC5",
    0x4Du16 => "ISLBXAC10",
    0x4Eu16 => "ISLBXAC20",
    0x4Fu16 => "ISMachine Gun",
    0x50u16 => "ISLAC2",
    0x51u16 => "ISLAC5",
    0x52u16 => "ISHeavyFlamer",
    0x54u16 => "ISUltraAC2",
    0x55u16 => "ISUltraAC5",
    0x56u16 => "ISUltraAC10",
    0x57u16 => "ISUltraAC20",
    0x59u16 => "PPC Capacitor",
    0x5Au16 => "ISERMediumLaser",
    0x5Bu16 => "ISERSmallLaser",
    0x5Cu16 => "ISAntiPersonnelPod",
    0x60u16 => "ISLRM5",
    0x61u16 => "ISLRM10",
    0x62u16 => "ISLRM15",
    0x63u16 => "ISLRM20",
    0x66u16 => "ISImprovedNarc",
    0x67u16 => "ISSRM2",
    0x68u16 => "ISSRM4",
    0x69u16 => "ISSRM6",
    0x6Au16 => "ISStreakSRM2",
    0x6Bu16 => "ISStreakSRM4",
    0x6Cu16 => "ISStreakSRM6",
    0x6Du16 => "ISThunderbolt5",
    0x6Eu16 => "ISThunderbolt10",
    0x6Fu16 => "ISThunderbolt15",
    0x70u16 => "ISThunderbolt20",
    0x71u16 => "ISArrowIVSystem",
    0x72u16 => "ISAngelECMSuite",
    0x73u16 => "ISBeagleActiveProbe",
    0x74u16 => "ISBloodhoundActiveProbe",
    0x75u16 => "ISC3MasterComputer",
    0x76u16 => "ISC3SlaveUnit",
    0x77u16 => "ISImprovedC3CPU",
    0x78u16 => "ISGuardianECM",
    0x79u16 => "ISNarcBeacon",
    0x7Au16 => "ISTAG",
    0x7Bu16 => "ISLRM5 (OS)",
    0x7Cu16 => "ISLRM10 (OS)",
    0x7Du16 => "ISLRM15 (OS)",
    0x7Eu16 => "ISLRM20 (OS)",
    0x7Fu16 => "ISSRM2 (OS)",
    0x80u16 => "ISSRM4 (OS)",
    0x81u16 => "ISSRM6 (OS)",
    0x82u16 => "ISStreakSRM2 (OS)",
    0x83u16 => "ISStreakSRM4 (OS)",
    0x84u16 => "ISStreakSRM6 (OS)",
    0x85u16 => "ISVehicleFlamer",
    0x86u16 => "ISLongTomArtillery",
    0x87u16 => "ISSniperArtillery",
    0x88u16 => "ISThumperArtillery",
    0x89u16 => "ISMRM10",
    0x8Au16 => "ISMRM20",
    0x8Bu16 => "ISMRM30",
    0x8Cu16 => "ISMRM40",
    0x8Eu16 => "ISMRM10 (OS)",
    0x8Fu16 => "ISMRM20 (OS)",
    0x90u16 => "ISMRM30 (OS)",
    0x91u16 => "ISMRM40 (OS)",
    0x92u16 => "ISLRTorpedo5",
    0x93u16 => "ISLRTorpedo10",
    0x94u16 => "ISLRTorpedo15",
    0x95u16 => "ISLRTorpedo20",
    0x96u16 => "ISSRTorpedo2",
    0x97u16 => "ISSRTorpedo4",
    0x98u16 => "ISSRTorpedo6",
    0x99u16 => "ISLRM5 (I-OS)",
    0x9Au16 => "ISLRM10 (I-OS)",
    0x9Bu16 => "ISLRM15 (I-OS)",
    0x9Cu16 => "ISLRM20 (I-OS)",
    0x9Du16 => "ISSRM2 (I-OS)",
    0x9Eu16 => "ISSRM4 (I-OS)",
    0x9Fu16 => "ISSRM6 (I-OS)",
    0xA0u16 => "ISStreakSRM2 (I-OS)",
    0xA1u16 => "ISStreakSRM4 (I-OS)",
    0xA2u16 => "ISStreakSRM6 (I-OS)",
    0xA3u16 => "ISMRM10 (I-OS)",
    0xA4u16 => "ISMRM20 (I-OS)",
    0xA5u16 => "ISMRM30 (I-OS)",
    0xA6u16 => "ISMRM40 (I-OS)",
    0x108u16 => "ISTHBLBXAC2",
    0x109u16 => "ISTHBLBXAC5",
    0x10Au16 => "ISTHBLBXAC20",
    0x10Bu16 => "ISUltraAC2 (THB)",
    0x10Cu16 => "ISUltraAC10 (THB)",
    0x10Du16 => "ISUltraAC20 (THB)",
    0x11Du16 => "ISTHBAngelECMSuite",
    0x11Eu16 => "ISTHBBloodhoundActiveProbe",
    0x121u16 => "ISRotaryAC2",
    0x122u16 => "ISRotaryAC5",
    0x123u16 => "ISHeavyGaussRifle",
    0x12Bu16 => "ISRocketLauncher10",
    0x12Cu16 => "ISRocketLauncher15",
    0x12Du16 => "ISRocketLauncher20",
};

static CLAN_EQUIPMENT: phf::Map<u16, &'static str> = phf_map! {
    0x0Au16 => "CLDouble Heat Sink",
    0x0Bu16 => "Jump Jet",
    0x12u16 => "CLTargeting Computer",
    0x14u16 => "Endo Steel",
    0x15u16 => "Ferro-Fibrous",
    0x17u16 => "CLMASC",
    0x18u16 => "CLArtemisIV",
    0x33u16 => "CLERLargeLaser",
    0x34u16 => "CLERMediumLaser",
    0x35u16 => "CLERSmallLaser",
    0x36u16 => "CLERPPC",
    0x37u16 => "CLFlamer",
    0x38u16 => "CLMediumLaser",
    0x39u16 => "CLSmallLaser",
    0x3Au16 => "CLPPC",
    0x3Cu16 => "CLLargePulseLaser",
    0x3Du16 => "CLMediumPulseLaser",
    0x3Eu16 => "CLSmallPulseLaser",
    0x3Fu16 => "CLAngelECMSuite",
    0x40u16 => "CLAntiMissileSystem",
    0x41u16 => "CLGaussRifle",
    0x42u16 => "CLLBXAC2",
    0x43u16 => "CLLBXAC5",
    0x44u16 => "CLLBXAC10",
    0x45u16 => "CLLBXAC20",
    0x46u16 => "CLMG",
    0x47u16 => "CLUltraAC2",
    0x48u16 => "CLUltraAC5",
    0x49u16 => "CLUltraAC10",
    0x4Au16 => "CLUltraAC20",
    0x4Bu16 => "CLLRM5",
    0x4Cu16 => "CLLRM10",
    0x4Du16 => "CLLRM15",
    0x4Eu16 => "CLLRM20",
    0x4Fu16 => "CLSRM2",
    0x50u16 => "CLSRM4",
    0x51u16 => "CLSRM6",
    0x52u16 => "CLStreakSRM2",
    0x53u16 => "CLStreakSRM4",
    0x54u16 => "CLStreakSRM6",
    0x55u16 => "CLArrowIVSystem",
    0x56u16 => "CLAntiPersonnelPod",
    0x57u16 => "CLActiveProbe",
    0x58u16 => "CLECMSuite",
    0x59u16 => "CLNarcBeacon",
    0x5Au16 => "CLTAG",
    0x5Bu16 => "CLERMicroLaser",
    0x5Cu16 => "CLLRM5 (OS)",
    0x5Du16 => "CLLRM10 (OS)",
    0x5Eu16 => "CLLRM15 (OS)",
    0x5Fu16 => "CLLRM20 (OS)",
    0x60u16 => "CLSRM2 (OS)",
    0x61u16 => "CLSRM4 (OS)",
    0x62u16 => "CLSRM6 (OS)",
    0x63u16 => "CLStreakSRM2 (OS)",
    0x64u16 => "CLStreakSRM4 (OS)",
    0x65u16 => "CLStreakSRM6 (OS)",
    0x66u16 => "CLVehicleFlamer",
    0x67u16 => "CLLongTomArtillery",
    0x68u16 => "CLSniperArtillery",
    0x69u16 => "CLThumperArtillery",
    0x6Au16 => "CLLRTorpedo5",
    0x6Bu16 => "CLLRTorpedo10",
    0x6Cu16 => "CLLRTorpedo15",
    0x6Du16 => "CLLRTorpedo20",
    0x6Eu16 => "CLSRTorpedo2",
    0x6Fu16 => "CLSRTorpedo4",
    0x70u16 => "CLSRTorpedo6",
    0x7Bu16 => "CLLRM5 (OS)",
    0x7Cu16 => "CLLRM10 (OS)",
    0x7Du16 => "CLLRM15 (OS)",
    0x7Eu16 => "CLLRM20 (OS)",
    0x7Fu16 => "CLSRM2 (OS)",
    0x80u16 => "CLHeavyLargeLaser",
    0x81u16 => "CLHeavyMediumLaser",
    0x82u16 => "CLHeavySmallLaser",
    0x85u16 => "CLVehicleFlamer",
    0x92u16 => "CLLRTorpedo5",
    0x93u16 => "CLLRTorpedo10",
    0x94u16 => "CLLRTorpedo15",
    0x95u16 => "CLLRTorpedo20",
    0x96u16 => "CLSRTorpedo2",
    0x97u16 => "CLSRTorpedo4",
    0x98u16 => "CLSRTorpedo6",
    0xA8u16 => "CLMicroPulseLaser",
    0xADu16 => "CLLightMG",
    0xAEu16 => "CLHeavyMG",
    0xAFu16 => "CLLightActiveProbe",
    0xB4u16 => "CLLightTAG",
    0xFCu16 => "CLATM3",
    0xFDu16 => "CLATM6",
    0xFEu16 => "CLATM9",
    0xFFu16 => "CLATM12",
};

/// Clan gear carried by Mixed designs. Takes precedence over [`IS_EQUIPMENT`].
static MIXED_EQUIPMENT: phf::Map<u16, &'static str> = phf_map! {
    0x58u16 => "CLERMicroLaser",
    0x5Eu16 => "CLLightMG",
    0x5Fu16 => "CLHeavyMG",
    0x64u16 => "CLLightActiveProbe",
    0x65u16 => "CLLightTAG",
    0xA7u16 => "CLERLargeLaser",
    0xA8u16 => "CLERMediumLaser",
    0xA9u16 => "CLERSmallLaser",
    0xAAu16 => "CLERPPC",
    0xABu16 => "CLFlamer",
    0xB0u16 => "CLLargePulseLaser",
    0xB1u16 => "CLMediumPulseLaser",
    0xB2u16 => "CLSmallPulseLaser",
    0xB4u16 => "CLAntiMissileSystem",
    0xB5u16 => "CLGaussRifle",
    0xB6u16 => "CLLBXAC2",
    0xB7u16 => "CLLBXAC5",
    0xB8u16 => "CLLBXAC10",
    0xB9u16 => "CLLBXAC20",
    0xBAu16 => "CLMG",
    0xBBu16 => "CLUltraAC2",
    0xBCu16 => "CLUltraAC5",
    0xBDu16 => "CLUltraAC10",
    0xBEu16 => "CLUltraAC20",
    0xBFu16 => "CLLRM5",
    0xC0u16 => "CLLRM10",
    0xC1u16 => "CLLRM15",
    0xC2u16 => "CLLRM20",
    0xC3u16 => "CLSRM2",
    0xC4u16 => "CLSRM4",
    0xC5u16 => "CLSRM6",
    0xC6u16 => "CLStreakSRM2",
    0xC7u16 => "CLStreakSRM4",
    0xC8u16 => "CLStreakSRM6",
    0xC9u16 => "CLArrowIVSystem",
    0xCAu16 => "CLAntiPersonnelPod",
    0xCBu16 => "CLActiveProbe",
    0xCCu16 => "CLECMSuite",
    0xCDu16 => "CLNarcBeacon",
    0xCEu16 => "CLTAG",
    0xD0u16 => "CLLRM5 (OS)",
    0xD1u16 => "CLLRM10 (OS)",
    0xD2u16 => "CLLRM15 (OS)",
    0xD3u16 => "CLLRM20 (OS)",
    0xD4u16 => "CLSRM2 (OS)",
    0xD5u16 => "CLSRM2 (OS)",
    0xD6u16 => "CLSRM2 (OS)",
    0xD7u16 => "CLStreakSRM2 (OS)",
    0xD8u16 => "CLStreakSRM4 (OS)",
    0xD9u16 => "CLStreakSRM6 (OS)",
    0xDAu16 => "CLVehicleFlamer",
    0xDBu16 => "CLLongTomArtillery",
    0xDCu16 => "CLSniperArtillery",
    0xDDu16 => "CLThumperArtillery",
    0xDEu16 => "CLLRTorpedo5",
    0xDFu16 => "CLLRTorpedo10",
    0xE0u16 => "CLLRTorpedo15",
    0xE1u16 => "CLLRTorpedo20",
    0xE2u16 => "CLSRTorpedo2",
    0xE3u16 => "CLSRTorpedo4",
    0xE4u16 => "CLSRTorpedo6",
    0xF4u16 => "CLHeavyLargeLaser",
    0xF5u16 => "CLHeavyMediumLaser",
    0xF6u16 => "CLHeavySmallLaser",
    0xFCu16 => "CLATM3",
    0xFDu16 => "CLATM6",
    0xFEu16 => "CLATM9",
    0xFFu16 => "CLATM12",
};

static IS_AMMO: phf::Map<u16, AmmoLot> = phf_map! {
    0x3Eu16 => AmmoLot::new("ISAC2 Ammo", 45),
    0x3Fu16 => AmmoLot::new("ISAC5 Ammo", 20),
    0x40u16 => AmmoLot::new("ISAC10 Ammo", 10),
    0x41u16 => AmmoLot::new("ISAC20 Ammo", 5),
    0x42u16 => AmmoLot::new("ISAMS Ammo", 12),
    0x43u16 => AmmoLot::new("Long Tom Cannon Ammo", 5),
    0x44u16 => AmmoLot::new("Sniper Cannon Ammo", 10),
    0x45u16 => AmmoLot::new("Thumper Cannon Ammo", 20),
    0x46u16 => AmmoLot::new("ISLightGauss Ammo", 16),
    0x47u16 => AmmoLot::new("ISGauss Ammo", 8),
    0x4Bu16 => AmmoLot::new("ISLBXAC2 Ammo", 45),
    0x4Cu16 => AmmoLot::new("ISLBXAC5 Ammo", 20),
    0x4Du16 => AmmoLot::new("ISLBXAC10 Ammo", 10),
    0x4Eu16 => AmmoLot::new("ISLBXAC20 Ammo", 5),
    0x4Fu16 => AmmoLot::machine_gun("ISMG Ammo (200)", 200, AmmoFamily::MachineGun),
    0x50u16 => AmmoLot::new("ISLAC2 Ammo", 45),
    0x51u16 => AmmoLot::new("ISLAC5 Ammo", 20),
    0x52u16 => AmmoLot::new("ISHeavyFlamer Ammo", 10),
    0x54u16 => AmmoLot::new("ISUltraAC2 Ammo", 45),
    0x55u16 => AmmoLot::new("ISUltraAC5 Ammo", 20),
    0x56u16 => AmmoLot::new("ISUltraAC10 Ammo", 10),
    0x57u16 => AmmoLot::new("ISUltraAC20 Ammo", 5),
    0x60u16 => AmmoLot::new("ISLRM5 Ammo", 24),
    0x61u16 => AmmoLot::new("ISLRM10 Ammo", 12),
    0x62u16 => AmmoLot::new("ISLRM15 Ammo", 8),
    0x63u16 => AmmoLot::new("ISLRM20 Ammo", 6),
    0x66u16 => AmmoLot::new("ISiNarc Pods", 4),
    0x67u16 => AmmoLot::new("ISSRM2 Ammo", 50),
    0x68u16 => AmmoLot::new("ISSRM4 Ammo", 25),
    0x69u16 => AmmoLot::new("ISSRM6 Ammo", 15),
    0x6Au16 => AmmoLot::new("ISStreakSRM2 Ammo", 50),
    0x6Bu16 => AmmoLot::new("ISStreakSRM4 Ammo", 25),
    0x6Cu16 => AmmoLot::new("ISStreakSRM6 Ammo", 15),
    0x6Du16 => AmmoLot::new("ISThunderbolt5 Ammo", 12),
    0x6Eu16 => AmmoLot::new("ISThunderbolt10 Ammo", 6),
    0x6Fu16 => AmmoLot::new("ISThunderbolt15 Ammo", 4),
    0x70u16 => AmmoLot::new("ISThunderbolt20 Ammo", 3),
    0x71u16 => AmmoLot::new("ISArrowIV Ammo", 5),
    0x79u16 => AmmoLot::new("ISNarc Pods", 6),
    0x85u16 => AmmoLot::new("ISVehicleFlamer Ammo", 20),
    0x86u16 => AmmoLot::new("ISLongTom Ammo", 5),
    0x87u16 => AmmoLot::new("ISSniper Ammo", 10),
    0x88u16 => AmmoLot::new("ISThumper Ammo", 20),
    0x89u16 => AmmoLot::new("ISMRM10 Ammo", 24),
    0x8Au16 => AmmoLot::new("ISMRM20 Ammo", 12),
    0x8Bu16 => AmmoLot::new("ISMRM30 Ammo", 8),
    0x8Cu16 => AmmoLot::new("ISMRM40 Ammo", 6),
    0x92u16 => AmmoLot::new("ISLRTorpedo5 Ammo", 24),
    0x93u16 => AmmoLot::new("ISLRTorpedo10 Ammo", 12),
    0x94u16 => AmmoLot::new("ISLRTorpedo15 Ammo", 8),
    0x95u16 => AmmoLot::new("ISLRTorpedo20 Ammo", 6),
    0x96u16 => AmmoLot::new("ISSRTorpedo4 Ammo", 25),
    0x97u16 => AmmoLot::new("ISSRTorpedo2 Ammo", 50),
    0x98u16 => AmmoLot::new("ISSRTorpedo6 Ammo", 15),
    0x108u16 => AmmoLot::new("ISTHBLBXAC2 Ammo", 45),
    0x109u16 => AmmoLot::new("ISTHBLBXAC5 Ammo", 20),
    0x10Au16 => AmmoLot::new("ISTHBLBXAC20 Ammo", 5),
    0x10Bu16 => AmmoLot::new("ISUltraAC2 (THB) Ammo", 45),
    0x10Cu16 => AmmoLot::new("ISUltraAC10 (THB) Ammo", 10),
    0x10Du16 => AmmoLot::new("ISUltraAC20 (THB) Ammo", 5),
    0x121u16 => AmmoLot::new("ISRotaryAC2 Ammo", 45),
    0x122u16 => AmmoLot::new("ISRotaryAC5 Ammo", 20),
    0x123u16 => AmmoLot::new("ISHeavyGauss Ammo", 4),
};

static CLAN_AMMO: phf::Map<u16, AmmoLot> = phf_map! {
    0x40u16 => AmmoLot::new("CLAMS Ammo", 24),
    0x41u16 => AmmoLot::new("CLGauss Ammo", 8),
    0x42u16 => AmmoLot::new("CLLBXAC2 Ammo", 45),
    0x43u16 => AmmoLot::new("CLLBXAC5 Ammo", 20),
    0x44u16 => AmmoLot::new("CLLBXAC10 Ammo", 10),
    0x45u16 => AmmoLot::new("CLLBXAC20 Ammo", 5),
    0x46u16 => AmmoLot::machine_gun("CLMG Ammo (200)", 200, AmmoFamily::MachineGun),
    0x47u16 => AmmoLot::new("CLUltraAC2 Ammo", 45),
    0x48u16 => AmmoLot::new("CLUltraAC5 Ammo", 20),
    0x49u16 => AmmoLot::new("CLUltraAC10 Ammo", 10),
    0x4Au16 => AmmoLot::new("CLUltraAC20 Ammo", 5),
    0x4Bu16 => AmmoLot::new("CLLRM5 Ammo", 24),
    0x4Cu16 => AmmoLot::new("CLLRM10 Ammo", 12),
    0x4Du16 => AmmoLot::new("CLLRM15 Ammo", 8),
    0x4Eu16 => AmmoLot::new("CLLRM20 Ammo", 6),
    0x4Fu16 => AmmoLot::new("CLSRM2 Ammo", 50),
    0x50u16 => AmmoLot::new("CLSRM4 Ammo", 25),
    0x51u16 => AmmoLot::new("CLSRM6 Ammo", 15),
    0x52u16 => AmmoLot::new("CLStreakSRM2 Ammo", 50),
    0x53u16 => AmmoLot::new("CLStreakSRM4 Ammo", 25),
    0x54u16 => AmmoLot::new("CLStreakSRM6 Ammo", 15),
    0x55u16 => AmmoLot::new("CLArrowIV Ammo", 5),
    0x66u16 => AmmoLot::new("CLVehicleFlamer Ammo", 20),
    0x67u16 => AmmoLot::new("CLLongTomArtillery Ammo", 5),
    0x68u16 => AmmoLot::new("CLSniperArtillery Ammo", 10),
    0x69u16 => AmmoLot::new("CLThumperArtillery Ammo", 20),
    0x6Au16 => AmmoLot::new("CLTorpedoLRM5 Ammo", 24),
    0x6Bu16 => AmmoLot::new("CLTorpedoLRM10 Ammo", 12),
    0x6Cu16 => AmmoLot::new("CLTorpedoLRM15 Ammo", 8),
    0x6Du16 => AmmoLot::new("CLTorpedoLRM20 Ammo", 6),
    0x6Eu16 => AmmoLot::new("CLTorpedoSRM2 Ammo", 50),
    0x6Fu16 => AmmoLot::new("CLTorpedoSRM4 Ammo", 25),
    0x70u16 => AmmoLot::new("CLTorpedoSRM6 Ammo", 15),
    0x85u16 => AmmoLot::new("CLVehicleFlamer Ammo", 20),
    0x92u16 => AmmoLot::new("CLTorpedoLRM5 Ammo", 24),
    0x93u16 => AmmoLot::new("CLTorpedoLRM10 Ammo", 12),
    0x94u16 => AmmoLot::new("CLTorpedoLRM15 Ammo", 8),
    0x95u16 => AmmoLot::new("CLTorpedoLRM20 Ammo", 6),
    0x96u16 => AmmoLot::new("CLTorpedoSRM2 Ammo", 50),
    0x97u16 => AmmoLot::new("CLTorpedoSRM4 Ammo", 25),
    0x98u16 => AmmoLot::new("CLTorpedoSRM6 Ammo", 15),
    0xADu16 => AmmoLot::machine_gun("CLLightMG Ammo (200)", 200, AmmoFamily::LightMachineGun),
    0xAEu16 => AmmoLot::machine_gun("CLHeavyMG Ammo (100)", 100, AmmoFamily::HeavyMachineGun),
    0xFCu16 => AmmoLot::new("CLATM3 Ammo", 20),
    0xFDu16 => AmmoLot::new("CLATM6 Ammo", 10),
    0xFEu16 => AmmoLot::new("CLATM9 Ammo", 7),
    0xFFu16 => AmmoLot::new("CLATM12 Ammo", 5),
};

/// Mixed ammunition shares the code of the weapon it feeds.
static MIXED_AMMO: phf::Map<u16, AmmoLot> = phf_map! {
    0x5Eu16 => AmmoLot::machine_gun("CLLightMG Ammo (200)", 200, AmmoFamily::LightMachineGun),
    0x5Fu16 => AmmoLot::machine_gun("CLHeavyMG Ammo (100)", 100, AmmoFamily::HeavyMachineGun),
    0xB4u16 => AmmoLot::new("CLAntiMissileSystem Ammo", 24),
    0xB5u16 => AmmoLot::new("CLGaussRifle Ammo", 8),
    0xB6u16 => AmmoLot::new("CLLBXAC2 Ammo", 45),
    0xB7u16 => AmmoLot::new("CLLBXAC5 Ammo", 20),
    0xB8u16 => AmmoLot::new("CLLBXAC10 Ammo", 10),
    0xB9u16 => AmmoLot::new("CLLBXAC20 Ammo", 5),
    0xBAu16 => AmmoLot::machine_gun("CLMG Ammo (200)", 200, AmmoFamily::MachineGun),
    0xBBu16 => AmmoLot::new("CLUltraAC2 Ammo", 45),
    0xBCu16 => AmmoLot::new("CLUltraAC5 Ammo", 20),
    0xBDu16 => AmmoLot::new("CLUltraAC10 Ammo", 10),
    0xBEu16 => AmmoLot::new("CLUltraAC20 Ammo", 5),
    0xBFu16 => AmmoLot::new("CLLRM5 Ammo", 24),
    0xC0u16 => AmmoLot::new("CLLRM10 Ammo", 12),
    0xC1u16 => AmmoLot::new("CLLRM15 Ammo", 8),
    0xC2u16 => AmmoLot::new("CLLRM20 Ammo", 6),
    0xC3u16 => AmmoLot::new("CLSRM2 Ammo", 50),
    0xC4u16 => AmmoLot::new("CLSRM4 Ammo", 25),
    0xC5u16 => AmmoLot::new("CLSRM6 Ammo", 15),
    0xC6u16 => AmmoLot::new("CLStreakSRM2 Ammo", 50),
    0xC7u16 => AmmoLot::new("CLStreakSRM4 Ammo", 25),
    0xC8u16 => AmmoLot::new("CLStreakSRM6 Ammo", 15),
    0xC9u16 => AmmoLot::new("CLArrowIVSystem Ammo", 5),
    0xCDu16 => AmmoLot::new("CLNarcBeacon Ammo", 6),
    0xDAu16 => AmmoLot::new("CLVehicleFlamer Ammo", 20),
    0xDBu16 => AmmoLot::new("CLLongTomArtillery Ammo", 5),
    0xDCu16 => AmmoLot::new("CLSniperArtillery Ammo", 10),
    0xDDu16 => AmmoLot::new("CLThumperArtillery Ammo", 20),
    0xDEu16 => AmmoLot::new("CLLRTorpedo5 Ammo", 24),
    0xDFu16 => AmmoLot::new("CLLRTorpedo10 Ammo", 12),
    0xE0u16 => AmmoLot::new("CLLRTorpedo15 Ammo", 8),
    0xE1u16 => AmmoLot::new("CLLRTorpedo20 Ammo", 6),
    0xE2u16 => AmmoLot::new("CLSRTorpedo2 Ammo", 50),
    0xE3u16 => AmmoLot::new("CLSRTorpedo4 Ammo", 25),
    0xE4u16 => AmmoLot::new("CLSRTorpedo6 Ammo", 15),
};

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_GENERIC: phf::Map<u16, &'static str> = phf_map! {
        0x20u16 => "Shared Widget",
    };

    static TEST_IS: phf::Map<u16, &'static str> = phf_map! {
        0x20u16 => "ISWidget",
        0x21u16 => "ISGizmo",
    };

    static TEST_CLAN: phf::Map<u16, &'static str> = phf_map! {
        0x30u16 => "CLWidget",
    };

    static TEST_AMMO: phf::Map<u16, AmmoLot> = phf_map! {
        0x20u16 => AmmoLot::new("ISWidget Ammo", 10),
    };

    #[test]
    fn test_generic_table_wins() {
        static CATALOG: SymbolCatalog = SymbolCatalog::new(
            EquipmentTables {
                generic: &TEST_GENERIC,
                inner_sphere: &TEST_IS,
                clan: &TEST_CLAN,
                mixed_overlay: &TEST_CLAN,
            },
            AmmoTables {
                inner_sphere: &TEST_AMMO,
                clan: &TEST_AMMO,
                mixed_overlay: &TEST_AMMO,
            },
        );

        assert_eq!(
            CATALOG.equipment(0x20, TechBase::InnerSphere),
            Some("Shared Widget")
        );
        assert_eq!(CATALOG.equipment(0x20, TechBase::Clan), Some("Shared Widget"));
        assert_eq!(CATALOG.equipment(0x21, TechBase::InnerSphere), Some("ISGizmo"));
        assert_eq!(CATALOG.equipment(0x21, TechBase::Clan), None);
        assert_eq!(CATALOG.equipment(0x30, TechBase::Clan), Some("CLWidget"));
    }

    #[test]
    fn test_builtin_lookups() {
        let catalog = SymbolCatalog::builtin();
        assert_eq!(catalog.equipment(0x0B, TechBase::Clan), Some("Jump Jet"));
        assert_eq!(
            catalog.equipment(0x47, TechBase::InnerSphere),
            Some("ISGaussRifle")
        );
        assert_eq!(catalog.equipment(0x41, TechBase::Clan), Some("CLGaussRifle"));
        assert_eq!(catalog.equipment(0x7FFF, TechBase::Clan), None);

        let ammo = catalog.ammo(0x61, TechBase::InnerSphere).unwrap();
        assert_eq!(ammo.name, "ISLRM10 Ammo");
        assert_eq!(ammo.shots_per_lot, 12);
        assert_eq!(ammo.family, AmmoFamily::Standard);
        assert!(catalog.ammo(0x38, TechBase::InnerSphere).is_none());
    }

    #[test]
    fn test_mixed_overlay_precedence() {
        let catalog = SymbolCatalog::builtin();
        assert_eq!(catalog.equipment(0xBA, TechBase::Mixed), Some("CLMG"));
        assert_eq!(catalog.equipment(0xBA, TechBase::InnerSphere), None);
        assert_eq!(catalog.equipment(0x3E, TechBase::Mixed), Some("ISAC2"));

        let mg = catalog.ammo(0xBA, TechBase::Mixed).unwrap();
        assert_eq!(mg.name, "CLMG Ammo (200)");
        assert_eq!(mg.family, AmmoFamily::MachineGun);
        assert_eq!(
            catalog.ammo(0x4F, TechBase::Mixed).unwrap().name,
            "ISMG Ammo (200)"
        );
    }

    #[test]
    fn test_wide_codes_are_masked() {
        assert_eq!(normalize_code(0x46), 0x46);
        assert_eq!(normalize_code(0x0001_0046), 0x46);
        assert_eq!(
            SymbolCatalog::builtin().equipment(0x0002_0046, TechBase::Clan),
            Some("CLMG")
        );
    }

    #[test]
    fn test_half_lots() {
        let lot = half_lot(AmmoFamily::MachineGun, Lineage::InnerSphere).unwrap();
        assert_eq!((lot.name, lot.shots_per_lot), ("ISMG Ammo (100)", 100));
        let lot = half_lot(AmmoFamily::MachineGun, Lineage::Clan).unwrap();
        assert_eq!(lot.name, "CLMG Ammo (100)");
        let lot = half_lot(AmmoFamily::HeavyMachineGun, Lineage::Clan).unwrap();
        assert_eq!((lot.name, lot.shots_per_lot), ("CLHeavyMG Ammo (50)", 50));
        assert!(half_lot(AmmoFamily::Standard, Lineage::Clan).is_none());
    }
}
