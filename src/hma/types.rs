//! Closed enumerations decoded from HMA files

use serde::Serialize;
use std::fmt;

use crate::error::Error;

/// Technological lineage that decides which catalog a code resolves against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u16)]
pub enum TechBase {
    InnerSphere = 0,
    Clan = 1,
    Mixed = 2,
}

impl TryFrom<u16> for TechBase {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TechBase::InnerSphere),
            1 => Ok(TechBase::Clan),
            2 => Ok(TechBase::Mixed),
            v => Err(Error::UnknownTechBase(v)),
        }
    }
}

impl fmt::Display for TechBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            TechBase::InnerSphere => "Inner Sphere",
            TechBase::Clan => "Clan",
            TechBase::Mixed => "Mixed",
        })
    }
}

/// Origin of a single catalog symbol, read off its name prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lineage {
    InnerSphere,
    Clan,
    Universal,
}

impl Lineage {
    /// `"CLGaussRifle"` is Clan, `"ISGaussRifle"` Inner Sphere, `"Jump Jet"` universal.
    pub fn of_symbol(name: &str) -> Self {
        if name.starts_with("CL") {
            Lineage::Clan
        } else if name.starts_with("IS") {
            Lineage::InnerSphere
        } else {
            Lineage::Universal
        }
    }

    /// Symbol name with its lineage prefix removed
    pub fn strip(name: &str) -> &str {
        name.strip_prefix("CL")
            .or_else(|| name.strip_prefix("IS"))
            .unwrap_or(name)
    }
}

/// Airframe or vessel class.
///
/// The file stores this in a bitfield; only the low byte carries the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u16)]
pub enum ChassisKind {
    ConventionalFighter = 0,
    AerospaceFighter = 1,
    AerodyneSmallCraft = 2,
    SpheroidSmallCraft = 3,
    AerodyneDropShip = 4,
    SpheroidDropShip = 5,
    JumpShip = 6,
    WarShip = 7,
    SpaceStation = 8,
}

impl ChassisKind {
    pub const CLASS_MASK: u16 = 0x00FF;

    /// Movement is never stored; it follows from the chassis.
    pub fn movement(self) -> MovementKind {
        match self {
            ChassisKind::ConventionalFighter
            | ChassisKind::AerospaceFighter
            | ChassisKind::AerodyneSmallCraft
            | ChassisKind::AerodyneDropShip => MovementKind::Aerodyne,
            ChassisKind::SpheroidSmallCraft | ChassisKind::SpheroidDropShip => {
                MovementKind::Spheroid
            }
            ChassisKind::JumpShip | ChassisKind::WarShip | ChassisKind::SpaceStation => {
                MovementKind::SpaceOnly
            }
        }
    }

    /// Whether downstream entity construction handles this class
    pub fn is_supported(self) -> bool {
        self.movement() != MovementKind::SpaceOnly
    }
}

impl TryFrom<u16> for ChassisKind {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value & Self::CLASS_MASK {
            0 => Ok(ChassisKind::ConventionalFighter),
            1 => Ok(ChassisKind::AerospaceFighter),
            2 => Ok(ChassisKind::AerodyneSmallCraft),
            3 => Ok(ChassisKind::SpheroidSmallCraft),
            4 => Ok(ChassisKind::AerodyneDropShip),
            5 => Ok(ChassisKind::SpheroidDropShip),
            6 => Ok(ChassisKind::JumpShip),
            7 => Ok(ChassisKind::WarShip),
            8 => Ok(ChassisKind::SpaceStation),
            _ => Err(Error::UnknownChassis(value)),
        }
    }
}

impl fmt::Display for ChassisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            ChassisKind::ConventionalFighter => "Conventional Fighter",
            ChassisKind::AerospaceFighter => "AeroSpace Fighter",
            ChassisKind::AerodyneSmallCraft => "Aerodyne Small Craft",
            ChassisKind::SpheroidSmallCraft => "Spheroid Small Craft",
            ChassisKind::AerodyneDropShip => "Aerodyne DropShip",
            ChassisKind::SpheroidDropShip => "Spheroid DropShip",
            ChassisKind::JumpShip => "JumpShip",
            ChassisKind::WarShip => "WarShip",
            ChassisKind::SpaceStation => "Space Station",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MovementKind {
    Aerodyne,
    Spheroid,
    SpaceOnly,
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            MovementKind::Aerodyne => "Aerodyne",
            MovementKind::Spheroid => "Spheroid",
            MovementKind::SpaceOnly => "Space Only",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u16)]
pub enum EngineKind {
    Turbine = 0,
    Fusion = 1,
}

impl TryFrom<u16> for EngineKind {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EngineKind::Turbine),
            1 => Ok(EngineKind::Fusion),
            v => Err(Error::UnknownEngine(v)),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            EngineKind::Turbine => "Turbine",
            EngineKind::Fusion => "Fusion",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u16)]
pub enum ArmorKind {
    Standard = 0,
    FerroFibrous = 1,
}

impl TryFrom<u16> for ArmorKind {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ArmorKind::Standard),
            1 => Ok(ArmorKind::FerroFibrous),
            v => Err(Error::UnknownArmor(v)),
        }
    }
}

impl fmt::Display for ArmorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            ArmorKind::Standard => "Standard",
            ArmorKind::FerroFibrous => "Ferro-Fibrous",
        })
    }
}

/// Hardpoint classification, independent of chassis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u16)]
pub enum WeaponLocation {
    Front = 1,
    Left = 2,
    Right = 3,
    Rear = 4,
    Body = 5,
}

impl WeaponLocation {
    pub const ALL: [WeaponLocation; 5] = [
        WeaponLocation::Front,
        WeaponLocation::Left,
        WeaponLocation::Right,
        WeaponLocation::Rear,
        WeaponLocation::Body,
    ];

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(WeaponLocation::Front),
            2 => Some(WeaponLocation::Left),
            3 => Some(WeaponLocation::Right),
            4 => Some(WeaponLocation::Rear),
            5 => Some(WeaponLocation::Body),
            _ => None,
        }
    }
}

impl fmt::Display for WeaponLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            WeaponLocation::Front => "Front",
            WeaponLocation::Left => "Left",
            WeaponLocation::Right => "Right",
            WeaponLocation::Rear => "Rear",
            WeaponLocation::Body => "Body",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chassis_movement() {
        assert_eq!(
            ChassisKind::try_from(1).unwrap(),
            ChassisKind::AerospaceFighter
        );
        assert_eq!(
            ChassisKind::AerospaceFighter.movement(),
            MovementKind::Aerodyne
        );
        assert_eq!(
            ChassisKind::SpheroidDropShip.movement(),
            MovementKind::Spheroid
        );
        assert_eq!(ChassisKind::WarShip.movement(), MovementKind::SpaceOnly);
        assert!(ChassisKind::AerodyneDropShip.is_supported());
        assert!(!ChassisKind::SpaceStation.is_supported());
    }

    #[test]
    fn test_chassis_ignores_high_flag_bits() {
        assert_eq!(
            ChassisKind::try_from(0x0103).unwrap(),
            ChassisKind::SpheroidSmallCraft
        );
        assert!(matches!(
            ChassisKind::try_from(9),
            Err(Error::UnknownChassis(9))
        ));
    }

    #[test]
    fn test_unknown_codes_are_errors() {
        assert!(matches!(
            EngineKind::try_from(2),
            Err(Error::UnknownEngine(2))
        ));
        assert!(matches!(
            ArmorKind::try_from(7),
            Err(Error::UnknownArmor(7))
        ));
        assert!(matches!(
            TechBase::try_from(3),
            Err(Error::UnknownTechBase(3))
        ));
        assert_eq!(WeaponLocation::from_code(0), None);
        assert_eq!(WeaponLocation::from_code(4), Some(WeaponLocation::Rear));
    }

    #[test]
    fn test_lineage() {
        assert_eq!(Lineage::of_symbol("CLLRM10"), Lineage::Clan);
        assert_eq!(Lineage::of_symbol("ISSRM6 (OS)"), Lineage::InnerSphere);
        assert_eq!(Lineage::of_symbol("Endo Steel"), Lineage::Universal);
        assert_eq!(Lineage::strip("CLLRM10"), "LRM10");
        assert_eq!(Lineage::strip("Supercharger"), "Supercharger");
    }
}
