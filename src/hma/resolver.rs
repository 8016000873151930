//! Code to symbol resolution with soft-failure bookkeeping

use serde::Serialize;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::debug;

use super::catalog::{normalize_code, AmmoLot, SymbolCatalog};
use super::types::TechBase;

/// Codes that mark an empty or structural slot. Never reported.
pub const SENTINEL_CODES: [u16; 4] = [
    0x00, // empty slot
    0x07, // lower leg actuator
    0x08, // foot actuator
    0x0F, // fusion engine
];

/// The caller's view of which equipment names exist downstream
pub trait EquipmentRegistry: Sync {
    fn contains(&self, name: &str) -> bool;
}

/// Registry that knows every name
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissiveRegistry;

impl EquipmentRegistry for PermissiveRegistry {
    fn contains(&self, _name: &str) -> bool {
        true
    }
}

impl EquipmentRegistry for HashSet<String> {
    fn contains(&self, name: &str) -> bool {
        HashSet::contains(self, name)
    }
}

/// A catalog name, optionally tagged with the code it was read from.
///
/// Identity is the name alone, so CASE placed from the trailer and CASE
/// placed from a weapon record accumulate into one entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EquipmentSymbol {
    pub name: &'static str,
    pub code: Option<u16>,
}

impl EquipmentSymbol {
    pub fn named(name: &'static str) -> Self {
        Self { name, code: None }
    }
}

impl PartialEq for EquipmentSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for EquipmentSymbol {}

impl Hash for EquipmentSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for EquipmentSymbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EquipmentSymbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(other.name)
    }
}

impl Borrow<str> for EquipmentSymbol {
    fn borrow(&self) -> &str {
        self.name
    }
}

impl fmt::Display for EquipmentSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolKind {
    Equipment,
    Ammunition,
}

/// Soft decode failure, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum UnresolvedSymbol {
    /// No catalog entry for this code under this tech base
    UnknownCode {
        code: u16,
        tech_base: TechBase,
        kind: SymbolKind,
    },
    /// Catalog hit, but the registry has no such equipment
    MissingDefinition { symbol: EquipmentSymbol },
}

impl UnresolvedSymbol {
    pub fn code(&self) -> Option<u16> {
        match self {
            UnresolvedSymbol::UnknownCode { code, .. } => Some(*code),
            UnresolvedSymbol::MissingDefinition { symbol } => symbol.code,
        }
    }
}

impl fmt::Display for UnresolvedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedSymbol::UnknownCode {
                code, tech_base, ..
            } => write!(f, "unknown code 0x{:02X} for tech base {}", code, tech_base),
            UnresolvedSymbol::MissingDefinition { symbol } => {
                write!(f, "no equipment definition for {}", symbol)
            }
        }
    }
}

/// Outcome of a pure catalog lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(EquipmentSymbol),
    Sentinel,
    Missing(UnresolvedSymbol),
}

/// Resolves codes for one decode and accumulates what it could not resolve
pub struct Resolver<'a> {
    catalog: &'a SymbolCatalog,
    registry: &'a dyn EquipmentRegistry,
    unresolved: Vec<UnresolvedSymbol>,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a SymbolCatalog, registry: &'a dyn EquipmentRegistry) -> Self {
        Self {
            catalog,
            registry,
            unresolved: Vec::new(),
        }
    }

    /// Catalog lookup without side effects
    pub fn lookup(&self, code: u32, tech: TechBase) -> Resolution {
        let code = normalize_code(code);
        match self.catalog.equipment(code.into(), tech) {
            Some(name) => Resolution::Found(EquipmentSymbol {
                name,
                code: Some(code),
            }),
            None if SENTINEL_CODES.contains(&code) => Resolution::Sentinel,
            None => Resolution::Missing(UnresolvedSymbol::UnknownCode {
                code,
                tech_base: tech,
                kind: SymbolKind::Equipment,
            }),
        }
    }

    /// Resolve an equipment code, recording any soft failure.
    ///
    /// Returns `None` for sentinels, unknown codes, and names the registry
    /// does not know.
    pub fn resolve_equipment(&mut self, code: u32, tech: TechBase) -> Option<EquipmentSymbol> {
        match self.lookup(code, tech) {
            Resolution::Found(symbol) => self.check_registry(symbol),
            Resolution::Sentinel => None,
            Resolution::Missing(unresolved) => {
                debug!("{}", unresolved);
                self.unresolved.push(unresolved);
                None
            }
        }
    }

    /// Companion ammunition for a weapon code. Weapons without ammo give `None`.
    pub fn resolve_ammo(&self, code: u32, tech: TechBase) -> Option<&'static AmmoLot> {
        let lot = self.catalog.ammo(code, tech);
        if lot.is_none() {
            debug!("No ammunition entry for weapon code 0x{:02X}", code);
        }
        lot
    }

    /// Accept a symbol placed without a code lookup (CASE, targeting computer...)
    pub fn check_registry(&mut self, symbol: EquipmentSymbol) -> Option<EquipmentSymbol> {
        if self.registry.contains(symbol.name) {
            Some(symbol)
        } else {
            debug!("Equipment {} is not defined", symbol.name);
            self.unresolved
                .push(UnresolvedSymbol::MissingDefinition { symbol });
            None
        }
    }

    pub fn into_unresolved(self) -> Vec<UnresolvedSymbol> {
        self.unresolved
    }
}
