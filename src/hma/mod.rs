//! HMA aerospace unit design decoder
//!
//! HMA files are written by a unit design tool for fixed-wing aerospace craft:
//! conventional and aerospace fighters, small craft and DropShips. Each file
//! holds one design.
//!
//! ## Format Overview
//!
//! All integers are two unsigned bytes, low byte first. Text and blobs are a
//! u16 length followed by that many bytes. An HMA file consists of:
//! - Header: version tag, design flags, chassis, name, rules level, year
//! - Capability summary (contains `omni` for OmniFighters)
//! - Component tech region, engine, cruise MP and armor facings
//! - Weapon records (count, code, location, ammunition)
//! - Troop/cargo bays (byte-swapped f32 size plus label)
//! - Trailer: CASE, targeting computer, Artemis bits, rotor options
//! - Six narrative sections, notes, supercharger flag
//!
//! Equipment and ammunition are stored as codes whose meaning depends on the
//! unit's tech base. Codes without a catalog entry are collected on the
//! descriptor instead of failing the decode.
//!
//! ## Example
//!
//! ```rust,no_run
//! use unhma::hma::HmaDecoder;
//!
//! let data = std::fs::read("Sabre SB-27.hma")?;
//! let unit = HmaDecoder::new().decode(&data)?;
//!
//! println!("{} ({})", unit.name, unit.chassis);
//! for (location, item, count) in unit.placements.iter() {
//!     println!("  {:<6} {} x{}", location, item, count);
//! }
//! for missing in &unit.unresolved {
//!     println!("  failed to load: {}", missing);
//! }
//! # Ok::<(), unhma::Error>(())
//! ```

mod ammo;
mod artemis;
mod bays;
mod catalog;
mod cursor;
mod descriptor;
mod fluff;
mod header;
mod reader;
mod resolver;
mod types;
pub mod utils;

#[cfg(test)]
pub(crate) mod fixture;

pub use ammo::{reconcile, Allocation};
pub use artemis::{link as link_fire_control, FireControlLink};
pub use bays::BayAggregator;
pub use catalog::{
    half_lot, normalize_code, AmmoFamily, AmmoLot, AmmoTables, EquipmentTables, SymbolCatalog,
};
pub use cursor::HmaCursor;
pub use descriptor::{ArmorFacings, EquipmentPlacement, TechProfile, UnitDescriptor};
pub use fluff::{FluffAssembler, FLUFF_HEADERS, FLUFF_THRESHOLD};
pub use header::HmaHeader;
pub use reader::HmaDecoder;
pub use resolver::{
    EquipmentRegistry, EquipmentSymbol, PermissiveRegistry, Resolution, Resolver, SymbolKind,
    UnresolvedSymbol, SENTINEL_CODES,
};
pub use types::*;
pub use utils::{convert_hma, decode_batch, decode_file, show_unit_info, BatchSummary};
