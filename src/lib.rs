//! # unhma
//!
//! A Rust library for decoding HMA aerospace unit design files.
//!
//! ## Overview
//!
//! HMA files describe a single fixed-wing aerospace design: chassis, engine,
//! armor, mounted weapons, ammunition, bays and narrative text. This library
//! provides:
//!
//! - A bounds-checked reader for the file's little-endian primitives
//! - Static equipment and ammunition catalogs for Inner Sphere, Clan and Mixed tech
//! - Ammunition lot reconciliation, including half-ton machine gun lots
//! - Artemis fire-control linking for LRM and SRM launchers
//! - An immutable, serializable [`UnitDescriptor`] output model
//!
//! ## Example - Decoding
//!
//! ```rust,no_run
//! use unhma::UnitDescriptor;
//!
//! fn main() -> anyhow::Result<()> {
//!     let data = std::fs::read("Sabre SB-27.hma")?;
//!     let unit = UnitDescriptor::parse(&data)?;
//!
//!     println!("{} ({}, {})", unit.name, unit.chassis, unit.tech.base);
//!     unit.ensure_supported()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Example - Custom registry
//!
//! ```rust,no_run
//! use std::collections::HashSet;
//! use unhma::HmaDecoder;
//!
//! fn main() -> anyhow::Result<()> {
//!     let known: HashSet<String> = ["ISPPC".to_string()].into_iter().collect();
//!     let data = std::fs::read("Stuka STU-K5.hma")?;
//!
//!     let unit = HmaDecoder::new().with_registry(&known).decode(&data)?;
//!     for missing in &unit.unresolved {
//!         eprintln!("{}", missing);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod hma;
pub mod utils;

pub use error::{Error, Result};
pub use hma::{
    EquipmentPlacement, EquipmentRegistry, EquipmentSymbol, HmaDecoder, SymbolCatalog,
    UnitDescriptor, UnresolvedSymbol,
};
pub use utils::{collect_files, create_glob_matcher, format_size, matches_filter};
