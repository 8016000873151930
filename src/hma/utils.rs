//! HMA utility functions
//!
//! This module contains file-level helpers used by the command-line front end.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use super::{HmaDecoder, UnitDescriptor, WeaponLocation};
use crate::utils::{collect_files, create_glob_matcher, format_size, is_hma_file, matches_filter};

/// Read and decode a single HMA file
pub fn decode_file(path: &Path) -> Result<UnitDescriptor> {
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    HmaDecoder::new()
        .decode(&data)
        .with_context(|| format!("Failed to decode {}", path.display()))
}

/// Decode a file and print it as a readout or as JSON
pub fn convert_hma(path: &Path, json: bool, pretty: bool) -> Result<()> {
    let unit = decode_file(path)?;

    if json {
        let text = if pretty {
            serde_json::to_string_pretty(&unit)?
        } else {
            serde_json::to_string(&unit)?
        };
        println!("{}", text);
        return Ok(());
    }

    show_unit_info(&unit);
    show_unit_equipment(&unit);
    if let Some(fluff) = &unit.fluff {
        println!("\n{}", fluff);
    }
    Ok(())
}

/// Display the scalar fields of a decoded unit
pub fn show_unit_info(unit: &UnitDescriptor) {
    println!("\nUnit: {}", unit.name);
    println!("  Version: {}", unit.version);
    println!("  Chassis: {} ({})", unit.chassis, unit.movement);
    if !unit.chassis.is_supported() {
        println!("  Note: chassis is not supported for entity construction");
    }
    println!("  Tech base: {}", unit.tech.base);
    println!("  Rules level: {}", unit.rules_level);
    println!("  Year: {}", unit.year);
    println!("  Omni: {}", unit.omni);
    println!(
        "  Engine: {} {} (cruise MP {})",
        unit.engine_rating, unit.engine_kind, unit.cruise_mp
    );
    println!(
        "  Armor: {} ({} total) front {} / left {} / right {} / rear {}",
        unit.armor.kind,
        unit.armor.total(),
        unit.armor.front,
        unit.armor.left,
        unit.armor.right,
        unit.armor.rear
    );
    if unit.transport_capacity > 0 {
        println!("  Transport capacity: {}", unit.transport_capacity);
    }
}

/// Display placed equipment, fire-control links and unresolved items
pub fn show_unit_equipment(unit: &UnitDescriptor) {
    println!("\nEquipment:");
    for location in WeaponLocation::ALL {
        let items: Vec<_> = unit.placements.at(location).collect();
        if items.is_empty() {
            continue;
        }
        println!("  {}:", location);
        for (item, count) in items {
            println!("    {} x{}", item, count);
        }
    }

    if !unit.fire_control.is_empty() {
        println!("\nFire control:");
        for link in &unit.fire_control {
            println!(
                "  {} -> {} ({})",
                link.fire_control, link.launcher, link.location
            );
        }
    }

    if !unit.unresolved.is_empty() {
        println!("\nFailed to load {} items:", unit.unresolved.len());
        for missing in &unit.unresolved {
            println!("  {}", missing);
        }
    }
}

/// Outcome of a batch decode
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub decoded: u64,
    pub bytes: u64,
    pub unresolved: u64,
    pub failures: Vec<(PathBuf, String)>,
}

/// Decode every HMA file under `dir` in parallel
///
/// Without a filter only files with the `.hma` extension are considered.
pub fn decode_batch(dir: &Path, filter: Option<&str>, recursive: bool) -> Result<BatchSummary> {
    let matcher = filter.map(create_glob_matcher).transpose()?;
    let files: Vec<PathBuf> = collect_files(dir, recursive)?
        .into_iter()
        .filter(|path| match &matcher {
            Some(_) => matches_filter(&path.to_string_lossy(), matcher.as_ref()),
            None => is_hma_file(path),
        })
        .collect();

    println!("Decoding {} files from {}...", files.len(), dir.display());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
    )?);

    let decoder = HmaDecoder::new();
    let decoded = AtomicU64::new(0);
    let bytes = AtomicU64::new(0);
    let unresolved = AtomicU64::new(0);

    let mut failures: Vec<(PathBuf, String)> = files
        .par_iter()
        .filter_map(|path| {
            let result = fs::read(path)
                .map_err(|e| e.to_string())
                .and_then(|data| {
                    bytes.fetch_add(data.len() as u64, Ordering::Relaxed);
                    decoder.decode(&data).map_err(|e| e.to_string())
                });
            pb.inc(1);
            match result {
                Ok(unit) => {
                    decoded.fetch_add(1, Ordering::Relaxed);
                    unresolved.fetch_add(unit.unresolved.len() as u64, Ordering::Relaxed);
                    None
                }
                Err(e) => Some((path.clone(), e)),
            }
        })
        .collect();

    pb.finish_and_clear();
    failures.sort();

    let summary = BatchSummary {
        decoded: decoded.into_inner(),
        bytes: bytes.into_inner(),
        unresolved: unresolved.into_inner(),
        failures,
    };

    for (path, error) in &summary.failures {
        eprintln!("Warning: Failed to decode {}: {}", path.display(), error);
    }
    println!(
        "\nDecoded {} files ({}), {} failed, {} unresolved items",
        summary.decoded,
        format_size(summary.bytes),
        summary.failures.len(),
        summary.unresolved
    );

    Ok(summary)
}
