//! HMA record decoder

use std::io::Read;
use tracing::{debug, trace, warn};

use super::ammo::reconcile;
use super::artemis;
use super::bays::BayAggregator;
use super::catalog::SymbolCatalog;
use super::cursor::HmaCursor;
use super::descriptor::{EquipmentPlacement, UnitDescriptor};
use super::fluff::{FluffAssembler, FLUFF_HEADERS};
use super::header::HmaHeader;
use super::resolver::{EquipmentRegistry, EquipmentSymbol, PermissiveRegistry, Resolver};
use super::types::{TechBase, WeaponLocation};
use crate::error::Result;

/// Trailer value that marks installed CASE
const CASE_PRESENT: u16 = 0xFFFF;
const TARGETING_COMPUTER_PRESENT: u16 = 1;

/// Decodes HMA files against a catalog and an equipment registry
pub struct HmaDecoder<'a> {
    catalog: &'a SymbolCatalog,
    registry: &'a dyn EquipmentRegistry,
}

impl Default for HmaDecoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl HmaDecoder<'static> {
    /// Decoder over the builtin catalog that accepts every symbol
    pub fn new() -> Self {
        Self {
            catalog: SymbolCatalog::builtin(),
            registry: &PermissiveRegistry,
        }
    }
}

impl<'a> HmaDecoder<'a> {
    pub fn with_catalog<'b>(self, catalog: &'b SymbolCatalog) -> HmaDecoder<'b>
    where
        'a: 'b,
    {
        HmaDecoder {
            catalog,
            registry: self.registry,
        }
    }

    /// Check every placed symbol against `registry`
    pub fn with_registry<'b>(self, registry: &'b dyn EquipmentRegistry) -> HmaDecoder<'b>
    where
        'a: 'b,
    {
        HmaDecoder {
            catalog: self.catalog,
            registry,
        }
    }

    /// Decode a complete file held in memory
    pub fn decode(&self, data: &[u8]) -> Result<UnitDescriptor> {
        let mut cursor = HmaCursor::new(data);
        let header = HmaHeader::parse(&mut cursor)?;
        let mut state = DecodeState {
            resolver: Resolver::new(self.catalog, self.registry),
            placements: EquipmentPlacement::new(),
            tech: header.tech.base,
        };

        state.read_weapons(&mut cursor)?;
        let transport_capacity = read_bays(&mut cursor)?;

        cursor.skip(12)?;
        let case = cursor.read_u16()?;
        if case == CASE_PRESENT {
            let name = if header.tech.base == TechBase::InnerSphere {
                "ISCASE"
            } else {
                "CLCASE"
            };
            state.place(WeaponLocation::Rear, EquipmentSymbol::named(name), 1);
        }

        let targeting_computer = cursor.read_u16()?;
        if targeting_computer == TARGETING_COMPUTER_PRESENT {
            let name = if header.tech.targeting_computer == TechBase::Clan {
                "CLTargeting Computer"
            } else {
                "ISTargeting Computer"
            };
            state.place(WeaponLocation::Body, EquipmentSymbol::named(name), 1);
        }

        let artemis_bits = cursor.read_u16()?;
        cursor.skip(4)?;
        let rotor_options = cursor.read_u16()?;
        trace!(
            "Rotor options: mast equipment {}, rotor type {}",
            rotor_options / 100,
            rotor_options % 100
        );
        cursor.skip(4)?;

        let fluff = read_fluff(&mut cursor)?;

        let supercharger = cursor.read_u16()?;
        if supercharger > 0 {
            state.place(
                WeaponLocation::Body,
                EquipmentSymbol::named("Supercharger"),
                1,
            );
        }

        if cursor.remaining() > 0 {
            warn!(
                "{} trailing bytes after offset {} ignored",
                cursor.remaining(),
                cursor.position()
            );
        }

        let fire_control = artemis::link(&state.placements, artemis_bits, self.registry);
        let unresolved = state.resolver.into_unresolved();
        debug!(
            "Decoded {}: {} placed items, {} fire-control links, {} unresolved",
            header.name,
            state.placements.total(),
            fire_control.len(),
            unresolved.len()
        );

        Ok(UnitDescriptor {
            version: header.version,
            design_flags: header.design_flags,
            name: header.name,
            rules_level: header.rules_level,
            year: header.year,
            chassis: header.chassis,
            movement: header.chassis.movement(),
            tech: header.tech,
            omni: header.omni,
            engine_rating: header.engine_rating,
            engine_kind: header.engine_kind,
            cruise_mp: header.cruise_mp,
            armor: header.armor,
            transport_capacity,
            artemis: artemis_bits,
            fluff,
            placements: state.placements,
            fire_control,
            unresolved,
        })
    }

    /// Read the whole stream, then decode it
    pub fn decode_reader<R: Read>(&self, mut reader: R) -> Result<UnitDescriptor> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.decode(&data)
    }
}

impl UnitDescriptor {
    /// Decode with the builtin catalog and a permissive registry
    pub fn parse(data: &[u8]) -> Result<Self> {
        HmaDecoder::new().decode(data)
    }
}

struct DecodeState<'a> {
    resolver: Resolver<'a>,
    placements: EquipmentPlacement,
    tech: TechBase,
}

impl DecodeState<'_> {
    fn place(&mut self, location: WeaponLocation, symbol: EquipmentSymbol, count: u32) {
        if count == 0 {
            return;
        }
        if let Some(symbol) = self.resolver.check_registry(symbol) {
            self.placements.add(location, symbol, count);
        }
    }

    fn read_weapons(&mut self, cursor: &mut HmaCursor<'_>) -> Result<()> {
        let count = cursor.read_u16()?;
        debug!("Reading {} weapon records", count);

        for index in 0..count {
            let stack = cursor.read_u16()?;
            let code = cursor.read_u16()?;
            let _manufacturer = cursor.read_prefixed_blob()?;
            let location_code = cursor.read_u16()?;
            let ammo = cursor.read_u16()?;
            cursor.skip(4)?;

            let location = WeaponLocation::from_code(location_code).unwrap_or_else(|| {
                warn!(
                    "Weapon record {} has unknown location {}, placing at Body",
                    index, location_code
                );
                WeaponLocation::Body
            });

            let Some(weapon) = self.resolver.resolve_equipment(code.into(), self.tech) else {
                continue;
            };
            trace!("{} x{} at {}", weapon, stack, location);
            self.placements.add(location, weapon, stack.into());

            if ammo == 0 {
                continue;
            }
            if let Some(lot) = self.resolver.resolve_ammo(code.into(), self.tech) {
                let allocation = reconcile(ammo.into(), lot)?;
                self.place(
                    WeaponLocation::Body,
                    EquipmentSymbol::named(allocation.lot.name),
                    allocation.lots,
                );
            }
        }
        Ok(())
    }
}

fn read_bays(cursor: &mut HmaCursor<'_>) -> Result<u32> {
    let count = cursor.read_u16()?;
    let mut bays = BayAggregator::new();
    for _ in 0..count {
        let size = cursor.read_f32()?;
        let _label = cursor.read_prefixed_blob()?;
        bays.add(size);
    }
    Ok(bays.capacity())
}

fn read_fluff(cursor: &mut HmaCursor<'_>) -> Result<Option<String>> {
    let mut fluff = FluffAssembler::new();
    for _ in FLUFF_HEADERS {
        fluff.push(&cursor.read_prefixed_text()?);
    }
    let _notes = cursor.read_prefixed_blob()?;
    Ok(fluff.finish())
}
