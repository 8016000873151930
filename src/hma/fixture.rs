//! Synthetic HMA files for tests

pub struct WeaponRecord {
    pub stack: u16,
    pub code: u16,
    pub manufacturer: &'static str,
    pub location: u16,
    pub ammo: u16,
}

/// Writes a file with the same layout the decoder walks
pub struct HmaFileBuilder {
    design_flags: u16,
    chassis: u16,
    name: String,
    rules_level: u16,
    year: u16,
    summary: String,
    tech: u16,
    components: [u16; 4],
    armor_kind: u16,
    engine: (u16, u16, u16),
    armor: (u16, u16, u16, u16),
    weapons: Vec<WeaponRecord>,
    bays: Vec<(f32, &'static str)>,
    case: u16,
    targeting_computer: u16,
    artemis: u16,
    rotor: u16,
    fluff: [String; 6],
    notes: String,
    supercharger: u16,
    trailing: Vec<u8>,
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put_text(out: &mut Vec<u8>, text: &str) {
    put_u16(out, text.len() as u16);
    out.extend_from_slice(text.as_bytes());
}

fn put_zeros(out: &mut Vec<u8>, len: usize) {
    out.extend(std::iter::repeat(0u8).take(len));
}

impl HmaFileBuilder {
    pub fn new() -> Self {
        Self {
            design_flags: 0x4,
            chassis: 1,
            name: "Test Fighter".to_string(),
            rules_level: 1,
            year: 3050,
            summary: String::new(),
            tech: 0,
            components: [0; 4],
            armor_kind: 0,
            engine: (100, 1, 5),
            armor: (10, 8, 8, 6),
            weapons: Vec::new(),
            bays: Vec::new(),
            case: 0,
            targeting_computer: 0,
            artemis: 0,
            rotor: 0,
            fluff: Default::default(),
            notes: String::new(),
            supercharger: 0,
            trailing: Vec::new(),
        }
    }

    pub fn chassis(mut self, code: u16) -> Self {
        self.chassis = code;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn rules_level(mut self, level: u16) -> Self {
        self.rules_level = level;
        self
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = year;
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.summary = summary.to_string();
        self
    }

    pub fn tech(mut self, code: u16) -> Self {
        self.tech = code;
        self
    }

    pub fn components(mut self, codes: [u16; 4]) -> Self {
        self.components = codes;
        self
    }

    pub fn armor_kind(mut self, code: u16) -> Self {
        self.armor_kind = code;
        self
    }

    pub fn engine(mut self, rating: u16, kind: u16, cruise: u16) -> Self {
        self.engine = (rating, kind, cruise);
        self
    }

    pub fn armor(mut self, front: u16, left: u16, right: u16, rear: u16) -> Self {
        self.armor = (front, left, right, rear);
        self
    }

    pub fn weapon(mut self, stack: u16, code: u16, location: u16, ammo: u16) -> Self {
        self.weapons.push(WeaponRecord {
            stack,
            code,
            manufacturer: "Defiance",
            location,
            ammo,
        });
        self
    }

    pub fn bay(mut self, size: f32, label: &'static str) -> Self {
        self.bays.push((size, label));
        self
    }

    pub fn case(mut self, value: u16) -> Self {
        self.case = value;
        self
    }

    pub fn targeting_computer(mut self, value: u16) -> Self {
        self.targeting_computer = value;
        self
    }

    pub fn artemis(mut self, bits: u16) -> Self {
        self.artemis = bits;
        self
    }

    pub fn rotor(mut self, value: u16) -> Self {
        self.rotor = value;
        self
    }

    pub fn fluff(mut self, section: usize, text: &str) -> Self {
        self.fluff[section] = text.to_string();
        self
    }

    pub fn notes(mut self, text: &str) -> Self {
        self.notes = text.to_string();
        self
    }

    pub fn supercharger(mut self, value: u16) -> Self {
        self.supercharger = value;
        self
    }

    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing = bytes.to_vec();
        self
    }

    fn is_omni(&self) -> bool {
        self.summary.as_bytes().windows(4).any(|w| w == b"omni")
    }

    /// Header only, ending right before the weapon count
    pub fn header_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"V1.00");
        put_u16(&mut out, self.design_flags);
        put_u16(&mut out, self.chassis);
        put_zeros(&mut out, 18);
        put_text(&mut out, &self.name);
        put_zeros(&mut out, 3);
        put_u16(&mut out, self.rules_level);
        put_u16(&mut out, self.year);
        put_zeros(&mut out, 40);
        put_text(&mut out, &self.summary);

        put_u16(&mut out, self.tech);
        for component in self.components {
            put_u16(&mut out, component);
        }
        put_u16(&mut out, self.armor_kind);
        put_zeros(&mut out, 80);

        let (rating, kind, cruise) = self.engine;
        put_u16(&mut out, rating);
        put_u16(&mut out, kind);
        put_u16(&mut out, cruise);

        let (front, left, right, rear) = self.armor;
        put_u16(&mut out, front);
        put_zeros(&mut out, 2);
        put_u16(&mut out, left);
        put_zeros(&mut out, 10);
        put_u16(&mut out, rear);
        put_zeros(&mut out, 2);
        put_u16(&mut out, right);
        put_zeros(&mut out, 2);
        put_zeros(&mut out, 8);
        put_zeros(&mut out, if self.is_omni() { 12 } else { 14 });
        out
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = self.header_bytes();

        put_u16(&mut out, self.weapons.len() as u16);
        for weapon in &self.weapons {
            put_u16(&mut out, weapon.stack);
            put_u16(&mut out, weapon.code);
            put_text(&mut out, weapon.manufacturer);
            put_u16(&mut out, weapon.location);
            put_u16(&mut out, weapon.ammo);
            put_zeros(&mut out, 4);
        }

        put_u16(&mut out, self.bays.len() as u16);
        for (size, label) in &self.bays {
            out.extend_from_slice(&size.to_le_bytes());
            put_text(&mut out, label);
        }

        put_zeros(&mut out, 12);
        put_u16(&mut out, self.case);
        put_u16(&mut out, self.targeting_computer);
        put_u16(&mut out, self.artemis);
        put_zeros(&mut out, 4);
        put_u16(&mut out, self.rotor);
        put_zeros(&mut out, 4);

        for section in &self.fluff {
            put_text(&mut out, section);
        }
        put_text(&mut out, &self.notes);
        put_u16(&mut out, self.supercharger);
        out.extend_from_slice(&self.trailing);
        out
    }
}
