//! Built-in brick color catalog.

use brickfield_core::Rgb;

/// One catalog entry: integer code, display name, 8-bit sRGB components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: u32,
    pub name: &'static str,
    pub srgb: [u8; 3],
}

impl CatalogEntry {
    const fn new(code: u32, name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            code,
            name,
            srgb: [r, g, b],
        }
    }

    /// Normalized RGB triple for this entry.
    pub fn rgb(&self) -> Rgb {
        Rgb::from_u8(self.srgb[0], self.srgb[1], self.srgb[2])
    }
}

// ─── Catalog definition ─────────────────────────────────────────────────

const BUILTIN: &[CatalogEntry] = &[
    CatalogEntry::new(1, "White", 242, 243, 242),
    CatalogEntry::new(2, "Brick yellow", 204, 185, 141),
    CatalogEntry::new(3, "Nougat", 204, 142, 104),
    CatalogEntry::new(4, "Bright red", 196, 40, 27),
    CatalogEntry::new(5, "Bright blue", 13, 105, 171),
    CatalogEntry::new(6, "Bright yellow", 245, 205, 47),
    CatalogEntry::new(7, "Black", 27, 42, 52),
    CatalogEntry::new(8, "Dark green", 40, 127, 70),
    CatalogEntry::new(9, "Bright green", 75, 151, 74),
    CatalogEntry::new(10, "Dark orange", 160, 95, 52),
    CatalogEntry::new(11, "Medium blue", 110, 153, 201),
    CatalogEntry::new(12, "Bright orange", 218, 133, 64),
    CatalogEntry::new(13, "Bright bluish green", 0, 143, 155),
    CatalogEntry::new(14, "Bright yellowish green", 164, 189, 70),
    CatalogEntry::new(15, "Bright reddish violet", 146, 57, 120),
    CatalogEntry::new(16, "Sand blue", 116, 134, 156),
    CatalogEntry::new(17, "Sand yellow", 149, 138, 115),
    CatalogEntry::new(18, "Earth blue", 32, 58, 86),
    CatalogEntry::new(19, "Earth green", 39, 70, 44),
    CatalogEntry::new(20, "Sand green", 120, 144, 129),
    CatalogEntry::new(21, "Dark red", 123, 46, 47),
    CatalogEntry::new(22, "Flame yellowish orange", 226, 155, 63),
    CatalogEntry::new(23, "Reddish brown", 105, 64, 39),
    CatalogEntry::new(24, "Medium stone grey", 163, 162, 164),
    CatalogEntry::new(25, "Dark stone grey", 99, 95, 97),
    CatalogEntry::new(26, "Light stone grey", 229, 228, 222),
    CatalogEntry::new(27, "Light royal blue", 159, 195, 233),
    CatalogEntry::new(28, "Bright purple", 205, 98, 152),
    CatalogEntry::new(29, "Light purple", 228, 173, 200),
    CatalogEntry::new(30, "Cool yellow", 253, 234, 140),
    CatalogEntry::new(31, "Medium lilac", 52, 43, 117),
    CatalogEntry::new(32, "Light nougat", 246, 215, 179),
    CatalogEntry::new(33, "Dark brown", 53, 33, 0),
    CatalogEntry::new(34, "Medium nougat", 170, 125, 85),
    CatalogEntry::new(35, "Silver", 149, 151, 153),
    CatalogEntry::new(36, "Titanium metallic", 66, 66, 66),
];

/// Static registry mapping color codes to names and normalized RGB.
///
/// Constructed once at startup and never mutated; pass it by reference into
/// the resolver rather than reaching for ambient global state.
#[derive(Debug, Clone, Copy)]
pub struct ColorCatalog {
    entries: &'static [CatalogEntry],
}

impl ColorCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self { entries: BUILTIN }
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    /// Look up an entry by color code.
    pub fn by_code(&self, code: u32) -> Option<&'static CatalogEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    /// Look up an entry by exact display name.
    pub fn by_name(&self, name: &str) -> Option<&'static CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        let catalog = ColorCatalog::builtin();
        for e in catalog.entries() {
            assert_eq!(
                catalog.by_code(e.code).unwrap().name,
                e.name,
                "duplicate code {}",
                e.code
            );
        }
    }

    #[test]
    fn names_are_unique_and_resolvable() {
        let catalog = ColorCatalog::builtin();
        for e in catalog.entries() {
            assert_eq!(catalog.by_name(e.name).unwrap().code, e.code);
        }
    }

    #[test]
    fn rgb_is_normalized() {
        for e in ColorCatalog::builtin().entries() {
            let rgb = e.rgb();
            for c in [rgb.r, rgb.g, rgb.b] {
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }
}
