use crate::foundation::core::Rgb;

/// Names of the built-in palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteName {
    /// Site brand colors; the fallback for unknown names.
    Brand,
    Ocean,
    Sunset,
    Forest,
    Ember,
    Lavender,
    Desert,
    Midnight,
}

impl PaletteName {
    /// Every built-in name, in table order.
    pub const ALL: [PaletteName; 8] = [
        PaletteName::Brand,
        PaletteName::Ocean,
        PaletteName::Sunset,
        PaletteName::Forest,
        PaletteName::Ember,
        PaletteName::Lavender,
        PaletteName::Desert,
        PaletteName::Midnight,
    ];

    /// The palette used when a configuration names one that does not exist.
    pub const DEFAULT: PaletteName = PaletteName::Brand;

    /// Case-insensitive name match.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
    }

    /// Lowercase table key.
    pub fn as_str(self) -> &'static str {
        match self {
            PaletteName::Brand => "brand",
            PaletteName::Ocean => "ocean",
            PaletteName::Sunset => "sunset",
            PaletteName::Forest => "forest",
            PaletteName::Ember => "ember",
            PaletteName::Lavender => "lavender",
            PaletteName::Desert => "desert",
            PaletteName::Midnight => "midnight",
        }
    }
}

impl std::fmt::Display for PaletteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named bundle of color groups sampled by the layer sequencer.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: PaletteName,
    /// Swath and gestural stroke colors.
    pub primary: &'static [Rgb],
    /// Gestural, accent stroke and splash colors.
    pub accent: &'static [Rgb],
    /// Highlight mark colors.
    pub highlight: &'static [Rgb],
    pub background: Rgb,
    /// Background as written in the table; drives [`Palette::is_dark`].
    pub background_hex: &'static str,
}

impl Palette {
    /// Look a palette up by name, falling back to [`PaletteName::DEFAULT`].
    pub fn lookup(name: &str) -> &'static Palette {
        match PaletteName::parse(name) {
            Some(p) => Palette::get(p),
            None => {
                tracing::debug!(
                    requested = name,
                    fallback = PaletteName::DEFAULT.as_str(),
                    "unknown palette, using default"
                );
                Palette::get(PaletteName::DEFAULT)
            }
        }
    }

    pub fn get(name: PaletteName) -> &'static Palette {
        match name {
            PaletteName::Brand => &BRAND,
            PaletteName::Ocean => &OCEAN,
            PaletteName::Sunset => &SUNSET,
            PaletteName::Forest => &FOREST,
            PaletteName::Ember => &EMBER,
            PaletteName::Lavender => &LAVENDER,
            PaletteName::Desert => &DESERT,
            PaletteName::Midnight => &MIDNIGHT,
        }
    }

    /// Table keys of every built-in palette.
    pub fn names() -> impl Iterator<Item = &'static str> {
        PaletteName::ALL.into_iter().map(PaletteName::as_str)
    }

    /// Union of `primary` then `accent`, the gestural stroke pool.
    pub fn gestural_colors(&self) -> Vec<Rgb> {
        self.primary.iter().chain(self.accent).copied().collect()
    }

    /// Crude darkness test: the background hex starts with a low nibble (`0`-`3`).
    ///
    /// Not a luminance computation; the text color choice depends on this exact rule.
    pub fn is_dark(&self) -> bool {
        let hex = self.background_hex.trim_start_matches('#');
        matches!(hex.as_bytes().first(), Some(b'0'..=b'3'))
    }
}

static BRAND: Palette = Palette {
    name: PaletteName::Brand,
    primary: &[Rgb::hex("FFE227"), Rgb::hex("0047AB"), Rgb::hex("0D7377")],
    accent: &[Rgb::hex("FFD800"), Rgb::hex("1A1A1A"), Rgb::hex("0D7377")],
    highlight: &[Rgb::hex("FFFFFF"), Rgb::hex("FFE227"), Rgb::hex("FAF9F7")],
    background: Rgb::hex("FAF9F7"),
    background_hex: "FAF9F7",
};

static OCEAN: Palette = Palette {
    name: PaletteName::Ocean,
    primary: &[
        Rgb::hex("0B4F6C"),
        Rgb::hex("01BAEF"),
        Rgb::hex("20639B"),
        Rgb::hex("173F5F"),
    ],
    accent: &[Rgb::hex("3CAEA3"), Rgb::hex("F6D55C"), Rgb::hex("ED553B")],
    highlight: &[Rgb::hex("FBFBFF"), Rgb::hex("BFE9FF"), Rgb::hex("8FD3FE")],
    background: Rgb::hex("0B1F33"),
    background_hex: "0B1F33",
};

static SUNSET: Palette = Palette {
    name: PaletteName::Sunset,
    primary: &[
        Rgb::hex("FF6B35"),
        Rgb::hex("F7C59F"),
        Rgb::hex("EF476F"),
        Rgb::hex("D1495B"),
    ],
    accent: &[Rgb::hex("2E294E"), Rgb::hex("1B998B"), Rgb::hex("FFD166")],
    highlight: &[Rgb::hex("FFFFFF"), Rgb::hex("FFF1D0"), Rgb::hex("FFE5B4")],
    background: Rgb::hex("FFF3E6"),
    background_hex: "FFF3E6",
};

static FOREST: Palette = Palette {
    name: PaletteName::Forest,
    primary: &[
        Rgb::hex("2D6A4F"),
        Rgb::hex("40916C"),
        Rgb::hex("52B788"),
        Rgb::hex("1B4332"),
    ],
    accent: &[Rgb::hex("D8F3DC"), Rgb::hex("B7E4C7"), Rgb::hex("E9C46A")],
    highlight: &[Rgb::hex("F1FAEE"), Rgb::hex("FFFFFF"), Rgb::hex("E9F5DB")],
    background: Rgb::hex("1B2A1E"),
    background_hex: "1B2A1E",
};

static EMBER: Palette = Palette {
    name: PaletteName::Ember,
    primary: &[
        Rgb::hex("9D0208"),
        Rgb::hex("D00000"),
        Rgb::hex("DC2F02"),
        Rgb::hex("E85D04"),
        Rgb::hex("F48C06"),
    ],
    accent: &[
        Rgb::hex("FAA307"),
        Rgb::hex("FFBA08"),
        Rgb::hex("370617"),
        Rgb::hex("6A040F"),
    ],
    highlight: &[Rgb::hex("FFF3B0"), Rgb::hex("FFE8D6"), Rgb::hex("FFFFFF")],
    background: Rgb::hex("1C1410"),
    background_hex: "1C1410",
};

static LAVENDER: Palette = Palette {
    name: PaletteName::Lavender,
    primary: &[Rgb::hex("7B2CBF"), Rgb::hex("9D4EDD"), Rgb::hex("C77DFF")],
    accent: &[Rgb::hex("5A189A"), Rgb::hex("E0AAFF"), Rgb::hex("FF9F1C")],
    highlight: &[Rgb::hex("FFFFFF"), Rgb::hex("F3E8FF"), Rgb::hex("FFF8E7")],
    background: Rgb::hex("F4F0FA"),
    background_hex: "F4F0FA",
};

static DESERT: Palette = Palette {
    name: PaletteName::Desert,
    primary: &[Rgb::hex("BC6C25"), Rgb::hex("DDA15E"), Rgb::hex("606C38")],
    accent: &[Rgb::hex("283618"), Rgb::hex("A44A3F"), Rgb::hex("6A994E")],
    highlight: &[Rgb::hex("FEFAE0"), Rgb::hex("FFFFFF"), Rgb::hex("FFF3DC")],
    background: Rgb::hex("F2E8CF"),
    background_hex: "F2E8CF",
};

static MIDNIGHT: Palette = Palette {
    name: PaletteName::Midnight,
    primary: &[
        Rgb::hex("3A0CA3"),
        Rgb::hex("4361EE"),
        Rgb::hex("4CC9F0"),
        Rgb::hex("7209B7"),
    ],
    accent: &[Rgb::hex("F72585"), Rgb::hex("B5179E"), Rgb::hex("4895EF")],
    highlight: &[Rgb::hex("E0E1DD"), Rgb::hex("FFFFFF"), Rgb::hex("CAF0F8")],
    background: Rgb::hex("0D0D1A"),
    background_hex: "0D0D1A",
};

#[cfg(test)]
#[path = "../../tests/unit/paint/palette.rs"]
mod tests;
