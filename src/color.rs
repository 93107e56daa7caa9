//! RGB light colors.
//!
//! [`Color`] is always stored as hue/saturation/brightness, which is what the
//! firmware keeps. [`Rgb`] is derived on demand and never compared.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::value::{Brightness, Hue, Saturation};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown or invalid color format: {0:?}")]
pub struct ColorError(pub String);

/// HSV color as understood by the firmware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub hue: Hue,
    pub saturation: Saturation,
    pub brightness: Brightness,
}

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(hue: u16, saturation: u8, brightness: u8) -> Self {
        Self {
            hue: Hue(hue),
            saturation: Saturation(saturation),
            brightness: Brightness(brightness),
        }
    }

    // QMK default colors
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(0, 0, 100);
    pub const RED: Self = Self::new(0, 100, 100);
    pub const CORAL: Self = Self::new(16, 69, 100);
    pub const ORANGE: Self = Self::new(40, 100, 100);
    pub const GOLD: Self = Self::new(42, 100, 85);
    pub const GOLDENROD: Self = Self::new(43, 85, 85);
    pub const YELLOW: Self = Self::new(61, 100, 100);
    pub const CHARTREUSE: Self = Self::new(90, 100, 100);
    pub const GREEN: Self = Self::new(120, 100, 100);
    pub const SPRING_GREEN: Self = Self::new(150, 100, 100);
    pub const TURQUOISE: Self = Self::new(174, 35, 44);
    pub const TEAL: Self = Self::new(181, 100, 50);
    pub const CYAN: Self = Self::new(181, 100, 100);
    pub const AZURE: Self = Self::new(186, 40, 100);
    pub const BLUE: Self = Self::new(240, 100, 100);
    pub const PURPLE: Self = Self::new(270, 100, 100);
    pub const MAGENTA: Self = Self::new(301, 100, 100);
    pub const PINK: Self = Self::new(330, 50, 100);

    pub const OFF: Self = Self::BLACK;

    /// The 19 named colors.
    pub fn all() -> &'static [Color] {
        &ALL_COLORS
    }

    /// Display name of a predefined color, or `"Unknown"`.
    pub fn name(self) -> &'static str {
        NAMED_COLORS
            .iter()
            .find(|(_, color)| *color == self)
            .map(|(name, _)| *name)
            .unwrap_or("Unknown")
    }

    pub fn to_rgb(self) -> Rgb {
        let h = self.hue.0 as f64;
        let s = self.saturation.0 as f64 / 100.0;
        let v = self.brightness.0 as f64 / 100.0;
        let c = s * v;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if (0.0..60.0).contains(&h) {
            (c, x, 0.0)
        } else if (60.0..120.0).contains(&h) {
            (x, c, 0.0)
        } else if (120.0..180.0).contains(&h) {
            (0.0, c, x)
        } else if (180.0..240.0).contains(&h) {
            (0.0, x, c)
        } else if (240.0..300.0).contains(&h) {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb {
            red: ((r + m) * 255.0).round() as u8,
            green: ((g + m) * 255.0).round() as u8,
            blue: ((b + m) * 255.0).round() as u8,
        }
    }

    pub fn to_hsv_string(self) -> String {
        format!(
            "hsv({},{},{})",
            self.hue.0, self.saturation.0, self.brightness.0
        )
    }

    pub fn to_rgb_string(self) -> String {
        self.to_rgb().to_string()
    }

    pub fn to_hex_string(self) -> String {
        self.to_rgb().to_hex_string()
    }
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn to_hsv(self) -> Color {
        let r = self.red as f64;
        let g = self.green as f64;
        let b = self.blue as f64;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = max - min;

        if max == 0.0 {
            return Color::BLACK;
        }

        let saturation = (diff * 100.0 / max).round() as u8;
        let brightness = (max * 100.0 / 255.0).round() as u8;
        let hue = if diff == 0.0 {
            0
        } else if max == r {
            (60.0 * ((g - b) / diff) + 360.0).round() as u16 % 360
        } else if max == g {
            (60.0 * ((b - r) / diff) + 120.0).round() as u16 % 360
        } else {
            (60.0 * ((r - g) / diff) + 240.0).round() as u16 % 360
        };

        Color::new(hue, saturation, brightness)
    }

    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        value.to_hsv()
    }
}

impl From<Color> for Rgb {
    fn from(value: Color) -> Self {
        value.to_rgb()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            "Unknown" => f.write_str(&self.to_hsv_string()),
            name => f.write_str(name),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts a color name, `#rrggbb`, `rgb(r,g,b)` or `hsv(h,s,v)`.
    ///
    /// Matching ignores case, spaces and the word "color".
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value
            .to_lowercase()
            .replace(' ', "")
            .replace("color", "");
        let invalid = || ColorError(value.to_string());

        if let Some(args) = normalized.strip_prefix("hsv") {
            let [h, s, v] = parse_triple(args).ok_or_else(invalid)?;
            if h > 360 || s > 100 || v > 100 {
                return Err(invalid());
            }
            return Ok(Color::new(h, s as u8, v as u8));
        }

        if let Some(args) = normalized.strip_prefix("rgb") {
            let [r, g, b] = parse_triple(args).ok_or_else(invalid)?;
            let component = |c: u16| u8::try_from(c).map_err(|_| invalid());
            return Ok(Rgb::new(component(r)?, component(g)?, component(b)?).to_hsv());
        }

        if let Some(hex) = normalized.strip_prefix('#') {
            return parse_hex(hex).map(Rgb::to_hsv).ok_or_else(invalid);
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| name.to_lowercase() == normalized)
            .map(|(_, color)| *color)
            .ok_or_else(invalid)
    }
}

/// Parses `(a,b,c)`.
fn parse_triple(args: &str) -> Option<[u16; 3]> {
    let inner = args.strip_prefix('(')?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(|part| part.parse::<u16>().ok());
    let triple = [parts.next()??, parts.next()??, parts.next()??];
    match parts.next() {
        None => Some(triple),
        Some(_) => None,
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

static NAMED_COLORS: [(&str, Color); 19] = [
    ("Black", Color::BLACK),
    ("White", Color::WHITE),
    ("Red", Color::RED),
    ("Coral", Color::CORAL),
    ("Orange", Color::ORANGE),
    ("Gold", Color::GOLD),
    ("Goldenrod", Color::GOLDENROD),
    ("Yellow", Color::YELLOW),
    ("Chartreuse", Color::CHARTREUSE),
    ("Green", Color::GREEN),
    ("SpringGreen", Color::SPRING_GREEN),
    ("Turquoise", Color::TURQUOISE),
    ("Teal", Color::TEAL),
    ("Cyan", Color::CYAN),
    ("Azure", Color::AZURE),
    ("Blue", Color::BLUE),
    ("Purple", Color::PURPLE),
    ("Magenta", Color::MAGENTA),
    ("Pink", Color::PINK),
];

static ALL_COLORS: [Color; 19] = [
    Color::BLACK,
    Color::WHITE,
    Color::RED,
    Color::CORAL,
    Color::ORANGE,
    Color::GOLD,
    Color::GOLDENROD,
    Color::YELLOW,
    Color::CHARTREUSE,
    Color::GREEN,
    Color::SPRING_GREEN,
    Color::TURQUOISE,
    Color::TEAL,
    Color::CYAN,
    Color::AZURE,
    Color::BLUE,
    Color::PURPLE,
    Color::MAGENTA,
    Color::PINK,
];

#[cfg(test)]
mod tests {
    use super::{Color, ColorError, Rgb};

    // (name, rgb, hsv)
    const NAMED: [(&str, Rgb, Color); 19] = [
        ("Black", Rgb::new(0, 0, 0), Color::BLACK),
        ("White", Rgb::new(255, 255, 255), Color::WHITE),
        ("Red", Rgb::new(255, 0, 0), Color::RED),
        ("Coral", Rgb::new(255, 126, 79), Color::CORAL),
        ("Orange", Rgb::new(255, 170, 0), Color::ORANGE),
        ("Gold", Rgb::new(217, 152, 0), Color::GOLD),
        ("Goldenrod", Rgb::new(217, 165, 33), Color::GOLDENROD),
        ("Yellow", Rgb::new(251, 255, 0), Color::YELLOW),
        ("Chartreuse", Rgb::new(128, 255, 0), Color::CHARTREUSE),
        ("Green", Rgb::new(0, 255, 0), Color::GREEN),
        ("SpringGreen", Rgb::new(0, 255, 128), Color::SPRING_GREEN),
        ("Turquoise", Rgb::new(73, 112, 108), Color::TURQUOISE),
        ("Teal", Rgb::new(0, 125, 128), Color::TEAL),
        ("Cyan", Rgb::new(0, 251, 255), Color::CYAN),
        ("Azure", Rgb::new(153, 245, 255), Color::AZURE),
        ("Blue", Rgb::new(0, 0, 255), Color::BLUE),
        ("Purple", Rgb::new(128, 0, 255), Color::PURPLE),
        ("Magenta", Rgb::new(255, 0, 251), Color::MAGENTA),
        ("Pink", Rgb::new(255, 128, 191), Color::PINK),
    ];

    #[test]
    fn every_named_color_parses_in_all_forms() {
        for (name, rgb, hsv) in NAMED {
            let forms = [
                name.to_string(),
                rgb.to_hex_string(),
                rgb.to_string(),
                hsv.to_hsv_string(),
            ];
            for form in forms {
                let parsed: Color = form.parse().expect("named color form should parse");
                assert_eq!(parsed, hsv, "{form}");
                assert_eq!(parsed.name(), name, "{form}");
            }
        }
    }

    #[test]
    fn named_colors_convert_both_ways() {
        for (name, rgb, hsv) in NAMED {
            assert_eq!(rgb.to_hsv(), hsv, "{name}");
            assert_eq!(hsv.to_rgb(), rgb, "{name}");
            assert_eq!(hsv.to_rgb().to_hsv().to_rgb(), rgb, "{name}");
        }
    }

    #[test]
    fn all_lists_each_named_color_once() {
        let all = Color::all();
        assert_eq!(all.len(), 19);
        for color in all {
            assert_ne!(color.name(), "Unknown");
            assert_eq!(all.iter().filter(|c| *c == color).count(), 1);
        }
    }

    #[test]
    fn anonymous_color_formats() {
        let color = Color::new(210, 99, 27);
        assert_eq!(color.name(), "Unknown");
        assert_eq!(color.to_hex_string(), "#012345");
        assert_eq!(color.to_rgb_string(), "rgb(1,35,69)");
        assert_eq!(color.to_string(), "hsv(210,99,27)");

        for input in ["#012345", "rgb(1,35,69)", "hsv(210,99,27)"] {
            assert_eq!(input.parse::<Color>(), Ok(color), "{input}");
        }
    }

    #[test]
    fn parsing_ignores_case_spaces_and_color_word() {
        assert_eq!("Spring Green".parse::<Color>(), Ok(Color::SPRING_GREEN));
        assert_eq!("color red".parse::<Color>(), Ok(Color::RED));
        assert_eq!("RGB( 0, 0, 255 )".parse::<Color>(), Ok(Color::BLUE));
        assert_eq!("#FF0000".parse::<Color>(), Ok(Color::RED));
    }

    #[test]
    fn rejects_malformed_or_out_of_range_input() {
        for input in [
            "",
            "chartreuse-ish",
            "#12345",
            "#1234567",
            "#gg0000",
            "rgb(256,0,0)",
            "rgb(1,2)",
            "rgb(1,2,3,4)",
            "hsv(361,0,0)",
            "hsv(0,101,0)",
            "hsv(0,0,101)",
            "hsv(-1,0,0)",
        ] {
            assert_eq!(
                input.parse::<Color>(),
                Err(ColorError(input.to_string())),
                "{input}"
            );
        }
    }

    #[test]
    fn sector_boundaries_convert_both_ways() {
        let cases = [
            (0, Rgb::new(255, 0, 0)),
            (60, Rgb::new(255, 255, 0)),
            (120, Rgb::new(0, 255, 0)),
            (180, Rgb::new(0, 255, 255)),
            (240, Rgb::new(0, 0, 255)),
            (300, Rgb::new(255, 0, 255)),
        ];
        for (hue, rgb) in cases {
            assert_eq!(Color::new(hue, 100, 100).to_rgb(), rgb, "hue {hue}");
            assert_eq!(rgb.to_hsv(), Color::new(hue, 100, 100), "{rgb:?}");
        }
    }

    #[test]
    fn full_turn_hue_is_red() {
        assert_eq!(Color::new(360, 100, 100).to_rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn gray_has_zero_hue_and_saturation() {
        assert_eq!(Rgb::new(128, 128, 128).to_hsv(), Color::new(0, 0, 50));
    }
}
