// File: crates/linechart-core/src/theme.rs
// Summary: RGBA color type, HSV helpers, and light/dark chart themes.

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex & 0xFF0000) >> 16) as u8,
            g: ((hex & 0x00FF00) >> 8) as u8,
            b: (hex & 0x0000FF) as u8,
            a: 255,
        }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { r: self.r, g: self.g, b: self.b, a }
    }

    /// Brightened copy used for highlighted dots: HSV value scaled by 1.5,
    /// clamped to full brightness. Hue and saturation are preserved.
    pub fn lighten(self) -> Self {
        let (h, s, v) = rgb_to_hsv(self.r, self.g, self.b);
        let (r, g, b) = hsv_to_rgb(h, s, (v * 1.5).min(1.0));
        Self { r, g, b, a: self.a }
    }
}

/// RGB -> HSV, with h in degrees `[0, 360)` and s/v in `[0, 1]`.
fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };
    (h, s, max)
}

/// HSV -> RGB, inverse of [`rgb_to_hsv`].
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let c = v * s;
    let hp = (h / 60.0).rem_euclid(6.0);
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    let to_u8 = |f: f64| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_u8(r1), to_u8(g1), to_u8(b1))
}

/// d3's category10 ordinal palette; the default series color cycle.
pub const CATEGORY10: [Rgba; 10] = [
    Rgba::from_hex(0x1f77b4),
    Rgba::from_hex(0xff7f0e),
    Rgba::from_hex(0x2ca02c),
    Rgba::from_hex(0xd62728),
    Rgba::from_hex(0x9467bd),
    Rgba::from_hex(0x8c564b),
    Rgba::from_hex(0xe377c2),
    Rgba::from_hex(0x7f7f7f),
    Rgba::from_hex(0xbcbd22),
    Rgba::from_hex(0x17becf),
];

/// Colors for the non-series parts of the chart plus the series palette.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub label: Rgba,
    pub dot_fill: Rgba,
    pub highlight: Rgba,
    pub palette: [Rgba; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::opaque(255, 255, 255),
            grid: Rgba::from_hex(0xeeeeee),
            axis_line: Rgba::from_hex(0x607d8b),
            label: Rgba::opaque(0, 0, 0),
            dot_fill: Rgba::opaque(255, 255, 255),
            highlight: Rgba::opaque(128, 128, 128),
            palette: CATEGORY10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::opaque(18, 18, 20),
            grid: Rgba::opaque(40, 40, 45),
            axis_line: Rgba::opaque(180, 180, 190),
            label: Rgba::opaque(235, 235, 245),
            dot_fill: Rgba::opaque(30, 30, 34),
            highlight: Rgba::opaque(150, 150, 160),
            palette: CATEGORY10,
        }
    }

    /// Series color for `line_index`, cycling through the palette.
    pub fn series_color(&self, line_index: usize) -> Rgba {
        self.palette[line_index % self.palette.len()]
    }

    /// Translucent fill used for the area beneath a line.
    pub fn area_fill(&self, line_index: usize) -> Rgba {
        self.series_color(line_index).with_alpha(51)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return the list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
