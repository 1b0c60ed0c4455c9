use crossterm::style::Color;

/// Sequential colormap applied to the ripple field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    #[default]
    Blues,
}

// Anchor points of the Blues ramp, from near-white to navy
const BLUES: [(u8, u8, u8); 9] = [
    (247, 251, 255),
    (222, 235, 247),
    (198, 219, 239),
    (158, 202, 225),
    (107, 174, 214),
    (66, 146, 198),
    (33, 113, 181),
    (8, 81, 156),
    (8, 48, 107),
];

impl Colormap {
    /// Linearly interpolated colour for an intensity in `[0, 1]`
    pub fn rgb(self, value: f64) -> (u8, u8, u8) {
        let stops = match self {
            Colormap::Blues => &BLUES,
        };
        let v = value.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
        let i = (v.floor() as usize).min(stops.len() - 2);
        let t = v - i as f64;
        let (a, b) = (stops[i], stops[i + 1]);
        (lerp(a.0, b.0, t), lerp(a.1, b.1, t), lerp(a.2, b.2, t))
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
}

/// Composite a colour at `alpha` over the black terminal background
pub fn with_alpha((r, g, b): (u8, u8, u8), alpha: f64) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    let scale = |c: u8| (c as f64 * a).round() as u8;
    rgb(scale(r), scale(g), scale(b))
}

/// Helper to create RGB colors
pub fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

/// Shade glyph for a field intensity; `None` below the visibility floor
pub fn shade_glyph(value: f64) -> Option<char> {
    match value {
        v if v < 0.04 => None,
        v if v < 0.15 => Some('░'),
        v if v < 0.3 => Some('▒'),
        v if v < 0.5 => Some('▓'),
        _ => Some('█'),
    }
}

pub const TITLE: Color = Color::White;
pub const TABLE_HEADER: Color = Color::Cyan;
pub const TABLE_TEXT: Color = Color::Grey;
pub const PROMPT: Color = Color::Grey;
pub const BORDER: Color = Color::DarkGrey;
pub const LABEL: (u8, u8, u8) = (255, 255, 255);
