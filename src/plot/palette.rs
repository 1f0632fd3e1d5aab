use plotters::style::RGBColor;

// viridis at 0.0, 0.1, ..., 1.0
const VIRIDIS: [(u8, u8, u8); 11] = [
    (68, 1, 84),
    (72, 36, 117),
    (65, 68, 135),
    (53, 95, 141),
    (42, 120, 142),
    (33, 145, 140),
    (34, 168, 132),
    (68, 191, 112),
    (122, 209, 81),
    (189, 223, 38),
    (253, 231, 37),
];

const COOL: (u8, u8, u8) = (59, 76, 192);
const NEUTRAL: (u8, u8, u8) = (221, 221, 221);
const WARM: (u8, u8, u8) = (180, 4, 38);

fn lerp(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> RGBColor {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    RGBColor(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Viridis colour at `t` in [0, 1]
pub fn viridis(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let pos = t * (VIRIDIS.len() - 1) as f64;
    let lo = (pos.floor() as usize).min(VIRIDIS.len() - 2);
    lerp(VIRIDIS[lo], VIRIDIS[lo + 1], pos - lo as f64)
}

/// `n` evenly spaced viridis colours, skipping both ends of the map
pub fn viridis_palette(n: usize) -> Vec<RGBColor> {
    (1..=n).map(|i| viridis(i as f64 / (n + 1) as f64)).collect()
}

/// Diverging blue-grey-red colour for a correlation in [-1, 1]
pub fn coolwarm(value: f64) -> RGBColor {
    let v = value.clamp(-1.0, 1.0);
    if v < 0.0 {
        lerp(NEUTRAL, COOL, -v)
    } else {
        lerp(NEUTRAL, WARM, v)
    }
}

/// Black or white, whichever reads better on `background`
pub fn text_color_on(background: &RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = *background;
    let luminance = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
    if luminance > 140.0 {
        RGBColor(0, 0, 0)
    } else {
        RGBColor(255, 255, 255)
    }
}
