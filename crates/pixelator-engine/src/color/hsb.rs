//! HSB (hue, saturation, brightness) conversions.
//!
//! Hexcone model with every component in `0.0..=1.0`. Hue `1.0` wraps to `0.0`.

/// A color in HSB space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    /// Hue as a fraction of a full turn (0.0..1.0)
    pub hue: f32,
    /// Saturation (0.0..=1.0)
    pub saturation: f32,
    /// Brightness (0.0..=1.0)
    pub brightness: f32,
}

impl Hsb {
    #[inline]
    pub fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }
}

/// Convert 8-bit RGB to HSB.
pub fn rgb_to_hsb(r: u8, g: u8, b: u8) -> Hsb {
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);

    let brightness = cmax as f32 / 255.0;
    let saturation = if cmax != 0 {
        (cmax - cmin) as f32 / cmax as f32
    } else {
        0.0
    };

    let hue = if saturation == 0.0 {
        0.0
    } else {
        let span = (cmax - cmin) as f32;
        let redc = (cmax - r) as f32 / span;
        let greenc = (cmax - g) as f32 / span;
        let bluec = (cmax - b) as f32 / span;
        let sextant = if r == cmax {
            bluec - greenc
        } else if g == cmax {
            2.0 + redc - bluec
        } else {
            4.0 + greenc - redc
        };
        let h = sextant / 6.0;
        if h < 0.0 {
            h + 1.0
        } else {
            h
        }
    };

    Hsb::new(hue, saturation, brightness)
}

/// Convert HSB back to 8-bit RGB, rounding each channel half-up.
pub fn hsb_to_rgb(hsb: Hsb) -> (u8, u8, u8) {
    let Hsb {
        hue,
        saturation,
        brightness,
    } = hsb;
    let to_byte = |v: f32| (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8;

    if saturation == 0.0 {
        let v = to_byte(brightness);
        return (v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };
    (to_byte(r), to_byte(g), to_byte(b))
}
