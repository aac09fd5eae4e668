//! CIE XYZ and CIE L*a*b* conversions.
//!
//! RGB channels are expected in `0.0..=255.0`. XYZ is scaled to `0..100`
//! and normalized against the D65 reference white when converting to Lab.

/// D65 reference white, X component.
pub const REF_X: f64 = 95.047;
/// D65 reference white, Y component.
pub const REF_Y: f64 = 100.000;
/// D65 reference white, Z component.
pub const REF_Z: f64 = 108.883;

/// Below this normalized sRGB value the gamma curve is linear.
const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;
/// Below this normalized XYZ value the Lab transform is linear.
const LAB_LINEAR_THRESHOLD: f64 = 0.008856;

/// A color in CIE XYZ space (0..100 scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A color in CIE L*a*b* space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness (0..100)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma, the distance from the neutral axis.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

impl From<[f64; 3]> for Lab {
    /// Convert RGB coordinates to Lab.
    fn from(rgb: [f64; 3]) -> Self {
        rgb_to_lab(rgb[0], rgb[1], rgb[2])
    }
}

#[inline]
fn gamma_decode(channel: f64) -> f64 {
    let c = channel / 255.0;
    let linear = if c > SRGB_LINEAR_THRESHOLD {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    };
    linear * 100.0
}

#[inline]
fn lab_transform(value: f64, reference: f64) -> f64 {
    let v = value / reference;
    if v > LAB_LINEAR_THRESHOLD {
        v.cbrt()
    } else {
        7.787 * v + 16.0 / 116.0
    }
}

/// Convert sRGB to XYZ.
pub fn rgb_to_xyz(r: f64, g: f64, b: f64) -> Xyz {
    let r = gamma_decode(r);
    let g = gamma_decode(g);
    let b = gamma_decode(b);

    Xyz {
        x: r * 0.4124 + g * 0.3576 + b * 0.1805,
        y: r * 0.2126 + g * 0.7152 + b * 0.0722,
        z: r * 0.0193 + g * 0.1192 + b * 0.9505,
    }
}

/// Convert XYZ to Lab against the D65 reference white.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let x = lab_transform(xyz.x, REF_X);
    let y = lab_transform(xyz.y, REF_Y);
    let z = lab_transform(xyz.z, REF_Z);

    Lab {
        l: 116.0 * y - 16.0,
        a: 500.0 * (x - y),
        b: 200.0 * (y - z),
    }
}

/// Convert sRGB straight to Lab.
#[inline]
pub fn rgb_to_lab(r: f64, g: f64, b: f64) -> Lab {
    xyz_to_lab(rgb_to_xyz(r, g, b))
}
