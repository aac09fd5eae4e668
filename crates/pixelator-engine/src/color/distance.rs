//! Perceptual color-difference formulas (CIE76, CIE94, CIEDE2000).
//!
//! Every formula works on Lab coordinates. The RGB entry point
//! [`distance`] converts both colors once and dispatches, so the value
//! returned for a pair is the same whichever API path asked for it.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::lab::{rgb_to_lab, Lab};

/// `25^7`, the chroma pivot shared by the CIEDE2000 rotation terms.
const POW25_7: f64 = 6_103_515_625.0;

/// Color-difference formula used for nearest-color search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DistanceFormula {
    /// Euclidean distance in Lab space.
    #[default]
    Cie76,
    /// CIE94 graphic-arts weighting (`kL = 1`, `K1 = 0.045`, `K2 = 0.015`).
    Cie94,
    /// Full CIEDE2000 with unit parametric weights.
    Ciede2000,
}

impl DistanceFormula {
    pub const ALL: [DistanceFormula; 3] = [
        DistanceFormula::Cie76,
        DistanceFormula::Cie94,
        DistanceFormula::Ciede2000,
    ];

    /// Compute the difference between two Lab colors with this formula.
    #[inline]
    pub fn between(self, lab1: Lab, lab2: Lab) -> f64 {
        match self {
            DistanceFormula::Cie76 => cie76(lab1, lab2),
            DistanceFormula::Cie94 => cie94(lab1, lab2),
            DistanceFormula::Ciede2000 => ciede2000(lab1, lab2),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceFormula::Cie76 => "cie76",
            DistanceFormula::Cie94 => "cie94",
            DistanceFormula::Ciede2000 => "ciede2000",
        }
    }
}

impl fmt::Display for DistanceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a distance formula name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown distance formula '{0}' (expected cie76, cie94 or ciede2000)")]
pub struct UnknownFormula(pub String);

impl FromStr for DistanceFormula {
    type Err = UnknownFormula;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cie76" => Ok(DistanceFormula::Cie76),
            "cie94" => Ok(DistanceFormula::Cie94),
            "ciede2000" | "cie2000" => Ok(DistanceFormula::Ciede2000),
            other => Err(UnknownFormula(other.to_string())),
        }
    }
}

/// Distance between two RGB colors (channels in `0..=255`).
pub fn distance(rgb1: [f64; 3], rgb2: [f64; 3], formula: DistanceFormula) -> f64 {
    let lab1 = rgb_to_lab(rgb1[0], rgb1[1], rgb1[2]);
    let lab2 = rgb_to_lab(rgb2[0], rgb2[1], rgb2[2]);
    formula.between(lab1, lab2)
}

/// CIE76: Euclidean distance in Lab.
pub fn cie76(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab2.l - lab1.l;
    let da = lab2.a - lab1.a;
    let db = lab2.b - lab1.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// CIE94 with graphic-arts constants.
///
/// The chroma weighting uses the geometric mean of both chromas so the
/// result does not depend on argument order. This differs from the textbook
/// `Sc = 1 + 0.045·C1`, `Sh = 1 + 0.015·C1`, which weights by the first
/// color's chroma alone: here `Sc = 1 + 0.045·sqrt(C1·C2)` and
/// `Sh = 1 + 0.015·sqrt(C1·C2)`.
pub fn cie94(lab1: Lab, lab2: Lab) -> f64 {
    const K1: f64 = 0.045;
    const K2: f64 = 0.015;

    let c1 = lab1.chroma();
    let c2 = lab2.chroma();
    let c_ref = (c1 * c2).sqrt();

    let dl = lab1.l - lab2.l;
    let dc = c1 - c2;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    let dh_sq = (da * da + db * db - dc * dc).max(0.0);

    let sl = 1.0;
    let sc = 1.0 + K1 * c_ref;
    let sh = 1.0 + K2 * c_ref;

    ((dl / sl).powi(2) + (dc / sc).powi(2) + dh_sq / (sh * sh)).sqrt()
}

#[inline]
fn hue_degrees(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// CIEDE2000 with `kL = kC = kH = 1`.
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    let c_mean = (lab1.chroma() + lab2.chroma()) / 2.0;
    let c_mean7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW25_7)).sqrt());

    let a1p = (1.0 + g) * lab1.a;
    let a2p = (1.0 + g) * lab2.a;
    let c1p = a1p.hypot(lab1.b);
    let c2p = a2p.hypot(lab2.b);
    let h1p = hue_degrees(lab1.b, a1p);
    let h2p = hue_degrees(lab2.b, a2p);

    let dlp = lab2.l - lab1.l;
    let dcp = c2p - c1p;

    let chroma_product = c1p * c2p;
    let dhp = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };
    let dhp_big = 2.0 * chroma_product.sqrt() * (dhp.to_radians() / 2.0).sin();

    let lp_mean = (lab1.l + lab2.l) / 2.0;
    let cp_mean = (c1p + c2p) / 2.0;

    // Circular mean of the two hues across the 0/360 boundary
    let hp_mean = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (hp_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_mean).to_radians().cos()
        + 0.32 * (3.0 * hp_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_mean - 63.0).to_radians().cos();

    let d_theta = 30.0 * (-((hp_mean - 275.0) / 25.0).powi(2)).exp();
    let cp_mean7 = cp_mean.powi(7);
    let rc = 2.0 * (cp_mean7 / (cp_mean7 + POW25_7)).sqrt();
    let rt = -(2.0 * d_theta * PI / 180.0).sin() * rc;

    let lp_offset = (lp_mean - 50.0).powi(2);
    let sl = 1.0 + 0.015 * lp_offset / (20.0 + lp_offset).sqrt();
    let sc = 1.0 + 0.045 * cp_mean;
    let sh = 1.0 + 0.015 * cp_mean * t;

    let l_term = dlp / sl;
    let c_term = dcp / sc;
    let h_term = dhp_big / sh;

    (l_term * l_term + c_term * c_term + h_term * h_term + rt * c_term * h_term).sqrt()
}
