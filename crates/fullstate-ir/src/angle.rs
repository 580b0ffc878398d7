//! Human-readable rendering of gate angles.
//!
//! Angles close to a small rational multiple of π (numerator below 32,
//! denominator below 64) print as fractions of π; otherwise close plain
//! rationals print as fractions, and anything else as a decimal.

use std::f64::consts::PI;
use std::sync::OnceLock;

/// Search tolerance when matching a value to a fraction.
pub const ANGLE_TOLERANCE: f64 = 1.0 / (1u64 << 20) as f64;

const MAX_NUMERATOR: u32 = 32;
const MAX_DENOMINATOR: u32 = 64;
const NEAR_ZERO: f64 = 1e-10;

/// A fraction with the interval of values it absorbs.
#[derive(Debug, Clone, Copy)]
struct FractionBound {
    low: f64,
    high: f64,
    num: u32,
    den: u32,
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Coprime fractions sorted by their lower bound.
fn bounds() -> &'static [FractionBound] {
    static BOUNDS: OnceLock<Vec<FractionBound>> = OnceLock::new();
    BOUNDS.get_or_init(|| {
        let mut bounds: Vec<FractionBound> = (1..MAX_NUMERATOR)
            .flat_map(|num| (1..MAX_DENOMINATOR).map(move |den| (num, den)))
            .filter(|&(num, den)| gcd(num, den) <= 1)
            .map(|(num, den)| {
                let v = f64::from(num) / f64::from(den);
                FractionBound {
                    low: v - ANGLE_TOLERANCE,
                    high: v + ANGLE_TOLERANCE,
                    num,
                    den,
                }
            })
            .collect();
        bounds.sort_by(|a, b| a.low.total_cmp(&b.low));
        bounds
    })
}

/// Find the fraction whose interval contains `val`.
fn match_fraction(val: f64) -> Option<(u32, u32)> {
    let bounds = bounds();
    // Last bound whose lower edge is at or below `val`.
    let idx = bounds.partition_point(|b| b.low <= val).checked_sub(1)?;
    let b = bounds[idx];
    (b.low <= val && val <= b.high).then_some((b.num, b.den))
}

fn near_zero(val: f64) -> bool {
    val.abs() < NEAR_ZERO
}

enum Rendered {
    Zero,
    Pi { neg: bool },
    PiFraction { neg: bool, num: u32, den: u32 },
    Fraction { neg: bool, num: u32, den: u32 },
    Integer(i64),
    Decimal(f64),
}

fn classify(val: f64) -> Rendered {
    if near_zero(val) {
        return Rendered::Zero;
    }
    let neg = val < 0.0;
    let abs = val.abs();
    if near_zero(abs / PI - 1.0) {
        return Rendered::Pi { neg };
    }
    if let Some((num, den)) = match_fraction(abs / PI) {
        return Rendered::PiFraction { neg, num, den };
    }
    if let Some((num, den)) = match_fraction(abs) {
        return Rendered::Fraction { neg, num, den };
    }
    if near_zero(abs % 1.0) {
        return Rendered::Integer(val.round() as i64);
    }
    Rendered::Decimal(val)
}

fn sign(neg: bool) -> &'static str {
    if neg { "-" } else { "" }
}

/// Render an angle as plain text, e.g. `π/4`, `-3π/2`, `0.1234`.
pub fn angle_to_str(val: f64) -> String {
    match classify(val) {
        Rendered::Zero => "0".into(),
        Rendered::Pi { neg } => format!("{}π", sign(neg)),
        Rendered::PiFraction { neg, num, den: 1 } => format!("{}{num}π", sign(neg)),
        Rendered::PiFraction { neg, num: 1, den } => format!("{}π/{den}", sign(neg)),
        Rendered::PiFraction { neg, num, den } => format!("{}{num}π/{den}", sign(neg)),
        Rendered::Fraction { neg, num, den: 1 } => format!("{}{num}", sign(neg)),
        Rendered::Fraction { neg, num, den } => format!("{}{num}/{den}", sign(neg)),
        Rendered::Integer(i) => i.to_string(),
        Rendered::Decimal(v) => format!("{v:.4}"),
    }
}

/// Render an angle as LaTeX, e.g. `\frac{\pi}{4}`.
pub fn angle_to_latex(val: f64) -> String {
    match classify(val) {
        Rendered::Zero => "0".into(),
        Rendered::Pi { neg } => format!("{}\\pi", sign(neg)),
        Rendered::PiFraction { neg, num, den: 1 } => format!("{}{num}\\pi", sign(neg)),
        Rendered::PiFraction { neg, num: 1, den } => {
            format!("\\frac{{{}\\pi}}{{{den}}}", sign(neg))
        }
        Rendered::PiFraction { neg, num, den } => {
            format!("\\frac{{{}{num}\\pi}}{{{den}}}", sign(neg))
        }
        Rendered::Fraction { neg, num, den: 1 } => format!("{}{num}", sign(neg)),
        Rendered::Fraction { neg, num, den } => {
            format!("\\frac{{{}{num}}}{{{den}}}", sign(neg))
        }
        Rendered::Integer(i) => i.to_string(),
        Rendered::Decimal(v) => format!("{v:.4}"),
    }
}
