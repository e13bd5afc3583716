use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_complex::Complex64;

use crate::error::{Result, SolverError};

/// Tolerance for the zero and one checks.
pub const EPSILON: f64 = 1e-9;

/// Immutable complex value used for every matrix term.
///
/// Division is not exposed through `std::ops::Div`: dividing by zero has to
/// surface as [`SolverError::DivisionByZero`] instead of producing infinities.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComplexNumber(Complex64);

impl ComplexNumber {
    pub const ZERO: Self = Self(Complex64::new(0.0, 0.0));
    pub const ONE: Self = Self(Complex64::new(1.0, 0.0));

    pub fn new(re: f64, im: f64) -> Self {
        Self(Complex64::new(re, im))
    }

    pub fn real(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    pub fn re(&self) -> f64 {
        self.0.re
    }

    pub fn im(&self) -> f64 {
        self.0.im
    }

    pub fn divide_by(self, divisor: Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(SolverError::DivisionByZero);
        }
        Ok(Self(self.0 / divisor.0))
    }

    pub fn inverse(self) -> Result<Self> {
        Self::ONE.divide_by(self)
    }

    pub fn is_zero(&self) -> bool {
        self.0.re.abs() < EPSILON && self.0.im.abs() < EPSILON
    }

    pub fn is_one(&self) -> bool {
        (*self - Self::ONE).is_zero()
    }

    /// Renders the value. With `bracketed`, values carrying both a real and an
    /// imaginary part are wrapped in parentheses so `(1-2i) * R1` stays readable.
    pub fn render(&self, bracketed: bool) -> String {
        let re = clean(self.0.re);
        let im = clean(self.0.im);
        let rendered = match (re == 0.0, im == 0.0) {
            (_, true) => format!("{re}"),
            (true, false) => imaginary_part(im, false),
            (false, false) => format!("{re}{}", imaginary_part(im, true)),
        };
        if bracketed && re != 0.0 && im != 0.0 {
            format!("({rendered})")
        } else {
            rendered
        }
    }
}

// drops floating point noise and negative zero
fn clean(part: f64) -> f64 {
    if part.abs() < EPSILON {
        0.0
    } else {
        part
    }
}

fn imaginary_part(im: f64, signed: bool) -> String {
    let sign = if im < 0.0 {
        "-"
    } else if signed {
        "+"
    } else {
        ""
    };
    let magnitude = im.abs();
    if magnitude == 1.0 {
        format!("{sign}i")
    } else {
        format!("{sign}{magnitude}i")
    }
}

impl Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<f64> for ComplexNumber {
    fn from(re: f64) -> Self {
        Self::real(re)
    }
}

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Accepts real tokens (`-2.5`, `1e-3`) and complex ones (`i`, `-i`, `2i`,
/// `1+2i`, `-3.5-0.5i`).
impl FromStr for ComplexNumber {
    type Err = SolverError;

    fn from_str(token: &str) -> Result<Self> {
        let malformed =
            || SolverError::MalformedInput(format!("`{token}` is not a number"));
        let parse_part = |part: &str| {
            part.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(malformed)
        };

        let Some(without_unit) = token.strip_suffix('i') else {
            return parse_part(token).map(Self::real);
        };

        // the real and imaginary parts are split at the last sign that is
        // not the sign of an exponent
        let bytes = without_unit.as_bytes();
        let split = (1..bytes.len()).rev().find(|&idx| {
            matches!(bytes[idx], b'+' | b'-') && !matches!(bytes[idx - 1], b'e' | b'E')
        });
        let (re, im) = match split {
            Some(idx) => (&without_unit[..idx], &without_unit[idx..]),
            None => ("", without_unit),
        };

        let re = if re.is_empty() { 0.0 } else { parse_part(re)? };
        let im = match im {
            "" | "+" => 1.0,
            "-" => -1.0,
            digits => parse_part(digits)?,
        };
        Ok(Self::new(re, im))
    }
}
