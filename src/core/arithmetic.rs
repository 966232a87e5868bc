//! Two-operand arithmetic with integer and float operands.
//!
//! Integers stay integers where the operation allows it (`+ - * // % **`),
//! falling back to floats on overflow. `/` always produces a float.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => f.write_str(&format_float(x)),
        }
    }
}

/// Shortest round-trip form; integral values keep a `.0`, very large or very
/// small magnitudes switch to exponent notation (`1e+16`, `1.5e-05`).
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let raw = format!("{:e}", x);
        let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return format!("{}e{}{:0>2}", mantissa, sign, digits);
    }

    if x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        x.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    Modulo,
    Power,
}

impl Operation {
    pub const SUPPORTED: &'static str = "+, -, *, /, //, %, **";

    /// Parse an operator symbol. `x` and `pow` are accepted as aliases.
    pub fn parse(raw: &str) -> Result<Self> {
        let op = raw.trim();
        let parsed = match op {
            "+" => Operation::Add,
            "-" => Operation::Subtract,
            "*" => Operation::Multiply,
            "/" => Operation::Divide,
            "//" => Operation::FloorDivide,
            "%" => Operation::Modulo,
            "**" => Operation::Power,
            _ if op.eq_ignore_ascii_case("x") => Operation::Multiply,
            _ if op.eq_ignore_ascii_case("pow") => Operation::Power,
            _ => {
                return Err(Error::validation_invalid_input(
                    "operation",
                    format!("unknown operation: {}", op),
                    Some(op.to_string()),
                ))
            }
        };
        Ok(parsed)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::FloorDivide => "//",
            Operation::Modulo => "%",
            Operation::Power => "**",
        }
    }
}

impl Serialize for Operation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

/// Integer unless written with a decimal point or exponent.
///
/// Integer-looking text that does not fit an `i64` (or spells `inf`/`nan`)
/// is read as a float.
pub fn parse_number(raw: &str) -> Result<Number> {
    let value = raw.trim();
    let invalid = || {
        Error::validation_invalid_input(
            "number",
            format!("'{}' is not a valid number", value),
            Some(raw.to_string()),
        )
    };

    if value.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
        return value.parse::<f64>().map(Number::Float).map_err(|_| invalid());
    }

    match value.parse::<i64>() {
        Ok(i) => Ok(Number::Int(i)),
        Err(_) => value.parse::<f64>().map(Number::Float).map_err(|_| invalid()),
    }
}

pub fn perform_operation(a: Number, b: Number, op: Operation) -> Result<Number> {
    if b.is_zero() {
        match op {
            Operation::Divide => return Err(Error::division_by_zero("/", "Division by zero")),
            Operation::FloorDivide => {
                return Err(Error::division_by_zero("//", "Integer division by zero"))
            }
            Operation::Modulo => return Err(Error::division_by_zero("%", "Modulo by zero")),
            _ => {}
        }
    }

    match (a, b) {
        (Number::Int(x), Number::Int(y)) => int_operation(x, y, op),
        _ => float_operation(a.as_f64(), b.as_f64(), op),
    }
}

fn int_operation(x: i64, y: i64, op: Operation) -> Result<Number> {
    let promoted = || float_operation(x as f64, y as f64, op);

    let exact = match op {
        Operation::Add => x.checked_add(y),
        Operation::Subtract => x.checked_sub(y),
        Operation::Multiply => x.checked_mul(y),
        Operation::Divide => return promoted(),
        Operation::FloorDivide => floor_div(x, y),
        Operation::Modulo => Some(floor_mod(x, y)),
        Operation::Power => {
            if y < 0 {
                return promoted();
            }
            u32::try_from(y).ok().and_then(|e| x.checked_pow(e))
        }
    };

    match exact {
        Some(n) => Ok(Number::Int(n)),
        None => promoted(),
    }
}

fn float_operation(x: f64, y: f64, op: Operation) -> Result<Number> {
    let result = match op {
        Operation::Add => x + y,
        Operation::Subtract => x - y,
        Operation::Multiply => x * y,
        Operation::Divide => x / y,
        Operation::FloorDivide => float_floor_div(x, y),
        Operation::Modulo => float_floor_mod(x, y),
        Operation::Power => {
            if x == 0.0 && y < 0.0 {
                return Err(Error::division_by_zero(
                    "**",
                    "0 cannot be raised to a negative power",
                ));
            }
            if x < 0.0 && y.is_finite() && y.fract() != 0.0 {
                return Err(Error::validation_invalid_input(
                    "operation",
                    "a negative base with a fractional exponent has no real result",
                    None,
                ));
            }
            x.powf(y)
        }
    };
    Ok(Number::Float(result))
}

/// Quotient rounded towards negative infinity. `None` on overflow.
fn floor_div(x: i64, y: i64) -> Option<i64> {
    let q = x.checked_div(y)?;
    if x % y != 0 && (x < 0) != (y < 0) {
        Some(q - 1)
    } else {
        Some(q)
    }
}

/// Remainder carrying the sign of the divisor.
fn floor_mod(x: i64, y: i64) -> i64 {
    // i64::MIN % -1 overflows, but the remainder is 0.
    let r = x.checked_rem(y).unwrap_or(0);
    if r != 0 && (r < 0) != (y < 0) {
        r + y
    } else {
        r
    }
}

fn float_floor_mod(x: f64, y: f64) -> f64 {
    let r = x % y;
    if r != 0.0 && (r < 0.0) != (y < 0.0) {
        r + y
    } else {
        r
    }
}

fn float_floor_div(x: f64, y: f64) -> f64 {
    let r = x % y;
    let mut div = (x - r) / y;
    if r != 0.0 && (r < 0.0) != (y < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(x / y);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
