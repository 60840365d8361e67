//! Loosely-typed operands.
//!
//! The arithmetic itself works on native integers, so the type system
//! already keeps floats and strings out of it.  Callers which receive
//! values from somewhere less strict (text, a scripting host, a
//! deserialized document) convert them to an [`Operand`] first and
//! use the `try_*` functions of [`IntMath`](super::IntMath), which
//! reject anything that is not an integer of the selected width.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use tracing::{event, Level};

use super::error::ArithmeticError;


/// A value which may or may not be usable as an integer operand.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Operand {
    /// An integer.  It is only acceptable if it fits the width of
    /// the arithmetic it is given to.
    Integer(i128),
    Float(f64),
    Boolean(bool),
    String(String),
    List(Vec<Operand>),
    Null,
}

/// Describes what an [`Operand`] actually is, for diagnostics.
/// Infinities and NaN are distinguished from other floats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum OperandKind {
    Integer,
    /// An integer which does not fit the selected width.
    OutOfRange,
    Float,
    PositiveInfinity,
    NegativeInfinity,
    NotANumber,
    Boolean,
    String,
    List,
    Null,
}

impl Display for OperandKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            OperandKind::Integer => "integer",
            OperandKind::OutOfRange => "out-of-range integer",
            OperandKind::Float => "float",
            OperandKind::PositiveInfinity => "INF",
            OperandKind::NegativeInfinity => "-INF",
            OperandKind::NotANumber => "NAN",
            OperandKind::Boolean => "boolean",
            OperandKind::String => "string",
            OperandKind::List => "list",
            OperandKind::Null => "null",
        })
    }
}

impl Operand {
    /// Classifies a piece of text.
    ///
    /// Integer literals (optionally signed) become
    /// [`Operand::Integer`], anything else that parses as an `f64`
    /// (including `inf`, `-inf` and `NaN`, and integer literals too
    /// long for an `i128`) becomes [`Operand::Float`].  `true`,
    /// `false` and `null` are recognised; all other text is a
    /// [`Operand::String`].  Leading and trailing whitespace is
    /// ignored.
    pub fn parse(text: &str) -> Operand {
        let text = text.trim();
        if let Ok(n) = text.parse::<i128>() {
            return Operand::Integer(n);
        }
        if let Ok(x) = text.parse::<f64>() {
            return Operand::Float(x);
        }
        match text {
            "true" => Operand::Boolean(true),
            "false" => Operand::Boolean(false),
            "null" => Operand::Null,
            _ => Operand::String(text.to_string()),
        }
    }

    /// Returns the kind of this value.  Integers are always reported
    /// as [`OperandKind::Integer`] here, since whether they are in
    /// range depends on the width they are used with.
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Integer(_) => OperandKind::Integer,
            Operand::Float(x) if x.is_nan() => OperandKind::NotANumber,
            Operand::Float(x) if x.is_infinite() => {
                if x.is_sign_negative() {
                    OperandKind::NegativeInfinity
                } else {
                    OperandKind::PositiveInfinity
                }
            }
            Operand::Float(_) => OperandKind::Float,
            Operand::Boolean(_) => OperandKind::Boolean,
            Operand::String(_) => OperandKind::String,
            Operand::List(_) => OperandKind::List,
            Operand::Null => OperandKind::Null,
        }
    }

    /// Converts the operand into the native integer type `T`.
    ///
    /// Floats are rejected even when they hold a whole number; only
    /// [`Operand::Integer`] values which fit in `T` are accepted.
    pub fn to_integer<T>(&self) -> Result<T, ArithmeticError>
    where
        T: TryFrom<i128>,
    {
        let kind = match self {
            Operand::Integer(n) => match T::try_from(*n) {
                Ok(value) => {
                    return Ok(value);
                }
                Err(_) => OperandKind::OutOfRange,
            },
            other => other.kind(),
        };
        event!(Level::DEBUG, "rejecting operand {:?} ({})", self, kind);
        Err(ArithmeticError::InvalidArgument(kind))
    }
}

// This macro implements conversions from native types to Operand
// (e.g. From<i32> for Operand).
macro_rules! from_native_integer_to_operand {
    ($($from:ty)*) => {
        $(
            impl From<$from> for Operand {
                fn from(n: $from) -> Operand {
                    Operand::Integer(n.into())
                }
            }
        )*
    }
}

from_native_integer_to_operand!(i8 u8 i16 u16 i32 u32 i64 u64 i128);

impl From<f64> for Operand {
    fn from(x: f64) -> Operand {
        Operand::Float(x)
    }
}

impl From<f32> for Operand {
    fn from(x: f32) -> Operand {
        Operand::Float(x.into())
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Operand {
        Operand::Boolean(b)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Operand {
        Operand::String(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Operand {
        Operand::String(s)
    }
}

impl From<Vec<Operand>> for Operand {
    fn from(items: Vec<Operand>) -> Operand {
        Operand::List(items)
    }
}
