use std::{fmt, io::Write, path::Path, process::ExitCode};

use serde_json::{Number, Value};
use tracing::{debug, error};

use crate::{config::ComparePaths, error::CompareError, loader::load_document};

/// Outcome of comparing the two embedding documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Equal,
    NotEqual,
}

impl Verdict {
    pub fn is_equal(self) -> bool {
        self == Self::Equal
    }
}

impl From<bool> for Verdict {
    fn from(equal: bool) -> Self {
        if equal {
            Self::Equal
        } else {
            Self::NotEqual
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => f.write_str("The embeddings ARE equal."),
            Self::NotEqual => f.write_str("The embeddings are NOT equal."),
        }
    }
}

/// Loads both documents and reports whether they are structurally equal.
///
/// Fails on the first document that can't be read or decoded; no partial
/// comparison is attempted.
pub fn compare(left: &Path, right: &Path) -> Result<bool, CompareError> {
    let left = load_document(left)?;
    let right = load_document(right)?;
    Ok(left.structurally_eq(&right))
}

/// Compares the configured pair of documents.
pub fn run(paths: &ComparePaths) -> Result<Verdict, CompareError> {
    let verdict = Verdict::from(compare(&paths.left, &paths.right)?);
    debug!(
        left = %paths.left.display(),
        right = %paths.right.display(),
        equal = verdict.is_equal(),
        "Compared embeddings"
    );
    Ok(verdict)
}

/// Deep structural equality of two JSON values.
///
/// Object keys are compared as a set, arrays element by element in order.
/// Numbers compare by value regardless of how they were written, see
/// [`numbers_eq`].
pub fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_eq(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| json_eq(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| json_eq(a, b)))
        }
        _ => false,
    }
}

/// Numeric equality across integer and float representations.
///
/// Numbers are classified by how they were written: a literal without a
/// fraction or exponent is an integer of any size, anything else is a float.
/// Two integers compare exactly. An integer equals a float only if the float
/// is integral and holds exactly that value, so large integers never match a
/// float they merely round to. Two floats compare with `==`, with literals
/// beyond the `f64` range read as infinities.
pub fn numbers_eq(a: &Number, b: &Number) -> bool {
    match (NumberValue::of(a), NumberValue::of(b)) {
        (NumberValue::Integer(a), NumberValue::Integer(b)) => a == b,
        (NumberValue::Integer(int), NumberValue::Float(float))
        | (NumberValue::Float(float), NumberValue::Integer(int)) => float_eq_integer(float, &int),
        (NumberValue::Float(a), NumberValue::Float(b)) => a == b,
    }
}

enum NumberValue {
    /// Decimal digits with an optional leading `-`, never `-0`.
    Integer(String),
    Float(f64),
}

impl NumberValue {
    fn of(n: &Number) -> Self {
        let text = n.to_string();
        if text.contains(['.', 'e', 'E']) {
            // every JSON number literal is valid `f64` syntax
            Self::Float(text.parse().unwrap_or(f64::NAN))
        } else if text == "-0" {
            Self::Integer("0".to_string())
        } else {
            Self::Integer(text)
        }
    }
}

// `{:.0}` prints the exact decimal value of an integral f64.
fn float_eq_integer(float: f64, int: &str) -> bool {
    if !float.is_finite() || float.fract() != 0.0 {
        false
    } else if float == 0.0 {
        int == "0"
    } else {
        format!("{float:.0}") == int
    }
}

/// Compares the configured pair and writes the verdict line to `out`.
///
/// Nothing is written when either document fails to load. Failures are
/// logged and turned into a non-zero exit code.
pub fn report(paths: &ComparePaths, out: &mut impl Write) -> ExitCode {
    let verdict = match run(paths) {
        Ok(verdict) => verdict,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = writeln!(out, "{verdict}") {
        error!(error = ?e, "Failed to write verdict");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
