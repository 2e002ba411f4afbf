use thiserror::Error;

/// A declarative constraint on the raw string value of one option.
///
/// Rules are pure: checking a value never touches the filesystem or any catalog,
/// and every malformed input is reported as a [`ValidationError`], never a panic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationRule {
    /// A 32-bit integer that is positive, or non-negative when `allow_zero` is set.
    PositiveInteger { allow_zero: bool },
    /// A finite double that is positive, or non-negative when `allow_zero` is set.
    PositiveDouble { allow_zero: bool },
    /// Any 32-bit integer.
    PlainInteger,
    /// Any finite double.
    PlainDouble,
    /// The integer 0 or 1.
    Boolean01,
    /// Exact, case-sensitive membership in the listed values.
    EnumMembership(&'static [&'static str]),
    /// An integer within the inclusive bounds.
    IntegerRange { min: i32, max: i32 },
    /// A double within the inclusive bounds.
    DoubleRange { min: f64, max: f64 },
}

/// The reason a raw value was refused by a rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("Not an integer value!")]
    NotAnInteger,
    #[error("Not a floating value!")]
    NotAFloat,
    #[error("Negative value found.")]
    Negative,
    #[error("Negative or zero value found.")]
    NegativeOrZero,
    #[error("Found {found} where 0 or 1 was expected.")]
    NotBoolean { found: String },
    #[error("Found {found}. Supported input: [{}].", .allowed.join(", "))]
    NotSupported {
        found: String,
        allowed: &'static [&'static str],
    },
    #[error("Not in the range [{min} - {max}].")]
    OutOfRange { min: String, max: String },
}

impl Violation {
    /// Whether the value could not be read as the expected type at all, as opposed
    /// to being well formed but outside the accepted domain.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Violation::NotAnInteger | Violation::NotAFloat => true,
            Violation::NotBoolean { found } => found.parse::<i32>().is_err(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Error parsing the {option} option: {violation}")]
pub struct ValidationError {
    pub option: String,
    pub violation: Violation,
}

impl ValidationError {
    pub fn new(option: impl Into<String>, violation: Violation) -> Self {
        Self {
            option: option.into(),
            violation,
        }
    }
}

/// Integers are read strictly; surrounding whitespace is not a number.
pub fn parse_integer(raw: &str) -> Result<i32, Violation> {
    raw.parse::<i32>().map_err(|_| Violation::NotAnInteger)
}

/// Doubles tolerate surrounding whitespace, as padded config values are common.
pub fn parse_double(raw: &str) -> Result<f64, Violation> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Violation::NotAFloat),
    }
}

impl ValidationRule {
    pub fn validate(&self, option: &str, raw: &str) -> Result<(), ValidationError> {
        self.check(raw)
            .map_err(|violation| ValidationError::new(option, violation))
    }

    fn check(&self, raw: &str) -> Result<(), Violation> {
        match *self {
            ValidationRule::PositiveInteger { allow_zero } => {
                let value = parse_integer(raw)?;
                check_sign(value < 0, value == 0, allow_zero)
            }
            ValidationRule::PositiveDouble { allow_zero } => {
                let value = parse_double(raw)?;
                check_sign(value < 0.0, value == 0.0, allow_zero)
            }
            ValidationRule::PlainInteger => parse_integer(raw).map(|_| ()),
            ValidationRule::PlainDouble => parse_double(raw).map(|_| ()),
            ValidationRule::Boolean01 => match raw.parse::<i32>() {
                Ok(0) | Ok(1) => Ok(()),
                Ok(value) => Err(Violation::NotBoolean {
                    found: value.to_string(),
                }),
                Err(_) => Err(Violation::NotBoolean {
                    found: raw.to_string(),
                }),
            },
            ValidationRule::EnumMembership(allowed) => {
                if allowed.iter().any(|candidate| *candidate == raw) {
                    Ok(())
                } else {
                    Err(Violation::NotSupported {
                        found: raw.to_string(),
                        allowed,
                    })
                }
            }
            ValidationRule::IntegerRange { min, max } => {
                let value = parse_integer(raw)?;
                if (min..=max).contains(&value) {
                    Ok(())
                } else {
                    Err(Violation::OutOfRange {
                        min: min.to_string(),
                        max: max.to_string(),
                    })
                }
            }
            ValidationRule::DoubleRange { min, max } => {
                let value = parse_double(raw)?;
                if value >= min && value <= max {
                    Ok(())
                } else {
                    // Debug keeps the decimal point on whole bounds: [0.0 - 1.0].
                    Err(Violation::OutOfRange {
                        min: format!("{:?}", min),
                        max: format!("{:?}", max),
                    })
                }
            }
        }
    }
}

fn check_sign(negative: bool, zero: bool, allow_zero: bool) -> Result<(), Violation> {
    if allow_zero {
        if negative {
            return Err(Violation::Negative);
        }
    } else if negative || zero {
        return Err(Violation::NegativeOrZero);
    }
    Ok(())
}

/// Checks `raw` against `rule`, attributing any failure to `option_id`.
pub fn validate(option_id: &str, raw: &str, rule: &ValidationRule) -> Result<(), ValidationError> {
    rule.validate(option_id, raw)
}
