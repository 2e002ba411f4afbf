use super::validators::{parse_double, parse_integer};
use std::collections::HashMap;
use thiserror::Error;

/// Conversion of an already validated raw option value into a typed field.
///
/// Returns `None` when the value does not convert. After validation this only
/// happens when a rule and its binding disagree, which callers treat as an
/// internal contract violation.
pub trait OptionValue: Sized {
    fn from_option(raw: &str) -> Option<Self>;
}

impl OptionValue for bool {
    fn from_option(raw: &str) -> Option<Self> {
        match parse_integer(raw) {
            Ok(0) => Some(false),
            Ok(1) => Some(true),
            _ => None,
        }
    }
}

impl OptionValue for u32 {
    fn from_option(raw: &str) -> Option<Self> {
        parse_integer(raw).ok().and_then(|v| u32::try_from(v).ok())
    }
}

impl OptionValue for i32 {
    fn from_option(raw: &str) -> Option<Self> {
        parse_integer(raw).ok()
    }
}

impl OptionValue for f64 {
    fn from_option(raw: &str) -> Option<Self> {
        parse_double(raw).ok()
    }
}

impl OptionValue for String {
    fn from_option(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Value '{value}' of option '{option}' could not be converted to its parameter type")]
pub struct ConversionError {
    pub option: String,
    pub value: String,
}

/// The options supplied for one invocation, keyed by option id.
///
/// Built once from the command line (or any other front end) and read-only
/// afterwards. Flags that carry no value are stored with an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptionSet {
    values: HashMap<String, String>,
}

impl RawOptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the set with `id` set to `value`.
    pub fn with(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(id.into(), value.into());
        self
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// The value of `id` when present and not blank.
    pub fn non_blank(&self, id: &str) -> Option<&str> {
        self.get(id).filter(|v| !v.trim().is_empty())
    }

    /// Whether the flag `id` is set. A present flag counts as set unless its value
    /// is `0` or `false`.
    pub fn flag(&self, id: &str) -> bool {
        self.get(id)
            .map(str::trim)
            .is_some_and(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn parsed<T: OptionValue>(&self, id: &str) -> Result<Option<T>, ConversionError> {
        match self.get(id) {
            None => Ok(None),
            Some(raw) => T::from_option(raw)
                .map(Some)
                .ok_or_else(|| ConversionError {
                    option: id.to_string(),
                    value: raw.to_string(),
                }),
        }
    }

    /// Overwrites `field` with the converted value of `id` when the option is present.
    pub fn assign<T: OptionValue>(&self, id: &str, field: &mut T) -> Result<(), ConversionError> {
        if let Some(value) = self.parsed(id)? {
            *field = value;
        }
        Ok(())
    }

    /// Like [`assign`](Self::assign) for fields whose default is "not set".
    pub fn assign_some<T: OptionValue>(
        &self,
        id: &str,
        field: &mut Option<T>,
    ) -> Result<(), ConversionError> {
        if let Some(value) = self.parsed(id)? {
            *field = Some(value);
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawOptionSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_pairs_and_answers_lookups() {
        let options: RawOptionSet = [("db", "proteins.fasta"), ("mods", "")].into_iter().collect();
        assert_eq!(options.len(), 2);
        assert_eq!(options.get("db"), Some("proteins.fasta"));
        assert!(options.contains("mods"));
        assert_eq!(options.non_blank("mods"), None);
        assert_eq!(options.get("out"), None);
    }

    #[test]
    fn flags_are_set_unless_turned_off() {
        let options = RawOptionSet::new()
            .with("a", "")
            .with("b", "1")
            .with("c", "0")
            .with("d", "False");
        assert!(options.flag("a"));
        assert!(options.flag("b"));
        assert!(!options.flag("c"));
        assert!(!options.flag("d"));
        assert!(!options.flag("missing"));
    }

    #[test]
    fn assign_overwrites_only_when_present() {
        let options = RawOptionSet::new().with("mc", "3");
        let mut missed = 2u32;
        let mut charge = 4u32;
        options.assign("mc", &mut missed).unwrap();
        options.assign("max_charge", &mut charge).unwrap();
        assert_eq!(missed, 3);
        assert_eq!(charge, 4);
    }

    #[test]
    fn assign_some_wraps_present_values() {
        let options = RawOptionSet::new().with("limit", "12.5");
        let mut limit: Option<f64> = None;
        options.assign_some("limit", &mut limit).unwrap();
        assert_eq!(limit, Some(12.5));
    }

    #[test]
    fn conversion_failure_names_option_and_value() {
        let options = RawOptionSet::new().with("flag", "2");
        let mut flag = false;
        let err = options.assign("flag", &mut flag).unwrap_err();
        assert_eq!(
            err,
            ConversionError {
                option: "flag".to_string(),
                value: "2".to_string()
            }
        );
    }

    #[test]
    fn unsigned_conversion_refuses_negative_values() {
        assert_eq!(u32::from_option("-1"), None);
        assert_eq!(u32::from_option("0"), Some(0));
        assert_eq!(i32::from_option("-1"), Some(-1));
        assert_eq!(bool::from_option("1"), Some(true));
    }
}
