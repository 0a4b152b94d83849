//! Key/value line format
//!
//! Flat `key=value` lines used for the single previous-ship record. Reading
//! is line-based and never fails as a whole; typed getters report malformed
//! values individually.

use std::fmt;
use std::str::FromStr;

use super::CodecError;

/// Scalar value written to a key/value file
#[derive(Debug, Clone, PartialEq)]
pub enum IniValue {
    Str(String),
    Int(i32),
    Float(f32),
}

impl fmt::Display for IniValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniValue::Str(s) => write!(f, "{}", s),
            IniValue::Int(i) => write!(f, "{}", i),
            IniValue::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for IniValue {
    fn from(value: &str) -> Self {
        IniValue::Str(value.to_string())
    }
}

impl From<String> for IniValue {
    fn from(value: String) -> Self {
        IniValue::Str(value)
    }
}

impl From<i32> for IniValue {
    fn from(value: i32) -> Self {
        IniValue::Int(value)
    }
}

impl From<f32> for IniValue {
    fn from(value: f32) -> Self {
        IniValue::Float(value)
    }
}

/// Ordered key/value record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IniFile {
    entries: Vec<(String, String)>,
}

impl IniFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value` lines. Blank lines, `#`/`;` comments and lines
    /// without `=` are skipped; a repeated key replaces the earlier value.
    pub fn parse(text: &str) -> Self {
        let mut file = Self::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                log::debug!("Skipping key/value line without '=': {:?}", line);
                continue;
            };
            file.set(key.trim(), value.trim());
        }
        file
    }

    /// Insert or replace `key`, keeping its original position on replace
    pub fn set(&mut self, key: &str, value: impl Into<IniValue>) -> &mut Self {
        let value = value.into().to_string();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
        self
    }

    /// Raw string value of `key`
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Integer value of `key`
    pub fn get_int(&self, key: &str) -> Result<Option<i32>, CodecError> {
        self.get_parsed(key)
    }

    /// Float value of `key`
    pub fn get_float(&self, key: &str) -> Result<Option<f32>, CodecError> {
        self.get_parsed(key)
    }

    fn get_parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>, CodecError> {
        match self.get_str(key) {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| CodecError::InvalidValue {
                key: key.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys and values in file order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as `key=value` lines
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}
