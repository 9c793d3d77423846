//! Style records and their interpretation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::logging::targets;
use crate::style::{StyleAttributes, StyleDefinition};
use crate::stylesheet::Strictness;
use crate::types::{FontWeight, TextAlignment};
use crate::{Error, Result};

/// Document key naming a style's parent.
pub const PARENT_KEY: &str = "parent";

/// One style's record as it appears in a document.
///
/// Values are kept loosely typed; recognized keys are read when the
/// stylesheet is built and everything else is ignored.
///
/// ```
/// use dynamic_styles::document::StyleRecord;
///
/// let record = StyleRecord::new()
///     .with("parent", "Body")
///     .with("size", 12)
///     .with("alignment", "center");
///
/// assert_eq!(record.get("size").and_then(|v| v.as_f64()), Some(12.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRecord(Value);

impl StyleRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Set a key, returning the updated record.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a key.
    ///
    /// A record that does not hold a map is replaced by one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }
        if let Value::Object(map) = &mut self.0 {
            map.insert(key.into(), value.into());
        }
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object()?.get(key)
    }

    /// The record's keys and values, if it is a map.
    pub fn as_map(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    /// The raw value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl Default for StyleRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for StyleRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Map<String, Value>> for StyleRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(Value::Object(map))
    }
}

/// Accepted range for a numeric attribute.
#[derive(Debug, Clone, Copy)]
enum Range {
    Any,
    Positive,
    NonNegative,
}

impl Range {
    fn contains(self, value: f32) -> bool {
        match self {
            Range::Any => value.is_finite(),
            Range::Positive => value.is_finite() && value > 0.0,
            Range::NonNegative => value.is_finite() && value >= 0.0,
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Range::Any => "a number",
            Range::Positive => "a positive number",
            Range::NonNegative => "a non-negative number",
        }
    }
}

/// Typed reads from one record.
///
/// A missing key or an explicit `null` reads as absent. A value of the wrong
/// type is an error in strict mode and absent (with a warning) otherwise.
struct RecordReader<'a> {
    style: &'a str,
    map: &'a Map<String, Value>,
    strictness: Strictness,
}

impl<'a> RecordReader<'a> {
    fn value(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn mismatch(&self, key: &str, expected: &'static str) -> Result<()> {
        match self.strictness {
            Strictness::Strict => Err(Error::type_mismatch(self.style, key, expected)),
            Strictness::Lenient => {
                tracing::warn!(
                    target: targets::DOCUMENT,
                    style = self.style,
                    attribute = key,
                    "ignoring attribute: expected {}",
                    expected
                );
                Ok(())
            }
        }
    }

    fn string(&self, key: &str) -> Result<Option<String>> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => self.mismatch(key, "a string").map(|()| None),
        }
    }

    fn boolean(&self, key: &str) -> Result<Option<bool>> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => self.mismatch(key, "a boolean").map(|()| None),
        }
    }

    fn number(&self, key: &str, range: Range) -> Result<Option<f32>> {
        // Checked after narrowing: values beyond f32 range become infinite.
        match self.value(key).map(|v| v.as_f64().map(|n| n as f32)) {
            None => Ok(None),
            Some(Some(n)) if range.contains(n) => Ok(Some(n)),
            Some(_) => self.mismatch(key, range.expected()).map(|()| None),
        }
    }

    fn alignment(&self, key: &str) -> Result<Option<TextAlignment>> {
        Ok(self.string(key)?.map(|name| {
            let alignment = TextAlignment::from_document(&name);
            if alignment.as_str() != name {
                tracing::debug!(
                    target: targets::DOCUMENT,
                    style = self.style,
                    "unknown alignment '{}', using {}",
                    name,
                    alignment
                );
            }
            alignment
        }))
    }
}

/// Read a record's recognized keys into a style definition.
pub(crate) fn interpret(
    style: &str,
    record: &StyleRecord,
    strictness: Strictness,
) -> Result<StyleDefinition> {
    let Some(map) = record.as_map() else {
        let reader = RecordReader {
            style,
            map: &Map::new(),
            strictness,
        };
        reader.mismatch("record", "a map of attributes")?;
        return Ok(StyleDefinition::default());
    };

    let reader = RecordReader {
        style,
        map,
        strictness,
    };

    let parent = reader.string(PARENT_KEY)?;

    let attributes = StyleAttributes {
        family: reader.string("family")?,
        face: reader.string("face")?,
        weight: reader.number("weight", Range::Any)?.map(FontWeight::new),
        size: reader.number("size", Range::Positive)?,
        should_scale: reader.boolean("shouldScale")?,
        line_spacing: reader.number("lineSpacing", Range::NonNegative)?,
        paragraph_spacing: reader.number("paragraphSpacing", Range::NonNegative)?,
        paragraph_spacing_before: reader.number("paragraphSpacingBefore", Range::NonNegative)?,
        minimum_line_height: reader.number("minimumLineHeight", Range::NonNegative)?,
        maximum_line_height: reader.number("maximumLineHeight", Range::NonNegative)?,
        alignment: reader.alignment("alignment")?,
    };

    for key in map.keys() {
        if key != PARENT_KEY && !StyleAttributes::is_attribute_key(key) {
            tracing::trace!(target: targets::DOCUMENT, style, "ignoring unrecognized key '{}'", key);
        }
    }

    Ok(StyleDefinition::new(parent, attributes))
}
