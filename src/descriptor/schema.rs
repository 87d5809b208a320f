//! Descriptor schema for the JSON input document.
//!
//! This module defines the data structure that represents one parsed flag
//! type description. The whole model is write-once: descriptors are built
//! by the loader and only read afterwards.

use serde::Deserialize;

/// One flag type to be generated.
///
/// Fields map one-to-one onto the objects of the input document; unknown
/// fields in the document are ignored and missing optional fields take
/// their zero equivalents (empty string / false).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlagDescriptor {
    /// Base name of the generated type and its accessor methods.
    pub name: String,

    /// The value type the flag holds (e.g. "int", "string", "time.Duration").
    #[serde(rename = "type", default)]
    pub value_type: String,

    /// Whether the generated type carries a default `Value` field.
    #[serde(rename = "value", default)]
    pub has_value: bool,

    /// Whether the generated type carries a `Destination` field pointing
    /// into caller-owned storage.
    #[serde(rename = "dest", default)]
    pub has_destination: bool,

    /// Freeform fragment appended to the generated type comment.
    #[serde(default)]
    pub doctail: String,

    /// Literal expression returned when a flag lookup misses.
    #[serde(default)]
    pub context_default: String,

    /// Overrides the accessor return type when distinct from `value_type`.
    #[serde(default)]
    pub context_type: String,

    /// Literal expression applied to parse the raw flag value. When empty
    /// the raw value is passed through unparsed.
    #[serde(default)]
    pub parser: String,

    /// Literal expression wrapping the parsed value before return. When
    /// empty the parsed value is returned as-is.
    #[serde(default)]
    pub parser_cast: String,
}

impl FlagDescriptor {
    /// The declared return type of the generated accessors:
    /// `context_type` when non-empty, `value_type` otherwise.
    pub fn return_type(&self) -> &str {
        if self.context_type.is_empty() {
            &self.value_type
        } else {
            &self.context_type
        }
    }
}
