//! Attribute model and type descriptors

use serde::{Deserialize, Serialize};

/// Stability classification of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StabilityLevel {
    /// Stable, covered by compatibility guarantees
    Stable,

    /// Experimental, may change without notice
    #[default]
    Experimental,

    /// Deprecated, kept for backward compatibility
    Deprecated,
}

impl std::fmt::Display for StabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stable => write!(f, "stable"),
            Self::Experimental => write!(f, "experimental"),
            Self::Deprecated => write!(f, "deprecated"),
        }
    }
}

/// A literal value used in examples and enum members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            // `1.0`, not `1`
            Self::Double(d) if d.is_finite() && d.fract() == 0.0 => write!(f, "{:.1}", d),
            Self::Double(d) => write!(f, "{}", d),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One member of an enumerated attribute type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    /// Literal value
    pub value: AttributeValue,

    /// Short description
    #[serde(default)]
    pub brief: String,

    /// Long-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl EnumMember {
    pub fn new(value: impl Into<AttributeValue>, brief: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            brief: brief.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Enumerated attribute type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumAttributeType {
    /// Whether values outside `members` are permitted
    #[serde(default)]
    pub custom_values: bool,

    /// Scalar type the members serialize as (e.g. `string`, `int`)
    pub enum_type: String,

    /// Members in declaration order
    pub members: Vec<EnumMember>,
}

impl EnumAttributeType {
    pub fn new(enum_type: impl Into<String>, members: Vec<EnumMember>) -> Self {
        Self {
            custom_values: false,
            enum_type: enum_type.into(),
            members,
        }
    }

    /// Allow custom values beyond the listed members
    pub fn with_custom_values(mut self, custom_values: bool) -> Self {
        self.custom_values = custom_values;
        self
    }
}

/// Attribute type descriptor
///
/// Either a plain type name (`string`, `int`, `string[]`, ...) or an enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeType {
    Primitive(String),
    Enum(EnumAttributeType),
}

impl AttributeType {
    /// Suffix marking array types
    pub const ARRAY_MARKER: &'static str = "[]";

    /// Whether this is an array type (`string[]`, `int[]`, ...)
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Primitive(name) if name.ends_with(Self::ARRAY_MARKER))
    }

    pub fn as_enum(&self) -> Option<&EnumAttributeType> {
        match self {
            Self::Enum(e) => Some(e),
            Self::Primitive(_) => None,
        }
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primitive(name) => f.write_str(name),
            Self::Enum(_) => write!(f, "enum"),
        }
    }
}

impl From<&str> for AttributeType {
    fn from(value: &str) -> Self {
        Self::Primitive(value.to_string())
    }
}

impl From<EnumAttributeType> for AttributeType {
    fn from(value: EnumAttributeType) -> Self {
        Self::Enum(value)
    }
}

/// A semantic attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Fully-qualified dotted name (e.g. `http.request.method`)
    pub fqn: String,

    /// Type descriptor
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<AttributeType>,

    /// Short description
    #[serde(default)]
    pub brief: String,

    /// Long-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Example values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<AttributeValue>,

    /// Stability level
    #[serde(default)]
    pub stability: StabilityLevel,

    /// Deprecation message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,

    /// Defined in this convention (as opposed to imported)
    #[serde(default = "default_true")]
    pub is_local: bool,

    /// Reference to an attribute defined elsewhere
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Attribute {
    /// Create a new local attribute
    pub fn new(
        fqn: impl Into<String>,
        attr_type: impl Into<AttributeType>,
        brief: impl Into<String>,
    ) -> Self {
        Self {
            fqn: fqn.into(),
            attr_type: Some(attr_type.into()),
            brief: brief.into(),
            note: None,
            examples: Vec::new(),
            stability: StabilityLevel::default(),
            deprecated: None,
            is_local: true,
            ref_: None,
        }
    }

    /// Dotted prefix of the fqn without its leaf segment
    ///
    /// An fqn without a dot is its own namespace.
    pub fn namespace(&self) -> &str {
        self.fqn
            .rsplit_once('.')
            .map(|(ns, _)| ns)
            .unwrap_or(&self.fqn)
    }

    /// First segment of the fqn
    pub fn root_namespace(&self) -> &str {
        self.fqn.split('.').next().unwrap_or(&self.fqn)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_examples<V: Into<AttributeValue>>(
        mut self,
        examples: impl IntoIterator<Item = V>,
    ) -> Self {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_stability(mut self, stability: StabilityLevel) -> Self {
        self.stability = stability;
        self
    }

    pub fn with_deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecated = Some(message.into());
        self
    }

    pub fn with_type(mut self, attr_type: Option<AttributeType>) -> Self {
        self.attr_type = attr_type;
        self
    }

    pub fn with_local(mut self, is_local: bool) -> Self {
        self.is_local = is_local;
        self
    }

    pub fn with_ref(mut self, target: impl Into<String>) -> Self {
        self.ref_ = Some(target.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_derivation() {
        let attr = Attribute::new("http.request.method", "string", "HTTP method");
        assert_eq!(attr.namespace(), "http.request");
        assert_eq!(attr.root_namespace(), "http");

        let top = Attribute::new("first", "int", "no dots");
        assert_eq!(top.namespace(), "first");
        assert_eq!(top.root_namespace(), "first");
    }

    #[test]
    fn array_detection() {
        assert!(AttributeType::from("string[]").is_array());
        assert!(!AttributeType::from("string").is_array());

        let e = EnumAttributeType::new("string", vec![EnumMember::new("a", "A")]);
        assert!(!AttributeType::from(e).is_array());
    }

    #[test]
    fn value_display() {
        assert_eq!(AttributeValue::from("GET").to_string(), "GET");
        assert_eq!(AttributeValue::from(42i64).to_string(), "42");
        assert_eq!(AttributeValue::from(true).to_string(), "true");
        assert_eq!(AttributeValue::from(1.5).to_string(), "1.5");
        assert_eq!(AttributeValue::from(1.0).to_string(), "1.0");
        assert_eq!(AttributeValue::from(-3.0).to_string(), "-3.0");
        assert_eq!(AttributeValue::from(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn whole_double_examples_keep_fraction() {
        let json = r#"{"fqn": "a.ratio", "type": "double", "examples": [1.0, 2.5]}"#;
        let attr: Attribute = serde_json::from_str(json).unwrap();
        assert_eq!(attr.examples, vec![AttributeValue::Double(1.0), AttributeValue::Double(2.5)]);
        assert_eq!(attr.examples[0].to_string(), "1.0");
    }

    #[test]
    fn deserialize_attribute() {
        let json = r#"{
            "fqn": "http.request.method",
            "type": {
                "custom_values": true,
                "enum_type": "string",
                "members": [{"value": "GET", "brief": "GET method"}]
            },
            "brief": "HTTP method",
            "examples": ["GET", 3, false],
            "ref": "other.attr"
        }"#;

        let attr: Attribute = serde_json::from_str(json).unwrap();
        assert!(attr.is_local);
        assert_eq!(attr.stability, StabilityLevel::Experimental);
        assert_eq!(attr.ref_.as_deref(), Some("other.attr"));
        assert_eq!(
            attr.examples,
            vec![
                AttributeValue::from("GET"),
                AttributeValue::from(3i64),
                AttributeValue::from(false),
            ]
        );

        let enum_type = attr
            .attr_type
            .as_ref()
            .and_then(AttributeType::as_enum)
            .unwrap();
        assert!(enum_type.custom_values);
        assert_eq!(enum_type.members[0].value, AttributeValue::from("GET"));
    }

    #[test]
    fn deserialize_untyped_attribute() {
        let json = r#"{"fqn": "a.b", "stability": "stable"}"#;
        let attr: Attribute = serde_json::from_str(json).unwrap();
        assert!(attr.attr_type.is_none());
        assert_eq!(attr.stability, StabilityLevel::Stable);
    }
}
