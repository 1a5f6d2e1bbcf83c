//! The metadata value model. Log metadata is arbitrary structured data, so the
//! model covers scalars, nesting, and the two shapes that need special
//! rendering treatment: error-like values and function-like values.

/// A metadata value. Construction is usually through the `From` conversions or
/// [`Meta::field`], not by naming variants directly.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Null,
    Bool(bool),
    Int(i64),
    /// Integers beyond `i64` — rendered as their bare decimal digits.
    BigInt(i128),
    Float(f64),
    Str(String),
    /// Expanded into a mapping of all carried fields, never an opaque placeholder.
    Error(ErrorInfo),
    /// Rendered as a language-tagged signature approximation.
    Func(FuncInfo),
    Seq(Vec<MetaValue>),
    /// Insertion-ordered: rendering must be deterministic and echo the caller's ordering.
    Map(Vec<(String, MetaValue)>),
}

impl MetaValue {
    /// Captures any `std::error::Error` with its type name, message, and source
    /// chain, so the rendered block shows what went wrong instead of an opaque
    /// value.
    #[must_use]
    pub fn error<E: std::error::Error>(err: &E) -> Self {
        let mut info = ErrorInfo::new(std::any::type_name::<E>(), err.to_string());
        if let Some(source) = err.source() {
            info = info.field("source", MetaValue::Str(source.to_string()));
        }
        Self::Error(info)
    }

    /// Converts to JSON for the structured event path. Function values and
    /// non-finite floats have no JSON representation and are skipped
    /// (`None`); oversized integers degrade to their decimal digit string.
    #[must_use]
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Self::Null => Some(serde_json::Value::Null),
            Self::Bool(b) => Some(serde_json::Value::from(*b)),
            Self::Int(i) => Some(serde_json::Value::from(*i)),
            Self::BigInt(i) => i64::try_from(*i).map_or_else(
                |_| Some(serde_json::Value::from(i.to_string())),
                |fits| Some(serde_json::Value::from(fits)),
            ),
            Self::Float(f) => {
                if f.is_finite() {
                    Some(serde_json::Value::from(*f))
                } else {
                    None
                }
            }
            Self::Str(s) => Some(serde_json::Value::from(s.clone())),
            Self::Error(info) => {
                let mut map = serde_json::Map::new();
                map.insert("name".to_string(), serde_json::Value::from(info.name.clone()));
                map.insert(
                    "message".to_string(),
                    serde_json::Value::from(info.message.clone()),
                );
                if let Some(stack) = &info.stack {
                    map.insert("stack".to_string(), serde_json::Value::from(stack.clone()));
                }
                for (key, value) in &info.extra {
                    if let Some(v) = value.to_json() {
                        map.insert(key.clone(), v);
                    }
                }
                Some(serde_json::Value::Object(map))
            }
            Self::Func(_) => None,
            Self::Seq(items) => Some(serde_json::Value::Array(
                items.iter().filter_map(Self::to_json).collect(),
            )),
            Self::Map(entries) => {
                let mut map = serde_json::Map::new();
                for (key, value) in entries {
                    if let Some(v) = value.to_json() {
                        map.insert(key.clone(), v);
                    }
                }
                Some(serde_json::Value::Object(map))
            }
        }
    }
}

/// An error-like value: name, message, optional stack-style trace, and any
/// further fields the error carried. All of it survives serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    pub name: String,
    pub message: String,
    pub stack: Option<String>,
    pub extra: Vec<(String, MetaValue)>,
}

impl ErrorInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
            extra: Vec::new(),
        }
    }

    #[must_use]
    pub fn stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Custom fields on the error ride along in the rendered mapping.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }
}

/// A function-like value: the source text (or a snippet of it) from which a
/// one-line signature approximation is extracted at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncInfo {
    pub source: String,
}

impl FuncInfo {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Structured metadata attached to a log call: an insertion-ordered list of
/// named values, built field by field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Meta {
    entries: Vec<(String, MetaValue)>,
}

impl Meta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, MetaValue)> {
        self.entries.iter()
    }

    /// The renderers treat metadata as one map value.
    #[must_use]
    pub fn to_value(&self) -> MetaValue {
        MetaValue::Map(self.entries.clone())
    }
}

impl<'a> IntoIterator for &'a Meta {
    type Item = &'a (String, MetaValue);
    type IntoIter = std::slice::Iter<'a, (String, MetaValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<bool> for MetaValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for MetaValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for MetaValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for MetaValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u64> for MetaValue {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or_else(|_| Self::BigInt(i128::from(v)), Self::Int)
    }
}

impl From<i128> for MetaValue {
    fn from(v: i128) -> Self {
        Self::BigInt(v)
    }
}

impl From<f64> for MetaValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for MetaValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<ErrorInfo> for MetaValue {
    fn from(v: ErrorInfo) -> Self {
        Self::Error(v)
    }
}

impl From<FuncInfo> for MetaValue {
    fn from(v: FuncInfo) -> Self {
        Self::Func(v)
    }
}

impl<T: Into<MetaValue>> From<Vec<T>> for MetaValue {
    fn from(v: Vec<T>) -> Self {
        Self::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for MetaValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_i64().map_or_else(
                || {
                    n.as_u64().map_or_else(
                        || Self::Float(n.as_f64().unwrap_or(f64::NAN)),
                        |u| Self::from(u),
                    )
                },
                Self::Int,
            ),
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => {
                Self::Seq(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}
