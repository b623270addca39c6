use mongodb::bson::Bson;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use utoipa::{IntoParams, ToSchema};

/// Number of search hits returned when `limit` is absent or unparseable.
pub const DEFAULT_SEARCH_LIMIT: i64 = 5;

/// Product document as stored in the `products` collection.
///
/// Only the numeric `id` has a fixed type. Every other field is kept as stored
/// in `extra` and echoed back unchanged; the typed accessors below read the
/// common display fields when they have the expected shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// MongoDB document id; an `ObjectId` renders as a hex string
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "document_id_as_json"
    )]
    #[schema(value_type = Option<String>, example = "65f1c0ffee0000000000abcd")]
    pub object_id: Option<Bson>,

    /// Numeric storefront id used in `/api/products/{id}`
    #[serde(deserialize_with = "lenient_integer")]
    #[schema(example = 42)]
    pub id: i64,

    /// `name`, `description`, `category`, `price`, `image`, `stock` and
    /// anything else stored on the document
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Product {
    pub fn new(id: i64) -> Self {
        Self {
            object_id: None,
            id,
            extra: HashMap::new(),
        }
    }

    /// Set a document field, replacing any previous value.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    pub fn description(&self) -> Option<&str> {
        self.text("description")
    }

    pub fn category(&self) -> Option<&str> {
        self.text("category")
    }

    pub fn image(&self) -> Option<&str> {
        self.text("image")
    }

    /// Stored either in rupees or in paise; see `storefront_ui::format_price`
    pub fn price(&self) -> Option<f64> {
        self.field("price").and_then(number_like)
    }

    pub fn stock(&self) -> Option<i64> {
        self.field("stock")
            .and_then(number_like)
            .filter(|stock| stock.fract() == 0.0)
            .map(|stock| stock as i64)
    }
}

/// A number, or a string holding one.
fn number_like(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A product returned by text search, carrying its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchHit {
    #[serde(flatten)]
    pub product: Product,

    /// MongoDB `textScore`; higher is more relevant
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub products: Vec<SearchHit>,
}

/// Raw query string for `/api/search`.
///
/// Both values are kept as strings so that parsing follows the storefront's
/// lenient integer rules instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Full-text query; required and non-empty
    pub q: Option<String>,

    /// Maximum number of hits (default 5)
    #[param(example = "5")]
    pub limit: Option<String>,
}

impl SearchParams {
    /// The query text, if present and non-empty.
    pub fn query(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }

    pub fn limit(&self) -> i64 {
        parse_limit(self.limit.as_deref())
    }
}

/// Product id parsed from a path segment.
///
/// Parsing skips leading whitespace, accepts an optional sign and takes the
/// longest run of decimal digits, ignoring whatever follows (`"12abc"` is 12).
/// Input without a digit prefix, or one that overflows `i64`, is `NaN` and can
/// never match a stored product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductId {
    Value(i64),
    NaN,
}

impl ProductId {
    pub fn parse(input: &str) -> Self {
        parse_int_prefix(input).map_or(Self::NaN, Self::Value)
    }

    pub fn value(self) -> Option<i64> {
        match self {
            Self::Value(id) => Some(id),
            Self::NaN => None,
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(id) => write!(f, "{id}"),
            Self::NaN => f.write_str("NaN"),
        }
    }
}

/// Parse a search `limit`, falling back to [`DEFAULT_SEARCH_LIMIT`].
///
/// Zero and negative values are returned as-is.
pub fn parse_limit(raw: Option<&str>) -> i64 {
    raw.and_then(parse_int_prefix).unwrap_or(DEFAULT_SEARCH_LIMIT)
}

fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

fn document_id_as_json<S: Serializer>(id: &Option<Bson>, serializer: S) -> Result<S::Ok, S::Error> {
    match id {
        Some(Bson::ObjectId(oid)) => serializer.serialize_str(&oid.to_hex()),
        Some(other) => other.clone().into_relaxed_extjson().serialize(serializer),
        None => serializer.serialize_none(),
    }
}

/// Integers written by other clients may come back as BSON doubles.
struct LenientInteger;

impl<'de> serde::de::Visitor<'de> for LenientInteger {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or an integral floating point number")
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(E::custom)
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<i64, E> {
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(v as i64)
        } else {
            Err(E::custom(format!("{v} is not an integer")))
        }
    }
}

fn lenient_integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    deserializer.deserialize_any(LenientInteger)
}
