//! Payload values and argument bundles.
//!
//! A [`Value`] is anything a statement prints. Only [`Value::Text`] is textual:
//! accumulated style tokens are fused onto text and never onto structured data
//! or opaque references.
//!
//! [`IntoArgs`] stands in for a variadic argument list, so every builder and
//! terminating call accepts `()`, a single value, a tuple, an array or a `Vec`.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A printable payload.
#[derive(Clone)]
pub enum Value {
    /// Text, printed verbatim at the top level.
    Text(String),
    /// Structured data, printed through inspection.
    Data(serde_json::Value),
    /// A live reference printed through its `Debug` implementation.
    ///
    /// Equality is identity: two opaque values are equal only if they share
    /// the same allocation.
    Opaque(Arc<dyn fmt::Debug + Send + Sync>),
}

impl Value {
    /// Wraps any `Debug` value as an opaque reference.
    pub fn opaque<T: fmt::Debug + Send + Sync + 'static>(value: T) -> Self {
        Value::Opaque(Arc::new(value))
    }

    /// Serializes any value into structured data.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be represented as JSON.
    pub fn serialize<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Value::from)
    }

    /// Whether this value is textual.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns the text if this value is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// JavaScript-like truthiness, used by assertions.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Text(text) => !text.is_empty(),
            Value::Data(serde_json::Value::Null) => false,
            Value::Data(serde_json::Value::Bool(b)) => *b,
            Value::Data(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::Data(serde_json::Value::String(s)) => !s.is_empty(),
            Value::Data(_) | Value::Opaque(_) => true,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Value::Data(data) => f.debug_tuple("Data").field(data).finish(),
            Value::Opaque(value) => f.debug_tuple("Opaque").field(value).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Data(a), Value::Data(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Value::Text(text.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Text(c.to_string())
    }
}

impl From<serde_json::Value> for Value {
    /// JSON strings become [`Value::Text`]; everything else stays structured.
    fn from(data: serde_json::Value) -> Self {
        match data {
            serde_json::Value::String(text) => Value::Text(text),
            other => Value::Data(other),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Data(serde_json::Value::from(value))
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Conversion into an ordered list of payload values.
///
/// # Example
///
/// ```rust
/// use stylog::{IntoArgs, Value};
///
/// assert!(().into_args().is_empty());
/// assert_eq!("hi".into_args(), vec![Value::from("hi")]);
/// assert_eq!(("count:", 5).into_args().len(), 2);
/// ```
pub trait IntoArgs {
    /// Converts `self` into payload values, preserving order.
    fn into_args(self) -> Vec<Value>;
}

impl IntoArgs for () {
    fn into_args(self) -> Vec<Value> {
        Vec::new()
    }
}

impl IntoArgs for Value {
    fn into_args(self) -> Vec<Value> {
        vec![self]
    }
}

macro_rules! impl_into_args_single {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoArgs for $ty {
                fn into_args(self) -> Vec<Value> {
                    vec![Value::from(self)]
                }
            }
        )*
    };
}

impl_into_args_single!(
    &str,
    String,
    &String,
    char,
    serde_json::Value,
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
);

impl<T: Into<Value>> IntoArgs for Vec<T> {
    fn into_args(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value>, const N: usize> IntoArgs for [T; N] {
    fn into_args(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value>> IntoArgs for Option<T> {
    fn into_args(self) -> Vec<Value> {
        self.into_iter().map(Into::into).collect()
    }
}

macro_rules! impl_into_args_tuple {
    ($($name:ident),+) => {
        impl<$($name: Into<Value>),+> IntoArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_args(self) -> Vec<Value> {
                let ($($name,)+) = self;
                vec![$($name.into()),+]
            }
        }
    };
}

impl_into_args_tuple!(A);
impl_into_args_tuple!(A, B);
impl_into_args_tuple!(A, B, C);
impl_into_args_tuple!(A, B, C, D);
impl_into_args_tuple!(A, B, C, D, E);
impl_into_args_tuple!(A, B, C, D, E, F);
impl_into_args_tuple!(A, B, C, D, E, F, G);
impl_into_args_tuple!(A, B, C, D, E, F, G, H);
