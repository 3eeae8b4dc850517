//! Wire bytes → component tree.
//!
//! Decoding is atomic: either the whole payload becomes a [`Screen`] or an
//! error comes back and no partial tree exists. The codec walks
//! `serde_json::Value` by hand instead of deriving, because two behaviors
//! need explicit control: id generation for nodes the server left
//! anonymous, and the absent-vs-explicit distinction on optional fields.
//!
//! # Failure Modes
//!
//! | Error | Cause |
//! |-------|-------|
//! | `MalformedPayload` | Not JSON, or a field holds the wrong JSON kind |
//! | `MissingRequiredField` | `version`, `component`, or a node `type` absent |
//! | `UnknownComponentType` | `type` outside the closed set |
//!
//! Unknown keys inside a node object are ignored: the closed key list
//! bounds what the codec reads, not what a newer server may add. Explicit
//! `null` is treated as an absent field.

use std::fmt;

use serde_json::{Map, Value};

use crate::id::generate_id;
use crate::node::{Animation, ComponentType, Node, Screen, Transition};

/// Errors from [`decode`]. Fatal to the decode attempt; the caller decides
/// retry, fallback screen, or error UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Payload is not valid JSON, or a field holds the wrong JSON kind.
    MalformedPayload(String),
    /// A required field is absent.
    MissingRequiredField(&'static str),
    /// `type` is outside the closed component set.
    UnknownComponentType(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPayload(msg) => write!(f, "malformed payload: {msg}"),
            Self::MissingRequiredField(field) => {
                write!(f, "missing required field `{field}`")
            }
            Self::UnknownComponentType(value) => {
                write!(f, "unknown component type `{value}`")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result alias for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Decode a wire payload into a [`Screen`].
///
/// # Example
///
/// ```
/// use sdui_schema::decode;
///
/// let bytes = br#"{"version": 1, "component": {"type": "text", "text": "hi"}}"#;
/// let screen = decode(bytes).unwrap();
/// assert_eq!(screen.version, 1);
/// assert!(!screen.component.id.is_empty()); // generated, server omitted it
/// ```
pub fn decode(bytes: &[u8]) -> DecodeResult<Screen> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| DecodeError::MalformedPayload(e.to_string()))?;
    decode_screen(&value)
}

/// Decode an already-parsed JSON document into a [`Screen`].
pub fn decode_screen(value: &Value) -> DecodeResult<Screen> {
    let obj = value
        .as_object()
        .ok_or_else(|| wrong_kind("document root", "object", value))?;

    let version = match obj.get("version") {
        None | Some(Value::Null) => return Err(DecodeError::MissingRequiredField("version")),
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| wrong_kind("version", "non-negative integer", v))?,
    };
    let component = match obj.get("component") {
        None | Some(Value::Null) => return Err(DecodeError::MissingRequiredField("component")),
        Some(v) => decode_node(v)?,
    };

    Ok(Screen { version, component })
}

/// Decode a single node object, recursively.
///
/// Children and the list template decode before the parent is built, so
/// the tree assembles bottom-up and a failure anywhere yields no tree.
pub fn decode_node(value: &Value) -> DecodeResult<Node> {
    let obj = value
        .as_object()
        .ok_or_else(|| wrong_kind("node", "object", value))?;

    let children = match obj.get("children") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => {
            let mut nodes = Vec::with_capacity(items.len());
            for item in items {
                nodes.push(decode_node(item)?);
            }
            Some(nodes)
        }
        Some(other) => return Err(wrong_kind("children", "array", other)),
    };
    let item_view = match obj.get("itemView") {
        None | Some(Value::Null) => None,
        Some(v) => Some(Box::new(decode_node(v)?)),
    };

    let type_str = match obj.get("type") {
        None | Some(Value::Null) => return Err(DecodeError::MissingRequiredField("type")),
        Some(v) => v.as_str().ok_or_else(|| wrong_kind("type", "string", v))?,
    };
    let kind = ComponentType::parse(type_str)
        .ok_or_else(|| DecodeError::UnknownComponentType(type_str.to_owned()))?;

    // Server id verbatim when non-empty, fresh otherwise.
    let id = match opt_string(obj, "id")? {
        Some(id) if !id.is_empty() => id,
        _ => generate_id(),
    };

    Ok(Node {
        id,
        kind,
        key: opt_string(obj, "key")?,
        text: opt_string(obj, "text")?,
        label: opt_string(obj, "label")?,
        action_id: opt_string(obj, "actionId")?,
        font: opt_string(obj, "font")?,
        color: opt_string(obj, "color")?,
        children,
        item_view,
        condition_key: opt_string(obj, "conditionKey")?,
        padding: opt_number(obj, "padding")?,
        spacing: opt_number(obj, "spacing")?,
        foreground_color: opt_string(obj, "foregroundColor")?,
        background_color: opt_string(obj, "backgroundColor")?,
        corner_radius: opt_number(obj, "cornerRadius")?,
        font_weight: opt_string(obj, "fontWeight")?,
        image_name: opt_string(obj, "imageName")?,
        url: opt_string(obj, "url")?,
        value_key: opt_string(obj, "valueKey")?,
        placeholder: opt_string(obj, "placeholder")?,
        min_value: opt_number(obj, "minValue")?,
        max_value: opt_number(obj, "maxValue")?,
        step: opt_number(obj, "step")?,
        show_value: opt_bool(obj, "showValue")?,
        animation: decode_animation(obj.get("animation"))?,
        transition: decode_transition(obj.get("transition"))?,
    })
}

fn decode_animation(value: Option<&Value>) -> DecodeResult<Option<Animation>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(obj)) => Ok(Some(Animation {
            kind: opt_string(obj, "type")?,
            duration: opt_number(obj, "duration")?,
        })),
        Some(other) => Err(wrong_kind("animation", "object", other)),
    }
}

fn decode_transition(value: Option<&Value>) -> DecodeResult<Option<Transition>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(obj)) => Ok(Some(Transition {
            kind: opt_string(obj, "type")?,
        })),
        Some(other) => Err(wrong_kind("transition", "object", other)),
    }
}

fn opt_string(obj: &Map<String, Value>, field: &'static str) -> DecodeResult<Option<String>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(wrong_kind(field, "string", other)),
    }
}

fn opt_number(obj: &Map<String, Value>, field: &'static str) -> DecodeResult<Option<f64>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v @ Value::Number(_)) => Ok(v.as_f64()),
        Some(other) => Err(wrong_kind(field, "number", other)),
    }
}

fn opt_bool(obj: &Map<String, Value>, field: &'static str) -> DecodeResult<Option<bool>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(wrong_kind(field, "boolean", other)),
    }
}

fn wrong_kind(field: &str, expected: &str, got: &Value) -> DecodeError {
    DecodeError::MalformedPayload(format!(
        "`{field}` expected {expected}, got {}",
        json_kind(got)
    ))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
