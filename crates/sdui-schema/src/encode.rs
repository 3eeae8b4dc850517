//! Component tree → wire bytes.
//!
//! The encoder always emits `id` — including ids the decoder generated —
//! so a re-decoded tree keeps stable identity. Only present optionals are
//! written, so `decode(encode(t))` reproduces `t` field for field.
//!
//! # Example
//!
//! ```
//! use sdui_schema::{ComponentType, Node, Screen, decode, encode};
//!
//! let screen = Screen::new(1, Node::new(ComponentType::Text).with_text("hi"));
//! let bytes = encode(&screen).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), screen);
//! ```

use std::fmt;

use serde_json::{Map, Number, Value};

use crate::node::{Node, Screen};

/// Errors from [`encode`]. Reserved for serializer-level failures on a
/// well-formed tree; practically unreachable for in-memory trees built by
/// this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The underlying JSON serializer failed.
    Serialization(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Result alias for encode operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Encode a screen to wire bytes.
pub fn encode(screen: &Screen) -> EncodeResult<Vec<u8>> {
    serde_json::to_vec(&screen_value(screen))
        .map_err(|e| EncodeError::Serialization(e.to_string()))
}

/// Encode a single subtree to wire bytes, without the screen envelope.
pub fn encode_node(node: &Node) -> EncodeResult<Vec<u8>> {
    serde_json::to_vec(&node_value(node)).map_err(|e| EncodeError::Serialization(e.to_string()))
}

/// Encode a screen as a JSON document value.
#[must_use]
pub fn screen_value(screen: &Screen) -> Value {
    let mut obj = Map::new();
    obj.insert("version".into(), Value::from(screen.version));
    obj.insert("component".into(), node_value(&screen.component));
    Value::Object(obj)
}

/// Encode a single node as a JSON value, recursively.
#[must_use]
pub fn node_value(node: &Node) -> Value {
    let mut obj = Map::new();
    obj.insert("id".into(), Value::String(node.id.clone()));
    obj.insert("type".into(), Value::String(node.kind.as_str().into()));
    put_string(&mut obj, "key", &node.key);
    put_string(&mut obj, "text", &node.text);
    put_string(&mut obj, "label", &node.label);
    put_string(&mut obj, "actionId", &node.action_id);
    put_string(&mut obj, "font", &node.font);
    put_string(&mut obj, "color", &node.color);
    if let Some(children) = &node.children {
        obj.insert(
            "children".into(),
            Value::Array(children.iter().map(node_value).collect()),
        );
    }
    if let Some(item_view) = &node.item_view {
        obj.insert("itemView".into(), node_value(item_view));
    }
    put_string(&mut obj, "conditionKey", &node.condition_key);
    put_number(&mut obj, "padding", node.padding);
    put_number(&mut obj, "spacing", node.spacing);
    put_string(&mut obj, "foregroundColor", &node.foreground_color);
    put_string(&mut obj, "backgroundColor", &node.background_color);
    put_number(&mut obj, "cornerRadius", node.corner_radius);
    put_string(&mut obj, "fontWeight", &node.font_weight);
    put_string(&mut obj, "imageName", &node.image_name);
    put_string(&mut obj, "url", &node.url);
    put_string(&mut obj, "valueKey", &node.value_key);
    put_string(&mut obj, "placeholder", &node.placeholder);
    put_number(&mut obj, "minValue", node.min_value);
    put_number(&mut obj, "maxValue", node.max_value);
    put_number(&mut obj, "step", node.step);
    if let Some(show_value) = node.show_value {
        obj.insert("showValue".into(), Value::Bool(show_value));
    }
    if let Some(animation) = &node.animation {
        let mut inner = Map::new();
        put_string(&mut inner, "type", &animation.kind);
        put_number(&mut inner, "duration", animation.duration);
        obj.insert("animation".into(), Value::Object(inner));
    }
    if let Some(transition) = &node.transition {
        let mut inner = Map::new();
        put_string(&mut inner, "type", &transition.kind);
        obj.insert("transition".into(), Value::Object(inner));
    }
    Value::Object(obj)
}

fn put_string(obj: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        obj.insert(key.into(), Value::String(v.clone()));
    }
}

// JSON has no NaN or infinity; unrepresentable numbers are dropped.
fn put_number(obj: &mut Map<String, Value>, key: &str, value: Option<f64>) {
    if let Some(n) = value
        && let Some(num) = Number::from_f64(n)
    {
        obj.insert(key.into(), Value::Number(num));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use crate::node::{Animation, ComponentType, Transition};

    #[test]
    fn id_is_always_emitted() {
        let node = Node::new(ComponentType::Spacer);
        let value = node_value(&node);
        assert_eq!(value["id"], Value::String(node.id.clone()));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let value = node_value(&Node::new(ComponentType::Spacer));
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2); // id and type only
        assert!(obj.get("padding").is_none());
        assert!(obj.get("children").is_none());
    }

    #[test]
    fn explicit_zero_and_empty_are_emitted() {
        let node = Node::new(ComponentType::VStack)
            .with_padding(0.0)
            .with_text("")
            .with_children(vec![]);
        let value = node_value(&node);
        assert_eq!(value["padding"], Value::from(0.0));
        assert_eq!(value["text"], Value::String(String::new()));
        assert_eq!(value["children"], Value::Array(vec![]));
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let screen = Screen::new(
            7,
            Node::new(ComponentType::VStack)
                .with_id("root")
                .with_padding(12.0)
                .with_spacing(0.0)
                .with_background_color("surface")
                .with_animation(Animation {
                    kind: Some("fade".into()),
                    duration: Some(0.3),
                })
                .with_transition(Transition {
                    kind: Some("slide".into()),
                })
                .child(
                    Node::new(ComponentType::List)
                        .with_id("jobs-list")
                        .with_key("jobs")
                        .with_item_view(
                            Node::new(ComponentType::Text)
                                .with_id("job-title")
                                .with_key("title"),
                        ),
                )
                .child(
                    Node::new(ComponentType::Slider)
                        .with_id("volume")
                        .with_value_key("volume")
                        .with_range(0.0, 11.0),
                ),
        );
        let bytes = encode(&screen).unwrap();
        assert_eq!(decode(&bytes).unwrap(), screen);
    }

    #[test]
    fn re_encoding_a_decoded_tree_keeps_generated_ids() {
        let bytes = br#"{"version": 1, "component": {"type": "text"}}"#;
        let first = decode(bytes).unwrap();
        let generated = first.component.id.clone();
        let second = decode(&encode(&first).unwrap()).unwrap();
        assert_eq!(second.component.id, generated);
        assert_eq!(second, first);
    }

    #[test]
    fn non_finite_numbers_are_dropped() {
        let node = Node::new(ComponentType::Text).with_padding(f64::NAN);
        let value = node_value(&node);
        assert!(value.as_object().unwrap().get("padding").is_none());
    }
}
