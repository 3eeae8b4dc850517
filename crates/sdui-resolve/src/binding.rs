//! Text and value bindings.
//!
//! Text bindings are one-way with a literal fallback; value bindings for
//! input components (`textField`, `toggle`, `slider`) are two-way: the
//! renderer reads the current value through [`resolve_value`] and writes
//! user edits back through [`write_value`], so subsequent resolution or
//! re-encoding observes the edit.

use sdui_schema::Node;

use crate::context::{Context, ContextValue, Scope};
use crate::warning::Sink;

/// Resolve the display text of a node.
///
/// Precedence: the context value named by `key` when both exist, then the
/// `text` literal, then the empty string. A present-but-unresolved `key`
/// is graceful degradation (warned, never an error).
///
/// # Example
///
/// ```
/// use sdui_resolve::{Context, resolve_text};
/// use sdui_schema::{ComponentType, Node};
///
/// let node = Node::new(ComponentType::Text)
///     .with_key("greeting")
///     .with_text("Default");
///
/// let mut ctx = Context::new();
/// assert_eq!(resolve_text(&node, &ctx), "Default");
/// ctx.insert("greeting", "Hello");
/// assert_eq!(resolve_text(&node, &ctx), "Hello");
/// ```
#[must_use]
pub fn resolve_text(node: &Node, context: &Context) -> String {
    let mut warnings = Vec::new();
    let mut sink = Sink::new(&mut warnings, true);
    resolve_text_scoped(node, &Scope::root(context), &mut sink)
}

pub(crate) fn resolve_text_scoped(
    node: &Node,
    scope: &Scope<'_>,
    sink: &mut Sink<'_>,
) -> String {
    if let Some(key) = &node.key {
        if let Some(value) = scope.lookup(key) {
            return value.display_string();
        }
        sink.missing_key(key);
    }
    node.text.clone().unwrap_or_default()
}

/// Read the current value of an input node through its `valueKey`.
#[must_use]
pub fn resolve_value<'a>(node: &Node, context: &'a Context) -> Option<&'a ContextValue> {
    node.value_key.as_deref().and_then(|key| context.get(key))
}

/// Write a user edit back under the node's `valueKey`.
///
/// Returns `false` (a no-op) when the node carries no value binding.
pub fn write_value(node: &Node, context: &mut Context, value: impl Into<ContextValue>) -> bool {
    match node.value_key.as_deref() {
        Some(key) => {
            context.insert(key, value);
            true
        }
        None => false,
    }
}
