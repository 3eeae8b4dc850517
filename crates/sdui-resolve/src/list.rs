//! List materialization: template × collection → concrete children.
//!
//! A list node names a context collection through `key` and carries a
//! template in `itemView`. Materialization deep-clones the template once
//! per element, regenerates ids across each cloned subtree (a template id
//! must never reach the renderer twice), and resolves the clone against a
//! scope that layers the element's data over the enclosing context.

use sdui_schema::{ComponentType, Node, generate_id};

use crate::context::{Context, Scope};
use crate::resolver::resolve_node_scoped;
use crate::warning::Sink;

/// Expand a list node against a context.
///
/// Returns one resolved clone per collection element, in source order.
/// Graceful on every degenerate input: an empty collection, a missing
/// collection key (warned), a non-collection value, a non-list node, or
/// a list without a template all yield an empty vec, never an error.
///
/// # Example
///
/// ```
/// use sdui_resolve::{Context, ContextValue, materialize};
/// use sdui_schema::{ComponentType, Node};
///
/// let list = Node::new(ComponentType::List)
///     .with_key("jobs")
///     .with_item_view(Node::new(ComponentType::Text).with_key("item"));
///
/// let mut ctx = Context::new();
/// ctx.insert(
///     "jobs",
///     vec![ContextValue::from("weld"), ContextValue::from("rivet")],
/// );
///
/// let rows = materialize(&list, &ctx);
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].text.as_deref(), Some("weld"));
/// assert_eq!(rows[1].text.as_deref(), Some("rivet"));
/// ```
#[must_use]
pub fn materialize(node: &Node, context: &Context) -> Vec<Node> {
    let mut warnings = Vec::new();
    let mut sink = Sink::new(&mut warnings, true);
    materialize_scoped(node, &Scope::root(context), &mut sink)
}

pub(crate) fn materialize_scoped(
    node: &Node,
    scope: &Scope<'_>,
    sink: &mut Sink<'_>,
) -> Vec<Node> {
    if node.kind != ComponentType::List {
        return Vec::new();
    }
    let Some(template) = node.item_view.as_deref() else {
        return Vec::new();
    };
    let Some(key) = node.key.as_deref() else {
        return Vec::new();
    };
    let Some(value) = scope.lookup(key) else {
        sink.missing_key(key);
        return Vec::new();
    };
    // A non-collection value behaves as an empty collection.
    let Some(elements) = value.as_list() else {
        return Vec::new();
    };

    elements
        .iter()
        .map(|element| {
            let mut clone = template.clone();
            reassign_ids(&mut clone);
            let element_scope = scope.for_element(element);
            resolve_node_scoped(&clone, &element_scope, sink)
        })
        .collect()
}

/// Give every node in the subtree a fresh id. Regenerating only the root
/// would leave sibling clones sharing descendant ids.
fn reassign_ids(node: &mut Node) {
    node.id = generate_id();
    if let Some(children) = &mut node.children {
        for child in children {
            reassign_ids(child);
        }
    }
    if let Some(item_view) = &mut node.item_view {
        reassign_ids(item_view);
    }
}
