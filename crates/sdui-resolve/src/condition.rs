//! Conditional-visibility evaluation.
//!
//! Deliberately minimal: a single-key truthy lookup. No boolean
//! composition, no comparisons, no negation. A conditional node with no
//! children is a no-op regardless of how its condition evaluates.

use sdui_schema::Node;

use crate::context::{Context, ContextValue, Scope};

/// Decide whether a conditional node's children are included.
///
/// An absent `conditionKey` is vacuously true. A present key is truthy
/// iff it exists in the context and its value is truthy (for text values:
/// non-empty); a missing key and an empty string are both false.
///
/// # Example
///
/// ```
/// use sdui_resolve::{Context, evaluate};
/// use sdui_schema::{ComponentType, Node};
///
/// let node = Node::new(ComponentType::Conditional).with_condition_key("hasPets");
/// let mut ctx = Context::new();
/// assert!(!evaluate(&node, &ctx));
/// ctx.insert("hasPets", "yes");
/// assert!(evaluate(&node, &ctx));
/// ctx.insert("hasPets", "");
/// assert!(!evaluate(&node, &ctx));
/// ```
#[must_use]
pub fn evaluate(node: &Node, context: &Context) -> bool {
    evaluate_scoped(node, &Scope::root(context))
}

/// Scoped variant: conditionals inside list templates see the element's
/// data before the caller context.
#[must_use]
pub fn evaluate_scoped(node: &Node, scope: &Scope<'_>) -> bool {
    match &node.condition_key {
        None => true,
        Some(key) => scope.lookup(key).is_some_and(ContextValue::is_truthy),
    }
}
