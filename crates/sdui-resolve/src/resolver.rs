//! Whole-tree resolution: one pure pass that applies conditions, bindings,
//! and list expansion to produce a renderer-ready tree.
//!
//! Resolution is a pure function of `(tree, context)`: the inputs are
//! never mutated, and the pass is recomputed from scratch whenever the
//! context changes. Incremental diffing is the renderer's business, not
//! this crate's.

use sdui_schema::{ComponentType, Node, Screen};

use crate::binding::resolve_text_scoped;
use crate::condition::evaluate_scoped;
use crate::context::{Context, Scope};
use crate::list::materialize_scoped;
use crate::warning::{ResolutionWarning, Sink};

/// Aggregated output of a resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// Renderer-ready tree.
    pub root: Node,
    /// Non-fatal diagnostics, in document order.
    pub warnings: Vec<ResolutionWarning>,
}

/// Option-carrying entry point for whole-tree resolution.
///
/// # Example
///
/// ```
/// use sdui_resolve::{Context, Resolver};
/// use sdui_schema::{ComponentType, Node, Screen};
///
/// let screen = Screen::new(1, Node::new(ComponentType::Text).with_key("greeting"));
/// let mut ctx = Context::new();
/// ctx.insert("greeting", "Hello");
///
/// let resolved = Resolver::new().resolve_screen(&screen, &ctx);
/// assert_eq!(resolved.root.text.as_deref(), Some("Hello"));
/// assert!(resolved.warnings.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    log_warnings: bool,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Create a resolver with default options.
    #[must_use]
    pub fn new() -> Self {
        Self { log_warnings: true }
    }

    /// Enable or suppress `tracing` emission for resolution warnings.
    /// Aggregation into [`Resolved::warnings`] is unaffected.
    #[must_use]
    pub fn with_warning_logging(mut self, log: bool) -> Self {
        self.log_warnings = log;
        self
    }

    /// Resolve a screen against a context.
    #[must_use]
    pub fn resolve_screen(&self, screen: &Screen, context: &Context) -> Resolved {
        self.resolve_node(&screen.component, context)
    }

    /// Resolve a subtree against a context.
    #[must_use]
    pub fn resolve_node(&self, node: &Node, context: &Context) -> Resolved {
        let mut warnings = Vec::new();
        let mut sink = Sink::new(&mut warnings, self.log_warnings);
        let root = resolve_node_scoped(node, &Scope::root(context), &mut sink);
        Resolved { root, warnings }
    }
}

/// Resolve a screen with default options.
#[must_use]
pub fn resolve_screen(screen: &Screen, context: &Context) -> Resolved {
    Resolver::new().resolve_screen(screen, context)
}

/// Resolve a subtree with default options.
#[must_use]
pub fn resolve_node(node: &Node, context: &Context) -> Resolved {
    Resolver::new().resolve_node(node, context)
}

pub(crate) fn resolve_node_scoped(node: &Node, scope: &Scope<'_>, sink: &mut Sink<'_>) -> Node {
    let mut resolved = scalar_copy(node);
    match node.kind {
        ComponentType::Conditional => {
            // The wrapper stays in the output as a transparent container;
            // a false condition clears its children rather than removing
            // the node, which keeps the pass total even at the root.
            resolved.children = if evaluate_scoped(node, scope) {
                node.children
                    .as_ref()
                    .map(|children| resolve_children(children, scope, sink))
            } else {
                node.children.as_ref().map(|_| Vec::new())
            };
        }
        ComponentType::List => {
            resolved.children = Some(materialize_scoped(node, scope, sink));
        }
        kind if kind.is_input() => {
            // Inputs pass through: the renderer binds them against the
            // context via resolve_value / write_value.
            resolved.children = node
                .children
                .as_ref()
                .map(|children| resolve_children(children, scope, sink));
        }
        _ => {
            if node.key.is_some() || node.text.is_some() {
                resolved.text = Some(resolve_text_scoped(node, scope, sink));
            }
            resolved.children = node
                .children
                .as_ref()
                .map(|children| resolve_children(children, scope, sink));
        }
    }
    resolved
}

fn resolve_children(children: &[Node], scope: &Scope<'_>, sink: &mut Sink<'_>) -> Vec<Node> {
    children
        .iter()
        .map(|child| resolve_node_scoped(child, scope, sink))
        .collect()
}

/// Copy every scalar field; children and the template are filled in by
/// the caller (the template never survives into resolved output).
fn scalar_copy(node: &Node) -> Node {
    Node {
        id: node.id.clone(),
        kind: node.kind,
        key: node.key.clone(),
        text: node.text.clone(),
        label: node.label.clone(),
        action_id: node.action_id.clone(),
        font: node.font.clone(),
        color: node.color.clone(),
        children: None,
        item_view: None,
        condition_key: node.condition_key.clone(),
        padding: node.padding,
        spacing: node.spacing,
        foreground_color: node.foreground_color.clone(),
        background_color: node.background_color.clone(),
        corner_radius: node.corner_radius,
        font_weight: node.font_weight.clone(),
        image_name: node.image_name.clone(),
        url: node.url.clone(),
        value_key: node.value_key.clone(),
        placeholder: node.placeholder.clone(),
        min_value: node.min_value,
        max_value: node.max_value,
        step: node.step,
        show_value: node.show_value,
        animation: node.animation.clone(),
        transition: node.transition.clone(),
    }
}
