//! The recursive component tree: component types, nodes, and the screen
//! envelope.
//!
//! A [`Node`] owns its children outright (`Vec<Node>` for containers,
//! `Box<Node>` for the list template), so every decoded tree is acyclic
//! and finite by construction: one owner per child, no shared nodes, no
//! back references.
//!
//! Optional fields stay `None` when the wire payload omits them. `None`
//! means "no override"; `Some(0.0)` or `Some(String::new())` is an
//! explicit override to that value, and the two must never be conflated.
//!
//! # Example
//!
//! ```
//! use sdui_schema::{ComponentType, Node};
//!
//! let card = Node::new(ComponentType::VStack)
//!     .with_spacing(8.0)
//!     .child(Node::new(ComponentType::Text).with_text("Hello"))
//!     .child(Node::new(ComponentType::Button).with_label("OK"));
//!
//! assert_eq!(card.children.as_ref().map(Vec::len), Some(2));
//! assert!(!card.id.is_empty());
//! ```

use crate::id::generate_id;

/// Closed set of component types understood by the engine.
///
/// The wire spelling of each variant is exactly what [`as_str`] returns.
/// Anything else fails decode with `UnknownComponentType`; unrecognized
/// types are never silently defaulted.
///
/// [`as_str`]: ComponentType::as_str
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    /// Vertical stack container.
    VStack,
    /// Horizontal stack container.
    HStack,
    /// Collection expanded from a template against a context entry.
    List,
    /// Static or bound text run.
    Text,
    /// Tappable button with a label and an action id.
    Button,
    /// Flexible empty space.
    Spacer,
    /// Container whose children are included only when its condition holds.
    Conditional,
    /// Image by asset name or URL.
    Image,
    /// Single-line text input with two-way value binding.
    TextField,
    /// Boolean switch with two-way value binding.
    Toggle,
    /// Numeric slider with two-way value binding.
    Slider,
    /// Scrollable container.
    Scroll,
}

impl ComponentType {
    /// Every component type, in wire-documentation order.
    pub const ALL: [ComponentType; 12] = [
        Self::VStack,
        Self::HStack,
        Self::List,
        Self::Text,
        Self::Button,
        Self::Spacer,
        Self::Conditional,
        Self::Image,
        Self::TextField,
        Self::Toggle,
        Self::Slider,
        Self::Scroll,
    ];

    /// The wire spelling of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VStack => "vstack",
            Self::HStack => "hstack",
            Self::List => "list",
            Self::Text => "text",
            Self::Button => "button",
            Self::Spacer => "spacer",
            Self::Conditional => "conditional",
            Self::Image => "image",
            Self::TextField => "textField",
            Self::Toggle => "toggle",
            Self::Slider => "slider",
            Self::Scroll => "scroll",
        }
    }

    /// Parse a wire spelling. Returns `None` for anything outside the set.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "vstack" => Some(Self::VStack),
            "hstack" => Some(Self::HStack),
            "list" => Some(Self::List),
            "text" => Some(Self::Text),
            "button" => Some(Self::Button),
            "spacer" => Some(Self::Spacer),
            "conditional" => Some(Self::Conditional),
            "image" => Some(Self::Image),
            "textField" => Some(Self::TextField),
            "toggle" => Some(Self::Toggle),
            "slider" => Some(Self::Slider),
            "scroll" => Some(Self::Scroll),
            _ => None,
        }
    }

    /// Whether this type hosts ordered children.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            Self::VStack | Self::HStack | Self::List | Self::Conditional | Self::Scroll
        )
    }

    /// Whether this type participates in two-way value binding.
    #[must_use]
    pub const fn is_input(self) -> bool {
        matches!(self, Self::TextField | Self::Toggle | Self::Slider)
    }
}

/// Declared animation hints passed through to the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Animation {
    /// Animation kind (wire key `type`), renderer-defined.
    pub kind: Option<String>,
    /// Duration in seconds.
    pub duration: Option<f64>,
}

/// Declared transition hint passed through to the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    /// Transition kind (wire key `type`), renderer-defined.
    pub kind: Option<String>,
}

/// A single component in the tree.
///
/// Field meaning follows the wire format one-to-one; see the crate docs
/// for which fields each component type consumes. Fields a type does not
/// consume are carried through untouched rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Stable identifier, never empty after decode.
    pub id: String,
    /// Component type (wire key `type`).
    pub kind: ComponentType,
    /// Binding key into the runtime context (text source or list
    /// collection name).
    pub key: Option<String>,
    /// Literal text, used when `key` is absent or unresolved.
    pub text: Option<String>,
    /// Button or control label.
    pub label: Option<String>,
    /// Action identifier forwarded to the renderer on activation.
    pub action_id: Option<String>,
    /// Font token.
    pub font: Option<String>,
    /// Color token.
    pub color: Option<String>,
    /// Ordered children (containers only).
    pub children: Option<Vec<Node>>,
    /// List template, instantiated once per collection element.
    pub item_view: Option<Box<Node>>,
    /// Context key deciding conditional inclusion.
    pub condition_key: Option<String>,
    /// Padding override, in points.
    pub padding: Option<f64>,
    /// Inter-child spacing override, in points.
    pub spacing: Option<f64>,
    /// Foreground color token.
    pub foreground_color: Option<String>,
    /// Background color token.
    pub background_color: Option<String>,
    /// Corner radius override, in points.
    pub corner_radius: Option<f64>,
    /// Font weight token.
    pub font_weight: Option<String>,
    /// Bundled image asset name.
    pub image_name: Option<String>,
    /// Remote image URL.
    pub url: Option<String>,
    /// Context key for two-way value binding (input types).
    pub value_key: Option<String>,
    /// Placeholder text for empty inputs.
    pub placeholder: Option<String>,
    /// Slider minimum.
    pub min_value: Option<f64>,
    /// Slider maximum.
    pub max_value: Option<f64>,
    /// Slider step.
    pub step: Option<f64>,
    /// Whether a slider displays its current value.
    pub show_value: Option<bool>,
    /// Animation hints.
    pub animation: Option<Animation>,
    /// Transition hint.
    pub transition: Option<Transition>,
}

impl Node {
    /// Create a node of the given type with a freshly generated id and
    /// every optional field absent.
    #[must_use]
    pub fn new(kind: ComponentType) -> Self {
        Self {
            id: generate_id(),
            kind,
            key: None,
            text: None,
            label: None,
            action_id: None,
            font: None,
            color: None,
            children: None,
            item_view: None,
            condition_key: None,
            padding: None,
            spacing: None,
            foreground_color: None,
            background_color: None,
            corner_radius: None,
            font_weight: None,
            image_name: None,
            url: None,
            value_key: None,
            placeholder: None,
            min_value: None,
            max_value: None,
            step: None,
            show_value: None,
            animation: None,
            transition: None,
        }
    }

    /// Replace the generated id with an explicit one.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the binding key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the literal text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the action identifier.
    #[must_use]
    pub fn with_action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: Node) -> Self {
        self.children.get_or_insert_with(Vec::new).push(node);
        self
    }

    /// Set children from a vec. `Some(vec![])` is an explicit empty
    /// container, distinct from no children at all.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<Node>) -> Self {
        self.children = Some(nodes);
        self
    }

    /// Set the list template.
    #[must_use]
    pub fn with_item_view(mut self, template: Node) -> Self {
        self.item_view = Some(Box::new(template));
        self
    }

    /// Set the condition key.
    #[must_use]
    pub fn with_condition_key(mut self, key: impl Into<String>) -> Self {
        self.condition_key = Some(key.into());
        self
    }

    /// Set the two-way value binding key.
    #[must_use]
    pub fn with_value_key(mut self, key: impl Into<String>) -> Self {
        self.value_key = Some(key.into());
        self
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the padding override.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set the spacing override.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Set the corner radius override.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Set the foreground color token.
    #[must_use]
    pub fn with_foreground_color(mut self, color: impl Into<String>) -> Self {
        self.foreground_color = Some(color.into());
        self
    }

    /// Set the background color token.
    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the slider range.
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    /// Set the animation hints.
    #[must_use]
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Set the transition hint.
    #[must_use]
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }
}

/// Root wire envelope: a schema version and the component tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    /// Schema revision the server emitted.
    pub version: u32,
    /// Root component.
    pub component: Node,
}

impl Screen {
    /// Create a screen envelope.
    #[must_use]
    pub fn new(version: u32, component: Node) -> Self {
        Self { version, component }
    }
}
