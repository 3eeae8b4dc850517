//! The runtime key-value context and binding-lookup scopes.
//!
//! The context is caller-owned: it supplies dynamic text, list
//! collections, condition flags, and input values referenced by binding
//! keys. Resolution reads it; only the explicit two-way write-back path
//! ([`crate::write_value`]) mutates it.

use std::collections::{BTreeMap, HashMap};

/// Reserved key exposing a scalar list element to its template.
///
/// `Map` elements scope their entries by key; a scalar element (text,
/// number, boolean) is reachable from template bindings under this key
/// instead.
pub const ITEM_KEY: &str = "item";

/// A dynamic value supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    /// A text value.
    Text(String),
    /// A numeric value (slider positions, counts).
    Number(f64),
    /// A boolean value (toggle states).
    Bool(bool),
    /// An ordered collection driving list materialization.
    List(Vec<ContextValue>),
    /// Named fields of one collection element.
    Map(BTreeMap<String, ContextValue>),
}

impl ContextValue {
    /// The display form used by text bindings.
    ///
    /// Whole numbers drop their fractional point; collections have no
    /// display form and render empty.
    #[must_use]
    pub fn display_string(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{n:.0}"),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::List(_) | Self::Map(_) => String::new(),
        }
    }

    /// Condition truthiness.
    ///
    /// Text is truthy when non-empty, a boolean is its own flag, numbers
    /// are always truthy, collections are truthy when non-empty. A key
    /// that is missing altogether is false at the lookup site.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Number(_) => true,
            Self::Bool(b) => *b,
            Self::List(items) => !items.is_empty(),
            Self::Map(entries) => !entries.is_empty(),
        }
    }

    /// The elements of a collection value, if this is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&[ContextValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<ContextValue>> for ContextValue {
    fn from(value: Vec<ContextValue>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<String, ContextValue>> for ContextValue {
    fn from(value: BTreeMap<String, ContextValue>) -> Self {
        Self::Map(value)
    }
}

/// Caller-owned key-value store backing binding resolution.
///
/// # Example
///
/// ```
/// use sdui_resolve::Context;
///
/// let mut ctx = Context::new();
/// ctx.insert("greeting", "Hello");
/// ctx.insert("volume", 7.0);
/// assert_eq!(ctx.get("greeting").unwrap().display_string(), "Hello");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: HashMap<String, ContextValue>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A binding-lookup scope: a list element's data layered over the
/// enclosing scope, bottoming out at the caller context.
///
/// Lookup order is element fields first (or the scalar element under
/// [`ITEM_KEY`]), then the enclosing scope, so nested templates shadow
/// outer data without hiding the rest of the context.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    frame: Option<&'a BTreeMap<String, ContextValue>>,
    item: Option<&'a ContextValue>,
    context: &'a Context,
    parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
    /// The root scope: plain context lookup, no element data.
    #[must_use]
    pub fn root(context: &'a Context) -> Self {
        Self {
            frame: None,
            item: None,
            context,
            parent: None,
        }
    }

    /// A child scope exposing one collection element's data.
    #[must_use]
    pub fn for_element(&'a self, element: &'a ContextValue) -> Scope<'a> {
        let (frame, item) = match element {
            ContextValue::Map(entries) => (Some(entries), None),
            other => (None, Some(other)),
        };
        Scope {
            frame,
            item,
            context: self.context,
            parent: Some(self),
        }
    }

    /// Resolve a binding key through the scope chain.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&'a ContextValue> {
        if let Some(frame) = self.frame
            && let Some(value) = frame.get(key)
        {
            return Some(value);
        }
        if key == ITEM_KEY
            && let Some(item) = self.item
        {
            return Some(item);
        }
        match self.parent {
            Some(parent) => parent.lookup(key),
            None => self.context.get(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings() {
        assert_eq!(ContextValue::from("hi").display_string(), "hi");
        assert_eq!(ContextValue::from(7.0).display_string(), "7");
        assert_eq!(ContextValue::from(7.5).display_string(), "7.5");
        assert_eq!(ContextValue::from(true).display_string(), "true");
        assert_eq!(ContextValue::List(vec![]).display_string(), "");
    }

    #[test]
    fn truthiness() {
        assert!(ContextValue::from("yes").is_truthy());
        assert!(!ContextValue::from("").is_truthy());
        assert!(ContextValue::from(0.0).is_truthy());
        assert!(ContextValue::from(true).is_truthy());
        assert!(!ContextValue::from(false).is_truthy());
        assert!(!ContextValue::List(vec![]).is_truthy());
        assert!(ContextValue::List(vec![ContextValue::from(1.0)]).is_truthy());
    }

    #[test]
    fn scope_prefers_element_fields() {
        let mut ctx = Context::new();
        ctx.insert("title", "outer");
        ctx.insert("subtitle", "kept");

        let mut element = BTreeMap::new();
        element.insert("title".to_owned(), ContextValue::from("inner"));
        let element = ContextValue::Map(element);

        let root = Scope::root(&ctx);
        let scoped = root.for_element(&element);
        assert_eq!(scoped.lookup("title").unwrap().display_string(), "inner");
        assert_eq!(scoped.lookup("subtitle").unwrap().display_string(), "kept");
        assert_eq!(scoped.lookup("absent"), None);
    }

    #[test]
    fn scalar_elements_bind_under_item() {
        let ctx = Context::new();
        let element = ContextValue::from("first");
        let root = Scope::root(&ctx);
        let scoped = root.for_element(&element);
        assert_eq!(scoped.lookup(ITEM_KEY).unwrap().display_string(), "first");
        assert_eq!(scoped.lookup("title"), None);
    }

    #[test]
    fn nested_scopes_shadow_outward() {
        let mut ctx = Context::new();
        ctx.insert("label", "root");

        let mut outer = BTreeMap::new();
        outer.insert("label".to_owned(), ContextValue::from("outer"));
        outer.insert("group".to_owned(), ContextValue::from("g1"));
        let outer = ContextValue::Map(outer);

        let mut inner = BTreeMap::new();
        inner.insert("label".to_owned(), ContextValue::from("inner"));
        let inner = ContextValue::Map(inner);

        let root = Scope::root(&ctx);
        let outer_scope = root.for_element(&outer);
        let inner_scope = outer_scope.for_element(&inner);
        assert_eq!(inner_scope.lookup("label").unwrap().display_string(), "inner");
        assert_eq!(inner_scope.lookup("group").unwrap().display_string(), "g1");
    }
}
