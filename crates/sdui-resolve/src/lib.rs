#![forbid(unsafe_code)]

//! Resolution: a decoded component tree plus a runtime context becomes a
//! renderer-ready tree.
//!
//! Three consumers read the tree together: the condition evaluator decides
//! conditional inclusion, the binding resolver substitutes context values
//! for binding keys, and the list materializer expands templates against
//! collections. [`resolve_screen`] runs all three in one pure pass.
//!
//! Pure by construction: resolution never mutates the input tree or the
//! context. The only mutation point in the crate is the explicit two-way
//! [`write_value`] binding for input components.

pub mod binding;
pub mod condition;
pub mod context;
pub mod list;
pub mod resolver;
pub mod warning;

pub use binding::{resolve_text, resolve_value, write_value};
pub use condition::evaluate;
pub use context::{Context, ContextValue, ITEM_KEY, Scope};
pub use list::materialize;
pub use resolver::{Resolved, Resolver, resolve_node, resolve_screen};
pub use warning::ResolutionWarning;
