#![forbid(unsafe_code)]

//! SDUI public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the component tree, codec, and resolution types from the
//! internal crates and offers a lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use sdui::prelude::*;
//!
//! let bytes = br#"{
//!     "version": 1,
//!     "component": {"type": "text", "key": "greeting", "text": "Hi"}
//! }"#;
//!
//! let screen = decode(bytes)?;
//! let mut ctx = Context::new();
//! ctx.insert("greeting", "Hello");
//! let resolved = resolve_screen(&screen, &ctx);
//! assert_eq!(resolved.root.text.as_deref(), Some("Hello"));
//! # Ok::<(), sdui::Error>(())
//! ```

use std::fmt;

// --- Schema re-exports -----------------------------------------------------

pub use sdui_schema::{
    Animation, ComponentType, DecodeError, EncodeError, Node, Nodes, Screen, Transition, decode,
    decode_node, decode_screen, encode, encode_node, generate_id, node_value, screen_value,
};

// --- Resolve re-exports ----------------------------------------------------

pub use sdui_resolve::{
    Context, ContextValue, ITEM_KEY, Resolved, ResolutionWarning, Resolver, Scope, evaluate,
    materialize, resolve_node, resolve_screen, resolve_text, resolve_value, write_value,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for codec operations.
#[derive(Debug)]
pub enum Error {
    /// The wire payload failed to decode.
    Decode(DecodeError),
    /// The tree failed to serialize.
    Encode(EncodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

impl From<EncodeError> for Error {
    fn from(err: EncodeError) -> Self {
        Self::Encode(err)
    }
}

/// Standard result type for sdui APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ComponentType, Context, ContextValue, Error, Node, Resolved, Resolver, Result, Screen,
        decode, encode, resolve_screen, resolve_text, resolve_value, write_value,
    };

    pub use crate::{resolve, schema};
}

pub use sdui_resolve as resolve;
pub use sdui_schema as schema;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_convert() {
        let err: Error = decode(b"{").unwrap_err().into();
        assert!(matches!(err, Error::Decode(DecodeError::MalformedPayload(_))));
        assert!(err.to_string().contains("malformed payload"));
    }

    #[test]
    fn facade_surfaces_the_whole_pipeline() {
        let screen = Screen::new(1, Node::new(ComponentType::Text).with_key("k"));
        let bytes = encode(&screen).unwrap();
        let decoded = decode(&bytes).unwrap();
        let mut ctx = Context::new();
        ctx.insert("k", "v");
        let resolved = Resolver::new().resolve_screen(&decoded, &ctx);
        assert_eq!(resolved.root.text.as_deref(), Some("v"));
    }
}
