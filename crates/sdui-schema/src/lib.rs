#![forbid(unsafe_code)]

//! Schema core: the server-driven component tree and its wire codec.
//!
//! A screen arrives as JSON bytes, becomes an owned [`Node`] tree via
//! [`decode`], and can be written back out losslessly via [`encode`].
//! Every decoded node carries a non-empty id — server-supplied when
//! present, generated otherwise — and optional fields preserve the
//! distinction between "absent" and "explicitly zero/empty" across a
//! round trip.

pub mod decode;
pub mod encode;
pub mod id;
pub mod node;
pub mod traverse;

pub use decode::{DecodeError, DecodeResult, decode, decode_node, decode_screen};
pub use encode::{EncodeError, EncodeResult, encode, encode_node, node_value, screen_value};
pub use id::generate_id;
pub use node::{Animation, ComponentType, Node, Screen, Transition};
pub use traverse::Nodes;
