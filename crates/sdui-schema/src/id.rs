//! Node identity.
//!
//! Server payloads may omit `id`; the decoder fills the gap with a fresh
//! ULID so every node in a decoded tree is addressable. Identity is
//! per-decode: decoding byte-identical payloads twice yields two different
//! generated ids. The list materializer uses the same generator so clones
//! never share identity with their template.

use ulid::Ulid;

/// Generate a fresh unique node identifier.
///
/// ULID strings are 26 characters, never empty, and collision-free for any
/// realistic tree size.
#[must_use]
pub fn generate_id() -> String {
    Ulid::new().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_non_empty() {
        assert!(!generate_id().is_empty());
    }

    #[test]
    fn ids_are_unique_per_call() {
        let ids: std::collections::HashSet<String> = (0..64).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 64);
    }
}
