//! Property-based invariant tests for the wire codec and traversal.
//!
//! These tests verify structural invariants that must hold for any valid
//! tree:
//!
//! 1. `decode(encode(T)) == T` field for field, ids included.
//! 2. Every encoded node carries an `id`, so re-decoding never regenerates.
//! 3. Absent and explicit-zero optionals survive a round trip unconflated.
//! 4. Traversal visits exactly the nodes the tree owns, and is restartable.
//! 5. `find_by_id` agrees with pre-order traversal.
//! 6. Decode never panics on arbitrary input bytes.

use proptest::prelude::*;
use sdui_schema::{ComponentType, Node, Screen, decode, encode, node_value};

// ── Strategy helpers ────────────────────────────────────────────────────

fn kind_strategy() -> impl Strategy<Value = ComponentType> {
    proptest::sample::select(ComponentType::ALL.to_vec())
}

fn opt_token() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z]{0,8}")
}

fn opt_points() -> impl Strategy<Value = Option<f64>> {
    // Finite values only: the wire format cannot carry NaN or infinity.
    proptest::option::of(-1.0e6..1.0e6f64)
}

fn leaf_strategy() -> impl Strategy<Value = Node> {
    (
        ("[a-z0-9]{1,12}", kind_strategy()),
        (opt_token(), opt_token(), opt_token(), opt_token()),
        (opt_points(), opt_points(), opt_points()),
        (
            proptest::option::of(any::<bool>()),
            opt_token(),
            opt_token(),
        ),
    )
        .prop_map(
            |(
                (id, kind),
                (key, text, label, condition_key),
                (padding, spacing, min_value),
                (show_value, value_key, foreground_color),
            )| {
                let mut node = Node::new(kind).with_id(id);
                node.key = key;
                node.text = text;
                node.label = label;
                node.condition_key = condition_key;
                node.padding = padding;
                node.spacing = spacing;
                node.min_value = min_value;
                node.show_value = show_value;
                node.value_key = value_key;
                node.foreground_color = foreground_color;
                node
            },
        )
}

fn node_strategy() -> impl Strategy<Value = Node> {
    leaf_strategy().prop_recursive(3, 24, 4, |inner| {
        (
            leaf_strategy(),
            proptest::option::of(prop::collection::vec(inner.clone(), 0..4)),
            proptest::option::of(inner.prop_map(Box::new)),
        )
            .prop_map(|(mut node, children, item_view)| {
                node.children = children;
                node.item_view = item_view;
                node
            })
    })
}

fn screen_strategy() -> impl Strategy<Value = Screen> {
    (0u32..=100, node_strategy()).prop_map(|(version, component)| Screen::new(version, component))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Round trip is the identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn round_trip_is_identity(screen in screen_strategy()) {
        let bytes = encode(&screen).unwrap();
        let decoded = decode(&bytes).unwrap();
        prop_assert_eq!(decoded, screen);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Every encoded node carries its id
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn encoded_ids_match_tree_ids(node in node_strategy()) {
        let decoded = sdui_schema::decode_node(&node_value(&node)).unwrap();
        let original: Vec<&str> = node.nodes().map(|n| n.id.as_str()).collect();
        let round_tripped: Vec<&str> = decoded.nodes().map(|n| n.id.as_str()).collect();
        prop_assert_eq!(original, round_tripped);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Absent vs explicit optionals survive
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn absent_and_explicit_survive(node in node_strategy()) {
        let decoded = sdui_schema::decode_node(&node_value(&node)).unwrap();
        for (a, b) in node.nodes().zip(decoded.nodes()) {
            prop_assert_eq!(a.padding.is_none(), b.padding.is_none());
            prop_assert_eq!(a.text.is_none(), b.text.is_none());
            prop_assert_eq!(a.children.is_none(), b.children.is_none());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Traversal is exhaustive and restartable
// ═════════════════════════════════════════════════════════════════════════

fn owned_node_total(node: &Node) -> usize {
    let children: usize = node
        .children
        .iter()
        .flatten()
        .map(owned_node_total)
        .sum();
    let template = node.item_view.as_deref().map_or(0, owned_node_total);
    1 + children + template
}

proptest! {
    #[test]
    fn traversal_visits_every_owned_node(node in node_strategy()) {
        prop_assert_eq!(node.count(), owned_node_total(&node));
        let first: Vec<&str> = node.nodes().map(|n| n.id.as_str()).collect();
        let second: Vec<&str> = node.nodes().map(|n| n.id.as_str()).collect();
        prop_assert_eq!(first, second);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. find_by_id agrees with pre-order traversal
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn find_by_id_is_first_preorder_match(node in node_strategy()) {
        for candidate in node.nodes() {
            let found = node.find_by_id(&candidate.id).unwrap();
            let first = node.nodes().find(|n| n.id == candidate.id).unwrap();
            prop_assert!(std::ptr::eq(found, first));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Decode never panics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn decode_total_on_arbitrary_bytes(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode(&bytes);
    }

    #[test]
    fn decode_total_on_json_like_text(text in "[{}\\[\\]\",:a-z0-9 ]{0,128}") {
        let _ = decode(text.as_bytes());
    }
}
