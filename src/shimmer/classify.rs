use crate::visual::VisualNode;

/// Element kinds that are always painted as a single placeholder, even when
/// they carry child markup of their own.
pub const ALWAYS_LEAF: [&str; 8] = [
    "img", "svg", "video", "canvas", "iframe", "input", "textarea", "button",
];

/// Whether `kind` is one of the [`ALWAYS_LEAF`] kinds (ASCII case-insensitive).
pub fn is_atomic_kind(kind: &str) -> bool {
    ALWAYS_LEAF.iter().any(|k| k.eq_ignore_ascii_case(kind))
}

/// Decide whether `node` becomes one placeholder rectangle or gets recursed into.
///
/// Atomic kinds are always leaves. Anything else is a leaf exactly when it has
/// no element children; text content does not count as a child.
pub fn is_leaf<N: VisualNode>(node: &N) -> bool {
    is_atomic_kind(node.kind()) || node.children().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shimmer::testing::Fake;

    #[test]
    fn test_atomic_kinds_are_leaves_with_children() {
        for kind in ALWAYS_LEAF {
            let node = Fake::new(kind, 0.0, 0.0, 10.0, 10.0)
                .child(Fake::new("span", 0.0, 0.0, 5.0, 5.0))
                .child(Fake::new("span", 5.0, 0.0, 5.0, 5.0));
            assert!(is_leaf(&node), "{kind} should be a leaf");
        }
    }

    #[test]
    fn test_atomic_kinds_ignore_case() {
        let node =
            Fake::new("BUTTON", 0.0, 0.0, 10.0, 10.0).child(Fake::new("svg", 0.0, 0.0, 1.0, 1.0));
        assert!(is_leaf(&node));
        assert!(is_atomic_kind("Img"));
    }

    #[test]
    fn test_childless_nodes_are_leaves() {
        assert!(is_leaf(&Fake::new("p", 0.0, 0.0, 10.0, 10.0)));
        assert!(is_leaf(&Fake::new("div", 0.0, 0.0, 0.0, 0.0)));
        assert!(is_leaf(&Fake::new("x-unknown", 0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn test_nodes_with_element_children_are_containers() {
        let node =
            Fake::new("div", 0.0, 0.0, 10.0, 10.0).child(Fake::new("p", 0.0, 0.0, 10.0, 5.0));
        assert!(!is_leaf(&node));

        let custom =
            Fake::new("x-card", 0.0, 0.0, 10.0, 10.0).child(Fake::new("img", 0.0, 0.0, 2.0, 2.0));
        assert!(!is_leaf(&custom));
    }
}
