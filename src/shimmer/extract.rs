use crate::geometry::Rect;
use crate::visual::VisualNode;

use super::classify::is_leaf;

/// One placeholder rectangle, relative to the measured container.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementInfo {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Lower-cased element kind of the measured leaf
    pub tag: String,
}

impl ElementInfo {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Collect placeholder rectangles for every content leaf under `node`.
///
/// Positions are relative to `reference`'s top-left corner, however deeply
/// the leaf is nested. A zero-area node excludes its whole subtree. Leaves
/// are emitted in document order and nothing below a leaf is visited.
pub fn extract<N: VisualNode>(node: &N, reference: &Rect) -> Vec<ElementInfo> {
    let mut out = Vec::new();
    extract_into(node, reference, &mut out);
    out
}

fn extract_into<N: VisualNode>(node: &N, reference: &Rect, out: &mut Vec<ElementInfo>) {
    let bounds = node.bounds();
    if bounds.width == 0.0 || bounds.height == 0.0 {
        return;
    }

    if is_leaf(node) {
        let (x, y) = bounds.relative_to(reference);
        out.push(ElementInfo {
            x,
            y,
            width: bounds.width,
            height: bounds.height,
            tag: node.kind().to_ascii_lowercase(),
        });
        return;
    }

    for child in node.children() {
        extract_into(&child, reference, out);
    }
}

/// Measure everything inside `container`, relative to the container's own box.
///
/// The container itself is never emitted and its size is not checked: each
/// direct child is extracted on its own.
pub fn measure<N: VisualNode>(container: &N) -> Vec<ElementInfo> {
    let reference = container.bounds();
    let mut out = Vec::new();
    for child in container.children() {
        extract_into(&child, &reference, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shimmer::testing::Fake;

    fn info(x: f32, y: f32, width: f32, height: f32, tag: &str) -> ElementInfo {
        ElementInfo {
            x,
            y,
            width,
            height,
            tag: tag.to_string(),
        }
    }

    #[test]
    fn test_image_and_paragraph() {
        let container = Fake::new("div", 0.0, 0.0, 400.0, 100.0)
            .child(Fake::new("img", 10.0, 10.0, 100.0, 50.0))
            .child(Fake::new("p", 10.0, 70.0, 200.0, 20.0));

        assert_eq!(
            measure(&container),
            vec![
                info(10.0, 10.0, 100.0, 50.0, "img"),
                info(10.0, 70.0, 200.0, 20.0, "p"),
            ]
        );
    }

    #[test]
    fn test_intermediate_containers_are_not_emitted() {
        let container = Fake::new("div", 0.0, 0.0, 100.0, 100.0).child(
            Fake::new("section", 0.0, 0.0, 50.0, 20.0)
                .child(Fake::new("span", 0.0, 0.0, 50.0, 10.0))
                .child(Fake::new("span", 0.0, 10.0, 50.0, 10.0)),
        );

        assert_eq!(
            measure(&container),
            vec![
                info(0.0, 0.0, 50.0, 10.0, "span"),
                info(0.0, 10.0, 50.0, 10.0, "span"),
            ]
        );
    }

    #[test]
    fn test_zero_area_prunes_subtree() {
        let container = Fake::new("div", 0.0, 0.0, 100.0, 100.0)
            .child(
                Fake::new("div", 0.0, 0.0, 0.0, 0.0)
                    .child(Fake::new("img", 0.0, 0.0, 40.0, 40.0)),
            )
            .child(Fake::new("p", 0.0, 0.0, 100.0, 0.0))
            .child(Fake::new("p", 0.0, 0.0, 100.0, 12.0));

        assert_eq!(measure(&container), vec![info(0.0, 0.0, 100.0, 12.0, "p")]);
    }

    #[test]
    fn test_coordinates_are_relative_to_container_not_parent() {
        let container = Fake::new("div", 100.0, 200.0, 300.0, 300.0).child(
            Fake::new("div", 120.0, 220.0, 200.0, 200.0).child(
                Fake::new("div", 140.0, 240.0, 100.0, 100.0)
                    .child(Fake::new("p", 150.0, 250.0, 80.0, 16.0)),
            ),
        );

        assert_eq!(measure(&container), vec![info(50.0, 50.0, 80.0, 16.0, "p")]);
    }

    #[test]
    fn test_leaves_inside_leaves_are_not_separately_emitted() {
        let container = Fake::new("div", 0.0, 0.0, 200.0, 200.0).child(
            Fake::new("button", 0.0, 0.0, 80.0, 30.0)
                .child(Fake::new("svg", 4.0, 4.0, 16.0, 16.0))
                .child(Fake::new("span", 24.0, 4.0, 40.0, 16.0)),
        );

        assert_eq!(measure(&container), vec![info(0.0, 0.0, 80.0, 30.0, "button")]);
    }

    #[test]
    fn test_document_order_is_preserved() {
        let container = Fake::new("div", 0.0, 0.0, 300.0, 300.0)
            .child(
                Fake::new("div", 0.0, 0.0, 300.0, 100.0)
                    .child(Fake::new("h1", 0.0, 0.0, 300.0, 30.0))
                    .child(
                        Fake::new("div", 0.0, 40.0, 300.0, 60.0)
                            .child(Fake::new("a", 0.0, 40.0, 100.0, 20.0))
                            .child(Fake::new("b", 0.0, 70.0, 100.0, 20.0)),
                    ),
            )
            .child(Fake::new("c", 0.0, 150.0, 100.0, 20.0));

        let tags: Vec<_> = measure(&container).into_iter().map(|e| e.tag).collect();
        assert_eq!(tags, ["h1", "a", "b", "c"]);
    }

    #[test]
    fn test_tags_are_lower_cased() {
        let container =
            Fake::new("div", 0.0, 0.0, 10.0, 10.0).child(Fake::new("IMG", 0.0, 0.0, 10.0, 10.0));
        assert_eq!(measure(&container)[0].tag, "img");
    }

    #[test]
    fn test_empty_and_leafless_trees_measure_nothing() {
        let empty = Fake::new("div", 0.0, 0.0, 100.0, 100.0);
        assert!(measure(&empty).is_empty());

        let collapsed =
            Fake::new("div", 0.0, 0.0, 0.0, 100.0).child(Fake::new("p", 0.0, 0.0, 10.0, 10.0));
        let hollow = Fake::new("div", 0.0, 0.0, 100.0, 100.0)
            .child(Fake::new("div", 0.0, 0.0, 100.0, 100.0).child(collapsed));
        assert!(measure(&hollow).is_empty());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let node = Fake::new("div", 5.0, 5.0, 100.0, 100.0)
            .child(Fake::new("img", 5.0, 5.0, 20.0, 20.0))
            .child(Fake::new("p", 5.0, 30.0, 90.0, 14.0));
        let reference = Rect::new(0.0, 0.0, 200.0, 200.0);

        let first = extract(&node, &reference);
        assert_eq!(first, extract(&node, &reference));
        assert_eq!(first.len(), 2);
        assert_eq!(first[1].rect(), Rect::new(5.0, 30.0, 90.0, 14.0));
    }
}
