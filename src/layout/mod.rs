//! Block/flex stacking for the reference host.
//!
//! Nodes stack their element children along one axis with optional spacing
//! and padding. Column children stretch across the column; row children keep
//! their natural size. Text-only leaves size themselves from a fixed glyph
//! advance with greedy word wrapping. Layout writes absolute bounds straight
//! into the [`Tree`].

pub mod flex;

pub use flex::{Constraints, Size};

use crate::color::Color;
use crate::geometry::{Padding, Rect};
use crate::tree::{NodeId, Tree};

/// Glyph advance as a fraction of the font size.
const CHAR_WIDTH_EM: f32 = 0.5;
/// Line box height as a fraction of the font size.
const LINE_HEIGHT_EM: f32 = 1.25;

/// Direction for stacking children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Cross axis alignment for stacked children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossAxisAlignment {
    Start,
    Stretch,
}

/// Per-node layout and paint properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Exact width, otherwise derived from constraints or content
    pub width: Option<f32>,
    /// Exact height, otherwise derived from content
    pub height: Option<f32>,
    pub padding: Padding,
    /// Gap between consecutive children
    pub spacing: f32,
    pub axis: Axis,
    pub cross_alignment: CrossAxisAlignment,
    pub font_size: f32,
    pub background: Option<Color>,
    /// Laid out as 0x0 together with its whole subtree
    pub hidden: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            padding: Padding::default(),
            spacing: 0.0,
            axis: Axis::Vertical,
            cross_alignment: CrossAxisAlignment::Stretch,
            font_size: 14.0,
            background: None,
            hidden: false,
        }
    }
}

/// Measure a text run wrapped to `max_width`.
pub fn measure_text(text: &str, font_size: f32, max_width: f32) -> Size {
    let char_width = font_size * CHAR_WIDTH_EM;
    let line_height = font_size * LINE_HEIGHT_EM;

    let mut lines = 0usize;
    let mut widest = 0usize;
    let mut current = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        let candidate = if current == 0 { len } else { current + 1 + len };
        if current > 0 && candidate as f32 * char_width > max_width {
            widest = widest.max(current);
            lines += 1;
            current = len;
        } else {
            current = candidate;
        }
    }
    if current > 0 {
        widest = widest.max(current);
        lines += 1;
    }

    if lines == 0 {
        return Size::zero();
    }
    Size::new(
        (widest as f32 * char_width).min(max_width),
        lines as f32 * line_height,
    )
}

/// Lay out `id` and its subtree with its top-left corner at `origin`.
///
/// Returns the node's size; every visited node gets its absolute bounds
/// written back into the tree.
pub fn layout_node(
    tree: &mut Tree,
    id: NodeId,
    constraints: Constraints,
    origin: (f32, f32),
) -> Size {
    let Some(data) = tree.data(id) else {
        return Size::zero();
    };
    let style = data.style.clone();
    let text = data.text.clone();

    if style.hidden {
        collapse(tree, id, origin);
        return Size::zero();
    }

    let padding = style.padding;
    // Explicit sizes win over stretching, but never overflow the parent
    let own = Constraints {
        min_width: style
            .width
            .map_or(constraints.min_width, |w| w.min(constraints.max_width)),
        max_width: style
            .width
            .map_or(constraints.max_width, |w| w.min(constraints.max_width)),
        min_height: style
            .height
            .map_or(constraints.min_height, |h| h.min(constraints.max_height)),
        max_height: style
            .height
            .map_or(constraints.max_height, |h| h.min(constraints.max_height)),
    };
    let inner = own.deflate(padding.horizontal(), padding.vertical());

    let children = tree.get_children(id);
    let content = if children.is_empty() {
        text.as_deref()
            .map(|t| measure_text(t, style.font_size, inner.max_width))
            .unwrap_or_default()
    } else {
        let start = (origin.0 + padding.left, origin.1 + padding.top);
        layout_children(tree, &children, &style, inner, start)
    };

    // Vertical stacks behave like block flow and take the full available width
    let natural_width = if style.axis == Axis::Vertical
        && !children.is_empty()
        && own.max_width.is_finite()
    {
        own.max_width
    } else {
        content.width + padding.horizontal()
    };
    let size = own.constrain(Size::new(
        style.width.unwrap_or(natural_width),
        style.height.unwrap_or(content.height + padding.vertical()),
    ));

    tree.set_bounds(id, Rect::new(origin.0, origin.1, size.width, size.height));
    size
}

fn layout_children(
    tree: &mut Tree,
    children: &[NodeId],
    style: &Style,
    inner: Constraints,
    start: (f32, f32),
) -> Size {
    let axis = style.axis;
    let stretch = style.cross_alignment == CrossAxisAlignment::Stretch;

    let mut main = 0.0f32;
    let mut cross = 0.0f32;
    let mut placed = 0usize;

    for &child in children {
        let gap = if placed > 0 { style.spacing } else { 0.0 };
        let child_origin = match axis {
            Axis::Horizontal => (start.0 + main + gap, start.1),
            Axis::Vertical => (start.0, start.1 + main + gap),
        };

        let child_constraints = match axis {
            Axis::Horizontal => Constraints {
                min_width: 0.0,
                min_height: 0.0,
                max_width: (inner.max_width - main - gap).max(0.0),
                max_height: inner.max_height,
            },
            Axis::Vertical => Constraints {
                min_width: if stretch && inner.max_width.is_finite() {
                    inner.max_width
                } else {
                    0.0
                },
                min_height: 0.0,
                max_width: inner.max_width,
                max_height: (inner.max_height - main - gap).max(0.0),
            },
        };

        let size = layout_node(tree, child, child_constraints, child_origin);
        if size.is_empty() {
            continue;
        }
        main += gap + size.main_axis(axis);
        cross = cross.max(size.cross_axis(axis));
        placed += 1;
    }

    Size::from_axes(axis, main, cross)
}

/// Zero out a hidden branch so nothing inside it reports a stale box.
fn collapse(tree: &mut Tree, id: NodeId, origin: (f32, f32)) {
    let mut stack = vec![id];
    while let Some(current) = stack.pop() {
        tree.set_bounds(current, Rect::new(origin.0, origin.1, 0.0, 0.0));
        stack.extend(tree.get_children(current));
    }
}
