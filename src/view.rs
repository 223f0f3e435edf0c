//! Declarative content description mounted by the reference host.
//!
//! A [`View`] is a plain value tree. Hosts mount it into their own node
//! storage; the shimmer component only ever holds it behind a shared
//! [`Content`] handle whose pointer identity stands for "the same children".

use std::rc::Rc;

use crate::color::Color;
use crate::geometry::Padding;
use crate::layout::{Axis, CrossAxisAlignment, Style};

/// Shared, immutable content handle. Two handles are the same content only
/// when they point at the same allocation.
pub type Content = Rc<View>;

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub kind: String,
    pub text: Option<String>,
    pub style: Style,
    pub children: Vec<View>,
}

impl View {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: None,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.style.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.style.height = Some(height);
        self
    }

    pub fn size(self, width: f32, height: f32) -> Self {
        self.width(width).height(height)
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.style.padding = padding.into();
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.style.spacing = spacing;
        self
    }

    /// Stack children horizontally instead of vertically.
    pub fn row(mut self) -> Self {
        self.style.axis = Axis::Horizontal;
        self
    }

    /// Keep children at their natural width in a column.
    pub fn align_start(mut self) -> Self {
        self.style.cross_alignment = CrossAxisAlignment::Start;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.style.font_size = font_size;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.style.hidden = hidden;
        self
    }

    pub fn child(mut self, child: View) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = View>) -> Self {
        self.children.extend(children);
        self
    }

    /// Wrap into a shareable [`Content`] handle.
    pub fn into_content(self) -> Content {
        Rc::new(self)
    }

    /// Number of views in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(View::node_count).sum::<usize>()
    }
}

/// Create a view of any element kind.
pub fn el(kind: impl Into<String>) -> View {
    View::new(kind)
}

pub fn div() -> View {
    View::new("div")
}

/// Image placeholder with a fixed size.
pub fn img(width: f32, height: f32) -> View {
    View::new("img").size(width, height)
}

pub fn p(text: impl Into<String>) -> View {
    View::new("p").text(text)
}

pub fn h1(text: impl Into<String>) -> View {
    View::new("h1").text(text).font_size(28.0)
}

pub fn h2(text: impl Into<String>) -> View {
    View::new("h2").text(text).font_size(22.0)
}

pub fn h3(text: impl Into<String>) -> View {
    View::new("h3").text(text).font_size(18.0)
}

pub fn span(text: impl Into<String>) -> View {
    View::new("span").text(text)
}

pub fn button(text: impl Into<String>) -> View {
    View::new("button").text(text).padding([6.0, 12.0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_style() {
        let view = div().row().spacing(8.0).padding(4.0).child(img(10.0, 10.0));
        assert_eq!(view.style.axis, Axis::Horizontal);
        assert_eq!(view.style.spacing, 8.0);
        assert_eq!(view.style.padding, Padding::all(4.0));
        assert_eq!(view.children[0].style.width, Some(10.0));
    }

    #[test]
    fn test_node_count() {
        let view = div().child(p("a")).child(div().child(span("b")));
        assert_eq!(view.node_count(), 4);
    }

    #[test]
    fn test_content_identity_is_pointer_identity() {
        let a = p("same").into_content();
        let b = p("same").into_content();
        assert_eq!(*a, *b);
        assert!(!Rc::ptr_eq(&a, &b));
        assert!(Rc::ptr_eq(&a, &a.clone()));
    }
}
