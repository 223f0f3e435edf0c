//! Reference host: mounts [`View`]s into a [`Tree`] and lays them out.
//!
//! Content is always mounted under a wrapper `div` placed at the document
//! origin. That wrapper is the measurement container: the content root is its
//! only child. A hidden commit lays the content out exactly like a visible one
//! but nothing is painted for it.

use crate::geometry::Rect;
use crate::layout::{layout_node, Constraints};
use crate::renderer::PaintContext;
use crate::shimmer::{LayoutHost, MountError, ShimmerHost};
use crate::tree::{NodeData, NodeId, Tree};
use crate::view::{Content, View};
use crate::visual::NodeRef;

use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountMode {
    /// Laid out for measurement only
    Hidden,
    Visible,
}

pub struct Document {
    tree: Tree,
    container: Option<NodeId>,
    origin: (f32, f32),
    width: f32,
    mode: MountMode,
    mounted: Option<Content>,
    attached: bool,
}

impl Document {
    /// An attached document `width` logical pixels wide.
    pub fn new(width: f32) -> Self {
        Self {
            tree: Tree::new(),
            container: None,
            origin: (0.0, 0.0),
            width,
            mode: MountMode::Hidden,
            mounted: None,
            attached: true,
        }
    }

    /// Place the container somewhere other than the top-left corner.
    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn mode(&self) -> MountMode {
        self.mode
    }

    pub fn is_visible(&self) -> bool {
        self.container.is_some() && self.mode == MountMode::Visible
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Absolute box of the container, if something is mounted.
    pub fn container_bounds(&self) -> Option<Rect> {
        self.container.and_then(|id| self.tree.bounds(id))
    }

    /// Unmount everything. Commits fail until [`Document::attach`] is called.
    pub fn detach(&mut self) {
        self.unmount();
        self.attached = false;
        log::debug!("document detached");
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Change the available width and re-run layout on whatever is mounted.
    pub fn resize(&mut self, width: f32) {
        self.width = width;
        if let Some(container) = self.container {
            self.relayout(container);
        }
    }

    fn unmount(&mut self) {
        if let Some(container) = self.container.take() {
            self.tree.remove_subtree(container);
        }
        self.mounted = None;
    }

    fn mount(&mut self, content: &Content, mode: MountMode) -> Result<(), MountError> {
        if !self.attached {
            return Err(MountError::Detached);
        }
        self.unmount();

        let container = self.tree.register(NodeData::new("div"));
        let root = self.build(content);
        self.tree.set_parent(root, container);
        self.container = Some(container);
        self.mounted = Some(Rc::clone(content));
        self.mode = mode;

        self.relayout(container);

        log::debug!(
            "mounted {} nodes ({:?}) at {:?}, {}px wide",
            content.node_count(),
            mode,
            self.origin,
            self.width
        );
        Ok(())
    }

    fn build(&mut self, view: &View) -> NodeId {
        let id = self.tree.register(NodeData {
            kind: view.kind.clone(),
            text: view.text.clone(),
            style: view.style.clone(),
        });
        for child in &view.children {
            let child_id = self.build(child);
            self.tree.set_parent(child_id, id);
        }
        id
    }

    fn relayout(&mut self, container: NodeId) {
        layout_node(
            &mut self.tree,
            container,
            Constraints::width(self.width),
            self.origin,
        );
    }
}

impl LayoutHost for Document {
    type Node<'a> = NodeRef<'a>;

    fn commit_hidden(&mut self, content: &Content) -> Result<(), MountError> {
        self.mount(content, MountMode::Hidden)
    }

    fn container(&self) -> Option<NodeRef<'_>> {
        self.container
            .filter(|&id| self.tree.contains(id))
            .map(|id| NodeRef::new(&self.tree, id))
    }
}

impl ShimmerHost for Document {
    fn commit_visible(&mut self, content: &Content) -> Result<(), MountError> {
        let already_shown = self.mode == MountMode::Visible
            && self
                .mounted
                .as_ref()
                .is_some_and(|mounted| Rc::ptr_eq(mounted, content));
        if already_shown && self.container.is_some() {
            return Ok(());
        }
        self.mount(content, MountMode::Visible)
    }

    fn paint_content(&self, ctx: &mut PaintContext) {
        if !self.is_visible() {
            return;
        }
        let Some(container) = self.container else {
            return;
        };
        let Some(clip) = self.tree.bounds(container) else {
            return;
        };

        ctx.push_clip(clip, 0.0);
        let mut stack = vec![container];
        while let Some(id) = stack.pop() {
            let (Some(data), Some(bounds)) = (self.tree.data(id), self.tree.bounds(id)) else {
                continue;
            };
            if bounds.is_empty() {
                continue;
            }
            if let Some(background) = data.style.background {
                ctx.draw_rounded_rect(bounds, background, 0.0);
            }
            // Reverse so the first child is painted first
            stack.extend(self.tree.get_children(id).into_iter().rev());
        }
        ctx.pop_clip();
    }
}
