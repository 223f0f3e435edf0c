//! When measurement runs.
//!
//! A [`Measurement`] owns the current rectangle list of one shimmer instance.
//! [`Measurement::sync`] is called from the host's layout step, so the hidden
//! commit, the extraction and the list swap all land before the frame that
//! shows them is painted.

use std::rc::Rc;

use bitflags::bitflags;
use thiserror::Error;

use crate::view::Content;
use crate::visual::VisualNode;

use super::extract::{measure, ElementInfo};

bitflags! {
    /// Why a measurement pass ran
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MeasureTrigger: u8 {
        /// Loading switched on (or the instance started out loading)
        const LOADING_STARTED = 0b01;
        /// A different content handle arrived while loading
        const CONTENT_CHANGED = 0b10;
        /// The measured content lost its hidden mount, e.g. the host was
        /// detached and attached again
        const REMOUNTED = 0b100;
    }
}

/// The host could not commit content for measurement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("measurement container is detached")]
    Detached,
}

/// Capability a host must provide: commit content invisibly, run layout, then
/// hand out the container the content was mounted under.
pub trait LayoutHost {
    type Node<'a>: VisualNode
    where
        Self: 'a;

    /// Mount `content` without painting it and lay it out synchronously.
    fn commit_hidden(&mut self, content: &Content) -> Result<(), MountError>;

    /// The container holding the last hidden commit, if it is still mounted.
    fn container(&self) -> Option<Self::Node<'_>>;
}

/// Result of one [`Measurement::sync`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// Not loading, or nothing changed since the last successful pass
    Idle,
    /// The list was replaced
    Measured { trigger: MeasureTrigger, count: usize },
    /// The hidden commit failed; the previous list is kept and the pass is retried
    /// on the next sync
    Abandoned(MeasureTrigger),
}

pub struct Measurement {
    current: Rc<[ElementInfo]>,
    was_loading: bool,
    /// Content handle of the last successful pass
    measured: Option<Content>,
    passes: u64,
}

impl Measurement {
    pub fn new() -> Self {
        Self {
            current: Rc::from(Vec::new()),
            was_loading: false,
            measured: None,
            passes: 0,
        }
    }

    /// Shared handle to the current list. Never observed half-updated: each
    /// pass swaps in a freshly built list.
    pub fn current(&self) -> Rc<[ElementInfo]> {
        Rc::clone(&self.current)
    }

    pub fn rects(&self) -> &[ElementInfo] {
        &self.current
    }

    /// Number of successful passes so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Which triggers would fire for this loading flag and content.
    pub fn triggers(&self, loading: bool, content: &Content) -> MeasureTrigger {
        let mut trigger = MeasureTrigger::empty();
        if !loading {
            return trigger;
        }
        if !self.was_loading {
            trigger |= MeasureTrigger::LOADING_STARTED;
        }
        let same_content = self
            .measured
            .as_ref()
            .is_some_and(|measured| Rc::ptr_eq(measured, content));
        if !same_content {
            trigger |= MeasureTrigger::CONTENT_CHANGED;
        }
        trigger
    }

    /// Re-measure if loading just started, the content handle changed or the
    /// host dropped the last hidden mount.
    pub fn sync<H: LayoutHost>(
        &mut self,
        loading: bool,
        content: &Content,
        host: &mut H,
    ) -> PassOutcome {
        let mut trigger = self.triggers(loading, content);
        if !loading {
            self.was_loading = false;
            return PassOutcome::Idle;
        }
        if self.measured.is_some() && host.container().is_none() {
            trigger |= MeasureTrigger::REMOUNTED;
        }
        if trigger.is_empty() {
            log::trace!("measurement up to date ({} rects)", self.current.len());
            return PassOutcome::Idle;
        }

        let measured = host.commit_hidden(content).and_then(|()| {
            host.container()
                .map(|container| measure(&container))
                .ok_or(MountError::Detached)
        });

        match measured {
            Ok(rects) => {
                let count = rects.len();
                self.current = Rc::from(rects);
                self.was_loading = true;
                self.measured = Some(Rc::clone(content));
                self.passes += 1;
                log::debug!(
                    "measurement pass {} ({:?}): {} rects",
                    self.passes,
                    trigger,
                    count
                );
                PassOutcome::Measured { trigger, count }
            }
            Err(err) => {
                log::debug!(
                    "measurement pass abandoned ({:?}): {}; keeping {} rects",
                    trigger,
                    err,
                    self.current.len()
                );
                PassOutcome::Abandoned(trigger)
            }
        }
    }
}

impl Default for Measurement {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shimmer::testing::Fake;
    use crate::view::p;

    /// Host whose "layout" is a fixed fake tree chosen per content text.
    struct ScriptedHost {
        attached: bool,
        mounted: Option<Fake>,
        commits: usize,
    }

    impl ScriptedHost {
        fn new() -> Self {
            Self {
                attached: true,
                mounted: None,
                commits: 0,
            }
        }
    }

    impl LayoutHost for ScriptedHost {
        type Node<'a> = Fake;

        fn commit_hidden(&mut self, content: &Content) -> Result<(), MountError> {
            if !self.attached {
                return Err(MountError::Detached);
            }
            self.commits += 1;
            let rows = content.text.as_deref().map_or(0, str::len);
            let mut root = Fake::new("div", 0.0, 0.0, 100.0, 100.0);
            for i in 0..rows {
                root = root.child(Fake::new("p", 0.0, i as f32 * 10.0, 100.0, 10.0));
            }
            self.mounted = Some(root);
            Ok(())
        }

        fn container(&self) -> Option<Fake> {
            self.mounted.clone()
        }
    }

    #[test]
    fn test_first_sync_while_loading_measures() {
        let mut host = ScriptedHost::new();
        let mut m = Measurement::new();
        let content = p("abc").into_content();

        let outcome = m.sync(true, &content, &mut host);

        assert_eq!(
            outcome,
            PassOutcome::Measured {
                trigger: MeasureTrigger::LOADING_STARTED | MeasureTrigger::CONTENT_CHANGED,
                count: 3
            }
        );
        assert_eq!(m.rects().len(), 3);
        assert_eq!(m.passes(), 1);
    }

    #[test]
    fn test_unchanged_inputs_do_not_remeasure() {
        let mut host = ScriptedHost::new();
        let mut m = Measurement::new();
        let content = p("ab").into_content();

        m.sync(true, &content, &mut host);
        assert_eq!(m.sync(true, &content, &mut host), PassOutcome::Idle);
        assert_eq!(m.sync(true, &Rc::clone(&content), &mut host), PassOutcome::Idle);
        assert_eq!(host.commits, 1);
    }

    #[test]
    fn test_new_content_handle_remeasures_even_if_equal() {
        let mut host = ScriptedHost::new();
        let mut m = Measurement::new();

        m.sync(true, &p("ab").into_content(), &mut host);
        let outcome = m.sync(true, &p("ab").into_content(), &mut host);

        assert_eq!(
            outcome,
            PassOutcome::Measured {
                trigger: MeasureTrigger::CONTENT_CHANGED,
                count: 2
            }
        );
    }

    #[test]
    fn test_not_loading_never_measures() {
        let mut host = ScriptedHost::new();
        let mut m = Measurement::new();
        let content = p("abc").into_content();

        assert_eq!(m.sync(false, &content, &mut host), PassOutcome::Idle);
        assert_eq!(m.sync(false, &p("x").into_content(), &mut host), PassOutcome::Idle);
        assert_eq!(host.commits, 0);
        assert!(m.rects().is_empty());
    }

    #[test]
    fn test_loading_toggle_reproduces_the_same_list() {
        let mut host = ScriptedHost::new();
        let mut m = Measurement::new();
        let content = p("abcd").into_content();

        m.sync(true, &content, &mut host);
        let first = m.current();
        m.sync(false, &content, &mut host);
        let outcome = m.sync(true, &content, &mut host);

        assert_eq!(
            outcome,
            PassOutcome::Measured {
                trigger: MeasureTrigger::LOADING_STARTED,
                count: 4
            }
        );
        assert_eq!(&*first, m.rects());
        assert!(!Rc::ptr_eq(&first, &m.current()));
    }

    #[test]
    fn test_failed_commit_keeps_previous_list_and_retries() {
        let mut host = ScriptedHost::new();
        let mut m = Measurement::new();
        m.sync(true, &p("ab").into_content(), &mut host);
        let before = m.current();

        host.attached = false;
        let next = p("abcde").into_content();
        assert_eq!(
            m.sync(true, &next, &mut host),
            PassOutcome::Abandoned(MeasureTrigger::CONTENT_CHANGED)
        );
        assert!(Rc::ptr_eq(&before, &m.current()));

        host.attached = true;
        assert_eq!(
            m.sync(true, &next, &mut host),
            PassOutcome::Measured {
                trigger: MeasureTrigger::CONTENT_CHANGED,
                count: 5
            }
        );
    }

    #[test]
    fn test_lost_mount_remeasures_same_content() {
        let mut host = ScriptedHost::new();
        let mut m = Measurement::new();
        let content = p("abc").into_content();
        m.sync(true, &content, &mut host);

        host.mounted = None;
        assert_eq!(
            m.sync(true, &content, &mut host),
            PassOutcome::Measured {
                trigger: MeasureTrigger::REMOUNTED,
                count: 3
            }
        );
        assert_eq!(host.commits, 2);
        assert_eq!(m.sync(true, &content, &mut host), PassOutcome::Idle);
    }

    #[test]
    fn test_lost_mount_while_not_loading_is_ignored() {
        let mut host = ScriptedHost::new();
        let mut m = Measurement::new();
        let content = p("abc").into_content();
        m.sync(true, &content, &mut host);

        host.mounted = None;
        assert_eq!(m.sync(false, &content, &mut host), PassOutcome::Idle);
        assert_eq!(host.commits, 1);
    }

    #[test]
    fn test_readers_keep_their_snapshot() {
        let mut host = ScriptedHost::new();
        let mut m = Measurement::new();
        m.sync(true, &p("a").into_content(), &mut host);
        let snapshot = m.current();

        m.sync(true, &p("abc").into_content(), &mut host);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(m.rects().len(), 3);
    }
}
