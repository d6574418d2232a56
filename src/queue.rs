//! Showing a series of tooltips one after another.
//!
//! A [`PresentationQueue`] holds the tooltips that have not been shown yet. [`present`][PresentationQueue::present]
//! shows the front one and removes it from the queue; when the active tooltip is dismissed the queue presents
//! the next. Only one tooltip is ever active, and once shown a tooltip never comes back, whether or not the
//! user actually read it.
//!
//! The host is told what to show through a [`Presenter`]. The tooltip's tap handler reports back with the
//! [`PresentationId`] it was shown with, which makes dismissal idempotent: a second tap on a tooltip that is
//! already gone does nothing.
use std::collections::VecDeque;
use std::fmt;

use log::debug;

/// Identifies one presentation of one tooltip.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresentationId(u64);

/// Where the queue's tooltips end up.
pub trait Presenter<T> {
    fn show(&mut self, id: PresentationId, item: &T);
    fn hide(&mut self, _id: PresentationId) {}
}

impl<T, F: FnMut(PresentationId, &T)> Presenter<T> for F {
    fn show(&mut self, id: PresentationId, item: &T) {
        self(id, item)
    }
}

pub struct PresentationQueue<T> {
    pending: VecDeque<T>,
    active: Option<(PresentationId, T)>,
    next_id: u64,
}

impl<T> Default for PresentationQueue<T> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
            active: None,
            next_id: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PresentationQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PresentationQueue")
            .field("pending", &self.pending)
            .field("active", &self.active)
            .finish()
    }
}

impl<T> PresentationQueue<T> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Replace the pending tooltips. A tooltip that is already showing stays up.
    pub fn enqueue_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.pending = items.into_iter().collect();
        debug!("Queued {} tooltips", self.pending.len());
    }

    /// Show the front tooltip, then drop it from the queue. Does nothing when the queue is empty or a
    /// tooltip is already showing.
    pub fn present<P: Presenter<T>>(&mut self, presenter: &mut P) -> Option<PresentationId> {
        if let Some((id, _)) = self.active {
            debug!("Not presenting: {:?} is still showing", id);
            return None;
        }

        let id = PresentationId(self.next_id);
        presenter.show(id, self.pending.front()?);
        let item = self.pending.pop_front()?;
        self.next_id += 1;
        self.active = Some((id, item));
        debug!("Presented {:?}, {} left", id, self.pending.len());
        Some(id)
    }

    /// Dismiss the tooltip shown as `id` and present the next one, whose id is returned.
    /// Stale ids are ignored.
    pub fn dismiss<P: Presenter<T>>(
        &mut self,
        id: PresentationId,
        presenter: &mut P,
    ) -> Option<PresentationId> {
        match self.active {
            Some((active, _)) if active == id => {
                self.active = None;
                presenter.hide(id);
                debug!("Dismissed {:?}", id);
                self.present(presenter)
            }
            _ => None,
        }
    }

    /// Dismiss whatever is showing, if anything.
    pub fn dismiss_active<P: Presenter<T>>(&mut self, presenter: &mut P) -> Option<PresentationId> {
        let (id, _) = self.active.as_ref()?;
        let id = *id;
        self.dismiss(id, presenter)
    }

    /// Drop everything pending and hide the active tooltip.
    pub fn clear<P: Presenter<T>>(&mut self, presenter: &mut P) {
        self.pending.clear();
        if let Some((id, _)) = self.active.take() {
            presenter.hide(id);
        }
    }

    pub fn active(&self) -> Option<(PresentationId, &T)> {
        self.active.as_ref().map(|(id, item)| (*id, item))
    }

    pub fn pending(&self) -> impl Iterator<Item = &T> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Nothing showing and nothing left to show.
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.pending.is_empty()
    }
}
