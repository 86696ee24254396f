//! The synchronization controller.
//!
//! A [`Synchronizer`] owns the current [`ColorState`] and accepts edits to
//! one group of fields at a time. While an edit propagates (including while
//! the observer is notified) the controller is [`Phase::Propagating`] and any
//! further edit is dropped. An observer that writes the derived values back
//! into widgets, whose change events submit edits again, therefore cannot
//! start an update cycle.

use std::cell::{Cell, RefCell};

use crate::{
    color::SourceGroup,
    gamut::{self, Flags, RangeWarning},
    models::Rgb,
    parse::parse_lenient,
    state::ColorState,
};

/// Callback invoked after every completed edit.
type Observer = Box<dyn FnMut(&Update)>;

/// Whether an edit is currently being propagated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Ready to accept an edit.
    Idle,
    /// An edit is in progress; new edits are dropped.
    Propagating,
}

/// The outcome of a completed edit.
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    /// The new consistent state.
    pub state: ColorState,
    /// The group that was edited.
    pub source: SourceGroup,
    /// One warning for every value that was out of range and clamped.
    pub warnings: Vec<RangeWarning>,
    /// The channels of the source group that were clamped.
    pub clamped: Flags,
}

/// Marks the synchronizer as propagating for as long as it is alive.
struct PropagationGuard<'a> {
    phase: &'a Cell<Phase>,
}

impl<'a> PropagationGuard<'a> {
    /// Take the single propagation slot, or `None` if it is already taken.
    fn acquire(phase: &'a Cell<Phase>) -> Option<Self> {
        match phase.get() {
            Phase::Propagating => None,
            Phase::Idle => {
                phase.set(Phase::Propagating);
                Some(Self { phase })
            }
        }
    }
}

impl Drop for PropagationGuard<'_> {
    fn drop(&mut self) {
        self.phase.set(Phase::Idle);
    }
}

/// Keeps RGB, CMYK and Lab in sync across edits.
///
/// The synchronizer is meant to be driven from a single thread (it is not
/// `Sync`). Methods take `&self` so that an observer holding a reference to
/// the synchronizer can call back into it; such calls are dropped.
pub struct Synchronizer {
    state: Cell<ColorState>,
    phase: Cell<Phase>,
    observer: RefCell<Option<Observer>>,
    observer_generation: Cell<u64>,
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synchronizer {
    /// Create a synchronizer starting at black.
    pub fn new() -> Self {
        Self::with_color(Rgb::BLACK)
    }

    /// Create a synchronizer starting at the given (e.g. last known) color.
    pub fn with_color(rgb: Rgb) -> Self {
        Self {
            state: Cell::new(ColorState::from_hub(rgb)),
            phase: Cell::new(Phase::Idle),
            observer: RefCell::new(None),
            observer_generation: Cell::new(0),
        }
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> ColorState {
        self.state.get()
    }

    /// Whether an edit is in progress.
    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    /// Set the callback that is notified after every completed edit,
    /// replacing any previous one.
    pub fn set_observer(&self, observer: impl FnMut(&Update) + 'static) {
        self.replace_observer(Some(Box::new(observer)));
    }

    /// Remove the observer.
    pub fn clear_observer(&self) {
        self.replace_observer(None);
    }

    fn replace_observer(&self, observer: Option<Observer>) {
        self.observer_generation
            .set(self.observer_generation.get().wrapping_add(1));
        *self.observer.borrow_mut() = observer;
    }

    /// Submit new values for the fields of `group`, in the order of
    /// [`SourceGroup::fields`].
    ///
    /// Out of range values are clamped and reported in
    /// [`Update::warnings`]. Returns `None` without touching the state if
    /// another edit is still propagating.
    pub fn submit_edit(&self, group: SourceGroup, values: &[i64]) -> Option<Update> {
        let Some(_guard) = PropagationGuard::acquire(&self.phase) else {
            tracing::trace!(%group, "edit dropped while propagating");
            return None;
        };

        Some(self.propagate(group, values))
    }

    /// Submit the raw text of the fields of `group`.
    ///
    /// Each field is parsed with [`parse_lenient`]: empty text, a bare `-` and
    /// malformed text read as zero.
    pub fn submit_fields(&self, group: SourceGroup, fields: &[&str]) -> Option<Update> {
        let Some(_guard) = PropagationGuard::acquire(&self.phase) else {
            tracing::trace!(%group, "edit dropped while propagating");
            return None;
        };

        let values = fields
            .iter()
            .map(|text| parse_lenient(text))
            .collect::<Vec<_>>();

        Some(self.propagate(group, &values))
    }

    /// Apply a color chosen in a color picker.
    pub fn pick_color(&self, rgb: Rgb) -> Option<Update> {
        let values = rgb.into_array().map(i64::from);
        self.submit_edit(SourceGroup::Rgb, &values)
    }

    fn propagate(&self, group: SourceGroup, values: &[i64]) -> Update {
        tracing::debug!(%group, ?values, "propagating edit");

        let gamut::Validated {
            source,
            warnings,
            clamped,
        } = gamut::validate(group, values);

        let state = ColorState::from_source(source);
        self.state.set(state);

        let update = Update {
            state,
            source: group,
            warnings,
            clamped,
        };
        self.notify(&update);

        update
    }

    fn notify(&self, update: &Update) {
        // Take the observer out so it can call back into the synchronizer.
        let Some(mut observer) = self.observer.borrow_mut().take() else {
            return;
        };
        let generation = self.observer_generation.get();

        observer(update);

        // Put it back unless it was replaced or cleared from inside the
        // callback.
        if self.observer_generation.get() == generation {
            *self.observer.borrow_mut() = Some(observer);
        }
    }
}
