//! Full-screen viewer state machine
//!
//! The viewer is either `Closed` or `Open` on one photo of the store's
//! filtered view. Entering `Open` acquires a session value `S` (in the
//! browser: a scroll lock plus a keyboard listener). The session lives inside
//! the `Open` state, so every way out of `Open` releases it by dropping it:
//! `close()`, a filter change that hides the active photo, or dropping the
//! navigator when the component unmounts.

use std::fmt;

use tracing::debug;

use crate::{Photo, PhotoStore};

/// Viewer commands bound to keys while the viewer is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Next,
    Prev,
    Close,
}

impl ViewerCommand {
    /// Map a DOM `KeyboardEvent.key` value to a command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(ViewerCommand::Close),
            "ArrowRight" => Some(ViewerCommand::Next),
            "ArrowLeft" => Some(ViewerCommand::Prev),
            _ => None,
        }
    }
}

/// Identifies one displayed position of the viewer.
///
/// Work started for a position (loading the full-size image) should only be
/// applied while its ticket is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTicket {
    pub index: usize,
    generation: u64,
}

/// The image URL the viewer has finished loading.
///
/// Keyed on the URL rather than the ticket: moving between photos that
/// resolve to the same URL (a repeated asset, or two placeholders) fires no
/// new load event, and that image is already on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedImage(Option<String>);

impl LoadedImage {
    /// Record that `src` finished loading for the view `ticket`. Ignored when
    /// the viewer has since moved on or closed.
    pub fn record<S>(
        &mut self,
        navigator: &PhotoNavigator<S>,
        ticket: ViewTicket,
        src: &str,
    ) -> bool {
        if !navigator.is_current(ticket) {
            return false;
        }
        self.0 = Some(src.to_string());
        true
    }

    pub fn is_showing(&self, src: &str) -> bool {
        self.0.as_deref() == Some(src)
    }
}

pub enum ViewerState<S> {
    Closed,
    Open {
        /// Position in the filtered view
        index: usize,
        photo_id: String,
        session: S,
    },
}

impl<S> fmt::Debug for ViewerState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerState::Closed => f.write_str("Closed"),
            ViewerState::Open {
                index, photo_id, ..
            } => f
                .debug_struct("Open")
                .field("index", index)
                .field("photo_id", photo_id)
                .finish_non_exhaustive(),
        }
    }
}

/// Open/close and wrap-around navigation over a store's filtered view.
pub struct ViewerController<S = ()> {
    state: ViewerState<S>,
    generation: u64,
}

impl<S> Default for ViewerController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for ViewerController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewerController")
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish()
    }
}

impl<S> ViewerController<S> {
    pub fn new() -> Self {
        Self {
            state: ViewerState::Closed,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewerState<S> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            ViewerState::Open { index, .. } => Some(*index),
            ViewerState::Closed => None,
        }
    }

    pub fn active_photo<'a>(&self, store: &'a PhotoStore) -> Option<&'a Photo> {
        self.current_index().and_then(|i| store.filtered_get(i))
    }

    /// Open on `id`, acquiring a session only when coming from `Closed`.
    ///
    /// An id missing from the filtered view leaves the state untouched.
    pub fn open_with(
        &mut self,
        store: &PhotoStore,
        id: &str,
        acquire: impl FnOnce() -> S,
    ) -> bool {
        let Some(position) = store.position_of(id) else {
            debug!(
                "Ignoring open for photo {id}: not among {} visible photos",
                store.filtered_len()
            );
            return false;
        };

        match &mut self.state {
            ViewerState::Open {
                index, photo_id, ..
            } => {
                *index = position;
                *photo_id = id.to_string();
            }
            ViewerState::Closed => {
                self.state = ViewerState::Open {
                    index: position,
                    photo_id: id.to_string(),
                    session: acquire(),
                };
            }
        }
        self.generation += 1;
        true
    }

    pub fn next(&mut self, store: &PhotoStore) -> bool {
        self.step(store, true)
    }

    pub fn prev(&mut self, store: &PhotoStore) -> bool {
        self.step(store, false)
    }

    fn step(&mut self, store: &PhotoStore, forward: bool) -> bool {
        let len = store.filtered_len();
        if len == 0 {
            return self.close();
        }

        let ViewerState::Open {
            index, photo_id, ..
        } = &mut self.state
        else {
            return false;
        };
        if len == 1 {
            return false;
        }

        let target = if forward {
            (*index + 1) % len
        } else {
            (*index + len - 1) % len
        };
        let Some(photo) = store.filtered_get(target) else {
            return false;
        };

        *index = target;
        *photo_id = photo.id.clone();
        self.generation += 1;
        true
    }

    /// Close the viewer, releasing the session. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let previous = std::mem::replace(&mut self.state, ViewerState::Closed);
        let was_open = matches!(previous, ViewerState::Open { .. });
        if was_open {
            self.generation += 1;
        }
        drop(previous);
        was_open
    }

    /// Re-anchor on the store's filtered view after it changed.
    ///
    /// Closes when the active photo is no longer visible, otherwise follows
    /// the photo to its new position.
    pub fn sync_with(&mut self, store: &PhotoStore) {
        let ViewerState::Open {
            index, photo_id, ..
        } = &mut self.state
        else {
            return;
        };

        match store.position_of(photo_id) {
            Some(position) => {
                if position != *index {
                    *index = position;
                    self.generation += 1;
                }
            }
            None => {
                debug!("Photo {photo_id} filtered out while open, closing viewer");
                self.close();
            }
        }
    }

    pub fn ticket(&self) -> Option<ViewTicket> {
        self.current_index().map(|index| ViewTicket {
            index,
            generation: self.generation,
        })
    }

    pub fn is_current(&self, ticket: ViewTicket) -> bool {
        self.ticket() == Some(ticket)
    }
}

/// What the full-screen view renders
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSnapshot<'a> {
    pub photo: &'a Photo,
    pub index: usize,
    pub total: usize,
}

/// A photo store plus its viewer: the single mutation surface for a gallery.
pub struct PhotoNavigator<S = ()> {
    store: PhotoStore,
    viewer: ViewerController<S>,
}

impl<S> fmt::Debug for PhotoNavigator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoNavigator")
            .field("store", &self.store)
            .field("viewer", &self.viewer)
            .finish()
    }
}

impl<S> PhotoNavigator<S> {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self::from_store(PhotoStore::new(photos))
    }

    pub fn from_store(store: PhotoStore) -> Self {
        Self {
            store,
            viewer: ViewerController::new(),
        }
    }

    pub fn store(&self) -> &PhotoStore {
        &self.store
    }

    pub fn viewer(&self) -> &ViewerController<S> {
        &self.viewer
    }

    /// Change the category selection. An open viewer follows its photo, or
    /// closes when the photo is filtered out.
    pub fn set_category(&mut self, selector: &str) -> bool {
        let changed = self.store.set_category(selector);
        if changed {
            self.viewer.sync_with(&self.store);
        }
        changed
    }

    pub fn open_with(&mut self, id: &str, acquire: impl FnOnce() -> S) -> bool {
        self.viewer.open_with(&self.store, id, acquire)
    }

    pub fn next(&mut self) -> bool {
        self.viewer.next(&self.store)
    }

    pub fn prev(&mut self) -> bool {
        self.viewer.prev(&self.store)
    }

    pub fn close(&mut self) -> bool {
        self.viewer.close()
    }

    /// Run a key-bound command. Does nothing while closed.
    pub fn apply(&mut self, command: ViewerCommand) -> bool {
        if !self.viewer.is_open() {
            return false;
        }
        match command {
            ViewerCommand::Next => self.next(),
            ViewerCommand::Prev => self.prev(),
            ViewerCommand::Close => self.close(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    pub fn snapshot(&self) -> Option<ViewerSnapshot<'_>> {
        let index = self.viewer.current_index()?;
        let photo = self.store.filtered_get(index)?;
        Some(ViewerSnapshot {
            photo,
            index,
            total: self.store.filtered_len(),
        })
    }

    pub fn ticket(&self) -> Option<ViewTicket> {
        self.viewer.ticket()
    }

    pub fn is_current(&self, ticket: ViewTicket) -> bool {
        self.viewer.is_current(ticket)
    }
}

impl<S: Default> PhotoNavigator<S> {
    pub fn open(&mut self, id: &str) -> bool {
        self.open_with(id, S::default)
    }
}
