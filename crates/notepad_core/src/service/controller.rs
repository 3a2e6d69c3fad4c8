//! Intent dispatcher and change notification.
//!
//! # Responsibility
//! - Own the single `NoteStore` of a session.
//! - Apply surface intents in arrival order and notify subscribers.
//!
//! # Invariants
//! - Every dispatch notifies every subscriber exactly once, in subscription
//!   order, with the post-transition view.
//! - Ignored intents leave the store unchanged.
//! - `ToggleTheme` is never interpreted by the core.

use crate::markdown::render::{MarkdownRenderer, MarkupPolicy};
use crate::model::note::{NoteId, DEFAULT_NOTE_TITLE};
use crate::service::view::SurfaceView;
use crate::store::note_store::{NoteStore, StoreError};
use log::debug;
use std::collections::BTreeMap;

/// User action sent from a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Create,
    Select(NoteId),
    Save,
    Delete(NoteId),
    BeginEdit,
    SetDraftTitle(String),
    SetDraftContent(String),
    /// Presentation-only; forwarded to subscribers untouched.
    ToggleTheme,
}

impl Intent {
    /// Stable, content-free name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Select(_) => "select",
            Self::Save => "save",
            Self::Delete(_) => "delete",
            Self::BeginEdit => "begin_edit",
            Self::SetDraftTitle(_) => "set_draft_title",
            Self::SetDraftContent(_) => "set_draft_content",
            Self::ToggleTheme => "toggle_theme",
        }
    }
}

/// Result of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The store transitioned.
    Applied,
    /// The intent targeted nothing; the store is unchanged.
    Ignored(StoreError),
    /// The intent belongs to the presentation layer.
    PassThrough,
}

/// Subscriber contract for rendering surfaces.
pub trait SurfaceObserver {
    /// Called after every dispatch with the current view.
    fn on_view(&mut self, view: &SurfaceView);

    /// Called for intents the core does not interpret.
    fn on_pass_through(&mut self, _intent: &Intent) {}
}

impl<F> SurfaceObserver for F
where
    F: FnMut(&SurfaceView),
{
    fn on_view(&mut self, view: &SurfaceView) {
        self(view)
    }
}

/// Handle returned by [`NoteController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// Controller settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Escaping applied before markdown rendering in view mode.
    pub markup_policy: MarkupPolicy,
    /// Title given to freshly created notes.
    pub default_title: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            markup_policy: MarkupPolicy::Raw,
            default_title: DEFAULT_NOTE_TITLE.to_string(),
        }
    }
}

/// Session controller owning the store and its subscribers.
pub struct NoteController {
    store: NoteStore,
    renderer: MarkdownRenderer,
    observers: BTreeMap<SubscriptionId, Box<dyn SurfaceObserver>>,
    next_subscription: u64,
}

impl Default for NoteController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl NoteController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            store: NoteStore::with_default_title(config.default_title),
            renderer: MarkdownRenderer::new(config.markup_policy),
            observers: BTreeMap::new(),
            next_subscription: 0,
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn markup_policy(&self) -> MarkupPolicy {
        self.renderer.policy()
    }

    /// Builds the current view without dispatching anything.
    pub fn view(&self) -> SurfaceView {
        SurfaceView::project(&self.store, &self.renderer)
    }

    /// Registers `observer`; it is notified from the next dispatch on.
    pub fn subscribe(&mut self, observer: impl SurfaceObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.insert(id, Box::new(observer));
        debug!(
            "event=surface_subscribe module=controller status=ok subscribers={}",
            self.observers.len()
        );
        id
    }

    /// Removes a subscriber; returns `false` for unknown handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(&id).is_some()
    }

    /// Applies `intent` and notifies every subscriber.
    pub fn dispatch(&mut self, intent: Intent) -> Dispatch {
        let outcome = self.apply(&intent);
        match outcome {
            Dispatch::Applied => debug!(
                "event=intent_dispatch module=controller status=ok intent={}",
                intent.kind()
            ),
            Dispatch::Ignored(err) => debug!(
                "event=intent_dispatch module=controller status=ignored intent={} reason={}",
                intent.kind(),
                err
            ),
            Dispatch::PassThrough => debug!(
                "event=intent_dispatch module=controller status=pass_through intent={}",
                intent.kind()
            ),
        }

        if outcome == Dispatch::PassThrough {
            for observer in self.observers.values_mut() {
                observer.on_pass_through(&intent);
            }
        }
        if !self.observers.is_empty() {
            let view = self.view();
            for observer in self.observers.values_mut() {
                observer.on_view(&view);
            }
        }
        outcome
    }

    fn apply(&mut self, intent: &Intent) -> Dispatch {
        let result = match intent {
            Intent::Create => {
                self.store.create_note();
                Ok(())
            }
            Intent::Select(id) => self.store.select_note(*id).map(|_| ()),
            Intent::Save => self.store.save_active_note().map(|_| ()),
            Intent::Delete(id) => self
                .store
                .delete_note(*id)
                .map(|_| ())
                .ok_or(StoreError::NoteNotFound(*id)),
            Intent::BeginEdit => self.store.begin_edit(),
            Intent::SetDraftTitle(text) => {
                self.store.set_draft_title(text.as_str());
                Ok(())
            }
            Intent::SetDraftContent(text) => {
                self.store.set_draft_content(text.as_str());
                Ok(())
            }
            Intent::ToggleTheme => return Dispatch::PassThrough,
        };

        match result {
            Ok(()) => Dispatch::Applied,
            Err(err) => Dispatch::Ignored(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Intent, NoteController};

    #[test]
    fn intent_kind_never_includes_user_text() {
        let intent = Intent::SetDraftContent("secret diary".to_string());
        assert_eq!(intent.kind(), "set_draft_content");
    }

    #[test]
    fn unsubscribe_unknown_handle_returns_false() {
        let mut controller = NoteController::default();
        let id = controller.subscribe(|_: &super::SurfaceView| {});
        assert!(controller.unsubscribe(id));
        assert!(!controller.unsubscribe(id));
    }
}
