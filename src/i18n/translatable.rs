use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Implemented by any view element whose text depends on the current language.
pub trait Translatable {
    /// Called after the language has been changed.
    fn on_lang_changed(&mut self);
}

type Listener = Weak<RefCell<dyn Translatable>>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Observer registry for language changes.
///
/// Elements register when they are built and keep the returned [`Registration`]
/// alive; dropping it removes them. The registry only holds weak references, so it
/// never keeps an element alive on its own.
#[derive(Clone, Default)]
pub struct LangRegistry {
    inner: Rc<RefCell<Listeners>>,
}

impl LangRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Translatable + 'static>(&self, listener: &Rc<RefCell<T>>) -> Registration {
        let listener: Rc<RefCell<dyn Translatable>> = listener.clone();
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push((id, Rc::downgrade(&listener)));
        Registration {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Calls `on_lang_changed` on every live listener. Returns how many were called.
    pub fn notify_lang_changed(&self) -> usize {
        // Collect first so listeners may register or deregister from their callback.
        let live: Vec<Rc<RefCell<dyn Translatable>>> = {
            let mut inner = self.inner.borrow_mut();
            inner.entries.retain(|(_, weak)| weak.strong_count() > 0);
            inner
                .entries
                .iter()
                .filter_map(|(_, weak)| weak.upgrade())
                .collect()
        };
        for listener in &live {
            listener.borrow_mut().on_lang_changed();
        }
        tracing::debug!(listeners = live.len(), "language change broadcast");
        live.len()
    }

    /// Number of registered listeners that are still alive.
    pub fn len(&self) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|(_, weak)| weak.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a listener registered for as long as it lives.
#[derive(Debug)]
pub struct Registration {
    id: u64,
    registry: Weak<RefCell<Listeners>>,
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}
