//! Single-slot bearer token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP pipeline reads the slot before every request and clears it on any
//! 401. Durable implementations live at the edges (`localStorage` in the
//! browser, a file for the CLI); [`MemoryTokenStore`] backs tests and
//! short-lived processes.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Persisted slot holding at most one token. No expiry tracking: validity is
/// decided by the server.
pub trait TokenStore {
    fn save(&self, token: &str);
    fn get(&self) -> Option<String>;
    fn remove(&self);
}

/// In-memory store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn remove(&self) {
        self.slot.borrow_mut().take();
    }
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn save(&self, token: &str) {
        (**self).save(token);
    }

    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn remove(&self) {
        (**self).remove();
    }
}
