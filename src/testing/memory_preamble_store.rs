use crate::domain::{AppError, Preamble};
use crate::ports::PreambleStore;
use std::cell::RefCell;

/// In-memory preamble store.
#[derive(Default)]
pub struct MemoryPreambleStore {
    stored: RefCell<Option<Preamble>>,
}

impl MemoryPreambleStore {
    pub fn with(text: &str) -> Self {
        Self { stored: RefCell::new(Some(Preamble::new(text))) }
    }

    pub fn stored(&self) -> Option<Preamble> {
        self.stored.borrow().clone()
    }
}

impl PreambleStore for MemoryPreambleStore {
    fn load(&self) -> Result<Preamble, AppError> {
        Ok(self.stored.borrow().clone().unwrap_or_default())
    }

    fn save(&self, preamble: &Preamble) -> Result<(), AppError> {
        *self.stored.borrow_mut() = Some(preamble.clone());
        Ok(())
    }

    fn reset(&self) -> Result<bool, AppError> {
        Ok(self.stored.borrow_mut().take().is_some())
    }
}
