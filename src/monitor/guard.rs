// Fri Oct 16 2026 - Alex

use crate::automation::AutomationBackend;
use log::info;
use std::ops::{Deref, DerefMut};

/// Closes the wrapped backend when dropped, including on early return or
/// unwinding.
pub struct BackendGuard<B: AutomationBackend> {
    backend: B,
}

impl<B: AutomationBackend> BackendGuard<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: AutomationBackend> Deref for BackendGuard<B> {
    type Target = B;

    fn deref(&self) -> &B {
        &self.backend
    }
}

impl<B: AutomationBackend> DerefMut for BackendGuard<B> {
    fn deref_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: AutomationBackend> Drop for BackendGuard<B> {
    fn drop(&mut self) {
        info!("Closing browser");
        self.backend.close();
    }
}
