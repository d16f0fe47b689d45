use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shareable view of whether a run is under way. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct RunStatus {
    in_progress: Arc<AtomicBool>,
}

impl RunStatus {
    pub fn in_progress(&self) -> bool {
        self.in_progress.load(Ordering::SeqCst)
    }

    pub(crate) fn begin(&self) -> ProgressGuard {
        self.in_progress.store(true, Ordering::SeqCst);
        ProgressGuard {
            flag: self.in_progress.clone(),
        }
    }
}

/// Clears the flag when the run returns or its future is dropped.
pub(crate) struct ProgressGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
