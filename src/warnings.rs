//! Defines the process-wide warning channel used by the emulator driver.
//!
//! Drivers raise warnings through [`warn`]; by default those surface as
//! [`log::warn!`] lines. A caller interested in one specific warning opens a
//! capture scope with [`catch`]: while the returned guard lives, warnings whose
//! message matches the scope sentinel exactly are recorded on the scope and
//! suppressed from default surfacing. All other warnings pass through untouched.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

/// One active capture scope.
struct Scope {
    id: usize,
    sentinel: String,
    caught: bool,
}

static SCOPES: Mutex<Vec<Scope>> = Mutex::new(Vec::new());
static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Raises a warning on the process-wide channel.
///
/// The warning is delivered to the most recently opened scope whose sentinel matches
/// the message exactly; without one it surfaces through [`log::warn!`] (default
/// handling).
pub fn warn<M: Into<String>>(message: M) {
    let message = message.into();
    let mut scopes = SCOPES.lock();
    match scopes.iter_mut().rev().find(|scope| scope.sentinel == message) {
        Some(scope) => scope.caught = true,
        None => log::warn!("{}", message),
    }
}

/// Opens a capture scope for warnings matching `sentinel` exactly.
///
/// The scope lasts until the returned guard is dropped.
pub fn catch<S: Into<String>>(sentinel: S) -> CatchWarnings {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    SCOPES.lock().push(Scope {
        id,
        sentinel: sentinel.into(),
        caught: false,
    });
    CatchWarnings { id }
}

/// Guard over a warning capture scope: unregisters the scope on drop, on all exit paths.
#[derive(Debug)]
pub struct CatchWarnings {
    id: usize,
}

impl CatchWarnings {
    /// Checks whether a matching warning was raised since the scope opened.
    pub fn caught(&self) -> bool {
        SCOPES
            .lock()
            .iter()
            .find(|scope| scope.id == self.id)
            .map_or(false, |scope| scope.caught)
    }
}

impl Drop for CatchWarnings {
    fn drop(&mut self) {
        SCOPES.lock().retain(|scope| scope.id != self.id);
    }
}

#[cfg(test)]
mod tests {
    use log::Level;
    use serial_test::serial;

    use super::*;
    use crate::mocks::logger::MockLogger;

    #[test]
    #[serial]
    fn test_matching_warning_is_captured() {
        MockLogger::init();
        let scope = catch("No emulator detected");
        assert!(!scope.caught());
        warn("No emulator detected");
        assert!(scope.caught());
        // Suppressed from default surfacing.
        assert_eq!(MockLogger::records(Level::Warn).len(), 0);
    }

    #[test]
    #[serial]
    fn test_other_warnings_pass_through() {
        MockLogger::init();
        let scope = catch("No emulator detected");
        warn("Something else entirely");
        assert!(!scope.caught());
        assert_eq!(
            MockLogger::records(Level::Warn),
            vec!["Something else entirely"]
        );
    }

    #[test]
    #[serial]
    fn test_scope_released_on_drop() {
        MockLogger::init();
        let scope = catch("No emulator detected");
        drop(scope);
        warn("No emulator detected");
        assert_eq!(
            MockLogger::records(Level::Warn),
            vec!["No emulator detected"]
        );
    }

    #[test]
    #[serial]
    fn test_innermost_scope_wins() {
        MockLogger::init();
        let outer = catch("No emulator detected");
        let inner = catch("No emulator detected");
        warn("No emulator detected");
        assert!(inner.caught());
        assert!(!outer.caught());
    }
}
