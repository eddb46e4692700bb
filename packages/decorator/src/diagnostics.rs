use crate::pattern::{DECORATOR_TITLE_TOKEN, LAYOUT_TITLE_TOKEN};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::warn;

/// Sink for one-shot deprecation diagnostics.
///
/// The latch is an atomic compare-and-set: the first caller wins and logs,
/// every later caller is a no-op, including under concurrent first use.
/// The process-wide instance behind [`Diagnostics::shared`] is never
/// reset; tests inject a fresh instance instead.
#[derive(Debug, Default)]
pub struct Diagnostics {
    deprecated_title_token: AtomicBool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide instance backing `TitleBuilder::default()`.
    pub fn shared() -> Arc<Diagnostics> {
        static SHARED: OnceLock<Arc<Diagnostics>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(Diagnostics::new())).clone()
    }

    /// Report a `$DECORATOR_TITLE` occurrence. Returns whether this call
    /// won the latch and emitted the warning.
    pub fn warn_deprecated_title_token(&self) -> bool {
        let won = self
            .deprecated_title_token
            .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
            .is_ok();
        if won {
            warn!(
                token = DECORATOR_TITLE_TOKEN,
                replacement = LAYOUT_TITLE_TOKEN,
                "deprecated title pattern token encountered; switch to the replacement"
            );
        }
        won
    }

    pub fn deprecated_title_token_seen(&self) -> bool {
        self.deprecated_title_token.load(Ordering::Relaxed)
    }
}
