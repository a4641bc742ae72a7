//! Locale context for the transcript.
//!
//! ## Usage
//!
//! ```ignore
//! // In the root component
//! provide_locale(Locale::resolve);
//!
//! // In any descendant
//! let locale = use_locale();
//! ```

use dioxus::prelude::*;
use huddle_core::Locale;

/// Make a locale available to every descendant.
///
/// `init` runs once, on the first render.
pub fn provide_locale(init: impl FnOnce() -> Locale) -> Locale {
    use_context_provider(init)
}

/// Locale from context, or the runtime locale when none was provided.
///
/// Resolved once per component instance.
pub fn use_locale() -> Locale {
    use_hook(|| try_consume_context::<Locale>().unwrap_or_else(Locale::resolve))
}
