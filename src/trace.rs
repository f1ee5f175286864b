//! Span and event helpers for the filter stages.
//!
//! Both macros decide at expansion time whether the `tracing` feature is on.
//! Without it a span is a unit guard and event fields are only borrowed.

/// Enters an info-level span for one filter stage and returns its guard.
///
/// Usage: `let _span = filter_span!("correlate", width = w, height = h);`
macro_rules! filter_span {
    ($name:literal, $($key:ident = $value:expr),+ $(,)?) => {{
        #[cfg(feature = "tracing")]
        let guard = tracing::info_span!($name, $($key = $value),+).entered();
        #[cfg(not(feature = "tracing"))]
        let guard = $crate::trace::StageGuard;
        guard
    }};
}

/// Records a debug-level event with key/value fields.
macro_rules! filter_event {
    ($name:literal, $($key:ident = $value:expr),+ $(,)?) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!(name: $name, $($key = $value),+);
        #[cfg(not(feature = "tracing"))]
        let _ = ($(&$value,)+);
    }};
}

pub(crate) use filter_event;
pub(crate) use filter_span;

/// Guard returned by `filter_span!` when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
pub(crate) struct StageGuard;
