//! The scheduler-facing entry point.

use std::fmt::Debug;

use jiff::Timestamp;

use crate::error::TickError;
use crate::matcher::{Matcher, TickReport};
use crate::notify::Notifier;
use crate::observe::TickObserver;

/// Handle one scheduler invocation.
///
/// The event is opaque: it is logged and otherwise ignored. Returns `Ok`
/// whenever the tick ran, however many zones were skipped or failed to
/// deliver; the scheduler has no retry policy to feed those into.
pub fn handle_invocation<E, N, O>(
    event: &E,
    now: Timestamp,
    matcher: &Matcher<'_, N, O>,
) -> Result<TickReport, TickError>
where
    E: Debug + ?Sized,
    N: Notifier,
    O: TickObserver,
{
    tracing::debug!(?event, "received event");
    matcher.run_tick(now).inspect_err(|e| {
        tracing::error!(error = %e, "tick failed");
    })
}
