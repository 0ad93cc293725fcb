//! Hooks for what happens during a tick.
//!
//! Every soft failure the matcher swallows passes through a
//! [`TickObserver`] first, so callers can count skips and failed
//! dispatches without scraping log output.

use crate::error::DispatchError;
use crate::kind::NotificationKind;
use crate::matcher::SkipReason;

/// Receives tick events. All methods default to doing nothing.
pub trait TickObserver {
    /// A group has been fully walked. `triggered` is false when none of its
    /// members matched.
    fn group_checked(&self, _group: &str, _triggered: bool) {}

    fn zone_skipped(&self, _group: &str, _zone: &str, _reason: &SkipReason) {}

    /// Called before the notifier is invoked.
    fn triggered(&self, _group: &str, _zone: &str, _kind: NotificationKind) {}

    fn dispatch_failed(
        &self,
        _group: &str,
        _zone: &str,
        _kind: NotificationKind,
        _error: &DispatchError,
    ) {
    }
}

impl<O: TickObserver + ?Sized> TickObserver for &O {
    fn group_checked(&self, group: &str, triggered: bool) {
        (**self).group_checked(group, triggered)
    }

    fn zone_skipped(&self, group: &str, zone: &str, reason: &SkipReason) {
        (**self).zone_skipped(group, zone, reason)
    }

    fn triggered(&self, group: &str, zone: &str, kind: NotificationKind) {
        (**self).triggered(group, zone, kind)
    }

    fn dispatch_failed(
        &self,
        group: &str,
        zone: &str,
        kind: NotificationKind,
        error: &DispatchError,
    ) {
        (**self).dispatch_failed(group, zone, kind, error)
    }
}

/// Ignores everything.
impl TickObserver for () {}

/// Emits each event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TickObserver for TracingObserver {
    fn group_checked(&self, group: &str, triggered: bool) {
        if !triggered {
            tracing::debug!(group, "no match, not triggered");
        }
    }

    fn zone_skipped(&self, group: &str, zone: &str, reason: &SkipReason) {
        tracing::warn!(group, zone, %reason, "skipping zone");
    }

    fn triggered(&self, group: &str, zone: &str, kind: NotificationKind) {
        tracing::info!(group, zone, kind = %kind, "triggered");
    }

    fn dispatch_failed(
        &self,
        group: &str,
        zone: &str,
        kind: NotificationKind,
        error: &DispatchError,
    ) {
        tracing::warn!(group, zone, kind = %kind, %error, "cannot deliver notification");
    }
}
