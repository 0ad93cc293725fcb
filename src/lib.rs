//! tzdigest — time-zone-aware digest trigger.
//!
//! Run once per scheduler tick (every 15 minutes). Each tick converts the
//! current instant into the local time of every zone in a fixed table and
//! sends a notification for each zone sitting at 16:00 (daily digest) or at
//! 09:00 on a Monday (weekly digest).
//!
//! # Examples
//!
//! ```
//! use tzdigest::{DryRunNotifier, Matcher, NotificationKind};
//!
//! let matcher = Matcher::new(DryRunNotifier);
//! // Monday 2026-02-09, 09:05 UTC.
//! let report = matcher.run_tick("2026-02-09T09:05:00Z".parse().unwrap()).unwrap();
//! assert!(report
//!     .matches()
//!     .any(|(zone, kind)| zone == "Etc/UTC" && kind == NotificationKind::WeeklyMondayMorning));
//! ```

pub mod entry;
pub mod error;
pub mod kind;
pub mod matcher;
pub mod notify;
pub mod observe;
pub mod threshold;
mod zone_data;
pub mod zones;

pub use entry::handle_invocation;
pub use error::{ConfigError, DispatchError, TableError, TickError};
pub use kind::NotificationKind;
pub use matcher::{Dispatch, DispatchOutcome, Matcher, Skip, SkipReason, TickReport};
#[cfg(feature = "http")]
pub use notify::{HttpNotifier, NotifierConfig};
pub use notify::{DryRunNotifier, Notifier, NotifyRequest};
pub use observe::{TickObserver, TracingObserver};
pub use threshold::{Threshold, TickConfig, Window};
pub use zones::{ZoneGroup, ZoneTable};
