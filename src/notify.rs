//! Delivery of matched notifications.
//!
//! The matcher only sees the [`Notifier`] trait. Production binds it to
//! [`HttpNotifier`]; `--dry-run` and tests bind it to something that never
//! touches the network.

#[cfg(feature = "http")]
use std::time::Duration;

use serde::Serialize;

use crate::error::DispatchError;
#[cfg(feature = "http")]
use crate::error::ConfigError;
use crate::kind::NotificationKind;

/// Hands one (zone, kind) match to whatever delivers it.
///
/// Called synchronously once per match. An `Err` is logged by the matcher
/// and never retried.
pub trait Notifier {
    fn notify(&self, zone: &str, kind: NotificationKind) -> Result<(), DispatchError>;
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, zone: &str, kind: NotificationKind) -> Result<(), DispatchError> {
        (**self).notify(zone, kind)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, zone: &str, kind: NotificationKind) -> Result<(), DispatchError> {
        (**self).notify(zone, kind)
    }
}

/// JSON body accepted by the notification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotifyRequest<'a> {
    pub zone: &'a str,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub token: &'a str,
}

/// Logs each match instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunNotifier;

impl Notifier for DryRunNotifier {
    fn notify(&self, zone: &str, kind: NotificationKind) -> Result<(), DispatchError> {
        tracing::info!(zone, kind = %kind, "dry run: notification not sent");
        Ok(())
    }
}

#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub endpoint: String,
    pub token: String,
    pub timeout: Duration,
}

#[cfg(feature = "http")]
impl NotifierConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

/// POSTs a [`NotifyRequest`] per match. The response body is ignored; only
/// transport errors and non-2xx statuses count as failures.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    client: reqwest::blocking::Client,
    endpoint: reqwest::Url,
    token: String,
}

#[cfg(feature = "http")]
impl HttpNotifier {
    pub fn new(config: NotifierConfig) -> Result<Self, ConfigError> {
        let endpoint = parse_endpoint(&config.endpoint)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            token: config.token,
        })
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }
}

#[cfg(feature = "http")]
fn parse_endpoint(endpoint: &str) -> Result<reqwest::Url, ConfigError> {
    let invalid = |message: String| ConfigError::Endpoint {
        endpoint: endpoint.to_string(),
        message,
    };
    let url = reqwest::Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

#[cfg(feature = "http")]
impl Notifier for HttpNotifier {
    fn notify(&self, zone: &str, kind: NotificationKind) -> Result<(), DispatchError> {
        let body = NotifyRequest {
            zone,
            kind,
            token: &self.token,
        };
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .map_err(|e| DispatchError::Transport(Box::new(e)))?;
        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Status {
                status: status.as_u16(),
            });
        }
        tracing::debug!(zone, kind = %kind, status = status.as_u16(), "notification delivered");
        Ok(())
    }
}
