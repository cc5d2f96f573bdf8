use std::{net::Ipv6Addr, time::Duration};

use bon::bon;
use http::{
    Method,
    header::{ACCEPT, USER_AGENT},
};
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use crate::{
    models::{Device, SmartBridge},
    prelude::*,
    session::{Ownership, Session},
    variant::Variant,
};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const ACCEPTED_CONTENT_TYPES: &str = "application/json, text/plain, */*";
const USER_AGENT_STRING: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Local API client of a single device.
///
/// The session is either supplied by the caller and shared, or opened on the first request
/// and owned by the client. Only an owned session gets released by [`Client::close`], which
/// also happens on drop.
pub struct Client {
    host: String,
    request_timeout: Duration,
    variant: Variant,
    session: Session,
}

#[bon]
impl Client {
    /// # Parameters
    ///
    /// - `host`: hostname or IP address, optionally followed by a port.
    /// - `request_timeout`: applied to each request separately.
    /// - `session`: shared HTTP client, the caller remains responsible for it.
    /// - `variant`: device generation, affects which `/info` keys are required.
    #[builder]
    pub fn new(
        #[builder(into)] host: String,
        #[builder(default = DEFAULT_REQUEST_TIMEOUT)] request_timeout: Duration,
        session: Option<reqwest::Client>,
        #[builder(default)] variant: Variant,
    ) -> Self {
        let session = session.map_or_else(Session::owned, Session::shared);
        Self { host, request_timeout, variant, session }
    }
}

impl Client {
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub const fn ownership(&self) -> Ownership {
        self.session.ownership()
    }

    #[must_use]
    pub fn is_session_open(&self) -> bool {
        self.session.is_open()
    }

    /// Fetch the device identity from `/info`.
    #[instrument(skip_all, fields(host = %self.host, variant = %self.variant))]
    pub async fn device(&self) -> Result<Device> {
        let value: Value = serde_json::from_str(&self.get("info").await?)?;
        let device = Device::from_value(&value, self.variant)?;
        info!(id = %device.id, model = %device.model, firmware = %device.firmware, "fetched");
        Ok(device)
    }

    /// Fetch the current reading from `/meter/now`.
    #[instrument(skip_all, fields(host = %self.host))]
    pub async fn smart_bridge(&self) -> Result<SmartBridge> {
        let value: Value = serde_json::from_str(&self.get("meter/now").await?)?;
        let smart_bridge = SmartBridge::from_value(&value)?;
        info!(
            power_flow = %smart_bridge.power_flow,
            consumption = %smart_bridge.energy_consumption_total,
            production = %smart_bridge.energy_production_total,
            "fetched",
        );
        Ok(smart_bridge)
    }

    pub async fn get(&self, path: &str) -> Result<String> {
        self.request::<()>(path, Method::GET, None).await
    }

    /// Send a single request and return the response body as is.
    ///
    /// `path` is relative to the device root, for example `meter/now`.
    /// Decoding the body is up to the caller.
    #[instrument(skip_all, fields(host = %self.host, method = %method, path = path))]
    pub async fn request<B>(&self, path: &str, method: Method, body: Option<&B>) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let session = self.session.get().await.map_err(|error| self.connection_error(error))?;

        let mut request = session
            .request(method, url)
            .header(ACCEPT, ACCEPTED_CONTENT_TYPES)
            .header(USER_AGENT, USER_AGENT_STRING)
            .timeout(self.request_timeout);
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!("sending…");
        let response = request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|error| self.connection_error(error))?;
        let text = response.text().await.map_err(|error| self.connection_error(error))?;
        debug!(n_bytes = text.len(), "received");
        Ok(text)
    }

    /// Release the session, if it is owned and open.
    ///
    /// Safe to call any number of times. Returns whether a session has been released.
    pub fn close(&mut self) -> bool {
        let is_released = self.session.close();
        if is_released {
            debug!(host = %self.host, "released the session");
        }
        is_released
    }

    /// Run the body against the client, and close the client afterwards, whatever the outcome.
    pub async fn scoped<T>(&mut self, body: impl AsyncFnOnce(&Self) -> T) -> T {
        let output = body(&*self).await;
        self.close();
        output
    }

    /// Resolve the path against the device root.
    ///
    /// Leading slashes are dropped, otherwise `//name/` would point to another host.
    fn url(&self, path: &str) -> Result<Url> {
        let root = if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("http://[{}]/", self.host)
        } else {
            format!("http://{}/", self.host)
        };
        Ok(Url::parse(&root)?.join(path.trim_start_matches('/'))?)
    }

    fn connection_error(&self, error: reqwest::Error) -> Error {
        let error = ConnectionError::new(&self.host, error);
        warn!(%error, "request failed");
        error.into()
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        self.close();
    }
}
