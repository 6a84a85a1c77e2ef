use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::db::models::{
    Billing, Channel, Customer, Employee, Episode, Installation, Package, PackageSummary, Show,
    Subscription,
};

/// A failed gateway call. The gateway reports every engine failure as a 500
/// whose body carries the engine's raw message; that message is surfaced
/// verbatim here. Nothing is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("gateway error ({status}): {message}")]
    Gateway { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelCountResponse {
    pub count: Option<i64>,
}

/// `installed` arrives as whatever the engine's function returned
/// (boolean or 0/1), so it stays untyped here.
#[derive(Debug, Deserialize)]
pub struct InstalledResponse {
    pub installed: Option<Value>,
}

/// Thin reqwest wrapper over the gateway. One method per endpoint, a
/// mandatory timeout, no retries, no request cancellation.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(ApiClient { http, base_url })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            // Prefer the gateway's {error} body; fall back to raw text.
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            return Err(ApiError::Gateway {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POSTs a JSON body and returns the gateway's response as-is.
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .http
            .delete(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Self::decode(response).await
    }

    // --- Collection fetches ---

    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.get_json("/api/customers").await
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/api/employees").await
    }

    pub async fn list_packages(&self) -> Result<Vec<Package>, ApiError> {
        self.get_json("/api/packages").await
    }

    pub async fn list_subscriptions(&self) -> Result<Vec<Subscription>, ApiError> {
        self.get_json("/api/subscriptions").await
    }

    pub async fn list_channels(&self) -> Result<Vec<Channel>, ApiError> {
        self.get_json("/api/channels").await
    }

    pub async fn list_shows(&self) -> Result<Vec<Show>, ApiError> {
        self.get_json("/api/shows").await
    }

    pub async fn list_episodes(&self) -> Result<Vec<Episode>, ApiError> {
        self.get_json("/api/episodes").await
    }

    pub async fn list_billing(&self) -> Result<Vec<Billing>, ApiError> {
        self.get_json("/api/billing").await
    }

    pub async fn list_installations(&self) -> Result<Vec<Installation>, ApiError> {
        self.get_json("/api/installations").await
    }

    pub async fn package_summary(&self) -> Result<Vec<PackageSummary>, ApiError> {
        self.get_json("/api/views/package-summary").await
    }

    // --- Deletes ---

    pub async fn delete_customer(&self, id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("/api/customers/{id}")).await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("/api/employees/{id}")).await
    }

    pub async fn delete_channel(&self, id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("/api/channels/{id}")).await
    }

    // --- Function endpoints ---

    pub async fn subscription_status(&self, id: &str) -> Result<StatusResponse, ApiError> {
        self.get_json(&format!("/api/functions/subscription-status/{id}"))
            .await
    }

    pub async fn package_channel_count(&self, id: &str) -> Result<ChannelCountResponse, ApiError> {
        self.get_json(&format!("/api/functions/package-channel-count/{id}"))
            .await
    }

    pub async fn has_active_installation(&self, id: &str) -> Result<InstalledResponse, ApiError> {
        self.get_json(&format!("/api/functions/has-active-installation/{id}"))
            .await
    }
}
