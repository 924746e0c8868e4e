// src/units/lister.rs

use super::models::{AppInfo, Unit};
use crate::config::{Credentials, ListerConfig};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("invalid unit list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches the units of an application from the control plane.
pub struct UnitLister {
    credentials: Credentials,
    client: Client,
}

impl UnitLister {
    pub fn new(credentials: Credentials, config: ListerConfig) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            credentials,
            client,
        })
    }

    /// Units of `app` in control-plane order.
    ///
    /// Any listing failure is logged and yields an empty list; it is not a
    /// health-check failure.
    pub async fn list_units(&self, app: &str) -> Vec<Unit> {
        match self.fetch_units(app).await {
            Ok(units) => {
                info!("Found {} units for app {}", units.len(), app);
                units
            }
            Err(e) => {
                error!("Failed to get unit list: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn fetch_units(&self, app: &str) -> Result<Vec<Unit>, ListError> {
        let url = self.credentials.app_url(app);
        debug!("Listing units from {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.credentials.token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ListError::Status(status));
        }

        let body = response.text().await?;
        let info: AppInfo = serde_json::from_str(&body)?;
        Ok(info.units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_control_plane_yields_no_units() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let credentials = Credentials {
            target: "http://127.0.0.1:9".to_string(),
            token: "t".to_string(),
        };
        let lister = UnitLister::new(credentials, ListerConfig::default()).unwrap();

        assert!(matches!(
            lister.fetch_units("myapp").await,
            Err(ListError::Transport(_))
        ));
        assert!(lister.list_units("myapp").await.is_empty());
    }
}
