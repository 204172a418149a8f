use log::debug;

use super::RocketClient;
use super::endpoints::{CHECK_HEALTH, GET_INFO, VERSION};
use crate::http::ClientError;
use crate::models::{HealthStatus, Info};

impl RocketClient {
    /// Current API version. Needs no API key and doubles as a reachability
    /// check.
    ///
    /// Returns `"None"` if the remote omitted the `version` field.
    pub async fn version(&self) -> Result<String, ClientError> {
        let envelope = self.get(&VERSION).await?;
        Ok(envelope.version.unwrap_or_else(|| "None".to_string()))
    }

    /// Health of the remote, read from the top-level `status` field.
    pub async fn check_health(&self) -> Result<HealthStatus, ClientError> {
        let envelope = self.get(&CHECK_HEALTH).await?;
        let status: HealthStatus = envelope
            .field("status")
            .and_then(|s| serde_json::from_value(s.clone()).ok())
            .unwrap_or_default();
        debug!(status:? = status; "Health check");
        Ok(status)
    }

    /// Name, fee and balances of the app owning the API key.
    pub async fn get_info(&self) -> Result<Info, ClientError> {
        self.get(&GET_INFO).await?.into_data()
    }
}
