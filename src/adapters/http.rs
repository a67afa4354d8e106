use crate::domain::model::Doctor;
use crate::domain::ports::{ConfigProvider, DoctorSource};
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Reads the doctor list with a single `GET` to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpDoctorSource {
    endpoint: String,
    client: Client,
}

impl HttpDoctorSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.endpoint(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DoctorSource for HttpDoctorSource {
    async fn fetch(&self) -> Result<Vec<Doctor>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(DirectoryError::HttpStatus {
                status: status.as_u16(),
            });
        }

        // 先取完整內容再解析，解析錯誤才能歸類為序列化錯誤
        let body = response.bytes().await?;
        let doctors: Vec<Doctor> = serde_json::from_slice(&body)?;
        Ok(doctors)
    }
}
