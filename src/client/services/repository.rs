use crate::client::services::api_service::AmphibiansApiService;
use crate::common::error::FetchError;
use crate::common::models::Amphibian;
use async_trait::async_trait;

/// Source of amphibian records for the view model.
#[async_trait]
pub trait AmphibiansRepository: Send + Sync {
    /// Retrieves the full list, in source order. No retries, no caching.
    async fn get_amphibians(&self) -> Result<Vec<Amphibian>, FetchError>;
}

/// Repository backed by the HTTP endpoint.
#[derive(Debug, Clone)]
pub struct NetworkAmphibiansRepository {
    api: AmphibiansApiService,
}

impl NetworkAmphibiansRepository {
    pub fn new(api: AmphibiansApiService) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AmphibiansRepository for NetworkAmphibiansRepository {
    async fn get_amphibians(&self) -> Result<Vec<Amphibian>, FetchError> {
        self.api.get_amphibians().await
    }
}
