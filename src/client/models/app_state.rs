use crate::client::models::ui_state::UiState;
use crate::client::services::repository::AmphibiansRepository;
use crate::common::error::FetchFailed;
use crate::common::models::Amphibian;
use log::{debug, info};
use std::future::Future;
use std::sync::Arc;

/// Result of one refresh, with the failure cause already dropped.
pub type FetchOutcome = Result<Vec<Amphibian>, FetchFailed>;

/// Owner of the home screen's `UiState`.
///
/// The state is only written through `refresh` and `apply`; everything else reads it
/// through `ui_state`.
pub struct AmphibiansViewModel {
    repository: Arc<dyn AmphibiansRepository>,
    ui_state: UiState,
    refreshes_started: u64,
    outcomes_applied: u64,
}

impl AmphibiansViewModel {
    pub fn new(repository: Arc<dyn AmphibiansRepository>) -> Self {
        Self {
            repository,
            ui_state: UiState::Loading,
            refreshes_started: 0,
            outcomes_applied: 0,
        }
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    /// Switches to `Loading` right away and returns the fetch to run.
    ///
    /// The returned future calls the repository exactly once. Earlier fetches are not
    /// cancelled: whichever outcome is applied last wins.
    pub fn refresh(&mut self) -> impl Future<Output = FetchOutcome> + Send + 'static {
        self.ui_state = UiState::Loading;
        self.refreshes_started += 1;
        info!("Refreshing amphibians (#{})", self.refreshes_started);
        let repository = Arc::clone(&self.repository);
        async move { repository.get_amphibians().await.map_err(FetchFailed::from) }
    }

    pub fn apply(&mut self, outcome: FetchOutcome) {
        self.outcomes_applied += 1;
        if self.outcomes_applied < self.refreshes_started {
            // Overlapping refreshes race; a later outcome will overwrite this one.
            debug!(
                "Applying outcome {} while {} refresh(es) are still pending",
                self.outcomes_applied,
                self.refreshes_started - self.outcomes_applied
            );
        }
        self.ui_state = match outcome {
            Ok(amphibians) => {
                debug!("UiState -> Success ({} amphibians)", amphibians.len());
                UiState::Success(amphibians)
            }
            Err(FetchFailed) => {
                debug!("UiState -> Error");
                UiState::Error
            }
        };
    }
}
