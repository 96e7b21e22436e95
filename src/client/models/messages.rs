use crate::client::models::app_state::FetchOutcome;

#[derive(Debug, Clone)]
pub enum Message {
    // Retry button / initial load
    Refresh,
    AmphibiansLoaded(FetchOutcome),
    // Card at this position in the current list was pressed
    ToggleCard(usize),
    // `bytes` is None when the photo could not be fetched
    PhotoLoaded { url: String, bytes: Option<Vec<u8>> },
}
