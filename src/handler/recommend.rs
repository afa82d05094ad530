use axum::Json;
use axum::extract::State;
use tracing::info;

use crate::app::AppState;
use crate::domain::{RawPreferences, RecommendationEnvelope};
use crate::error::RecommendError;

/// Handler for POST /api/recommend
///
/// Validation failures become 400 responses; generator failures become 502,
/// 503 or 504 depending on their kind.
pub async fn recommend_handler(
    State(state): State<AppState>,
    Json(raw): Json<RawPreferences>,
) -> Result<Json<RecommendationEnvelope>, RecommendError> {
    info!(
        genre_count = raw.genres.len(),
        "Received recommendation request"
    );
    let envelope = state.recommender().recommend(&raw).await?;
    Ok(Json(envelope))
}
