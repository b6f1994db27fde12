//! Axum route handler for the Mood Annotator.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::avatar::MoodAnnotator;

#[derive(Debug, Deserialize)]
pub struct AvatarQuery {
    pub mood: Option<String>,
    /// Hour of day (0–23) to annotate instead of the local clock.
    pub hour: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct AvatarResponse {
    #[serde(flatten)]
    pub state: MoodAnnotator,
    pub expression: String,
}

/// GET /api/v1/avatar
pub async fn handle_avatar(Query(query): Query<AvatarQuery>) -> Json<AvatarResponse> {
    let mut avatar = MoodAnnotator::new();
    avatar.set_mood(query.mood.as_deref());
    let expression = match query.hour {
        Some(hour) => avatar.update_at(hour % 24),
        None => avatar.update(),
    };
    Json(AvatarResponse {
        state: avatar,
        expression,
    })
}
