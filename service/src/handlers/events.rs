//! Change event handlers
//!
//! Inbound adapter for user document updates. The event sender posts the user id
//! together with the document before and after the update; any non-2xx response
//! asks it to redeliver.

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::domain::entities::UserChange;
use crate::domain::ports::BarberRepository;
use crate::error::AppError;
use crate::AppState;

/// Header carrying the `sha256=<hex>` HMAC of the request body
pub const SIGNATURE_HEADER: &str = "X-Event-Signature";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub user_id: String,
    pub action: &'static str,
}

/// Verify HMAC-SHA256 signature
fn verify_signature(payload: &[u8], signature: Option<&str>, secret: Option<&str>) -> bool {
    let Some(secret) = secret else {
        // No secret configured, skip verification (development mode)
        tracing::warn!("Event secret not configured, skipping signature verification");
        return true;
    };

    let Some(sig_header) = signature else {
        tracing::warn!("No signature provided in event request");
        return false;
    };

    let expected_hex = sig_header.strip_prefix("sha256=").unwrap_or(sig_header);

    type HmacSha256 = Hmac<Sha256>;
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => {
            tracing::error!("Invalid event secret key");
            return false;
        }
    };

    mac.update(payload);

    let expected_bytes = match hex::decode(expected_hex) {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::warn!("Invalid signature format");
            return false;
        }
    };

    mac.verify_slice(&expected_bytes).is_ok()
}

/// POST /events/user-updated
///
/// Reconcile the barber profile for one user update.
pub async fn user_updated<BR>(
    State(state): State<AppState<BR>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<EventResponse>, AppError>
where
    BR: BarberRepository + 'static,
{
    let signature = headers.get(SIGNATURE_HEADER).and_then(|h| h.to_str().ok());

    if !verify_signature(&body, signature, state.event_secret.as_deref()) {
        tracing::warn!("Event signature verification failed");
        return Err(AppError::Unauthorized);
    }

    let change: UserChange = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Failed to parse change event");
        AppError::BadRequest(format!("Invalid JSON: {}", e))
    })?;

    if change.id.as_str().is_empty() {
        return Err(AppError::BadRequest("User id must not be empty".to_string()));
    }

    tracing::debug!(
        user_id = %change.id,
        before_role = ?change.before.role(),
        after_role = ?change.after.role(),
        "Received user change"
    );

    let action = state.reconciler.reconcile(&change).await?;

    Ok(Json(EventResponse {
        user_id: change.id.0,
        action: action.label(),
    }))
}
