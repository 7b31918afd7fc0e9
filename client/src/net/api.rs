//! REST gateway for the editor's explicit load/save and form/IO glue.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to a `Result`; nothing here panics. Callers route
//! failures into the notice queue — a failed load falls back to an empty
//! document, a failed save leaves the document dirty for manual retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Failure taxonomy for the persistence gateway.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The document does not exist yet.
    #[error("not found")]
    NotFound,
    /// The write was rejected because of a concurrent change.
    #[error("conflict")]
    Conflict,
    /// Any other non-success HTTP status.
    #[error("request failed with status {0}")]
    Http(u16),
    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),
    /// Called outside the browser (SSR stub).
    #[error("not available on the server")]
    Unavailable,
}

#[cfg(feature = "hydrate")]
fn status_error(status: u16) -> ApiError {
    match status {
        404 => ApiError::NotFound,
        409 => ApiError::Conflict,
        other => ApiError::Http(other),
    }
}

// =============================================================================
// URL HELPERS
// =============================================================================

/// Path of the editable document for a project.
#[must_use]
pub fn site_file_url(project_id: &str) -> String {
    format!("/api/sites/{project_id}/index.html")
}

/// Published site address, opened by the "view live" action and embedded
/// by the preview iframe. The epoch query defeats iframe caching so a
/// reload always fetches the persisted document.
#[must_use]
pub fn preview_url(project_id: &str, reload_epoch: u64) -> String {
    format!("/site/{project_id}/?v={reload_epoch}")
}

/// Zip-export endpoint for the whole generated site.
#[must_use]
pub fn export_url(project_id: &str) -> String {
    format!("/api/sites/{project_id}/export")
}

// =============================================================================
// PERSISTENCE GATEWAY
// =============================================================================

/// Read the document for the initial load.
///
/// # Errors
///
/// [`ApiError::NotFound`] when the site has no document yet, otherwise the
/// usual HTTP/transport taxonomy.
pub async fn read_site_file(project_id: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&site_file_url(project_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        resp.text().await.map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        Err(ApiError::Unavailable)
    }
}

/// Persist the document. Explicit only: never called from edit paths,
/// debounce, or timers.
///
/// # Errors
///
/// [`ApiError::Conflict`] when the store rejects the write, otherwise the
/// usual HTTP/transport taxonomy.
pub async fn write_site_file(project_id: &str, content: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&site_file_url(project_id))
            .json(&serde_json::json!({ "content": content }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, content);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// COLLABORATOR GLUE
// =============================================================================

/// Fetch the attachment descriptors for the tab badge and chat pass-through.
///
/// # Errors
///
/// HTTP/transport taxonomy; callers treat failure as an empty list.
pub async fn fetch_assets(project_id: &str) -> Result<Vec<serde_json::Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/sites/{project_id}/assets");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        resp.json::<Vec<serde_json::Value>>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        Err(ApiError::Unavailable)
    }
}

/// Hand a prompt to the AI chat collaborator. The rewritten document comes
/// back over the channel as a `code:update`/`chat:update` envelope.
///
/// # Errors
///
/// HTTP/transport taxonomy; a failure here means the request never started,
/// so the caller must release the chat busy slot.
pub async fn send_chat_prompt(project_id: &str, prompt: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/sites/{project_id}/chat");
        let resp = gloo_net::http::Request::post(&url)
            .json(&serde_json::json!({ "prompt": prompt }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, prompt);
        Err(ApiError::Unavailable)
    }
}

/// Start connecting a custom domain to the published site.
///
/// # Errors
///
/// HTTP/transport taxonomy.
pub async fn connect_custom_domain(project_id: &str, domain: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/domains")
            .json(&serde_json::json!({ "project_id": project_id, "domain": domain }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, domain);
        Err(ApiError::Unavailable)
    }
}

/// Create a WebSocket authentication ticket via `POST /api/auth/ws-ticket`.
///
/// # Errors
///
/// HTTP/transport taxonomy.
pub async fn create_ws_ticket() -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/ws-ticket")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        #[derive(serde::Deserialize)]
        struct TicketResponse {
            ticket: String,
        }
        let body: TicketResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(body.ticket)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
