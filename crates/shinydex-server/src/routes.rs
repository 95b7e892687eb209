//! JSON endpoints, one per data source.
//!
//! Each handler proxies the matching loader: the typed collection on
//! success, a fixed error payload with a 500 status on any load failure.
//! Sources load independently, so one broken sheet tab does not affect the
//! other endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use shinydex_core::SheetClient;

pub fn router(client: SheetClient) -> Router {
    Router::new()
        .route("/api/members", get(members))
        .route("/api/donators", get(donators))
        .route("/api/showcase", get(showcase))
        .route("/api/shinyweekly", get(shinyweekly))
        .route("/api/pokemon", get(pokemon))
        .with_state(client)
}

/// Serialize a load result, mapping failures to the fixed error payload.
fn respond<T: Serialize>(result: anyhow::Result<T>, source: &str) -> Response {
    match result {
        Ok(data) => Json(data).into_response(),
        Err(err) => {
            error!(source = source, error = %err, "Failed to load data source");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Failed to load {}", source) })),
            )
                .into_response()
        }
    }
}

async fn members(State(client): State<SheetClient>) -> Response {
    respond(client.load_members().await, "members")
}

async fn donators(State(client): State<SheetClient>) -> Response {
    respond(client.load_donators().await, "donators")
}

async fn showcase(State(client): State<SheetClient>) -> Response {
    respond(client.load_showcase().await, "showcase")
}

async fn shinyweekly(State(client): State<SheetClient>) -> Response {
    respond(client.load_weekly().await, "shiny weekly")
}

async fn pokemon(State(client): State<SheetClient>) -> Response {
    respond(client.load_pokemon().await, "pokemon data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let response = respond::<Vec<String>>(Err(anyhow::anyhow!("boom")), "members");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_success_response() {
        let response = respond(Ok(vec!["a".to_string()]), "members");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
