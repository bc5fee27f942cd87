//! HTTP surface for ticket generation.

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use housie_tickets::Ticket;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

/// Query parameters for the tickets endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketsQuery {
    /// Requested strip count. Kept as a raw string so unparseable
    /// values fall back to 1 instead of failing extraction.
    pub cards: Option<String>,
}

/// Response envelope for generated cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardsResponse {
    /// Generated tickets, six per strip.
    pub cards: Vec<Ticket>,
}

/// Builds the service router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/api/tickets", get(tickets))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Runs the HTTP server until shutdown.
pub async fn serve(host: String, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Server ready at http://{}:{}/", host, port);
    axum::serve(listener, router()).await?;
    Ok(())
}

/// Service banner.
async fn banner() -> &'static str {
    "Housie90 Ticket API 🚀"
}

/// Generates the requested strips of six tickets each.
///
/// Missing or unparseable `cards` defaults to 1; out-of-range values
/// clamp to 1-60. The endpoint never rejects a count.
#[instrument(skip_all)]
async fn tickets(Query(query): Query<TicketsQuery>) -> Json<CardsResponse> {
    let count = query
        .cards
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(1);
    let cards = housie_tickets::generate_cards(count);
    info!(requested = count, tickets = cards.len(), "serving cards");
    Json(CardsResponse { cards })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use housie_tickets::{InvariantSet, TicketInvariants};
    use tower::ServiceExt;

    async fn get_cards(uri: &str) -> CardsResponse {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_tickets_default_to_one_strip() {
        assert_eq!(get_cards("/api/tickets").await.cards.len(), 6);
    }

    #[tokio::test]
    async fn test_tickets_requested_count() {
        let response = get_cards("/api/tickets?cards=2").await;
        assert_eq!(response.cards.len(), 12);
        for ticket in &response.cards {
            assert!(TicketInvariants::check_all(ticket).is_ok());
        }
    }

    #[tokio::test]
    async fn test_tickets_unparseable_count_defaults() {
        assert_eq!(get_cards("/api/tickets?cards=lots").await.cards.len(), 6);
    }

    #[tokio::test]
    async fn test_tickets_negative_count_defaults() {
        assert_eq!(get_cards("/api/tickets?cards=-3").await.cards.len(), 6);
    }

    #[tokio::test]
    async fn test_tickets_overlarge_count_clamps() {
        assert_eq!(get_cards("/api/tickets?cards=1000").await.cards.len(), 360);
    }

    #[tokio::test]
    async fn test_banner_responds() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
