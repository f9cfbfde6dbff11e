//! Pricing route handlers

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::requests::CalculateQuoteRequest;
use super::responses::{CatalogResponse, QuoteResponse};
use super::services;

/// Router for the pricing endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pricing/calculate", post(calculate))
        .route("/pricing/catalog", get(catalog))
}

/// Calculate a quote for the submitted job
async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateQuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let quote = services::calculate_quote(&request, &state.settings)?;
    Ok(Json(quote))
}

/// The fixed catalog the console builds its form from
async fn catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse::current())
}
