//! HTTP routes and handlers.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tablesift_extract::TableExtractor;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

/// Extractor shared by all handlers.
pub type SharedExtractor = Arc<TableExtractor>;

/// Create the application router.
///
/// This is separated from `main()` to allow testing.
pub fn create_router(extractor: SharedExtractor) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/list_tables", get(list_tables))
        .route("/get_table_details", get(get_table_details))
        .route("/row_sum", get(row_sum))
        .layer(TraceLayer::new_for_http())
        .with_state(extractor)
}

/// Banner returned by the root endpoint.
#[derive(Serialize, Deserialize)]
pub struct Banner {
    pub message: String,
}

/// Health check response.
#[derive(Serialize, Deserialize)]
pub struct Health {
    /// Server status ("ok" when healthy).
    pub status: String,
    /// Server version from Cargo.toml.
    pub version: String,
}

#[derive(Serialize, Deserialize)]
pub struct TableList {
    pub tables: Vec<String>,
}

#[derive(Deserialize)]
pub struct TableQuery {
    pub table_name: String,
}

#[derive(Serialize, Deserialize)]
pub struct TableDetails {
    pub table_name: String,
    pub row_names: Vec<String>,
}

#[derive(Deserialize)]
pub struct RowQuery {
    pub table_name: String,
    pub row_name: String,
}

#[derive(Serialize, Deserialize)]
pub struct RowSum {
    pub table_name: String,
    pub row_name: String,
    pub sum: f64,
}

async fn root() -> Json<Banner> {
    Json(Banner {
        message: "tablesift is running. Try /list_tables.".to_string(),
    })
}

/// Health check endpoint handler.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn list_tables(State(extractor): State<SharedExtractor>) -> Json<TableList> {
    Json(TableList {
        tables: extractor.table_names(),
    })
}

async fn get_table_details(
    State(extractor): State<SharedExtractor>,
    Query(query): Query<TableQuery>,
) -> Result<Json<TableDetails>, ApiError> {
    let row_names = extractor.row_names(&query.table_name)?;
    Ok(Json(TableDetails {
        table_name: query.table_name,
        row_names,
    }))
}

async fn row_sum(
    State(extractor): State<SharedExtractor>,
    Query(query): Query<RowQuery>,
) -> Result<Json<RowSum>, ApiError> {
    let sum = extractor.row_sum(&query.table_name, &query.row_name)?;
    Ok(Json(RowSum {
        table_name: query.table_name,
        row_name: query.row_name,
        sum,
    }))
}
