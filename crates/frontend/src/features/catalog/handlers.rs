use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use roster::catalog::{self, CatalogQuery};

use crate::{AppState, error::Result, views};

/// Catalog page: fetch the roster, then filter and sort it for display.
pub async fn catalog_page(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Html<String>> {
    let fighters = state.api.fetch_fighters().await?;

    let weight_classes = catalog::weight_classes(&fighters);
    let shown = query.apply(&fighters);
    tracing::debug!(
        "Showing {} of {} fighters (weight class '{}', sort {})",
        shown.len(),
        fighters.len(),
        query.weight_class,
        query.sort_by.as_param()
    );

    Ok(Html(views::list::render(&shown, &weight_classes, &query)))
}

pub async fn fighter_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let fighter = state.api.fetch_fighter(&id).await?;

    Ok(Html(views::detail::render(&fighter)))
}
