//! Game item lookup endpoints.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use entity::enums::Addon;

use crate::{
    model::item::ItemDto,
    server::{error::AppError, middleware::lang::Lang, service::item::ItemService, state::AppState},
};

#[derive(Deserialize)]
pub struct ItemLookupQuery {
    pub addon: Option<Addon>,
}

/// GET /api/item/id/{item_id}
/// Fetch a stored item by its row id
pub async fn get_item_by_id(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db, state.item_api.as_ref())
        .get_by_id(&item_id)
        .await?;

    Ok(Json(ItemDto::from_model(item)))
}

/// GET /api/item/wow-id/{wow_id}?addon=...
/// Resolve an item by its game id, fetching from the external API on a miss
pub async fn get_item_by_wow_id(
    State(state): State<AppState>,
    Lang(lang): Lang,
    Path(wow_id): Path<i32>,
    Query(query): Query<ItemLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let addon = query.addon.unwrap_or(Addon::Retail);

    let item = ItemService::new(&state.db, state.item_api.as_ref())
        .resolve(wow_id, addon, lang)
        .await?;

    Ok(Json(ItemDto::from_model(item)))
}
