use std::sync::Arc;

use crate::{
    error::{ApiResult, ValidatedJson, ValidatedPath},
    main_lib::AppState,
    models::{Asset, AssetInput, DeleteAssetResponse},
};
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

#[utoipa::path(get, path = "/api/assets", responses((status = 200, body = [Asset])))]
pub async fn list_assets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Asset>>> {
    let assets = state.asset_service.get_assets()?;
    Ok(Json(assets.into_iter().map(Asset::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/assets/{id}",
    params(("id" = i32, Path, description = "Asset id")),
    responses(
        (status = 200, body = Asset),
        (status = 404, description = "Asset not found"),
        (status = 422, description = "Invalid asset id")
    )
)]
pub async fn get_asset(
    ValidatedPath(id): ValidatedPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Asset>> {
    let asset = state.asset_service.get_asset(id)?;
    Ok(Json(asset.into()))
}

#[utoipa::path(
    post,
    path = "/api/assets",
    request_body = AssetInput,
    responses((status = 200, body = Asset), (status = 422, description = "Invalid asset"))
)]
pub async fn create_asset(
    State(state): State<Arc<AppState>>,
    ValidatedJson(input): ValidatedJson<AssetInput>,
) -> ApiResult<Json<Asset>> {
    let asset = state.asset_service.create_asset(input.into()).await?;
    Ok(Json(asset.into()))
}

#[utoipa::path(
    put,
    path = "/api/assets/{id}",
    params(("id" = i32, Path, description = "Asset id")),
    request_body = AssetInput,
    responses(
        (status = 200, body = Asset),
        (status = 404, description = "Asset not found"),
        (status = 422, description = "Invalid asset")
    )
)]
pub async fn update_asset(
    ValidatedPath(id): ValidatedPath<i32>,
    State(state): State<Arc<AppState>>,
    ValidatedJson(input): ValidatedJson<AssetInput>,
) -> ApiResult<Json<Asset>> {
    let asset = state.asset_service.update_asset(id, input.into()).await?;
    Ok(Json(asset.into()))
}

#[utoipa::path(
    delete,
    path = "/api/assets/{id}",
    params(("id" = i32, Path, description = "Asset id")),
    responses(
        (status = 200, body = DeleteAssetResponse),
        (status = 404, description = "Asset not found"),
        (status = 422, description = "Invalid asset id")
    )
)]
pub async fn delete_asset(
    ValidatedPath(id): ValidatedPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DeleteAssetResponse>> {
    state.asset_service.delete_asset(id).await?;
    Ok(Json(DeleteAssetResponse {
        message: "Asset deleted successfully".to_string(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(list_assets).post(create_asset))
        .route(
            "/assets/{id}",
            get(get_asset).put(update_asset).delete(delete_asset),
        )
}
