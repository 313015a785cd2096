use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Extension, Path};
use axum::http::Uri;
use uuid::Uuid;

use super::dto::{CanvasDto, DeletedDto, GenerateCanvasReq, SettingsDto, SettingsReq};
use super::error::at;
use super::problem::Problem;
use crate::domain::service::{CanvasService, SettingsService};

pub type ApiResult<T> = Result<T, Problem>;

type JsonBody<T> = Result<Json<T>, JsonRejection>;
type PathId = Result<Path<Uuid>, PathRejection>;

pub async fn list_settings(
    Extension(svc): Extension<Arc<SettingsService>>,
    uri: Uri,
) -> ApiResult<Json<Vec<SettingsDto>>> {
    let all = svc.list_settings().await.map_err(at(&uri))?;
    Ok(Json(all.into_iter().map(SettingsDto::from).collect()))
}

pub async fn get_default_settings(
    Extension(svc): Extension<Arc<SettingsService>>,
    uri: Uri,
) -> ApiResult<Json<SettingsDto>> {
    let settings = svc.get_default_settings().await.map_err(at(&uri))?;
    Ok(Json(settings.into()))
}

pub async fn create_settings(
    Extension(svc): Extension<Arc<SettingsService>>,
    uri: Uri,
    body: JsonBody<SettingsReq>,
) -> ApiResult<Json<SettingsDto>> {
    let Json(req) = body.map_err(at(&uri))?;
    let settings = svc.create_settings(req.into()).await.map_err(at(&uri))?;
    Ok(Json(settings.into()))
}

pub async fn update_settings(
    Extension(svc): Extension<Arc<SettingsService>>,
    uri: Uri,
    path: PathId,
    body: JsonBody<SettingsReq>,
) -> ApiResult<Json<SettingsDto>> {
    let Path(id) = path.map_err(at(&uri))?;
    let Json(req) = body.map_err(at(&uri))?;
    let settings = svc
        .update_settings(id, req.into())
        .await
        .map_err(at(&uri))?;
    Ok(Json(settings.into()))
}

pub async fn set_default_settings(
    Extension(svc): Extension<Arc<SettingsService>>,
    uri: Uri,
    path: PathId,
) -> ApiResult<Json<SettingsDto>> {
    let Path(id) = path.map_err(at(&uri))?;
    let settings = svc.set_default(id).await.map_err(at(&uri))?;
    Ok(Json(settings.into()))
}

pub async fn delete_settings(
    Extension(svc): Extension<Arc<SettingsService>>,
    uri: Uri,
    path: PathId,
) -> ApiResult<Json<DeletedDto>> {
    let Path(id) = path.map_err(at(&uri))?;
    svc.delete_settings(id).await.map_err(at(&uri))?;
    Ok(Json(DeletedDto { id }))
}

pub async fn generate_canvas(
    Extension(svc): Extension<Arc<CanvasService>>,
    uri: Uri,
    body: JsonBody<GenerateCanvasReq>,
) -> ApiResult<Json<CanvasDto>> {
    let Json(req) = body.map_err(at(&uri))?;
    let canvas = svc
        .generate(req.text.as_deref(), req.settings_id)
        .await
        .map_err(at(&uri))?;
    Ok(Json(canvas.into()))
}

pub async fn list_canvases(
    Extension(svc): Extension<Arc<CanvasService>>,
    uri: Uri,
) -> ApiResult<Json<Vec<CanvasDto>>> {
    let all = svc.list_canvases().await.map_err(at(&uri))?;
    Ok(Json(all.into_iter().map(CanvasDto::from).collect()))
}

pub async fn accept_canvas(
    Extension(svc): Extension<Arc<CanvasService>>,
    uri: Uri,
    path: PathId,
) -> ApiResult<Json<CanvasDto>> {
    let Path(id) = path.map_err(at(&uri))?;
    let canvas = svc.accept_canvas(id).await.map_err(at(&uri))?;
    Ok(Json(canvas.into()))
}

pub async fn complete_canvas(
    Extension(svc): Extension<Arc<CanvasService>>,
    uri: Uri,
    path: PathId,
) -> ApiResult<Json<CanvasDto>> {
    let Path(id) = path.map_err(at(&uri))?;
    let canvas = svc.complete_canvas(id).await.map_err(at(&uri))?;
    Ok(Json(canvas.into()))
}
