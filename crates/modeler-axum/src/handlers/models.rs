//! Model handlers - read access over the model store.

use axum::Json;
use axum::extract::{Path, Query, RawQuery, State};
use modeler_core::{FilterText, ModelType, Sort, SortField};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::dto::{CountDto, ModelRepresentation, ModelSummaryDto, ResultListDataRepresentation};
use crate::error::HttpError;
use crate::handlers::forms::extract_filter;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReferenceParams {
    #[serde(rename = "referenceId")]
    pub reference_id: i64,
}

/// `modelType` accepts a name (`form`, `decision-table`) or a numeric code.
#[derive(Debug, Default, Deserialize)]
pub struct ModelTypeParams {
    #[serde(rename = "modelType")]
    pub model_type: Option<String>,
}

impl ModelTypeParams {
    fn parse(&self) -> Result<Option<ModelType>, HttpError> {
        self.model_type
            .as_deref()
            .map(str::parse::<ModelType>)
            .transpose()
            .map_err(|e| HttpError::BadRequest(e.to_string()))
    }
}

type ModelList = Json<ResultListDataRepresentation<ModelRepresentation>>;

/// All models linked to a reference.
pub async fn list_linked(
    State(state): State<AppState>,
    Query(params): Query<ReferenceParams>,
) -> Result<ModelList, HttpError> {
    let models = state.core.models().linked_to(params.reference_id).await?;
    Ok(Json(models.into_iter().map(ModelRepresentation::from).collect()))
}

/// Get a single model by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ModelRepresentation>, HttpError> {
    let model = state.core.models().find_by_id(id).await?;
    Ok(Json(model.into()))
}

pub async fn children(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ModelTypeParams>,
) -> Result<ModelList, HttpError> {
    let model_type = params.parse()?;
    let models = state.core.models().children(id, model_type).await?;
    Ok(Json(models.into_iter().map(ModelRepresentation::from).collect()))
}

pub async fn parents(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ResultListDataRepresentation<ModelSummaryDto>>, HttpError> {
    let parents = state.core.models().parents(id).await?;
    Ok(Json(parents.into_iter().map(ModelSummaryDto::from).collect()))
}

/// `GET /rest/models/processes?filter=`
///
/// Standalone process models owned by the current user, by name.
pub async fn processes(
    State(state): State<AppState>,
    user: CurrentUser,
    RawQuery(raw): RawQuery,
) -> Result<ModelList, HttpError> {
    let filter_value = extract_filter(raw.as_deref());
    let filter = FilterText::from_optional(filter_value.as_deref());
    let models = state
        .core
        .models()
        .processes_of(user.id(), filter.as_ref(), Sort::asc(SortField::Name))
        .await?;
    Ok(Json(models.into_iter().map(ModelRepresentation::from).collect()))
}

/// Number of models of one type created by the current user.
pub async fn count(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<ModelTypeParams>,
) -> Result<Json<CountDto>, HttpError> {
    let model_type = params
        .parse()?
        .ok_or_else(|| HttpError::BadRequest("modelType is required".into()))?;
    let count = state.core.models().count(model_type, user.id()).await?;
    Ok(Json(CountDto { count }))
}
