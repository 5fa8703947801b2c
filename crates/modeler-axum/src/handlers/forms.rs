//! Form picker endpoint.

use axum::Json;
use axum::extract::{Query, RawQuery, State};
use modeler_core::FilterText;
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::dto::{FormRepresentation, ResultListDataRepresentation};
use crate::error::HttpError;
use crate::state::AppState;

/// Query parameters bound by the framework. `filter` is read separately
/// from the raw query string.
#[derive(Debug, Deserialize)]
pub struct FormListParams {
    #[serde(rename = "referenceId")]
    pub reference_id: i64,
}

/// `GET /rest/form-models?referenceId=&filter=`
///
/// Forms linked to the reference plus the caller's standalone forms,
/// sorted by name.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<FormListParams>,
    RawQuery(raw): RawQuery,
) -> Result<Json<ResultListDataRepresentation<FormRepresentation>>, HttpError> {
    let filter_value = extract_filter(raw.as_deref());
    let filter = FilterText::from_optional(filter_value.as_deref());

    let forms = state
        .core
        .forms()
        .list_forms(params.reference_id, filter.as_ref(), user.id())
        .await?;

    Ok(Json(
        forms.into_iter().map(FormRepresentation::from).collect(),
    ))
}

/// Decoded value of the `filter` parameter.
///
/// The query string is decoded once as `application/x-www-form-urlencoded`.
/// The key is matched case-insensitively and the last occurrence wins.
pub fn extract_filter(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    url::form_urlencoded::parse(raw.as_bytes())
        .filter(|(key, _)| key.eq_ignore_ascii_case("filter"))
        .last()
        .map(|(_, value)| value.into_owned())
}
