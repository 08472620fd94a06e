use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::pie::use_cases::get_all::GetAllPiesUseCase;
use business::domain::pie::use_cases::get_by_id::{GetPieByIdParams, GetPieByIdUseCase};
use business::domain::pie::use_cases::get_of_the_week::GetPiesOfTheWeekUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::pie::dto::PieResponse;
use crate::api::tags::ApiTags;

pub struct PieApi {
    get_all_use_case: Arc<dyn GetAllPiesUseCase>,
    get_by_id_use_case: Arc<dyn GetPieByIdUseCase>,
    get_of_the_week_use_case: Arc<dyn GetPiesOfTheWeekUseCase>,
}

impl PieApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllPiesUseCase>,
        get_by_id_use_case: Arc<dyn GetPieByIdUseCase>,
        get_of_the_week_use_case: Arc<dyn GetPiesOfTheWeekUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            get_of_the_week_use_case,
        }
    }
}

/// Pie catalog API
///
/// Read-only endpoints over the seeded pie catalog.
#[OpenApi]
impl PieApi {
    /// List the catalog
    #[oai(path = "/pies", method = "get", tag = "ApiTags::Pies")]
    async fn get_all(&self) -> GetAllPiesResponse {
        match self.get_all_use_case.execute().await {
            Ok(pies) => {
                let responses: Vec<PieResponse> = pies.into_iter().map(|p| p.into()).collect();
                GetAllPiesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllPiesResponse::InternalError(json)
            }
        }
    }

    /// List this week's featured pies
    #[oai(path = "/pies/of-the-week", method = "get", tag = "ApiTags::Pies")]
    async fn get_of_the_week(&self) -> GetPiesOfTheWeekResponse {
        match self.get_of_the_week_use_case.execute().await {
            Ok(pies) => {
                let responses: Vec<PieResponse> = pies.into_iter().map(|p| p.into()).collect();
                GetPiesOfTheWeekResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetPiesOfTheWeekResponse::InternalError(json)
            }
        }
    }

    /// Get a pie by ID
    #[oai(path = "/pies/:id", method = "get", tag = "ApiTags::Pies")]
    async fn get_by_id(&self, id: Path<String>) -> GetPieByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetPieByIdResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "pie.invalid_id".to_string(),
                }));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetPieByIdParams { id: uuid })
            .await
        {
            Ok(pie) => GetPieByIdResponse::Ok(Json(pie.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetPieByIdResponse::NotFound(json),
                    _ => GetPieByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllPiesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PieResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPiesOfTheWeekResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PieResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPieByIdResponse {
    #[oai(status = 200)]
    Ok(Json<PieResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
