use actix_web::{HttpResponse, get, web};

use crate::dto::api::{EmployeesQueryParams, EmployeesResponse, RolesResponse};
use crate::errors::ApiError;
use crate::models::config::ServerConfig;
use crate::repository::{DieselRepository, JsonRoleStore};
use crate::routes::block_with_timeout;
use crate::services::api::{list_employees, list_roles};

#[get("/v1/employees")]
pub async fn api_v1_employees(
    params: web::Query<EmployeesQueryParams>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ApiError> {
    let params = params.into_inner();
    let repo = repo.into_inner();

    let listing = block_with_timeout(server_config.request_timeout(), move || {
        list_employees(repo.as_ref(), params)
    })
    .await?;
    let page = listing?;

    Ok(HttpResponse::Ok().json(EmployeesResponse::from(page)))
}

#[get("/v1/roles")]
pub async fn api_v1_roles(roles: web::Data<JsonRoleStore>) -> Result<HttpResponse, ApiError> {
    let roles = list_roles(roles.get_ref())?;
    Ok(HttpResponse::Ok().json(RolesResponse::from(roles)))
}
