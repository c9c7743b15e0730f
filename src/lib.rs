use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use log::info;

use crate::db::{establish_connection_pool, remove_database_file, run_migrations};
use crate::models::config::ServerConfig;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, JsonRoleStore};
use crate::routes::api::{api_v1_employees, api_v1_roles};
use crate::routes::main::index;
use crate::routes::query_config;

pub mod db;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod errors;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Registers every route of the API on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config()).service(index).service(
        web::scope("/api")
            .service(api_v1_employees)
            .service(api_v1_roles),
    );
}

/// Opens the employee database described by `server_config`, recreating the
/// file first when `seed.reset` is set, and applies pending migrations.
pub fn open_repository(server_config: &ServerConfig) -> RepositoryResult<DieselRepository> {
    if server_config.seed.reset {
        remove_database_file(&server_config.database_url)?;
    }

    let pool =
        establish_connection_pool(&server_config.database_url, server_config.storage_timeout())?;
    run_migrations(&pool)?;

    Ok(DieselRepository::new(pool))
}

/// Loads the role lookup table, or an empty one when no file is configured.
pub fn load_roles(server_config: &ServerConfig) -> RepositoryResult<JsonRoleStore> {
    match &server_config.roles_file {
        Some(path) => {
            let roles = JsonRoleStore::from_json_file(path)?;
            info!("Loaded {} roles from {path}", roles.len());
            Ok(roles)
        }
        None => Ok(JsonRoleStore::default()),
    }
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(
    server_config: ServerConfig,
    repo: DieselRepository,
    roles: JsonRoleStore,
) -> std::io::Result<()> {
    let bind_address = (server_config.address.clone(), server_config.port);
    info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(configure)
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(roles.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
