use std::env;

use config::Config;
use dotenvy::dotenv;
use validator::Validate;

use employee_directory::models::config::ServerConfig;
use employee_directory::services::seed::seed_employees;
use employee_directory::{load_roles, open_repository, run};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = server_config.validate() {
        log::error!("Invalid server config: {err}");
        std::process::exit(1);
    }

    let repo = match open_repository(&server_config) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to prepare database: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = seed_employees(&repo, &server_config.seed) {
        log::error!("Failed to seed employees: {err}");
        std::process::exit(1);
    }

    let roles = match load_roles(&server_config) {
        Ok(roles) => roles,
        Err(err) => {
            log::error!("Failed to load roles: {err}");
            std::process::exit(1);
        }
    };

    run(server_config, repo, roles).await
}
