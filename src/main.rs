use actix_web::{App, HttpServer, web};
use anyhow::Context;
use clap::Parser;
use tracing::info;
use validator::Validate;

use honaijob::api::{
    cv::{dto::GenerateCvRequest, generate_cv},
    jobs::{JobCatalog, JobService, dto::JobSearchParams},
    validation,
    workspace::{WorkspaceService, store::sample_workspace},
};
use honaijob::cli::{Cli, Command};
use honaijob::config::Config;
use honaijob::shutdown::ShutdownCoordinator;
use honaijob::{logging, routes};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Search(args) => {
            logging::init_cli_logging();
            let service = JobService::new(load_catalog(&config)?);
            let response = service.search(&JobSearchParams::from(args));
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Command::Locations => {
            logging::init_cli_logging();
            let service = JobService::new(load_catalog(&config)?);
            println!("{}", serde_json::to_string_pretty(&service.locations())?);
            Ok(())
        }
        Command::GenerateCv(args) => {
            logging::init_cli_logging();
            let request = GenerateCvRequest::from(args);
            request.validate().context("Invalid CV brief")?;
            println!("{}", serde_json::to_string_pretty(&generate_cv(&request))?);
            Ok(())
        }
    }
}

fn load_catalog(config: &Config) -> anyhow::Result<JobCatalog> {
    JobCatalog::load(config.jobs_seed_path.as_deref()).context("Failed to load job catalog")
}

async fn serve(config: Config) -> anyhow::Result<()> {
    logging::init_server_logging(&config.log_dir).context("Failed to create logs directory")?;

    info!("Starting honaijob application");
    info!("Configuration loaded successfully:");
    info!("  - Bind address: {}:{}", config.host, config.port);
    info!("  - Max payload size: {} bytes", config.max_payload_size);
    info!("  - Log directory: {}", config.log_dir.display());

    let job_service = web::Data::new(JobService::new(load_catalog(&config)?));
    let workspace_service = web::Data::new(WorkspaceService::new(sample_workspace()));

    let max_payload_size = config.max_payload_size;
    let server_jobs = job_service.clone();
    let server_workspace = workspace_service.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_jobs.clone())
            .app_data(server_workspace.clone())
            .app_data(web::PayloadConfig::default().limit(max_payload_size))
            .app_data(validation::json_config().limit(max_payload_size))
            .configure(routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .run();

    info!("Server starting on http://{}:{}", config.host, config.port);

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    ShutdownCoordinator::new(server_handle, server_task, workspace_service)
        .wait_for_shutdown()
        .await?;
    Ok(())
}
