mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use application::blog_service::BlogService;
use data::blog_repository::MongoBlogRepository;
use infrastructure::config::AppConfig;
use infrastructure::database::{connect, disconnect};
use infrastructure::logging::init_logging;
use presentation::middleware::RequestTracing;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match connect(&config.mongodb_uri).await {
        Ok(client) => client,
        Err(e) => {
            error!("couldn't connect to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    let database = client.database(&config.database);
    let repo = Arc::new(MongoBlogRepository::new(&database, &config.collection));
    let blog_service = BlogService::new(repo);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestTracing)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer")),
            )
            .app_data(web::Data::new(blog_service.clone()))
            .configure(presentation::configure)
    })
    .bind((config.host.as_str(), config.port))?;

    info!("server is running at http://{}:{}", config.host, config.port);

    server.run().await?;

    disconnect(client).await;
    Ok(())
}
