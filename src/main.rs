mod actor_framework;
mod app_system;
mod cli;
mod clients;
mod config;
mod domain;
mod error;
mod schema;
mod service;
mod user_actor;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;

use anyhow::Context as _;
use async_graphql::{Request, Variables};
use clap::Parser;
use tracing::{info, warn, Instrument};

use crate::app_system::{setup_tracing, AdminSystem};
use crate::cli::Cli;
use crate::config::AdminConfig;
use crate::schema::build_schema;
use crate::service::RequestContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AdminConfig::load(cli.config.as_deref())?;

    setup_tracing(&config.log.filter);

    let system = AdminSystem::start(&config).await?;
    let schema = build_schema(system.service());

    if cli.sdl {
        println!("{}", schema.sdl());
    } else if let Some(query) = cli.query {
        let mut request = Request::new(query);
        if let Some(raw) = cli.variables.as_deref() {
            let json = serde_json::from_str(raw).context("--variables must be a JSON object")?;
            request = request.variables(Variables::from_json(json));
        }

        let ctx = match config.request_timeout() {
            Some(timeout) => RequestContext::with_timeout(timeout),
            None => RequestContext::new(),
        };

        let span = tracing::info_span!("graphql_request");
        let response = async {
            info!("Executing document");
            schema.execute(request.data(ctx)).await
        }
        .instrument(span)
        .await;

        if !response.errors.is_empty() {
            warn!(errors = response.errors.len(), "Document resolved with errors");
        }
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    drop(schema);
    system.shutdown().await.map_err(anyhow::Error::msg)?;
    Ok(())
}
