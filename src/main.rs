mod config;
mod cost;
mod cost_explorer_client;
mod date_window;
mod dispatcher;
mod error;
mod event;
mod report;
mod ses_email_client;

use std::sync::Arc;

use anyhow::{anyhow, Context as _};
use env_logger::Env;
use lambda_runtime::{handler_fn, Context, Error};
use log::info;
use rusoto_core::Region;
use serde_json::Value;

use crate::config::Config;
use crate::cost_explorer_client::CostExplorerCostClient;
use crate::dispatcher::{Dispatcher, HandlerOutput};
use crate::ses_email_client::SesEmailClient;

type ReportDispatcher = Dispatcher<CostExplorerCostClient, SesEmailClient>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Reporting to {} recipient(s) from {}",
        config.recipients.len(),
        config.sender
    );

    let dispatcher = Arc::new(Dispatcher::new(
        CostExplorerCostClient::new(),
        SesEmailClient::new(Region::default()),
        config,
    ));

    lambda_runtime::run(handler_fn(move |event: Value, context: Context| {
        report_handler(Arc::clone(&dispatcher), event, context)
    }))
    .await
    .map_err(|error| anyhow!(error))?;
    Ok(())
}

async fn report_handler(
    dispatcher: Arc<ReportDispatcher>,
    event: Value,
    context: Context,
) -> Result<HandlerOutput, Error> {
    info!("Handling request {}", context.request_id);
    Ok(dispatcher.handle(event).await)
}
