use chrono::{NaiveDate, Utc};
use log::{debug, error, info};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::cost::CostSummary;
use crate::cost_explorer_client::CostReport;
use crate::date_window::DateWindow;
use crate::event::{InstanceState, LifecycleEvent};
use crate::report::Report;
use crate::ses_email_client::Deliver;

const PROCESSED: &str = "Event processed successfully!";

#[derive(Debug, Serialize, PartialEq)]
pub struct HandlerOutput {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerOutput {
    fn processed() -> Self {
        HandlerOutput {
            status_code: 200,
            body: PROCESSED.to_string(),
        }
    }
}

/// Turns instance state-change events into emailed reports.
///
/// Best effort: cost and delivery failures are logged, never returned.
pub struct Dispatcher<C, D> {
    cost: C,
    delivery: D,
    config: Config,
}

impl<C, D> Dispatcher<C, D>
where
    C: CostReport + Send + Sync,
    D: Deliver + Send + Sync,
{
    pub fn new(cost: C, delivery: D, config: Config) -> Self {
        Dispatcher {
            cost,
            delivery,
            config,
        }
    }

    pub async fn handle(&self, event: Value) -> HandlerOutput {
        self.handle_on(event, Utc::now().naive_utc().date()).await
    }

    pub async fn handle_on(&self, event: Value, today: NaiveDate) -> HandlerOutput {
        debug!("Received event: {}", event);
        let event = LifecycleEvent::from(event);
        let state = event.state();

        let cost = match state {
            InstanceState::Terminated => self.cost_summary(today).await,
            InstanceState::Running if self.config.cost_on_running => {
                self.cost_summary(today).await
            }
            InstanceState::Running => CostSummary::Unavailable,
            InstanceState::Other => {
                info!(
                    "Ignoring event {:?} for instance {}",
                    event.detail_type.as_deref().unwrap_or("-"),
                    event.instance_id()
                );
                return HandlerOutput::processed();
            }
        };

        if let Some(report) =
            Report::build(state, event.instance_id(), event.event_time(), &cost)
        {
            match self
                .delivery
                .deliver(&self.config.sender, &self.config.recipients, &report)
                .await
            {
                Ok(message_id) => info!("Email sent! Message ID: {}", message_id),
                Err(err) => error!("Error sending email: {}", err),
            }
        }
        HandlerOutput::processed()
    }

    async fn cost_summary(&self, today: NaiveDate) -> CostSummary {
        let window = DateWindow::from(today);
        match self.cost.total_cost(&window).await {
            Ok(total) => {
                let summary = CostSummary::Amount(total);
                info!(
                    "Billing data from {} to {}: ${}",
                    window.start_string(),
                    window.end_string(),
                    summary
                );
                summary
            }
            Err(err) => {
                error!("Error retrieving billing data: {}", err);
                CostSummary::Unavailable
            }
        }
    }
}
