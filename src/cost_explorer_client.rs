use crate::date_window::DateWindow;
use crate::error::NotifierError;
use async_trait::async_trait;

use bigdecimal::BigDecimal;
use log::warn;
use rusoto_ce::{
    CostExplorer, CostExplorerClient, DateInterval, GetCostAndUsageRequest, ResultByTime,
};
use rusoto_core::Region;

use std::ops::Add;
use std::str::FromStr;

const GRANULARITY: &str = "DAILY";
const METRIC: &str = "AmortizedCost";

pub struct CostExplorerCostClient {
    client: CostExplorerClient,
}

#[async_trait]
pub trait CostReport {
    /// Total amortized cost over `window`, summed across every returned period.
    async fn total_cost(&self, window: &DateWindow) -> Result<BigDecimal, NotifierError>;
}

#[async_trait]
impl CostReport for CostExplorerCostClient {
    async fn total_cost(&self, window: &DateWindow) -> Result<BigDecimal, NotifierError> {
        let mut total = BigDecimal::from(0);
        let mut next_page_token = None;
        loop {
            let response = self
                .client
                .get_cost_and_usage(GetCostAndUsageRequest {
                    time_period: DateInterval {
                        start: window.start_string(),
                        end: window.end_string(),
                    },
                    granularity: GRANULARITY.to_string(),
                    metrics: vec![METRIC.to_string()],
                    next_page_token: next_page_token.clone(),
                    ..Default::default()
                })
                .await?;
            total = total.add(Self::sum_results(response.results_by_time)?);
            match response.next_page_token {
                Some(token) if token.is_empty() => break,
                Some(token) if next_page_token.as_ref() == Some(&token) => {
                    warn!("Cost Explorer repeated page token {}, stopping", token);
                    break;
                }
                Some(token) => next_page_token = Some(token),
                None => break,
            }
        }
        Ok(total)
    }
}

impl CostExplorerCostClient {
    /// Cost Explorer only serves requests from us-east-1.
    pub fn new() -> Self {
        Self::new_with_client(CostExplorerClient::new(Region::UsEast1))
    }

    pub fn new_with_client(client: CostExplorerClient) -> Self {
        CostExplorerCostClient { client }
    }

    fn sum_results(results: Option<Vec<ResultByTime>>) -> Result<BigDecimal, NotifierError> {
        let mut total = BigDecimal::from(0);
        for result in results.unwrap_or_default() {
            let amount = result
                .total
                .as_ref()
                .and_then(|total| total.get(METRIC))
                .and_then(|metric| metric.amount.as_ref());
            if let Some(amount) = amount {
                let amount = BigDecimal::from_str(amount)
                    .map_err(|_| NotifierError::InvalidAmount(amount.to_string()))?;
                total = total.add(amount);
            }
        }
        Ok(total)
    }
}
