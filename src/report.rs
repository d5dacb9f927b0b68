use crate::cost::CostSummary;
use crate::event::InstanceState;

#[derive(Debug, PartialEq, Clone)]
pub struct Report {
    pub subject: String,
    pub body_html: String,
}

impl Report {
    /// Only running and terminated instances are reported.
    ///
    /// Values are embedded as is, without HTML escaping.
    pub fn build(
        state: InstanceState,
        instance_id: &str,
        event_time: &str,
        cost: &CostSummary,
    ) -> Option<Report> {
        let label = match state {
            InstanceState::Running => "Running",
            InstanceState::Terminated => "Terminated",
            InstanceState::Other => return None,
        };
        Some(Report {
            subject: format!("{} - EC2 Instance State Change Report", label),
            body_html: render_body(instance_id, label, event_time, cost),
        })
    }
}

fn render_body(instance_id: &str, state: &str, event_time: &str, cost: &CostSummary) -> String {
    format!(
        r#"
<div>
    <h3>EC2 Instance State Change Report</h3>
    <p>Instance ID: <strong>{}</strong></p>
    <p>Event State: <strong>{}</strong></p>
    <p>Event Timestamp: <strong>{}</strong></p>
    <h4>Billing Summary:</h4>
    <p>Total Cost for the last 24 hours: <strong>${}</strong></p>
</div>
"#,
        instance_id, state, event_time, cost
    )
}
