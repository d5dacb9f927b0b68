use log::warn;
use serde_json::Value;

const MISSING: &str = "N/A";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InstanceState {
    Running,
    Terminated,
    Other,
}

impl From<Option<&str>> for InstanceState {
    fn from(state: Option<&str>) -> Self {
        match state {
            Some("running") => InstanceState::Running,
            Some("terminated") => InstanceState::Terminated,
            _ => InstanceState::Other,
        }
    }
}

/// EventBridge "EC2 Instance State-change Notification".
#[derive(Debug, Default, PartialEq)]
pub struct LifecycleEvent {
    pub detail_type: Option<String>,
    pub instance_id: Option<String>,
    pub state: Option<String>,
    pub timestamp: Option<String>,
    pub time: Option<String>,
}

impl From<Value> for LifecycleEvent {
    /// Never fails: every field is read on its own, and a missing or
    /// non-string field is left empty without affecting the others.
    fn from(value: Value) -> Self {
        LifecycleEvent {
            detail_type: string_at(&value, "/detail-type"),
            instance_id: string_at(&value, "/detail/instance-id"),
            state: string_at(&value, "/detail/state"),
            timestamp: string_at(&value, "/detail/timestamp"),
            time: string_at(&value, "/time"),
        }
    }
}

fn string_at(value: &Value, pointer: &str) -> Option<String> {
    match value.pointer(pointer) {
        None | Some(Value::Null) => None,
        Some(Value::String(field)) => Some(field.clone()),
        Some(other) => {
            warn!("Ignoring non-string {} in event: {}", pointer, other);
            None
        }
    }
}

impl LifecycleEvent {
    pub fn state(&self) -> InstanceState {
        InstanceState::from(self.state.as_deref())
    }

    pub fn instance_id(&self) -> &str {
        self.instance_id.as_deref().unwrap_or(MISSING)
    }

    /// `detail.timestamp`, else the envelope `time`, else "N/A".
    pub fn event_time(&self) -> &str {
        if let Some(timestamp) = self.timestamp.as_deref() {
            return timestamp;
        }
        warn!("detail.timestamp is missing, falling back to the event time");
        self.time.as_deref().unwrap_or(MISSING)
    }
}
