use cfkit_domain::Event;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::Resource;

/// Crash event of `/v2/apps/<guid>/events`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EventEntity {
    pub instance_index: i64,
    pub exit_status: i64,
    pub exit_description: String,
    pub timestamp: DateTime<Utc>,
}

impl Resource<EventEntity> {
    pub fn to_model(&self) -> Event {
        Event {
            instance_index: self.entity.instance_index,
            timestamp: self.entity.timestamp,
            exit_description: self.entity.exit_description.clone(),
            exit_status: self.entity.exit_status,
        }
    }
}
