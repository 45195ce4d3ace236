use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A synchronization provider registered on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSynchronizationProvider {
    pub id: String,
    pub display_name: String,
    pub automated: bool,
}

/// A group of data-source configurations synchronized together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSynchronizationGroup {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub provider: Option<RemoteSynchronizationProvider>,
}

impl RemoteSynchronizationGroup {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            provider: None,
        }
    }
}

/// Connection details for one synchronization data source
/// (an SNMP agent, an SSH endpoint, etc.), as opaque parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSynchronizationConfiguration {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub datasource_type: Option<String>,
    #[serde(default)]
    pub parameters: Vec<super::StringPair>,
}

impl RemoteSynchronizationConfiguration {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            datasource_type: None,
            parameters: Vec::new(),
        }
    }
}

/// A difference detected between the data source and the inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSyncFinding {
    pub finding_type: i32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extra_information: Option<String>,
}

/// An action chosen by an operator for a finding of a supervised
/// synchronization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSyncAction {
    pub action_type: i32,
    pub finding: RemoteSyncFinding,
}

/// The outcome of one action taken by a synchronization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSyncResult {
    pub datasource_config_id: i64,
    pub result_type: i32,
    pub action_description: String,
    pub result: String,
}

/// A server-side job launched by a synchronization task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteBackgroundJob {
    pub id: i64,
    pub job_tag: String,
    pub progress: i32,
    pub auto_clean: bool,
    pub state: String,
    /// Epoch milliseconds; 0 when the job has not started/finished.
    pub start_time: i64,
    pub end_time: i64,
}

impl RemoteBackgroundJob {
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        if self.start_time == 0 {
            return None;
        }
        Utc.timestamp_millis_opt(self.start_time).single()
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        if self.end_time == 0 {
            return None;
        }
        Utc.timestamp_millis_opt(self.end_time).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StringPair;

    #[test]
    fn test_sync_group_round_trip() {
        let mut group = RemoteSynchronizationGroup::new(10, "Bogota POP");
        group.provider = Some(RemoteSynchronizationProvider {
            id: "snmp".to_string(),
            display_name: "SNMP".to_string(),
            automated: true,
        });
        let json = serde_json::to_string(&group).unwrap();
        let back: RemoteSynchronizationGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(group, back);
    }

    #[test]
    fn test_absent_provider_is_skipped_on_the_wire() {
        let group = RemoteSynchronizationGroup::new(11, "Cali POP");
        let json = serde_json::to_string(&group).unwrap();
        assert!(!json.contains("provider"));
        let back: RemoteSynchronizationGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(back.provider, None);
    }

    #[test]
    fn test_datasource_config_defaults() {
        let json = r#"{"id":5,"name":"router-01 snmp"}"#;
        let config: RemoteSynchronizationConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.datasource_type, None);
        assert!(config.parameters.is_empty());

        let mut populated = RemoteSynchronizationConfiguration::new(5, "router-01 snmp");
        populated.parameters.push(StringPair::new("ipAddress", "10.0.0.1"));
        let json = serde_json::to_string(&populated).unwrap();
        let back: RemoteSynchronizationConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(populated, back);
    }

    #[test]
    fn test_job_timestamps() {
        let job = RemoteBackgroundJob {
            id: 1,
            job_tag: "sync".to_string(),
            progress: 50,
            auto_clean: true,
            state: "RUNNING".to_string(),
            start_time: 1_700_000_000_000,
            end_time: 0,
        };
        assert!(job.started_at().is_some());
        assert!(job.ended_at().is_none());
    }
}
