//! Request and response payloads, one pair per service operation.
//!
//! Every request carries the session id as its last field, matching
//! the wire schema; `CreateSession` is the one exception since no
//! session exists yet.

use crate::types::{
    RemoteBackgroundJob, RemoteClassMetadata, RemoteClassMetadataLight, RemoteInventoryProxy,
    RemoteObjectLight, RemotePool, RemoteSession, RemoteSyncAction, RemoteSyncFinding,
    RemoteSyncResult, RemoteSynchronizationConfiguration, RemoteSynchronizationGroup,
    RemoteViewObject, RemoteViewObjectLight,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSession {
    pub username: String,
    pub password: String,
    pub session_type: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session: RemoteSession,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseSession {
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseSessionResponse {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetClass {
    pub class_name: String,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetClassResponse {
    pub class: RemoteClassMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllClassesLight {
    pub include_list_types: bool,
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllClassesLightResponse {
    #[serde(default)]
    pub classes: Vec<RemoteClassMetadataLight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSubClassesLight {
    pub class_name: String,
    pub include_abstract_classes: bool,
    pub include_self: bool,
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSubClassesLightResponse {
    #[serde(default)]
    pub classes: Vec<RemoteClassMetadataLight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPool {
    pub pool_id: String,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPoolResponse {
    pub pool: RemotePool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRootPools {
    pub class_name: String,
    pub pool_type: i32,
    pub include_subclasses: bool,
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRootPoolsResponse {
    #[serde(default)]
    pub pools: Vec<RemotePool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPoolItems {
    pub pool_id: String,
    pub limit: i32,
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPoolItemsResponse {
    #[serde(default)]
    pub items: Vec<RemoteObjectLight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllProxies {
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllProxiesResponse {
    #[serde(default)]
    pub proxies: Vec<RemoteInventoryProxy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSynchronizationGroups {
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSynchronizationGroupsResponse {
    #[serde(default)]
    pub groups: Vec<RemoteSynchronizationGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSyncDataSourceConfigurations {
    pub sync_group_id: i64,
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSyncDataSourceConfigurationsResponse {
    #[serde(default)]
    pub configurations: Vec<RemoteSynchronizationConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchAdHocSynchronizationTask {
    #[serde(default)]
    pub datasource_config_ids: Vec<i64>,
    pub provider_name: String,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchAdHocSynchronizationTaskResponse {
    pub job: RemoteBackgroundJob,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSupervisedSynchronizationTask {
    pub sync_group_id: i64,
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSupervisedSynchronizationTaskResponse {
    #[serde(default)]
    pub findings: Vec<RemoteSyncFinding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteSyncActions {
    pub sync_group_id: i64,
    #[serde(default)]
    pub actions: Vec<RemoteSyncAction>,
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteSyncActionsResponse {
    #[serde(default)]
    pub results: Vec<RemoteSyncResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCurrentJobs {
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCurrentJobsResponse {
    #[serde(default)]
    pub jobs: Vec<RemoteBackgroundJob>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetGeneralView {
    pub view_id: i64,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetGeneralViewResponse {
    pub view: RemoteViewObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetGeneralViews {
    pub view_class_name: String,
    pub limit: i32,
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetGeneralViewsResponse {
    #[serde(default)]
    pub views: Vec<RemoteViewObjectLight>,
}
