//! Async client for the inventory web service.
//!
//! One method per service operation: the request payload is serialized
//! and POSTed as JSON to `{endpoint}/{operationName}`, the response
//! payload deserialized back. Session handling is explicit: `login`
//! stores the returned session and every other call stamps its id into
//! the outgoing request.

use crate::types::messages::*;
use crate::types::{
    RemoteBackgroundJob, RemoteClassMetadata, RemoteClassMetadataLight, RemoteInventoryProxy,
    RemoteObjectLight, RemotePool, RemoteSession, RemoteSyncAction, RemoteSyncFinding,
    RemoteSyncResult, RemoteSynchronizationConfiguration, RemoteSynchronizationGroup,
    RemoteViewObject, RemoteViewObjectLight,
};
use crate::utils::error::{InventoryError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Fault body returned by the service on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerFault {
    pub fault_code: i32,
    pub message: String,
}

pub struct InventoryClient {
    endpoint: String,
    http: reqwest::Client,
    session: Option<RemoteSession>,
}

impl InventoryClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.as_str().trim_end_matches('/').to_string(),
            http,
            session: None,
        })
    }

    /// The session obtained by the last successful `login`, if any.
    pub fn session(&self) -> Option<&RemoteSession> {
        self.session.as_ref()
    }

    async fn call<Req, Resp>(&self, operation: &str, payload: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/{}", self.endpoint, operation);
        tracing::debug!("Calling {} at {}", operation, url);

        let response = self.http.post(&url).json(payload).send().await?;
        let status = response.status();
        tracing::debug!("{} responded with status {}", operation, status);

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            // The service reports failures as a structured fault body;
            // fall back to the HTTP status when there is none.
            match response.json::<ServerFault>().await {
                Ok(fault) => Err(InventoryError::ServerFault {
                    fault_code: fault.fault_code,
                    message: fault.message,
                }),
                Err(_) => Err(InventoryError::ServerFault {
                    fault_code: i32::from(status.as_u16()),
                    message: format!("{} failed with status {}", operation, status),
                }),
            }
        }
    }

    fn session_id(&self) -> Result<String> {
        self.session
            .as_ref()
            .map(|s| s.session_id.clone())
            .ok_or(InventoryError::NoActiveSession)
    }

    pub async fn login(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        session_type: i32,
    ) -> Result<&RemoteSession> {
        let request = CreateSession {
            username: username.into(),
            password: password.into(),
            session_type,
        };
        let response: CreateSessionResponse = self.call("createSession", &request).await?;
        tracing::info!(
            "Session {} opened for user {}",
            response.session.session_id,
            response.session.username
        );
        Ok(self.session.insert(response.session))
    }

    pub async fn logout(&mut self) -> Result<()> {
        let request = CloseSession {
            session_id: self.session_id()?,
        };
        let _: CloseSessionResponse = self.call("closeSession", &request).await?;
        self.session = None;
        tracing::info!("Session closed");
        Ok(())
    }

    pub async fn get_class(&self, class_name: impl Into<String>) -> Result<RemoteClassMetadata> {
        let request = GetClass {
            class_name: class_name.into(),
            session_id: self.session_id()?,
        };
        let response: GetClassResponse = self.call("getClass", &request).await?;
        Ok(response.class)
    }

    pub async fn get_all_classes_light(
        &self,
        include_list_types: bool,
    ) -> Result<Vec<RemoteClassMetadataLight>> {
        let request = GetAllClassesLight {
            include_list_types,
            session_id: self.session_id()?,
        };
        let response: GetAllClassesLightResponse =
            self.call("getAllClassesLight", &request).await?;
        Ok(response.classes)
    }

    pub async fn get_subclasses_light(
        &self,
        class_name: impl Into<String>,
        include_abstract_classes: bool,
        include_self: bool,
    ) -> Result<Vec<RemoteClassMetadataLight>> {
        let request = GetSubClassesLight {
            class_name: class_name.into(),
            include_abstract_classes,
            include_self,
            session_id: self.session_id()?,
        };
        let response: GetSubClassesLightResponse =
            self.call("getSubClassesLight", &request).await?;
        Ok(response.classes)
    }

    pub async fn get_pool(&self, pool_id: impl Into<String>) -> Result<RemotePool> {
        let request = GetPool {
            pool_id: pool_id.into(),
            session_id: self.session_id()?,
        };
        let response: GetPoolResponse = self.call("getPool", &request).await?;
        Ok(response.pool)
    }

    pub async fn get_root_pools(
        &self,
        class_name: impl Into<String>,
        pool_type: i32,
        include_subclasses: bool,
    ) -> Result<Vec<RemotePool>> {
        let request = GetRootPools {
            class_name: class_name.into(),
            pool_type,
            include_subclasses,
            session_id: self.session_id()?,
        };
        let response: GetRootPoolsResponse = self.call("getRootPools", &request).await?;
        Ok(response.pools)
    }

    pub async fn get_pool_items(
        &self,
        pool_id: impl Into<String>,
        limit: i32,
    ) -> Result<Vec<RemoteObjectLight>> {
        let request = GetPoolItems {
            pool_id: pool_id.into(),
            limit,
            session_id: self.session_id()?,
        };
        let response: GetPoolItemsResponse = self.call("getPoolItems", &request).await?;
        Ok(response.items)
    }

    pub async fn get_all_proxies(&self) -> Result<Vec<RemoteInventoryProxy>> {
        let request = GetAllProxies {
            session_id: self.session_id()?,
        };
        let response: GetAllProxiesResponse = self.call("getAllProxies", &request).await?;
        Ok(response.proxies)
    }

    pub async fn get_synchronization_groups(&self) -> Result<Vec<RemoteSynchronizationGroup>> {
        let request = GetSynchronizationGroups {
            session_id: self.session_id()?,
        };
        let response: GetSynchronizationGroupsResponse =
            self.call("getSynchronizationGroups", &request).await?;
        Ok(response.groups)
    }

    pub async fn get_sync_datasource_configurations(
        &self,
        sync_group_id: i64,
    ) -> Result<Vec<RemoteSynchronizationConfiguration>> {
        let request = GetSyncDataSourceConfigurations {
            sync_group_id,
            session_id: self.session_id()?,
        };
        let response: GetSyncDataSourceConfigurationsResponse = self
            .call("getSyncDataSourceConfigurations", &request)
            .await?;
        Ok(response.configurations)
    }

    pub async fn launch_ad_hoc_synchronization_task(
        &self,
        datasource_config_ids: Vec<i64>,
        provider_name: impl Into<String>,
    ) -> Result<RemoteBackgroundJob> {
        let request = LaunchAdHocSynchronizationTask {
            datasource_config_ids,
            provider_name: provider_name.into(),
            session_id: self.session_id()?,
        };
        let response: LaunchAdHocSynchronizationTaskResponse = self
            .call("launchAdHocAutomatedSynchronizationTask", &request)
            .await?;
        tracing::info!(
            "Synchronization job {} launched (tag {})",
            response.job.id,
            response.job.job_tag
        );
        Ok(response.job)
    }

    /// Runs a synchronization pass without applying anything, returning
    /// the differences found for an operator to review.
    pub async fn launch_supervised_synchronization_task(
        &self,
        sync_group_id: i64,
    ) -> Result<Vec<RemoteSyncFinding>> {
        let request = LaunchSupervisedSynchronizationTask {
            sync_group_id,
            session_id: self.session_id()?,
        };
        let response: LaunchSupervisedSynchronizationTaskResponse = self
            .call("launchSupervisedSynchronizationTask", &request)
            .await?;
        Ok(response.findings)
    }

    /// Applies the actions chosen for the findings of a supervised run.
    pub async fn execute_sync_actions(
        &self,
        sync_group_id: i64,
        actions: Vec<RemoteSyncAction>,
    ) -> Result<Vec<RemoteSyncResult>> {
        let request = ExecuteSyncActions {
            sync_group_id,
            actions,
            session_id: self.session_id()?,
        };
        let response: ExecuteSyncActionsResponse =
            self.call("executeSyncActions", &request).await?;
        Ok(response.results)
    }

    pub async fn get_current_jobs(&self) -> Result<Vec<RemoteBackgroundJob>> {
        let request = GetCurrentJobs {
            session_id: self.session_id()?,
        };
        let response: GetCurrentJobsResponse = self.call("getCurrentJobs", &request).await?;
        Ok(response.jobs)
    }

    pub async fn get_general_view(&self, view_id: i64) -> Result<RemoteViewObject> {
        let request = GetGeneralView {
            view_id,
            session_id: self.session_id()?,
        };
        let response: GetGeneralViewResponse = self.call("getGeneralView", &request).await?;
        Ok(response.view)
    }

    pub async fn get_general_views(
        &self,
        view_class_name: impl Into<String>,
        limit: i32,
    ) -> Result<Vec<RemoteViewObjectLight>> {
        let request = GetGeneralViews {
            view_class_name: view_class_name.into(),
            limit,
            session_id: self.session_id()?,
        };
        let response: GetGeneralViewsResponse = self.call("getGeneralViews", &request).await?;
        Ok(response.views)
    }
}
