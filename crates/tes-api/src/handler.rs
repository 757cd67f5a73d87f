use async_trait::async_trait;
use tes_model::{
    CancelTaskRequest, CancelTaskResponse, CreateTaskResponse, GetTaskRequest, ListTasksRequest,
    ListTasksResponse, ServiceInfo, ServiceInfoRequest, Task,
};

use crate::error::ApiError;

/// Backend serving the TES API.
///
/// Requests arrive already validated; implementations decide how tasks are
/// stored and run.
#[async_trait]
pub trait ApiHandler: Send + Sync + 'static {
    /// Accept a new task and return the id assigned to it.
    async fn create_task(&self, task: Task) -> Result<CreateTaskResponse, ApiError>;

    /// Look up one task.
    async fn get_task(&self, req: GetTaskRequest) -> Result<Task, ApiError>;

    async fn list_tasks(&self, req: ListTasksRequest) -> Result<ListTasksResponse, ApiError>;

    async fn cancel_task(&self, req: CancelTaskRequest) -> Result<CancelTaskResponse, ApiError>;

    async fn service_info(&self, req: ServiceInfoRequest) -> Result<ServiceInfo, ApiError>;
}
