use std::sync::Arc;

use tes_model::{
    CancelTaskRequest, Entity, GetTaskRequest, ListTasksRequest, ServiceInfoRequest, Task,
    TextOptions,
};
use tracing::{debug, warn};

use crate::{error::ApiError, handler::ApiHandler, operation::Operation};

/// Build a request record from a raw JSON body.
///
/// An empty body is read as `{}`. Construction failures are logged and
/// returned as [`ApiError::InvalidRequest`].
pub fn decode_request<R: Entity>(body: &str) -> Result<R, ApiError> {
    let body = match body.trim() {
        "" => "{}",
        trimmed => trimmed,
    };

    R::from_text(body).map_err(|e| {
        warn!(entity = R::NAME, error = %e, "rejected request body");
        ApiError::InvalidRequest(e)
    })
}

/// Routes raw request bodies to an [`ApiHandler`] and encodes the replies.
pub struct Dispatcher<H> {
    handler: Arc<H>,
    text: TextOptions,
}

impl<H> Dispatcher<H>
where
    H: ApiHandler,
{
    /// Dispatcher rendering responses with [`TextOptions::default`].
    pub fn new(handler: Arc<H>) -> Self {
        Self {
            handler,
            text: TextOptions::default(),
        }
    }

    pub fn with_text_options(mut self, text: TextOptions) -> Self {
        self.text = text;
        self
    }

    pub fn handler(&self) -> &Arc<H> {
        &self.handler
    }

    /// Decode `body` for `op`, run it, and return the response as JSON text.
    pub async fn dispatch(&self, op: Operation, body: &str) -> Result<String, ApiError> {
        debug!(operation = %op, bytes = body.len(), "dispatching request");

        match op {
            Operation::CreateTask => {
                let task: Task = decode_request(body)?;
                let resp = self.handler.create_task(task).await?;
                debug!(task_id = %resp.id, "task created");
                self.encode(&resp)
            }
            Operation::GetTask => {
                let req: GetTaskRequest = decode_request(body)?;
                let task = self.handler.get_task(req).await?;
                self.encode(&task)
            }
            Operation::ListTasks => {
                let req: ListTasksRequest = decode_request(body)?;
                let page = self.handler.list_tasks(req).await?;
                debug!(count = page.tasks.len(), "tasks listed");
                self.encode(&page)
            }
            Operation::CancelTask => {
                let req: CancelTaskRequest = decode_request(body)?;
                let id = req.id.clone();
                let resp = self.handler.cancel_task(req).await?;
                debug!(task_id = %id, "task canceled");
                self.encode(&resp)
            }
            Operation::ServiceInfo => {
                let req: ServiceInfoRequest = decode_request(body)?;
                let info = self.handler.service_info(req).await?;
                self.encode(&info)
            }
        }
    }

    /// Same as [`dispatch`](Self::dispatch) with the operation given by name.
    pub async fn dispatch_named(&self, op: &str, body: &str) -> Result<String, ApiError> {
        let op: Operation = op.parse()?;
        self.dispatch(op, body).await
    }

    fn encode<E: Entity>(&self, record: &E) -> Result<String, ApiError> {
        record.as_text(&self.text).map_err(|e| {
            warn!(entity = E::NAME, error = %e, "failed to encode response");
            ApiError::Encode(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tes_model::{
        CancelTaskResponse, ConstraintKind, CreateTaskResponse, ListTasksResponse, ServiceInfo,
        TaskState,
    };

    use super::*;

    #[derive(Default)]
    struct MemoryHandler {
        tasks: Mutex<Vec<Task>>,
    }

    #[async_trait]
    impl ApiHandler for MemoryHandler {
        async fn create_task(&self, mut task: Task) -> Result<CreateTaskResponse, ApiError> {
            let mut tasks = self.tasks.lock().unwrap();
            let id = format!("task-{}", tasks.len() + 1);
            task.id = Some(id.clone());
            task.state = Some(TaskState::Queued);
            tasks.push(task);
            Ok(CreateTaskResponse::new(id))
        }

        async fn get_task(&self, req: GetTaskRequest) -> Result<Task, ApiError> {
            let tasks = self.tasks.lock().unwrap();
            tasks
                .iter()
                .find(|t| t.id.as_deref() == Some(req.id.as_str()))
                .cloned()
                .ok_or(ApiError::TaskNotFound(req.id))
        }

        async fn list_tasks(&self, req: ListTasksRequest) -> Result<ListTasksResponse, ApiError> {
            let tasks = self.tasks.lock().unwrap();
            let prefix = req.name_prefix.unwrap_or_default();
            let page = tasks
                .iter()
                .filter(|t| t.name.as_deref().unwrap_or_default().starts_with(&prefix))
                .cloned()
                .collect();
            Ok(ListTasksResponse::new(page))
        }

        async fn cancel_task(&self, req: CancelTaskRequest) -> Result<CancelTaskResponse, ApiError> {
            let mut tasks = self.tasks.lock().unwrap();
            let task = tasks
                .iter_mut()
                .find(|t| t.id.as_deref() == Some(req.id.as_str()))
                .ok_or(ApiError::TaskNotFound(req.id))?;
            task.state = Some(TaskState::Canceled);
            Ok(CancelTaskResponse::default())
        }

        async fn service_info(&self, _req: ServiceInfoRequest) -> Result<ServiceInfo, ApiError> {
            Ok(ServiceInfo {
                name: Some("memory".into()),
                ..Default::default()
            })
        }
    }

    fn dispatcher() -> Dispatcher<MemoryHandler> {
        Dispatcher::new(Arc::new(MemoryHandler::default()))
    }

    #[tokio::test]
    async fn create_then_get() {
        let api = dispatcher();

        let body = r#"{"name": "md5", "executors": [{"image_name": "ubuntu", "cmd": ["md5sum"]}]}"#;
        let created = api.dispatch(Operation::CreateTask, body).await.unwrap();
        assert_eq!(created, r#"{"id": "task-1"}"#);

        let task = api
            .dispatch(Operation::GetTask, r#"{"id": "task-1", "view": "FULL"}"#)
            .await
            .unwrap();
        assert_eq!(
            task,
            r#"{"executors": [{"cmd": ["md5sum"], "image_name": "ubuntu"}], "id": "task-1", "name": "md5", "state": "QUEUED"}"#
        );
    }

    #[tokio::test]
    async fn invalid_body_is_rejected_before_the_handler() {
        let api = dispatcher();

        let err = api
            .dispatch(
                Operation::CreateTask,
                r#"{"executors": [{"image_name": "ubuntu", "cmd": ["echo", 5]}]}"#,
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        match err {
            ApiError::InvalidRequest(e) => assert_eq!(e.kind(), ConstraintKind::Type),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(api.handler().tasks.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_task_maps_to_not_found() {
        let err = dispatcher()
            .dispatch(Operation::CancelTask, r#"{"id": "nope"}"#)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn cancel_then_list() {
        let api = dispatcher();
        api.dispatch(Operation::CreateTask, r#"{"name": "a"}"#).await.unwrap();
        api.dispatch(Operation::CreateTask, r#"{"name": "b"}"#).await.unwrap();

        let resp = api
            .dispatch(Operation::CancelTask, r#"{"id": "task-2"}"#)
            .await
            .unwrap();
        assert_eq!(resp, "{}");

        let page = api
            .dispatch(Operation::ListTasks, r#"{"name_prefix": "b"}"#)
            .await
            .unwrap();
        assert_eq!(
            page,
            r#"{"tasks": [{"id": "task-2", "name": "b", "state": "CANCELED"}]}"#
        );
    }

    #[tokio::test]
    async fn empty_list_keeps_tasks_key() {
        let page = dispatcher().dispatch(Operation::ListTasks, "").await.unwrap();
        assert_eq!(page, r#"{"tasks": []}"#);
    }

    #[tokio::test]
    async fn service_info_by_name() {
        let api = dispatcher().with_text_options(TextOptions::default().with_indent(2));
        let info = api.dispatch_named("service_info", "  ").await.unwrap();
        assert_eq!(info, "{\n  \"name\": \"memory\"\n}");

        let err = api.dispatch_named("delete_task", "{}").await.unwrap_err();
        assert!(matches!(err, ApiError::UnknownOperation(_)));
    }

    #[test]
    fn decode_request_rejects_wrong_view() {
        let err = decode_request::<GetTaskRequest>(r#"{"id": "t1", "view": "ALL"}"#).unwrap_err();
        match err {
            ApiError::InvalidRequest(e) => assert_eq!(e.kind(), ConstraintKind::Value),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_request_rejects_unknown_fields() {
        let err = decode_request::<CancelTaskRequest>(r#"{"id": "t1", "force": true}"#).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
