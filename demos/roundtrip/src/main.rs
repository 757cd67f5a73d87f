use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use tracing::info;

use tes_api::{ApiError, ApiHandler, Dispatcher, Operation};
use tes_model::{
    CancelTaskRequest, CancelTaskResponse, CreateTaskResponse, Entity, Executor, GetTaskRequest,
    ListTasksRequest, ListTasksResponse, Ports, Resources, ServiceInfo, ServiceInfoRequest, Task,
    TaskState, TextOptions,
};
use tes_observe::{LoggerConfig, init_logger};

/// Backend that accepts every task and never stores it.
struct EchoBackend {
    next_id: AtomicU64,
}

#[async_trait]
impl ApiHandler for EchoBackend {
    async fn create_task(&self, task: Task) -> Result<CreateTaskResponse, ApiError> {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        info!(name = ?task.name, executors = task.executors.as_ref().map_or(0, Vec::len), "accepted task");
        Ok(CreateTaskResponse::new(format!("task-{n}")))
    }

    async fn get_task(&self, req: GetTaskRequest) -> Result<Task, ApiError> {
        Ok(Task {
            id: Some(req.id),
            state: Some(TaskState::Unknown),
            ..Default::default()
        })
    }

    async fn list_tasks(&self, _req: ListTasksRequest) -> Result<ListTasksResponse, ApiError> {
        Ok(ListTasksResponse::new(Vec::new()))
    }

    async fn cancel_task(&self, req: CancelTaskRequest) -> Result<CancelTaskResponse, ApiError> {
        Err(ApiError::TaskNotFound(req.id))
    }

    async fn service_info(&self, _req: ServiceInfoRequest) -> Result<ServiceInfo, ApiError> {
        Ok(ServiceInfo {
            name: Some("roundtrip".into()),
            doc: Some("echo backend".into()),
            storage: Some(vec!["file:///tmp".into()]),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger(&LoggerConfig::default().with_api_level("debug"))?;

    let mut exec = Executor::new("ubuntu", ["echo", "hi"]);
    exec.ports = Some(vec![Ports::new(8080, 80)]);
    let task = Task {
        name: Some("hello".into()),
        resources: Some(Resources {
            cpu_cores: Some(1),
            ..Default::default()
        }),
        executors: Some(vec![exec]),
        ..Default::default()
    };

    let body = task.as_text(&TextOptions::default())?;
    info!(%body, "built task");
    println!("{}", task.as_text(&TextOptions::default().with_indent(2))?);

    let api = Dispatcher::new(Arc::new(EchoBackend {
        next_id: AtomicU64::new(1),
    }));

    let created = api.dispatch(Operation::CreateTask, &body).await?;
    println!("create_task -> {created}");

    for (op, body) in [
        (Operation::GetTask, r#"{"id": "task-1", "view": "MINIMAL"}"#),
        (Operation::ListTasks, "{}"),
        (Operation::ServiceInfo, ""),
        (Operation::CancelTask, r#"{"id": "task-1"}"#),
        (Operation::CreateTask, r#"{"state": "DONE"}"#),
    ] {
        match api.dispatch(op, body).await {
            Ok(text) => println!("{op} -> {text}"),
            Err(e) => println!("{op} -> {} {}", e.status_code(), e.body().to_json()?),
        }
    }

    Ok(())
}
