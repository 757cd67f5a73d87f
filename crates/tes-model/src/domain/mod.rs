mod file_type;
pub use file_type::FileType;

mod task_state;
pub use task_state::TaskState;

mod task_view;
pub use task_view::TaskView;

mod task_parameter;
pub use task_parameter::TaskParameter;

mod resources;
pub use resources::Resources;

mod ports;
pub use ports::Ports;

mod executor;
pub use executor::Executor;

mod executor_log;
pub use executor_log::ExecutorLog;

mod output_file_log;
pub use output_file_log::OutputFileLog;

mod task_log;
pub use task_log::TaskLog;

mod task;
pub use task::Task;

mod get_task;
pub use get_task::GetTaskRequest;

mod create_task;
pub use create_task::CreateTaskResponse;

mod service_info;
pub use service_info::{ServiceInfo, ServiceInfoRequest};

mod cancel_task;
pub use cancel_task::{CancelTaskRequest, CancelTaskResponse};

mod list_tasks;
pub use list_tasks::{ListTasksRequest, ListTasksResponse};
