//! Domain model (ids, task types, raw payloads, task records).

pub mod ids;
pub mod payload;
pub mod task;
pub mod task_type;

pub use ids::{SessionId, TaskId};
pub use payload::{RawTask, TaskListResponse};
pub use task::{OPEN_STATUS, Task};
pub use task_type::TaskType;
