//! Task service façade with simulated network behavior.
//!
//! The service is the UI's only dependency: every method mirrors one
//! repository operation, waits a fixed artificial delay first, and may
//! reject with an injected transport error to let the UI exercise its
//! error paths. It performs no data transformation beyond pass-through.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;
use tracing::debug;

use kanri_core::error::{KanriError, Result};
use kanri_core::task::{CreateTaskRequest, Task, TaskRepository, TaskStatus, UpdateTaskRequest};

/// Latency and failure model applied in front of every repository call.
#[derive(Debug, Clone)]
pub struct SimulatedNetwork {
    pub fetch_tasks_delay: Duration,
    pub fetch_task_delay: Duration,
    pub create_task_delay: Duration,
    pub update_task_delay: Duration,
    pub delete_task_delay: Duration,
    pub move_task_delay: Duration,
    /// Probability in `[0.0, 1.0]` that an operation rejects with a
    /// transport error instead of delegating. Disabled by default.
    pub failure_rate: f64,
}

impl Default for SimulatedNetwork {
    fn default() -> Self {
        Self {
            fetch_tasks_delay: Duration::from_millis(200),
            fetch_task_delay: Duration::from_millis(150),
            create_task_delay: Duration::from_millis(200),
            update_task_delay: Duration::from_millis(200),
            delete_task_delay: Duration::from_millis(150),
            move_task_delay: Duration::from_millis(120),
            failure_rate: 0.0,
        }
    }
}

impl SimulatedNetwork {
    /// A network with no latency and no failures, for tests.
    pub fn instant() -> Self {
        Self {
            fetch_tasks_delay: Duration::ZERO,
            fetch_task_delay: Duration::ZERO,
            create_task_delay: Duration::ZERO,
            update_task_delay: Duration::ZERO,
            delete_task_delay: Duration::ZERO,
            move_task_delay: Duration::ZERO,
            failure_rate: 0.0,
        }
    }

    /// Sets the failure probability, clamped to `[0.0, 1.0]`.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate.clamp(0.0, 1.0);
        self
    }
}

/// Async façade over the task repository, emulating a remote API.
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
    network: SimulatedNetwork,
}

impl TaskService {
    /// Creates a service with the default simulated network.
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self {
            repository,
            network: SimulatedNetwork::default(),
        }
    }

    /// Creates a service with a custom latency/failure model.
    pub fn with_network(repository: Arc<dyn TaskRepository>, network: SimulatedNetwork) -> Self {
        Self {
            repository,
            network,
        }
    }

    /// All tasks, newest first.
    pub async fn fetch_tasks(&self) -> Result<Vec<Task>> {
        self.simulate(self.network.fetch_tasks_delay).await?;
        debug!("[TaskService] fetch_tasks");
        self.repository.list()
    }

    /// A single task by id, `None` when unknown.
    pub async fn fetch_task(&self, id: &str) -> Result<Option<Task>> {
        self.simulate(self.network.fetch_task_delay).await?;
        debug!("[TaskService] fetch_task {}", id);
        self.repository.find(id)
    }

    /// Creates a task and returns the persisted record.
    pub async fn create_task(&self, request: CreateTaskRequest) -> Result<Task> {
        self.simulate(self.network.create_task_delay).await?;
        debug!("[TaskService] create_task '{}'", request.title);
        self.repository.create(request)
    }

    /// Applies a partial update to an existing task.
    pub async fn update_task(&self, id: &str, patch: UpdateTaskRequest) -> Result<Task> {
        self.simulate(self.network.update_task_delay).await?;
        debug!("[TaskService] update_task {}", id);
        self.repository.update(id, patch)
    }

    /// Deletes a task; deleting an unknown id is not an error.
    pub async fn delete_task(&self, id: &str) -> Result<()> {
        self.simulate(self.network.delete_task_delay).await?;
        debug!("[TaskService] delete_task {}", id);
        self.repository.remove(id)
    }

    /// Moves a task to another board column.
    pub async fn move_task(&self, id: &str, status: TaskStatus) -> Result<Task> {
        self.simulate(self.network.move_task_delay).await?;
        debug!("[TaskService] move_task {} -> {}", id, status);
        self.repository.move_to(id, status)
    }

    /// Waits the artificial delay, then rolls for an injected failure.
    async fn simulate(&self, delay: Duration) -> Result<()> {
        sleep(delay).await;

        if rand::thread_rng().gen_range(0.0..1.0) < self.network.failure_rate {
            return Err(KanriError::transport("mock network error"));
        }

        Ok(())
    }
}
