use tokio::runtime::Handle;

use crate::kernel::services::ports::{AsyncExecutor, BoxFuture};

/// Tokio-backed executor for transport tasks.
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }
}

impl AsyncExecutor for TokioExecutor {
    fn spawn(&self, task: BoxFuture) {
        self.handle.spawn(task);
    }
}
