use std::future::Future;
use std::pin::Pin;

pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Spawns transport tasks off the canvas loop.
pub trait AsyncExecutor: Send + Sync {
    fn spawn(&self, task: BoxFuture);
}
