use ferrous_neighbors_domain::DomainError;
use futures::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Runs the neighbor lookup command and returns its captured stdout.
pub type RunCommand = Arc<dyn Fn() -> BoxFuture<'static, Result<Vec<u8>, DomainError>> + Send + Sync>;

/// Wraps any async closure as a [`RunCommand`].
pub fn command_fn<F, Fut>(f: F) -> RunCommand
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<u8>, DomainError>> + Send + 'static,
{
    Arc::new(move || f().boxed())
}

/// Executes `program args..` bounded by `timeout`.
///
/// Spawn failures, non-zero exit status and timeouts all surface as
/// [`DomainError::NeighborCommandFailed`]. The child is killed if the
/// timeout fires.
pub fn system_command(program: &str, args: &[&str], timeout: Duration) -> RunCommand {
    let program: Arc<str> = Arc::from(program);
    let args: Arc<[String]> = args.iter().map(|a| a.to_string()).collect();

    command_fn(move || {
        let program = Arc::clone(&program);
        let args = Arc::clone(&args);
        async move { run(&program, &args, timeout).await }
    })
}

async fn run(program: &str, args: &[String], timeout: Duration) -> Result<Vec<u8>, DomainError> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    let output = tokio::time::timeout(timeout, cmd.output())
        .await
        .map_err(|_| {
            DomainError::NeighborCommandFailed(format!(
                "{}: timed out after {:?}",
                program, timeout
            ))
        })?
        .map_err(|e| DomainError::NeighborCommandFailed(format!("{}: {}", program, e)))?;

    if !output.status.success() {
        return Err(DomainError::NeighborCommandFailed(format!(
            "{}: {}",
            program, output.status
        )));
    }

    debug!(program, bytes = output.stdout.len(), "Neighbor command finished");

    // Windows `arp` may print in the OEM code page.
    Ok(String::from_utf8_lossy(&output.stdout).into_owned().into_bytes())
}
