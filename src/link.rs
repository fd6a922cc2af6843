//! Supervisor running the reader and writer over one connection
//!
//! The connection is split into a read half and a write half, each owned by
//! its own task. The split adapter serializes access to the underlying
//! stream, so neither task needs an application-level lock. The first task
//! to fail decides the outcome; the other one is aborted and awaited.

use std::future::Future;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::task::{JoinError, JoinHandle};

use crate::config::LinkConfig;
use crate::error::{Error, Result, Task};
use crate::{reader, writer};

/// Run the link until a task fails or `shutdown` resolves.
///
/// Returns `Ok(())` only for a requested shutdown.
pub async fn run<T, W, F>(io: T, sink: W, config: &LinkConfig, shutdown: F) -> Result<()>
where
    T: AsyncRead + AsyncWrite + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
    F: Future<Output = ()>,
{
    let (source, conn) = tokio::io::split(io);

    let mut reader: JoinHandle<Result<()>> =
        tokio::spawn(reader::run(source, sink, config.read_buffer_size));
    let mut writer: JoinHandle<Result<()>> =
        tokio::spawn(writer::run(conn, config.control_byte, config.interval));

    let finished = tokio::select! {
        res = &mut reader => Some((Task::Reader, res)),
        res = &mut writer => Some((Task::Writer, res)),
        _ = shutdown => None,
    };

    // Both halves and the sink must be gone before returning, so the port
    // can be reopened right away.
    match finished {
        Some((Task::Reader, res)) => {
            stop(Task::Writer, writer).await;
            settle(Task::Reader, res)
        }
        Some((Task::Writer, res)) => {
            stop(Task::Reader, reader).await;
            settle(Task::Writer, res)
        }
        None => {
            log::info!("Shutting down serial link");
            stop(Task::Reader, reader).await;
            stop(Task::Writer, writer).await;
            Ok(())
        }
    }
}

/// Abort a task and wait until its future has been dropped
async fn stop(task: Task, handle: JoinHandle<Result<()>>) {
    handle.abort();
    match handle.await {
        Err(e) if e.is_cancelled() => {}
        Err(e) => log::warn!("{} task panicked while stopping: {}", task, e),
        Ok(Err(e)) => log::debug!("{} task failed while stopping: {}", task, e),
        Ok(Ok(())) => {}
    }
}

fn settle(task: Task, res: std::result::Result<Result<()>, JoinError>) -> Result<()> {
    match res {
        Ok(Ok(())) => {
            log::warn!("{} task ended", task);
            Ok(())
        }
        Ok(Err(e)) => {
            log::error!("{} task failed: {}", task, e);
            Err(e)
        }
        Err(e) => {
            log::error!("{} task aborted: {}", task, e);
            Err(Error::Aborted(task, e))
        }
    }
}
