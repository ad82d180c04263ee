// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cancellable delayed tasks.
//!
//! Cancelling a handle only cancels the *delay*. Once the delay has elapsed
//! the task is detached and runs to completion, so a keystroke arriving while
//! a query is in flight schedules a new cycle instead of killing the old one.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// `schedule(delay) -> handle` / `cancel(handle)`.
pub trait Scheduler: Send + Sync {
    type Handle: Send;

    /// Run `task` once `delay` has elapsed, unless cancelled first.
    fn schedule<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: Future<Output = ()> + Send + 'static;

    /// Cancel a pending task. A no-op if its delay has already elapsed.
    fn cancel(&self, handle: Self::Handle);
}

/// Scheduler backed by the ambient tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

/// A pending delay on the tokio runtime.
#[derive(Debug)]
pub struct DelayHandle(JoinHandle<()>);

impl DelayHandle {
    /// Whether the delay has elapsed or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

impl Scheduler for TokioScheduler {
    type Handle = DelayHandle;

    fn schedule<F>(&self, delay: Duration, task: F) -> DelayHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        DelayHandle(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // detached: aborting the delay handle must not reach the task
            tokio::spawn(task);
        }))
    }

    fn cancel(&self, handle: DelayHandle) {
        handle.0.abort();
    }
}
