// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`invocation`] models the two call forms (a command line, or a file plus
//!   an argument list).
//! - [`backend`] provides the `ExecutorBackend` trait and the production
//!   `RealExecutorBackend`, which tests can replace with a fake.
//! - [`execute`] runs a request on any backend and applies the rejection
//!   policy.

pub mod backend;
pub mod invocation;

pub use backend::{ExecOutput, ExecRequest, ExecutorBackend, RealExecutorBackend, Tee};
pub use invocation::Invocation;

use crate::errors::Result;

/// Run `request` on `backend`, failing on an unsuccessful exit when the
/// request asks for rejection.
pub async fn execute(backend: &dyn ExecutorBackend, request: ExecRequest) -> Result<ExecOutput> {
    let invocation = request.invocation.clone();
    let reject = request.reject;

    let output = backend.spawn(request).await?;
    if reject {
        output.ensure_success(&invocation)?;
    }
    Ok(output)
}
