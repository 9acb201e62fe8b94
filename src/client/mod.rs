//! Thin HTTP binding for the function engine control-plane API.
//!
//! [`Client`] wires one manager per resource kind onto a shared
//! [`Transport`]. Managers are stateless: each method performs exactly
//! one HTTP call and decodes the result into read-only [`Resource`]
//! values. All request-building rules (JSON vs multipart, query filters,
//! absent-vs-null fields) live here; the command layer only validates
//! arguments and renders tables.

mod base;
mod error;
mod execution;
mod function;
mod function_alias;
mod function_version;
mod job;
mod runtime;
mod transport;
mod webhook;
mod worker;

pub use base::Resource;
pub use error::ApiError;
pub use execution::{ExecutionCreate, ExecutionManager};
pub use function::{FunctionCode, FunctionManager, FunctionSpec, SwiftObject};
pub use function_alias::{AliasCreate, AliasUpdate, FunctionAliasManager};
pub use function_version::FunctionVersionManager;
pub use job::{JobCreate, JobManager, JobUpdate};
pub use runtime::{RuntimeCreate, RuntimeManager};
pub use transport::Transport;
pub use webhook::{WebhookCreate, WebhookManager, WebhookUpdate};
pub use worker::WorkerManager;

use base::ManagerCore;

use crate::config::ProfileConfig;

/// Client for the function engine v1 API. Constructed once per command
/// invocation from a resolved endpoint profile.
pub struct Client {
    transport: Transport,
}

impl Client {
    pub fn new(profile: &ProfileConfig) -> anyhow::Result<Self> {
        Ok(Client {
            transport: Transport::new(profile)?,
        })
    }

    fn core(&self) -> ManagerCore<'_> {
        ManagerCore {
            transport: &self.transport,
        }
    }

    pub fn runtimes(&self) -> RuntimeManager<'_> {
        RuntimeManager { core: self.core() }
    }

    pub fn functions(&self) -> FunctionManager<'_> {
        FunctionManager { core: self.core() }
    }

    pub fn function_versions(&self) -> FunctionVersionManager<'_> {
        FunctionVersionManager { core: self.core() }
    }

    pub fn aliases(&self) -> FunctionAliasManager<'_> {
        FunctionAliasManager { core: self.core() }
    }

    pub fn executions(&self) -> ExecutionManager<'_> {
        ExecutionManager { core: self.core() }
    }

    pub fn jobs(&self) -> JobManager<'_> {
        JobManager { core: self.core() }
    }

    pub fn webhooks(&self) -> WebhookManager<'_> {
        WebhookManager { core: self.core() }
    }

    pub fn workers(&self) -> WorkerManager<'_> {
        WorkerManager { core: self.core() }
    }
}
