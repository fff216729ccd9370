//! Remote dump gateway adapter

use std::sync::Arc;

use async_trait::async_trait;
use gamelog_core::DumpGateway;
use gamelog_domain::{DumpInfo, DumpVersions, GameLogError, Result};
use serde_json::json;

use super::parse;
use crate::invoke::Invoker;

/// `DumpGateway` implementation over the remote-invocation boundary.
pub struct RemoteDumpGateway {
    invoker: Arc<dyn Invoker>,
}

impl RemoteDumpGateway {
    /// Create a new remote dump gateway.
    pub fn new(invoker: Arc<dyn Invoker>) -> Self {
        Self { invoker }
    }
}

#[async_trait]
impl DumpGateway for RemoteDumpGateway {
    async fn local_dump_versions(&self) -> Result<DumpVersions> {
        let response = self
            .invoker
            .invoke("get_local_dump_versions", json!({}))
            .await
            .map_err(|err| GameLogError::Store(err.reason))?;
        parse("get_local_dump_versions", response)
    }

    async fn all_dump_info(&self) -> Result<Vec<DumpInfo>> {
        let response = self
            .invoker
            .invoke("get_all_dump_info", json!({}))
            .await
            .map_err(|err| GameLogError::Store(err.reason))?;
        parse("get_all_dump_info", response)
    }

    async fn download_dumps(&self, dumps: &[DumpInfo], to_directory: &str) -> Result<()> {
        self.invoker
            .invoke("download_dumps", json!({ "dumpInfo": dumps, "toDirectory": to_directory }))
            .await
            .map_err(|err| GameLogError::Store(err.reason))?;
        Ok(())
    }

    async fn import_dumps(&self, from_directory: &str) -> Result<()> {
        self.invoker
            .invoke("import_dumps", json!({ "fromDirectory": from_directory }))
            .await
            .map_err(|err| GameLogError::Store(err.reason))?;
        Ok(())
    }
}
