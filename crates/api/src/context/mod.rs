//! Application context - dependency injection container

use std::sync::Arc;

use gamelog_core::{
    CatalogProvider, DashboardService, DiscoveryService, DumpGateway, GateSequencer,
    LibraryService, LogStore, SettingsService, Session, UpdateChecker,
};
use gamelog_infra::{
    Invoker, RemoteCatalogProvider, RemoteDumpGateway, RemoteLogStore, RemoteUpdateChecker,
};

/// Application context - holds all services and dependencies.
///
/// Built once per process around the host's remote-invocation primitive.
/// A detached context (static rendering, no UI attached yet) never lets
/// a command reach `invoke`; commands return their zero-valued payloads
/// instead.
pub struct AppContext {
    // Collaborator ports
    pub store: Arc<dyn LogStore>,
    pub catalog: Arc<dyn CatalogProvider>,
    pub updates: Arc<dyn UpdateChecker>,
    pub dumps: Arc<dyn DumpGateway>,

    // Session state
    pub session: Arc<Session>,

    // Page services
    pub dashboard: Arc<DashboardService>,
    pub library: Arc<LibraryService>,
    pub discovery: Arc<DiscoveryService>,
    pub settings: Arc<SettingsService>,

    host_attached: bool,
}

impl AppContext {
    /// Create a context for an attached host.
    pub fn new(invoker: Arc<dyn Invoker>) -> Self {
        Self::with_host_attachment(invoker, true)
    }

    /// Create a context whose commands short-circuit to zero-valued
    /// payloads instead of invoking the backend.
    pub fn detached(invoker: Arc<dyn Invoker>) -> Self {
        Self::with_host_attachment(invoker, false)
    }

    fn with_host_attachment(invoker: Arc<dyn Invoker>, host_attached: bool) -> Self {
        let store: Arc<dyn LogStore> = Arc::new(RemoteLogStore::new(Arc::clone(&invoker)));
        let catalog: Arc<dyn CatalogProvider> =
            Arc::new(RemoteCatalogProvider::new(Arc::clone(&invoker)));
        let updates: Arc<dyn UpdateChecker> =
            Arc::new(RemoteUpdateChecker::new(Arc::clone(&invoker)));
        let dumps: Arc<dyn DumpGateway> = Arc::new(RemoteDumpGateway::new(invoker));

        let session = Arc::new(Session::new());

        let gates = GateSequencer::new(
            Arc::clone(&updates),
            Arc::clone(&store),
            Arc::clone(&session),
        );
        let dashboard = Arc::new(DashboardService::new(
            gates,
            Arc::clone(&store),
            Arc::clone(&catalog),
        ));
        let library = Arc::new(LibraryService::new(Arc::clone(&store), Arc::clone(&catalog)));
        let discovery = Arc::new(DiscoveryService::new(Arc::clone(&store), Arc::clone(&catalog)));
        let settings = Arc::new(SettingsService::new(Arc::clone(&store)));

        Self {
            store,
            catalog,
            updates,
            dumps,
            session,
            dashboard,
            library,
            discovery,
            settings,
            host_attached,
        }
    }

    /// Whether the host UI is attached and the backend reachable.
    pub fn host_attached(&self) -> bool {
        self.host_attached
    }
}
