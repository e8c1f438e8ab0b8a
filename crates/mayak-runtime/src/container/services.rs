//! # Service Container
//!
//! Holds the subsystem services wired to their adapters.
//!
//! ## Thread Safety
//!
//! - Services are `Send + Sync` and shared through `Arc`
//! - All three repository ports share one `InMemoryStore`

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, instrument};

use mk_01_auth::LoginService;
use mk_02_road_events::RoadEventService;
use mk_03_push::PushService;

use crate::adapters::{InMemoryStore, LoggingDispatcher};
use crate::container::config::{AppConfig, ConfigError};

/// Concrete login service over the in-memory store.
pub type ConcreteLoginService = LoginService<InMemoryStore>;

/// Concrete road event service over the in-memory store.
pub type ConcreteRoadEventService = RoadEventService<InMemoryStore>;

/// Concrete push service over the in-memory store and logging transport.
pub type ConcretePushService = PushService<InMemoryStore, LoggingDispatcher>;

/// Central container holding all service instances.
pub struct ServiceContainer {
    /// Telegram login (mk-01)
    pub login: Arc<ConcreteLoginService>,

    /// Road events (mk-02)
    pub events: Arc<ConcreteRoadEventService>,

    /// Push notifications (mk-03)
    pub push: Arc<ConcretePushService>,

    /// Shared store behind every repository port
    pub store: Arc<InMemoryStore>,
}

impl ServiceContainer {
    /// Build every service from validated configuration.
    ///
    /// # Errors
    ///
    /// Any `AppConfig::validate` failure.
    #[instrument(name = "service_init", skip(config))]
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!("Initializing Mayak service container");

        let store = Arc::new(InMemoryStore::new());

        let login = LoginService::new(config.auth, Arc::clone(&store))
            .map_err(|_| ConfigError::MissingBotToken)?;
        info!("  [01] Telegram login initialized");

        let events = RoadEventService::new(config.listing, Arc::clone(&store));
        info!(
            radius_km = config.listing.default_radius_km,
            window_secs = config.listing.max_event_age.as_secs(),
            "  [02] Road events initialized"
        );

        let push = PushService::new(
            config.push,
            Arc::clone(&store),
            Arc::new(LoggingDispatcher),
        );
        info!("  [03] Push notifications initialized");

        Ok(Self {
            login: Arc::new(login),
            events: Arc::new(events),
            push: Arc::new(push),
            store,
        })
    }

    /// Load configuration from the environment, start telemetry and build
    /// the container.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = AppConfig::from_env().context("Failed to read configuration")?;
        mayak_telemetry::init_telemetry(&config.telemetry)
            .context("Failed to initialize telemetry")?;
        Self::new(config).context("Invalid configuration")
    }
}
