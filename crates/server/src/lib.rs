//! HTTP endpoint for the Cramer solver.
//!
//! The server exposes a single `GET /solve?coef=<c1>,...,<c12>` endpoint that
//! answers with the echoed system and its solution as plain text. Malformed
//! requests get `400 Bad Request` with a short description.
//!
//! # Example
//! ```no_run
//! use cramer_server::{Server, ServerConfig};
//!
//! # async fn run() -> Result<(), cramer_server::ServerError> {
//! let server = Server::new(ServerConfig::default())?;
//! server
//!     .run_until(async {
//!         tokio::signal::ctrl_c().await.ok();
//!     })
//!     .await
//! # }
//! ```

mod config;
mod error;
mod handler;
mod routes;

use std::{future::Future, net::SocketAddr};

use tracing::info;
use warp::Filter;

pub use config::{ConfigError, HOST_VAR, PORT_VAR, ServerConfig};
pub use error::{RequestError, ServerError};
pub use handler::{COEFFICIENTS_PARAM, handle_solve};
pub use routes::routes;

/// A solver server built from a validated [`ServerConfig`].
#[derive(Debug, Clone)]
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Creates a server after validating its config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid.
    pub fn new(config: ServerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the server's config.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Binds the listener and returns the bound address with the serving future.
    ///
    /// The future completes once `shutdown` resolves and in-flight requests
    /// have finished.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` if the address cannot be bound.
    pub fn bind(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(SocketAddr, impl Future<Output = ()> + 'static), ServerError> {
        let routes = routes(&self.config).with(warp::trace::request());

        let (addr, serving) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(self.config.socket_addr(), shutdown)
            .map_err(ServerError::Bind)?;

        info!(%addr, route = %self.config.route, "server listening");
        Ok((addr, serving))
    }

    /// Serves requests until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` if the address cannot be bound.
    pub async fn run_until(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), ServerError> {
        let (_, serving) = self.bind(shutdown)?;
        serving.await;
        info!("server stopped");
        Ok(())
    }
}
