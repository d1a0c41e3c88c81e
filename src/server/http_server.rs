//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinSet;
use tokio::signal;
use log::{info, warn, error};

use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::session::handle_connection;

/// A static file HTTP server.
pub struct HttpServer {
    /// The server configuration.
    pub config: Arc<ServerConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);
        Ok(listener)
    }

    /// Set up a Ctrl+C handler for graceful shutdown.
    fn setup_ctrl_c_handler(shutdown_tx: mpsc::Sender<()>, tasks: &mut JoinSet<()>) {
        tasks.spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        });
    }

    /// Serve one accepted connection in its own task.
    ///
    /// The permit is held until the session ends, so the acceptor cannot take on more
    /// than `max_connections` clients at once.
    fn handle_new_connection(
        mut socket: TcpStream,
        addr: SocketAddr,
        permit: OwnedSemaphorePermit,
        config: Arc<ServerConfig>,
        tasks: &mut JoinSet<()>,
    ) {
        info!("Client connected: {addr}");

        tasks.spawn(async move {
            let _permit = permit;

            if let Err(e) = handle_connection(&mut socket, &config).await {
                warn!("Connection with {addr} failed: {e}");
            }

            drop(socket);
            info!("Connection closed: {addr}");
        });
    }

    /// Handle connection errors.
    async fn handle_connection_error(e: std::io::Error) {
        error!("Error accepting connection: {e}");

        // Typically fd exhaustion; back off before retrying
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        info!("Waiting for active connections to complete...");
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let drained = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    if !e.is_cancelled() {
                        error!("Task failed during shutdown: {e}");
                    }
                }
            }
        })
        .await;

        if drained.is_err() {
            warn!("Shutdown timeout elapsed, dropping {len} connections", len = tasks.len());
            tasks.abort_all();
        }

        info!("Server shutdown complete");
    }

    /// Bind the configured address and serve until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        self.config.validate()?;
        info!("Serving files from {root}", root = self.config.root_dir.display());

        let listener = self.setup_listener().await?;
        self.serve(listener).await
    }

    /// Accept and serve connections on an already bound listener until Ctrl+C.
    pub async fn serve(&self, listener: TcpListener) -> Result<(), Error> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_connections));

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        // Sessions and the signal handler live in separate sets so draining the
        // sessions does not wait for a second Ctrl+C
        let mut tasks = JoinSet::new();
        let mut signal_task = JoinSet::new();
        Self::setup_ctrl_c_handler(shutdown_tx, &mut signal_task);

        loop {
            // Take a slot before accepting, so that with one slot the next client
            // waits in the backlog until the current session is over
            let permit = tokio::select! {
                Some(()) = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }
                permit = semaphore.clone().acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => break,
                },
            };

            tokio::select! {
                Some(()) = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::handle_new_connection(
                                socket,
                                addr,
                                permit,
                                self.config.clone(),
                                &mut tasks,
                            );
                        }
                        Err(e) => Self::handle_connection_error(e).await,
                    }
                }
            }

            // Reap finished sessions so the set does not grow without bound
            while let Some(res) = tasks.try_join_next() {
                if let Err(e) = res {
                    error!("Connection task failed: {e}");
                }
            }
        }

        signal_task.abort_all();
        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }
}
