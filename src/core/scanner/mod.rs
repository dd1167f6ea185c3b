// src/core/scanner/mod.rs

//! Concurrent TCP connect scanning.
//!
//! A fixed pool of workers drains one shared FIFO queue of ports. Open ports are sent to
//! a single aggregator over a channel, so workers never touch a shared result list. All
//! queue and result state lives inside one `scan` call, which means a single
//! `PortScanner` can serve overlapping scans of different targets.

pub mod tcp_probe;

use crate::config::ScannerConfig;
use crate::core::models::PortScanResult;
use crate::core::services::ServiceResolver;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use self::tcp_probe::{probe_port, resolve_target};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Hostname could not be resolved: {target}")]
    Resolution {
        target: String,
        #[source]
        source: std::io::Error,
    },
    #[error("scan worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

type PortQueue = Arc<Mutex<mpsc::Receiver<u16>>>;

/// Scans port ranges on a target using TCP connect probes.
#[derive(Debug, Clone)]
pub struct PortScanner {
    config: ScannerConfig,
    resolver: ServiceResolver,
}

impl PortScanner {
    /// A scanner that names services with the host's service database.
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            config,
            resolver: ServiceResolver::system(),
        }
    }

    pub fn with_resolver(mut self, resolver: ServiceResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Probes every port in `start_port..=end_port` and returns the open ones, sorted by port.
    ///
    /// The range is expected to be validated by the caller; an inverted range scans nothing.
    /// Only a failure to resolve `target` is an error. The future completes once every port
    /// has been attempted.
    pub async fn scan(
        &self,
        target: &str,
        start_port: u16,
        end_port: u16,
    ) -> Result<Vec<PortScanResult>, ScanError> {
        let ip = resolve_target(target).await.map_err(|source| {
            error!(target, error = %source, "Hostname could not be resolved.");
            ScanError::Resolution { target: target.to_string(), source }
        })?;

        let total_ports = if start_port <= end_port {
            usize::from(end_port - start_port) + 1
        } else {
            0
        };
        let workers = self.config.workers.clamp(1, total_ports.max(1));
        let connect_timeout = self.config.connect_timeout;

        info!(target, %ip, start_port, end_port, "Starting scan.");
        info!(workers, timeout_ms = connect_timeout.as_millis() as u64, "Scan pool configured.");
        let started = Instant::now();

        let (port_tx, port_rx) = mpsc::channel::<u16>(workers * 2);
        let queue: PortQueue = Arc::new(Mutex::new(port_rx));
        let (result_tx, mut result_rx) = mpsc::unbounded_channel::<PortScanResult>();

        let handles: Vec<JoinHandle<()>> = (0..workers)
            .map(|_| {
                tokio::spawn(run_worker(
                    ip,
                    Arc::clone(&queue),
                    result_tx.clone(),
                    self.resolver.clone(),
                    connect_timeout,
                ))
            })
            .collect();
        // Workers own the remaining senders; the aggregator below stops when they all exit.
        drop(result_tx);

        let feeder = tokio::spawn(async move {
            for port in start_port..=end_port {
                if port_tx.send(port).await.is_err() {
                    break;
                }
            }
        });

        let mut open_ports = Vec::new();
        while let Some(found) = result_rx.recv().await {
            open_ports.push(found);
        }

        feeder.await?;
        for handle in handles {
            handle.await?;
        }

        open_ports.sort_by_key(|r| r.port);

        let elapsed = started.elapsed();
        info!(open = open_ports.len(), "Scan completed.");
        info!(
            duration = ?elapsed,
            ports_per_sec = ports_per_second(total_ports, elapsed),
            "Scan performance."
        );

        Ok(open_ports)
    }
}

impl Default for PortScanner {
    fn default() -> Self {
        Self::new(ScannerConfig::default())
    }
}

/// Takes ports off the queue until it is closed and drained.
async fn run_worker(
    ip: IpAddr,
    queue: PortQueue,
    results: mpsc::UnboundedSender<PortScanResult>,
    resolver: ServiceResolver,
    connect_timeout: Duration,
) {
    loop {
        let next = queue.lock().await.recv().await;
        let Some(port) = next else {
            break;
        };

        if probe_port(SocketAddr::new(ip, port), connect_timeout).await {
            let service = resolver.resolve(port);
            info!(port, service = %service, "Found open port.");
            if results.send(PortScanResult { port, service }).is_err() {
                debug!("Result aggregator gone, stopping worker.");
                break;
            }
        }
    }
}

fn ports_per_second(total_ports: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        (total_ports as f64 / secs * 100.0).round() / 100.0
    } else {
        0.0
    }
}
