// tests/port_scan.rs

use std::time::Duration;
use surface_mapper::core::services::{ServiceDatabase, ServiceResolver};
use surface_mapper::{PortScanner, ScanError, ScannerConfig};
use tokio::net::TcpListener;

fn scanner(workers: usize) -> PortScanner {
    let config = ScannerConfig::default()
        .with_workers(workers)
        .with_connect_timeout(Duration::from_millis(300));
    PortScanner::new(config).with_resolver(ServiceResolver::with_database(ServiceDatabase::default()))
}

async fn listeners(count: usize) -> Vec<TcpListener> {
    let mut out = Vec::new();
    for _ in 0..count {
        out.push(TcpListener::bind("127.0.0.1:0").await.unwrap());
    }
    out
}

fn port_of(listener: &TcpListener) -> u16 {
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn finds_every_listening_port_sorted_and_in_range() {
    let open = listeners(3).await;
    let ports: Vec<u16> = open.iter().map(port_of).collect();
    let start = *ports.iter().min().unwrap();
    let end = *ports.iter().max().unwrap();

    let results = scanner(16).scan("127.0.0.1", start, end).await.unwrap();
    let found: Vec<u16> = results.iter().map(|r| r.port).collect();

    for port in &ports {
        assert!(found.contains(port), "port {port} not reported in {found:?}");
    }
    assert!(found.windows(2).all(|w| w[0] < w[1]), "not strictly ascending: {found:?}");
    assert!(found.iter().all(|p| (start..=end).contains(p)));
}

#[tokio::test]
async fn closed_ports_are_absent_not_errors() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let closed = port_of(&listener);
    drop(listener);

    let results = scanner(4).scan("127.0.0.1", closed, closed.saturating_add(1)).await.unwrap();
    assert!(results.iter().all(|r| r.port != closed));
}

#[tokio::test]
async fn unknown_ports_resolve_to_unknown_service() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = port_of(&listener);

    let results = scanner(2).scan("127.0.0.1", port, port).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].port, port);
    assert_eq!(results[0].service, "Unknown");
}

#[tokio::test]
async fn a_single_worker_still_covers_the_range() {
    let open = listeners(2).await;
    let ports: Vec<u16> = open.iter().map(port_of).collect();
    let start = *ports.iter().min().unwrap();
    let end = *ports.iter().max().unwrap();
    if end - start > 200 {
        // Ephemeral ports landed far apart; a one-worker walk would be slow for no gain.
        return;
    }

    let results = scanner(1).scan("localhost", start, end).await.unwrap();
    for port in &ports {
        assert!(results.iter().any(|r| r.port == *port));
    }
}

#[tokio::test]
async fn one_scanner_serves_overlapping_scans() {
    let a = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let b = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let (pa, pb) = (port_of(&a), port_of(&b));
    let scanner = scanner(8);

    let (ra, rb) = tokio::join!(scanner.scan("127.0.0.1", pa, pa), scanner.scan("127.0.0.1", pb, pb));
    let (ra, rb) = (ra.unwrap(), rb.unwrap());
    assert_eq!(ra.iter().map(|r| r.port).collect::<Vec<_>>(), vec![pa]);
    assert_eq!(rb.iter().map(|r| r.port).collect::<Vec<_>>(), vec![pb]);
}

#[tokio::test]
async fn unresolvable_target_aborts_the_scan() {
    let err = scanner(4).scan("no-such-host.invalid", 1, 100).await.unwrap_err();
    assert!(matches!(err, ScanError::Resolution { .. }));
    assert!(err.to_string().contains("no-such-host.invalid"));
}
