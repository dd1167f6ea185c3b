// src/core/assessment.rs

use crate::core::knowledge_base::assess_risks;
use crate::core::models::{PortScanResult, ScanMetadata, ScanReport};
use crate::core::narrative::simulate_attack_scenarios;
use crate::core::request::ScanRequest;
use crate::core::scanner::{PortScanner, ScanError};
use crate::core::scoring::{calculate_security_score, generate_executive_summary};
use tracing::info;

/// Scans the requested range and runs the full risk analysis on what was found.
pub async fn run_assessment(scanner: &PortScanner, request: &ScanRequest) -> Result<ScanReport, ScanError> {
    let target = request.ip.to_string();
    info!(target = %target, start = request.start_port, end = request.end_port, "Starting assessment.");

    let open_ports = scanner.scan(&target, request.start_port, request.end_port).await?;
    info!(open = open_ports.len(), "Port scan completed.");

    Ok(build_report(request, open_ports))
}

/// Classifies, scores, narrates and summarizes a finished scan.
pub fn build_report(request: &ScanRequest, open_ports: Vec<PortScanResult>) -> ScanReport {
    let scan_results = assess_risks(&open_ports);
    let security_score = calculate_security_score(&scan_results);
    let attack_simulation = simulate_attack_scenarios(&scan_results);
    let executive_summary = generate_executive_summary(&scan_results, security_score);

    info!(
        target = %request.ip,
        score = security_score.value(),
        rating = %executive_summary.rating,
        "Assessment completed."
    );

    ScanReport {
        target: request.ip.to_string(),
        scan_metadata: ScanMetadata {
            start_port: request.start_port,
            end_port: request.end_port,
            total_ports_scanned: request.total_ports(),
            open_ports_count: open_ports.len(),
        },
        security_score,
        executive_summary,
        attack_simulation,
        scan_results,
    }
}
