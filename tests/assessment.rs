// tests/assessment.rs

use surface_mapper::core::narrative::{simulate_attack_scenarios, NO_OPEN_PORTS};
use surface_mapper::{build_report, PortScanResult, Rating, RiskLevel, ScanRequest};

fn request() -> ScanRequest {
    ScanRequest::parse("192.168.1.20:1-4000").unwrap()
}

#[test]
fn mixed_host_scores_critical() {
    let open = vec![
        PortScanResult::new(22, "SSH"),
        PortScanResult::new(23, "Telnet"),
        PortScanResult::new(80, "HTTP"),
        PortScanResult::new(443, "HTTPS"),
        PortScanResult::new(3389, "RDP"),
    ];
    let report = build_report(&request(), open);

    let tiers: Vec<(&str, RiskLevel)> = report
        .scan_results
        .iter()
        .map(|a| (a.service.as_str(), a.risk_level))
        .collect();
    assert_eq!(
        tiers,
        vec![
            ("SSH", RiskLevel::Low),
            ("Telnet", RiskLevel::High),
            ("HTTP", RiskLevel::Medium),
            ("HTTPS", RiskLevel::Low),
            ("RDP", RiskLevel::High),
        ]
    );

    assert_eq!(report.security_score.value(), 15);
    let summary = &report.executive_summary;
    assert_eq!(summary.rating, Rating::Critical);
    assert_eq!((summary.high_risk_count, summary.medium_risk_count, summary.low_risk_count), (2, 1, 2));
    assert_eq!(summary.total_open_ports, 5);

    let narrative = &report.attack_simulation;
    assert!(narrative.iter().any(|s| s.contains("Remote Access Exploitation") && s.contains("Telnet(23), RDP(3389)")));
    assert!(narrative.iter().any(|s| s.contains("Credential Interception")));
    assert!(narrative.iter().any(|s| s.contains("Web Service Exploitation") && s.contains("HTTP(80)")));
    assert!(narrative.iter().any(|s| s.contains("Maintain Vigilance") && s.contains("SSH(22), HTTPS(443)")));
    assert!(narrative.last().unwrap().contains("2 critical vulnerabilities"));

    assert_eq!(report.scan_metadata.total_ports_scanned, 4000);
    assert_eq!(report.scan_metadata.open_ports_count, 5);
}

#[test]
fn empty_scan_is_perfect() {
    let report = build_report(&request(), Vec::new());
    assert_eq!(report.security_score.value(), 100);
    assert_eq!(report.executive_summary.rating, Rating::Excellent);
    assert_eq!(report.attack_simulation, vec![NO_OPEN_PORTS.to_string()]);
    assert_eq!(
        report.executive_summary.priority_actions,
        vec!["Continue monitoring and maintain security posture".to_string()]
    );
}

#[test]
fn pipeline_is_deterministic() {
    let open = vec![PortScanResult::new(21, "FTP"), PortScanResult::new(5432, "PostgreSQL")];
    let first = build_report(&request(), open.clone());
    let second = build_report(&request(), open);
    assert_eq!(first, second);
    assert_eq!(
        simulate_attack_scenarios(&first.scan_results),
        simulate_attack_scenarios(&second.scan_results)
    );
}
