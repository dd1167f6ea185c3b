// src/report.rs

//! Downloadable JSON security report built from a finished assessment.

use crate::core::models::{RiskAssessment, ScanReport};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const TOOL_NAME: &str = "Adaptive Attack Surface Mapper";
pub const REPORT_TYPE: &str = "Security Assessment Report";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Local>,
    pub tool_name: String,
    pub tool_version: String,
    pub report_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
    pub total_ports_scanned: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanInformation {
    pub target_ip: String,
    pub port_range: PortRange,
    pub open_ports_found: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityAssessment {
    pub security_score: u8,
    pub score_scale: String,
    pub rating: String,
    pub rating_description: String,
    pub risk_breakdown: RiskBreakdown,
    pub priority_actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatAnalysis {
    pub attack_scenarios: Vec<String>,
    pub scenario_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedFindings {
    pub ports_and_services: Vec<RiskAssessment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsSummary {
    pub immediate_actions: Vec<String>,
    pub medium_term_actions: Vec<String>,
    pub long_term_strategy: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFooter {
    pub disclaimer: String,
    pub confidentiality: String,
    pub validity: String,
}

/// The exported document. Field order is the order readers see in the JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedReport {
    pub report_metadata: ReportMetadata,
    pub scan_information: ScanInformation,
    pub security_assessment: SecurityAssessment,
    pub threat_analysis: ThreatAnalysis,
    pub detailed_findings: DetailedFindings,
    pub recommendations_summary: RecommendationsSummary,
    pub report_footer: ReportFooter,
}

const IMMEDIATE_ACTIONS: &[&str] = &[
    "Review all HIGH risk services immediately",
    "Implement network segmentation to isolate vulnerable services",
    "Enable multi-factor authentication (MFA) on all remote access",
    "Keep all systems and services patched and updated",
];

const MEDIUM_TERM_ACTIONS: &[&str] = &[
    "Conduct a full security audit",
    "Implement a Web Application Firewall (WAF)",
    "Deploy intrusion detection/prevention systems (IDS/IPS)",
    "Establish regular vulnerability scanning schedule",
];

const LONG_TERM_STRATEGY: &[&str] = &[
    "Develop comprehensive security hardening standards",
    "Implement zero-trust network architecture",
    "Establish security awareness training program",
    "Create incident response and disaster recovery plans",
];

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

impl ExportedReport {
    pub fn from_scan(scan: &ScanReport, generated_at: DateTime<Local>) -> Self {
        let summary = &scan.executive_summary;
        Self {
            report_metadata: ReportMetadata {
                generated_at,
                tool_name: TOOL_NAME.to_string(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                report_type: REPORT_TYPE.to_string(),
            },
            scan_information: ScanInformation {
                target_ip: scan.target.clone(),
                port_range: PortRange {
                    start: scan.scan_metadata.start_port,
                    end: scan.scan_metadata.end_port,
                    total_ports_scanned: scan.scan_metadata.total_ports_scanned,
                },
                open_ports_found: scan.scan_metadata.open_ports_count,
            },
            security_assessment: SecurityAssessment {
                security_score: scan.security_score.value(),
                score_scale: "0-100 (Higher is Better)".to_string(),
                rating: summary.rating.to_string(),
                rating_description: summary.rating_description.clone(),
                risk_breakdown: RiskBreakdown {
                    high_risk: summary.high_risk_count,
                    medium_risk: summary.medium_risk_count,
                    low_risk: summary.low_risk_count,
                },
                priority_actions: summary.priority_actions.clone(),
            },
            threat_analysis: ThreatAnalysis {
                attack_scenarios: scan.attack_simulation.clone(),
                scenario_count: scan.attack_simulation.len(),
            },
            detailed_findings: DetailedFindings {
                ports_and_services: scan.scan_results.clone(),
            },
            recommendations_summary: RecommendationsSummary {
                immediate_actions: owned(IMMEDIATE_ACTIONS),
                medium_term_actions: owned(MEDIUM_TERM_ACTIONS),
                long_term_strategy: owned(LONG_TERM_STRATEGY),
            },
            report_footer: ReportFooter {
                disclaimer: "This report is for authorized security testing only. \
                             Unauthorized network scanning is illegal."
                    .to_string(),
                confidentiality: "CONFIDENTIAL - Handle according to your organization's data policies".to_string(),
                validity: "This report reflects system state at time of scan. \
                           Changes to systems may affect validity of findings."
                    .to_string(),
            },
        }
    }

    /// `security_report_<ip>_<YYYYmmdd_HHMMSS>.json`
    pub fn file_name(&self) -> String {
        format!(
            "security_report_{}_{}.json",
            self.scan_information.target_ip,
            self.report_metadata.generated_at.format("%Y%m%d_%H%M%S")
        )
    }
}

/// Writes the report for `scan` into `dir` as pretty-printed JSON and returns the file path.
pub fn export_report(scan: &ScanReport, dir: &Path) -> Result<PathBuf, ExportError> {
    let report = ExportedReport::from_scan(scan, Local::now());
    let json = serde_json::to_string_pretty(&report)?;

    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    let path = dir.join(report.file_name());
    std::fs::write(&path, json).map_err(|source| ExportError::Io { path: path.clone(), source })?;

    info!(path = %path.display(), "Report exported.");
    Ok(path)
}
