// src/core/models.rs

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

// --- Scan Models ---

/// A single confirmed-open TCP port together with the service name resolved for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortScanResult {
    pub port: u16,
    pub service: String,
}

impl PortScanResult {
    pub fn new(port: u16, service: &str) -> Self {
        Self { port, service: service.to_string() }
    }
}

// --- Risk Models ---

/// Coarse severity tier assigned to an exposed service.
///
/// Ordered from most to least severe so that `RiskLevel::iter()` yields the
/// tiers in the order reports present them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Points this tier removes from the security score.
    pub fn weight(self) -> u32 {
        match self {
            RiskLevel::High => 30,
            RiskLevel::Medium => 15,
            RiskLevel::Low => 5,
        }
    }

    /// Display color used by reports (hex RGB).
    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::High => "#dc3545",
            RiskLevel::Medium => "#ffc107",
            RiskLevel::Low => "#28a745",
        }
    }
}

/// The risk classification of one open port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskAssessment {
    pub port: u16,
    pub service: String,
    pub risk_level: RiskLevel,
    pub risk_color: String,
    pub reason: String,
    pub mitigation: String,
}

// --- Score Models ---

/// Aggregate exposure score. Always within `0..=100`, higher is safer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SecurityScore(u8);

impl SecurityScore {
    pub const MAX: SecurityScore = SecurityScore(100);

    /// Builds a score from an arbitrary value, clamping it into `0..=100`.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Qualitative bucket derived from a `SecurityScore`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl Rating {
    pub fn description(self) -> &'static str {
        match self {
            Rating::Excellent => "Very secure configuration with minimal attack surface",
            Rating::Good => "Secure with minor improvements needed",
            Rating::Fair => "Moderate security concerns require attention",
            Rating::Poor => "Significant security vulnerabilities present",
            Rating::Critical => "Severe security issues requiring immediate action",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Rating::Excellent => "#28a745",
            Rating::Good => "#20c997",
            Rating::Fair => "#ffc107",
            Rating::Poor => "#fd7e14",
            Rating::Critical => "#dc3545",
        }
    }
}

/// High-level digest of an assessment, suitable for the top of a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecutiveSummary {
    pub security_score: SecurityScore,
    pub rating: Rating,
    pub rating_description: String,
    pub rating_color: String,
    pub total_open_ports: usize,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,
    pub priority_actions: Vec<String>,
}

impl ExecutiveSummary {
    pub fn count_for(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high_risk_count,
            RiskLevel::Medium => self.medium_risk_count,
            RiskLevel::Low => self.low_risk_count,
        }
    }
}

/// Ordered attack-scenario sentences: HIGH rules, MEDIUM rules, LOW advice, overall summary.
pub type AttackNarrative = Vec<String>;

// --- Main Report ---

/// Port range and counters describing what was scanned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanMetadata {
    pub start_port: u16,
    pub end_port: u16,
    pub total_ports_scanned: u32,
    pub open_ports_count: usize,
}

/// Everything one assessment run produces for a single target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanReport {
    pub target: String,
    pub scan_metadata: ScanMetadata,
    pub security_score: SecurityScore,
    pub executive_summary: ExecutiveSummary,
    pub attack_simulation: AttackNarrative,
    pub scan_results: Vec<RiskAssessment>,
}
