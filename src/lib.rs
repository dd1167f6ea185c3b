// src/lib.rs

//! TCP attack-surface mapping: concurrent port scanning, rule-based risk classification,
//! scoring and attack-scenario narratives.

pub mod config;
pub mod core;
pub mod logging;
pub mod report;

pub use crate::config::ScannerConfig;
pub use crate::core::assessment::{build_report, run_assessment};
pub use crate::core::models::{
    ExecutiveSummary, PortScanResult, Rating, RiskAssessment, RiskLevel, ScanReport, SecurityScore,
};
pub use crate::core::request::{RequestError, ScanRequest};
pub use crate::core::scanner::{PortScanner, ScanError};
