// src/core/mod.rs

/// Data structures shared by every stage: open ports, risk assessments, scores and the report.
pub mod models;

/// Port number to service name resolution.
pub mod services;

/// Concurrent TCP connect scanning.
pub mod scanner;

/// Static risk profiles per service and the classification step built on them.
pub mod knowledge_base;

/// Security score, rating and executive summary.
pub mod scoring;

/// Attack-scenario narratives.
pub mod narrative;

/// Validation of user supplied targets and port ranges.
pub mod request;

/// The scan → classify → score → narrate → summarize pipeline.
pub mod assessment;
