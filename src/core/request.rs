// src/core/request.rs

use std::net::Ipv4Addr;
use std::num::IntErrorKind;
use thiserror::Error;

pub const DEFAULT_START_PORT: u16 = 1;
pub const DEFAULT_END_PORT: u16 = 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("IP address is required")]
    MissingTarget,
    #[error("Invalid IP address format: {0}")]
    InvalidAddress(String),
    #[error("start_port and end_port must be valid integers (got '{0}')")]
    InvalidPort(String),
    #[error("{0}")]
    InvalidRange(String),
}

/// A validated scan target and port range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub ip: Ipv4Addr,
    pub start_port: u16,
    pub end_port: u16,
}

impl ScanRequest {
    /// Checks the range rules: `start >= 1`, `end <= 65535` and `start < end`.
    pub fn new(ip: Ipv4Addr, start_port: u32, end_port: u32) -> Result<Self, RequestError> {
        if start_port < 1 {
            return Err(RequestError::InvalidRange("start_port must be >= 1".to_string()));
        }
        if end_port > u32::from(u16::MAX) {
            return Err(RequestError::InvalidRange("end_port must be <= 65535".to_string()));
        }
        if start_port >= end_port {
            return Err(RequestError::InvalidRange(format!(
                "start_port ({start_port}) must be less than end_port ({end_port})"
            )));
        }
        Ok(Self {
            ip,
            start_port: start_port as u16,
            end_port: end_port as u16,
        })
    }

    /// Parses `IP` or `IP:START-END`. The range defaults to 1-1024.
    pub fn parse(input: &str) -> Result<Self, RequestError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RequestError::MissingTarget);
        }

        let (ip_part, range_part) = match input.split_once(':') {
            Some((ip, range)) => (ip.trim(), Some(range.trim())),
            None => (input, None),
        };
        if ip_part.is_empty() {
            return Err(RequestError::MissingTarget);
        }
        let ip = parse_ipv4(ip_part)?;

        let (start, end) = match range_part {
            None => (u32::from(DEFAULT_START_PORT), u32::from(DEFAULT_END_PORT)),
            Some(range) => {
                let (start, end) = range
                    .split_once('-')
                    .ok_or_else(|| RequestError::InvalidPort(range.to_string()))?;
                (parse_port(start)?, parse_port(end)?)
            }
        };
        Self::new(ip, start, end)
    }

    pub fn total_ports(&self) -> u32 {
        u32::from(self.end_port) - u32::from(self.start_port) + 1
    }
}

/// Strict dotted quad: four decimal octets, each 0-255.
fn parse_ipv4(s: &str) -> Result<Ipv4Addr, RequestError> {
    let octets: Vec<&str> = s.split('.').collect();
    if octets.len() != 4 {
        return Err(RequestError::InvalidAddress(s.to_string()));
    }
    let mut bytes = [0u8; 4];
    for (slot, octet) in bytes.iter_mut().zip(&octets) {
        if octet.is_empty() || !octet.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RequestError::InvalidAddress(s.to_string()));
        }
        *slot = octet
            .parse::<u8>()
            .map_err(|_| RequestError::InvalidAddress(s.to_string()))?;
    }
    Ok(Ipv4Addr::from(bytes))
}

/// Oversized integers saturate so they fail the range check rather than the integer check.
fn parse_port(s: &str) -> Result<u32, RequestError> {
    let s = s.trim();
    match s.parse::<u32>() {
        Ok(port) => Ok(port),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(u32::MAX),
        Err(_) => Err(RequestError::InvalidPort(s.to_string())),
    }
}
