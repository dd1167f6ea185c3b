//! Static risk knowledge base for exposed network services.
//!
//! Every service the resolver can name maps to a risk tier, the reason it carries that
//! risk and what to do about it. Services missing from the table fall back to
//! [`DEFAULT_PROFILE`], so classification never fails.

use crate::core::models::{PortScanResult, RiskAssessment, RiskLevel};
use tracing::info;

/// The risk profile of one service.
#[derive(Debug, PartialEq, Eq)]
pub struct RiskProfile {
    /// Service name exactly as produced by the service resolver (e.g. "Telnet").
    pub service: &'static str,
    pub risk_level: RiskLevel,
    /// Why the service is exposed at this tier.
    pub reason: &'static str,
    /// Clear, actionable steps to reduce the exposure.
    pub mitigation: &'static str,
}

/// Applied to any service the table does not know, including "Unknown".
pub static DEFAULT_PROFILE: RiskProfile = RiskProfile {
    service: "Unknown",
    risk_level: RiskLevel::Medium,
    reason: "Unidentified service requires investigation",
    mitigation: "Investigate service identity. Close if unnecessary. Ensure proper security.",
};

static PROFILES: &[RiskProfile] = &[
    // --- HIGH: plaintext protocols, remote access and databases ---
    RiskProfile {
        service: "Telnet",
        risk_level: RiskLevel::High,
        reason: "Unencrypted protocol transmitting credentials in plaintext",
        mitigation: "Replace with SSH. Disable Telnet service immediately.",
    },
    RiskProfile {
        service: "FTP",
        risk_level: RiskLevel::High,
        reason: "Unencrypted file transfer with plaintext authentication",
        mitigation: "Use SFTP or FTPS. Configure with strong authentication.",
    },
    RiskProfile {
        service: "SMB",
        risk_level: RiskLevel::High,
        reason: "Vulnerable to ransomware and lateral movement attacks",
        mitigation: "Restrict access with firewall rules. Keep SMB version updated. Enable SMB signing.",
    },
    RiskProfile {
        service: "RDP",
        risk_level: RiskLevel::High,
        reason: "Common target for brute-force attacks and exploitation",
        mitigation: "Use VPN for access. Enable Network Level Authentication. Implement MFA.",
    },
    RiskProfile {
        service: "VNC",
        risk_level: RiskLevel::High,
        reason: "Often configured with weak passwords or no encryption",
        mitigation: "Use SSH tunneling. Implement strong authentication. Consider alternatives.",
    },
    RiskProfile {
        service: "MySQL",
        risk_level: RiskLevel::High,
        reason: "Database exposed to internet increases attack surface",
        mitigation: "Bind to localhost only. Use firewall rules. Implement strong passwords.",
    },
    RiskProfile {
        service: "PostgreSQL",
        risk_level: RiskLevel::High,
        reason: "Database service should not be publicly accessible",
        mitigation: "Restrict to internal network. Use pg_hba.conf properly. Enable SSL.",
    },
    // --- MEDIUM: web, mail and name services ---
    RiskProfile {
        service: "HTTP",
        risk_level: RiskLevel::Medium,
        reason: "Unencrypted web traffic vulnerable to interception",
        mitigation: "Implement HTTPS with valid SSL/TLS certificates. Redirect HTTP to HTTPS.",
    },
    RiskProfile {
        service: "HTTP-Proxy",
        risk_level: RiskLevel::Medium,
        reason: "Proxy service may allow unauthorized access",
        mitigation: "Implement authentication. Restrict access by IP whitelist.",
    },
    RiskProfile {
        service: "HTTPS-Alt",
        risk_level: RiskLevel::Medium,
        reason: "Non-standard HTTPS port may be misconfigured",
        mitigation: "Ensure proper SSL/TLS configuration. Use standard ports when possible.",
    },
    RiskProfile {
        service: "SMTP",
        risk_level: RiskLevel::Medium,
        reason: "Mail server can be abused for spam or relay attacks",
        mitigation: "Configure SPF, DKIM, DMARC. Disable open relay. Use authentication.",
    },
    RiskProfile {
        service: "POP3",
        risk_level: RiskLevel::Medium,
        reason: "Unencrypted email retrieval protocol",
        mitigation: "Use POP3S (SSL/TLS). Consider IMAP with encryption instead.",
    },
    RiskProfile {
        service: "IMAP",
        risk_level: RiskLevel::Medium,
        reason: "Email protocol without encryption",
        mitigation: "Use IMAPS (SSL/TLS). Enforce strong authentication.",
    },
    RiskProfile {
        service: "DNS",
        risk_level: RiskLevel::Medium,
        reason: "DNS server may be vulnerable to amplification attacks",
        mitigation: "Restrict recursive queries. Implement rate limiting. Use DNSSEC.",
    },
    // --- LOW: encrypted or data-only channels ---
    RiskProfile {
        service: "HTTPS",
        risk_level: RiskLevel::Low,
        reason: "Encrypted web service (validate certificate and configuration)",
        mitigation: "Keep SSL/TLS updated. Use strong ciphers. Monitor certificate expiration.",
    },
    RiskProfile {
        service: "SSH",
        risk_level: RiskLevel::Low,
        reason: "Secure but requires proper configuration",
        mitigation: "Disable password auth. Use key-based authentication. Change default port.",
    },
    RiskProfile {
        service: "FTP-DATA",
        risk_level: RiskLevel::Low,
        reason: "FTP data channel (assess based on FTP configuration)",
        mitigation: "Secure if using FTPS. Otherwise follow FTP mitigation strategies.",
    },
];

/// Looks up the risk profile for a service name. Total: unknown names get [`DEFAULT_PROFILE`].
pub fn classify(service: &str) -> &'static RiskProfile {
    PROFILES
        .iter()
        .find(|p| p.service == service)
        .unwrap_or(&DEFAULT_PROFILE)
}

/// Classifies every open port, preserving input order.
pub fn assess_risks(open_ports: &[PortScanResult]) -> Vec<RiskAssessment> {
    open_ports
        .iter()
        .map(|open| {
            let profile = classify(&open.service);
            info!(port = open.port, service = %open.service, risk = %profile.risk_level, "Classified open port.");
            RiskAssessment {
                port: open.port,
                service: open.service.clone(),
                risk_level: profile.risk_level,
                risk_color: profile.risk_level.color().to_string(),
                reason: profile.reason.to_string(),
                mitigation: profile.mitigation.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_services_map_to_their_tier() {
        for name in ["Telnet", "FTP", "SMB", "RDP", "VNC", "MySQL", "PostgreSQL"] {
            assert_eq!(classify(name).risk_level, RiskLevel::High, "{name}");
        }
        for name in ["HTTP", "HTTP-Proxy", "HTTPS-Alt", "SMTP", "POP3", "IMAP", "DNS"] {
            assert_eq!(classify(name).risk_level, RiskLevel::Medium, "{name}");
        }
        for name in ["HTTPS", "SSH", "FTP-DATA"] {
            assert_eq!(classify(name).risk_level, RiskLevel::Low, "{name}");
        }
    }

    #[test]
    fn unknown_services_fall_back_to_default() {
        assert_eq!(classify("Unknown"), &DEFAULT_PROFILE);
        assert_eq!(classify("GOPHER"), &DEFAULT_PROFILE);
        assert_eq!(classify(""), &DEFAULT_PROFILE);
        // Lookup is case sensitive; host database names come back upper-cased.
        assert_eq!(classify("TELNET").risk_level, RiskLevel::Medium);
    }

    #[test]
    fn every_service_in_the_table_is_unique() {
        for (i, a) in PROFILES.iter().enumerate() {
            assert!(PROFILES[i + 1..].iter().all(|b| b.service != a.service), "{}", a.service);
        }
    }

    #[test]
    fn assessment_carries_profile_and_color() {
        let results = assess_risks(&[PortScanResult::new(23, "Telnet"), PortScanResult::new(9999, "Unknown")]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].port, 23);
        assert_eq!(results[0].risk_level, RiskLevel::High);
        assert_eq!(results[0].risk_color, "#dc3545");
        assert_eq!(results[0].mitigation, "Replace with SSH. Disable Telnet service immediately.");
        assert_eq!(results[1].risk_level, RiskLevel::Medium);
        assert_eq!(results[1].reason, "Unidentified service requires investigation");
    }

    #[test]
    fn classification_is_repeatable() {
        let input = [PortScanResult::new(80, "HTTP")];
        assert_eq!(assess_risks(&input), assess_risks(&input));
    }
}
