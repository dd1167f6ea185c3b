// src/core/services.rs

//! Port number to service name resolution.
//!
//! A small table of well-known ports always wins. Ports it does not cover fall back to
//! the host's service database (`/etc/services` on Unix), reported in upper case, and
//! finally to the literal `"Unknown"`.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

/// Service name returned when neither the static table nor the host database knows a port.
pub const UNKNOWN_SERVICE: &str = "Unknown";

#[cfg(not(windows))]
const SYSTEM_SERVICES_PATH: &str = "/etc/services";
#[cfg(windows)]
const SYSTEM_SERVICES_PATH: &str = r"C:\Windows\System32\drivers\etc\services";

/// Well-known ports. Names here must line up with the risk knowledge base.
static COMMON_SERVICES: &[(u16, &str)] = &[
    (20, "FTP-DATA"),
    (21, "FTP"),
    (22, "SSH"),
    (23, "Telnet"),
    (25, "SMTP"),
    (53, "DNS"),
    (80, "HTTP"),
    (110, "POP3"),
    (143, "IMAP"),
    (443, "HTTPS"),
    (445, "SMB"),
    (3306, "MySQL"),
    (3389, "RDP"),
    (5432, "PostgreSQL"),
    (5900, "VNC"),
    (8080, "HTTP-Proxy"),
    (8443, "HTTPS-Alt"),
];

static SYSTEM_SERVICES: Lazy<Arc<ServiceDatabase>> = Lazy::new(|| {
    match ServiceDatabase::load(Path::new(SYSTEM_SERVICES_PATH)) {
        Ok(db) if db.is_empty() => {
            debug!(path = SYSTEM_SERVICES_PATH, "Host service database has no TCP entries.");
            Arc::new(db)
        }
        Ok(db) => {
            debug!(path = SYSTEM_SERVICES_PATH, entries = db.len(), "Loaded host service database.");
            Arc::new(db)
        }
        Err(e) => {
            debug!(path = SYSTEM_SERVICES_PATH, error = %e, "Host service database unavailable.");
            Arc::new(ServiceDatabase::default())
        }
    }
});

/// TCP entries parsed from a `services(5)` formatted file.
#[derive(Debug, Clone, Default)]
pub struct ServiceDatabase {
    tcp: HashMap<u16, String>,
}

impl ServiceDatabase {
    /// Parses `name port/protocol [aliases...] [# comment]` lines.
    ///
    /// Only `tcp` entries are kept. When a port appears more than once the first
    /// entry wins, mirroring how the C library's `getservbyport` walks the file.
    pub fn parse(contents: &str) -> Self {
        let mut tcp = HashMap::new();
        for line in contents.lines() {
            let line = line.split('#').next().unwrap_or_default();
            let mut fields = line.split_whitespace();
            let (Some(name), Some(port_proto)) = (fields.next(), fields.next()) else {
                continue;
            };
            let Some((port, proto)) = port_proto.split_once('/') else {
                continue;
            };
            if !proto.eq_ignore_ascii_case("tcp") {
                continue;
            }
            if let Ok(port) = port.parse::<u16>() {
                tcp.entry(port).or_insert_with(|| name.to_string());
            }
        }
        Self { tcp }
    }

    pub fn load(path: &Path) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    pub fn lookup(&self, port: u16) -> Option<&str> {
        self.tcp.get(&port).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tcp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tcp.is_empty()
    }
}

/// Resolves port numbers to human-readable service names. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ServiceResolver {
    database: Arc<ServiceDatabase>,
}

impl ServiceResolver {
    /// A resolver backed by the host's service database.
    pub fn system() -> Self {
        Self { database: Arc::clone(&SYSTEM_SERVICES) }
    }

    /// A resolver backed by the given database instead of the host's.
    pub fn with_database(database: ServiceDatabase) -> Self {
        Self { database: Arc::new(database) }
    }

    /// Never fails: unmapped ports resolve to [`UNKNOWN_SERVICE`].
    pub fn resolve(&self, port: u16) -> String {
        if let Some((_, name)) = COMMON_SERVICES.iter().find(|(p, _)| *p == port) {
            return (*name).to_string();
        }
        match self.database.lookup(port) {
            Some(name) => {
                trace!(port, service = name, "Resolved port from host service database.");
                name.to_uppercase()
            }
            None => UNKNOWN_SERVICE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Network services, Internet style
tcpmux          1/tcp                           # TCP port service multiplexer
echo            7/tcp
echo            7/udp
ssh             22/tcp                          # SSH Remote Login Protocol
domain          53/tcp                          # Domain Name Server
gopher          70/tcp
kerberos        88/tcp          kerberos5 krb5  # Kerberos v5
kerberos-alt    88/tcp
snmp            161/udp
";

    fn resolver() -> ServiceResolver {
        ServiceResolver::with_database(ServiceDatabase::parse(SAMPLE))
    }

    #[test]
    fn static_table_takes_precedence() {
        let r = resolver();
        assert_eq!(r.resolve(22), "SSH");
        assert_eq!(r.resolve(53), "DNS");
        assert_eq!(r.resolve(8443), "HTTPS-Alt");
    }

    #[test]
    fn falls_back_to_uppercased_database_entry() {
        let r = resolver();
        assert_eq!(r.resolve(70), "GOPHER");
        assert_eq!(r.resolve(1), "TCPMUX");
    }

    #[test]
    fn first_database_entry_wins() {
        assert_eq!(resolver().resolve(88), "KERBEROS");
    }

    #[test]
    fn udp_only_entries_are_ignored() {
        assert_eq!(resolver().resolve(161), UNKNOWN_SERVICE);
    }

    #[test]
    fn unmapped_port_is_unknown() {
        let r = ServiceResolver::with_database(ServiceDatabase::default());
        assert_eq!(r.resolve(31337), "Unknown");
        assert_eq!(r.resolve(70), "Unknown");
    }

    #[test]
    fn malformed_lines_are_skipped() {
        assert!(ServiceDatabase::parse("garbage\nfoo notaport/tcp\n").is_empty());
        let db = ServiceDatabase::parse("garbage\nfoo notaport/tcp\nbar 99999/tcp\nbaz 9/tcp\n");
        assert!(!db.is_empty());
        assert_eq!(db.len(), 1);
        assert_eq!(db.lookup(9), Some("baz"));
    }
}
