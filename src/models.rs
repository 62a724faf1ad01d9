//! Data model for gathered recon results.
//!
//! The aggregator builds this model fully in memory before any note is
//! written; the sorter reorders it and the renderer consumes it.

use std::fmt;
use std::path::PathBuf;

/// Sentinel for unclassified tools and unresolved service names.
pub const UNKNOWN: &str = "Unknown";

/// Transport protocol of a port directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Protocol {
    /// Lowercase form, matching the port directory prefix and the
    /// `logs/{tcp,udp}` layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
        }
    }

    /// Uppercase form used in rendered notes ("80/TCP", "(80 TCP)").
    pub fn upper(&self) -> &'static str {
        match self {
            Protocol::Tcp => "TCP",
            Protocol::Udp => "UDP",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tool output file found under a port directory.
///
/// Immutable once read: the raw text content and the classification
/// result are captured at gather time.
#[derive(Debug, Clone)]
pub struct ReportFile {
    /// Base name of the file.
    pub file_name: String,
    /// Full path, kept for diagnostics.
    pub path: PathBuf,
    /// Raw text content, embedded verbatim at render time.
    pub contents: String,
    /// Classified tool name, or [`UNKNOWN`].
    pub tool: String,
    /// Base64-encoded command template. `None` means the classifier found
    /// no match; such files are skipped in the rendered command sections.
    pub command_b64: Option<String>,
}

/// Everything gathered for one port directory.
#[derive(Debug, Clone)]
pub struct PortEntry {
    /// Port number parsed from the directory name (protocol prefix stripped).
    pub port: u16,
    pub protocol: Protocol,
    /// Directory the reports were read from.
    pub directory: PathBuf,
    /// Resolved service display name, or [`UNKNOWN`].
    pub service: String,
    /// Distinct tool names in first-seen order. Unclassified files do not
    /// contribute.
    pub tools_used: Vec<String>,
    /// Report files in file-name order.
    pub reports: Vec<ReportFile>,
}

impl PortEntry {
    pub fn new(port: u16, protocol: Protocol, directory: PathBuf, service: String) -> Self {
        Self {
            port,
            protocol,
            directory,
            service,
            tools_used: Vec::new(),
            reports: Vec::new(),
        }
    }

    /// Record a classified tool name, suppressing duplicates
    /// (case-sensitive exact equality) and the [`UNKNOWN`] sentinel.
    pub fn record_tool(&mut self, tool: &str) {
        if tool != UNKNOWN && !self.tools_used.iter().any(|t| t == tool) {
            self.tools_used.push(tool.to_string());
        }
    }

    /// Service name uppercased the way the notes render it.
    pub fn service_upper(&self) -> String {
        self.service.to_uppercase()
    }
}

/// The full in-memory report model, one port list per protocol, in
/// discovery order until the sorter reorders it.
#[derive(Debug, Clone, Default)]
pub struct ReconModel {
    pub tcp: Vec<PortEntry>,
    pub udp: Vec<PortEntry>,
}

impl ReconModel {
    pub fn entries(&self, protocol: Protocol) -> &[PortEntry] {
        match protocol {
            Protocol::Tcp => &self.tcp,
            Protocol::Udp => &self.udp,
        }
    }

    pub fn port_count(&self) -> usize {
        self.tcp.len() + self.udp.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tool_deduplicates() {
        let mut entry = PortEntry::new(80, Protocol::Tcp, PathBuf::from("tcp80"), "HTTP".into());
        entry.record_tool("nmap");
        entry.record_tool("curl");
        entry.record_tool("nmap");
        assert_eq!(entry.tools_used, vec!["nmap", "curl"]);
    }

    #[test]
    fn test_record_tool_skips_unknown() {
        let mut entry = PortEntry::new(80, Protocol::Tcp, PathBuf::from("tcp80"), "HTTP".into());
        entry.record_tool(UNKNOWN);
        assert!(entry.tools_used.is_empty());
    }

    #[test]
    fn test_record_tool_case_sensitive() {
        let mut entry = PortEntry::new(80, Protocol::Tcp, PathBuf::from("tcp80"), "HTTP".into());
        entry.record_tool("nmap");
        entry.record_tool("Nmap");
        assert_eq!(entry.tools_used, vec!["nmap", "Nmap"]);
    }

    #[test]
    fn test_protocol_forms() {
        assert_eq!(Protocol::Tcp.as_str(), "tcp");
        assert_eq!(Protocol::Udp.upper(), "UDP");
        assert_eq!(Protocol::Udp.to_string(), "udp");
    }
}
