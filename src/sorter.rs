//! Model reordering.
//!
//! Groups ports sharing a resolved service name contiguously, keeping the
//! first-seen order of the service names themselves. Pure reordering: no
//! re-resolution, no re-classification.

use crate::models::{PortEntry, ReconModel};

/// Reorder both protocol lists by first-seen service name.
pub fn sort_model(model: ReconModel) -> ReconModel {
    ReconModel {
        tcp: sort_entries(model.tcp),
        udp: sort_entries(model.udp),
    }
}

fn sort_entries(mut entries: Vec<PortEntry>) -> Vec<PortEntry> {
    let mut names: Vec<&str> = Vec::new();
    for entry in &entries {
        if !names.iter().any(|n| *n == entry.service) {
            names.push(&entry.service);
        }
    }
    let names: Vec<String> = names.into_iter().map(String::from).collect();

    // Stable sort keyed on first-seen position keeps the relative order of
    // ports within a service group.
    entries.sort_by_key(|entry| names.iter().position(|n| *n == entry.service));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Protocol;
    use std::path::PathBuf;

    fn entry(port: u16, service: &str) -> PortEntry {
        PortEntry::new(
            port,
            Protocol::Tcp,
            PathBuf::from(format!("tcp{}", port)),
            service.to_string(),
        )
    }

    fn ports(entries: &[PortEntry]) -> Vec<u16> {
        entries.iter().map(|e| e.port).collect()
    }

    #[test]
    fn test_groups_by_first_seen_service() {
        let model = ReconModel {
            tcp: vec![entry(80, "HTTP"), entry(22, "SSH"), entry(8080, "HTTP")],
            udp: Vec::new(),
        };

        let sorted = sort_model(model);
        assert_eq!(ports(&sorted.tcp), vec![80, 8080, 22]);
    }

    #[test]
    fn test_stable_within_group() {
        let model = ReconModel {
            tcp: vec![
                entry(445, "SMB"),
                entry(139, "SMB"),
                entry(53, "DNS"),
                entry(137, "SMB"),
            ],
            udp: Vec::new(),
        };

        let sorted = sort_model(model);
        assert_eq!(ports(&sorted.tcp), vec![445, 139, 137, 53]);
    }

    #[test]
    fn test_protocols_sorted_independently() {
        let model = ReconModel {
            tcp: vec![entry(80, "HTTP"), entry(22, "SSH")],
            udp: vec![entry(161, "snmp"), entry(123, "NTP"), entry(162, "snmp")],
        };

        let sorted = sort_model(model);
        assert_eq!(ports(&sorted.tcp), vec![80, 22]);
        assert_eq!(ports(&sorted.udp), vec![161, 162, 123]);
    }

    #[test]
    fn test_empty_model() {
        let sorted = sort_model(ReconModel::default());
        assert!(sorted.tcp.is_empty());
        assert!(sorted.udp.is_empty());
    }
}
