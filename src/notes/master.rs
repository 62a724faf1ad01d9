//! Master enumeration document.
//!
//! A single summary note with a progress table over every discovered port,
//! one foldable body section per resolved service transcluding the port's
//! log note, and a trailing review table for unresolved ports in the
//! dynamic-RPC window (49500..50000 exclusive), which are very likely
//! ephemeral MSRPC endpoints rather than real services.

use crate::models::{PortEntry, Protocol, ReconModel, UNKNOWN};
use crate::notes::vault::VaultLayout;
use anyhow::{Context, Result};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use tracing::info;

const RPC_RANGE_LOW: u16 = 49500;
const RPC_RANGE_HIGH: u16 = 50000;

/// Render and write the master document.
pub fn write_master_note(layout: &VaultLayout, model: &ReconModel, target: &str) -> Result<()> {
    let note = render_master(layout, model, target);
    let path = layout.master_path();
    fs::write(&path, note)
        .with_context(|| format!("Failed to write master document {}", path.display()))?;

    info!("Wrote master document {}", path.display());
    Ok(())
}

/// Render the complete master document.
pub fn render_master(layout: &VaultLayout, model: &ReconModel, target: &str) -> String {
    let mut progress = String::from(
        "\n\n## Progress\n\n|service|port|protocol|Enumerated|Enumeration Note|\n|---|---|---|---|---|",
    );
    let mut body = String::from("\n\n## Open Ports");
    let mut rpc_review: Vec<(Protocol, u16)> = Vec::new();

    for protocol in [Protocol::Tcp, Protocol::Udp] {
        for entry in model.entries(protocol) {
            let service = entry.service_upper();
            if service == UNKNOWN.to_uppercase() && in_rpc_window(entry.port) {
                rpc_review.push((protocol, entry.port));
                continue;
            }

            progress.push_str(&progress_row(layout, entry, &service));
            if service != UNKNOWN.to_uppercase() {
                body.push_str(&body_section(layout, entry, &service));
            }
        }
    }

    let mut note = render_header(target);
    note.push_str(&progress);
    note.push_str(&body);
    note.push_str(&rpc_footer(&rpc_review));
    note
}

/// Strictly inside the dynamic-RPC window.
fn in_rpc_window(port: u16) -> bool {
    port > RPC_RANGE_LOW && port < RPC_RANGE_HIGH
}

/// Checkbox IDs must be unique per row but stable across reruns, so they
/// are drawn from an RNG seeded by protocol and port.
fn checkbox_id(protocol: Protocol, port: u16) -> String {
    let seed = ((protocol as u64 + 1) << 32) | u64::from(port);
    StdRng::seed_from_u64(seed)
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect()
}

fn render_header(target: &str) -> String {
    format!(
        r#"---
Topics:
  - "[[01 - Pentesting]]"
  - "[[01 - Red Team]]"
Types:
  - "[[02 - Write Ups]]"
tags:
  - writeup
  - {}
date created: 
date modified:
---
## Objective

___
```ad-info
title:Objective 

- Keep track of the external discovery/enumeration process
```
___

## Discovery

~~~ad-info
title:Machine Information

```txt
10.129.49.30 <hostname>
```

> *Add this info to /etc/hosts* once determined. (Could use netexec or similar tools for this)
~~~

"#,
        target
    )
}

fn progress_row(layout: &VaultLayout, entry: &PortEntry, service: &str) -> String {
    format!(
        "\n|{}|{}|{}| <input type=\"checkbox\" unchecked id=\"{}\"> | \
         [[/{}/0 - Enumeration/ports/{}/{}\\|Enumeration Notes]] |",
        service,
        entry.port,
        entry.protocol.upper(),
        checkbox_id(entry.protocol, entry.port),
        layout.note_prefix(),
        entry.protocol,
        entry.port
    )
}

fn body_section(layout: &VaultLayout, entry: &PortEntry, service: &str) -> String {
    format!(
        "\n\n### {service} ({port} {proto}) %% fold %%\n\n\
         #### Logs\n\n\
         ![[{prefix}/0 - Enumeration/logs/{proto_dir}/{port}|{port}]]\n\n\
         #### Notes\n\n\
         ![[{prefix}/0 - Enumeration/ports/{proto_dir}/{port}| {service} ({port} {proto}) - Enumeration Notes]]\n\n\
         #### Tools Used\n\n \
         - {tools}\n\n\
         #### Todos & Reminders\n\n\
         - [ ] blank\n\n",
        service = service,
        port = entry.port,
        proto = entry.protocol.upper(),
        proto_dir = entry.protocol,
        prefix = layout.note_prefix(),
        tools = entry.tools_used.join(", ")
    )
}

fn rpc_footer(rpc_review: &[(Protocol, u16)]) -> String {
    let mut footer = String::from(
        "\n\n## Unknown Ports (Possible MSRPC Ports) %% fold %%\n|Port|Confirmed MSRPC|\n|---|---|\n",
    );

    let rows: Vec<String> = rpc_review
        .iter()
        .map(|(protocol, port)| {
            format!(
                "| {} | <input type=\"checkbox\" unchecked id=\"{}\"> |",
                port,
                checkbox_id(*protocol, *port)
            )
        })
        .collect();
    footer.push_str(&rows.join("\n"));

    footer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Platform;
    use std::path::{Path, PathBuf};

    fn layout() -> VaultLayout {
        VaultLayout::new(Path::new("/vault"), Platform::Htb, "Forest")
    }

    fn entry(protocol: Protocol, port: u16, service: &str, tools: &[&str]) -> PortEntry {
        let mut entry = PortEntry::new(
            port,
            protocol,
            PathBuf::from(format!("{}{}", protocol, port)),
            service.to_string(),
        );
        for tool in tools {
            entry.record_tool(tool);
        }
        entry
    }

    #[test]
    fn test_progress_row_and_body_section() {
        let model = ReconModel {
            tcp: vec![entry(Protocol::Tcp, 80, "HTTP", &["nmap", "whatweb"])],
            udp: Vec::new(),
        };

        let note = render_master(&layout(), &model, "Forest");

        assert!(note.contains("|HTTP|80|TCP| <input type=\"checkbox\""));
        assert!(note.contains(
            "[[/03 - Content/Write Ups/HTB/Forest/0 - Enumeration/ports/tcp/80\\|Enumeration Notes]]"
        ));
        assert!(note.contains("### HTTP (80 TCP) %% fold %%"));
        assert!(note.contains(
            "![[03 - Content/Write Ups/HTB/Forest/0 - Enumeration/logs/tcp/80|80]]"
        ));
        assert!(note.contains("- nmap, whatweb"));
    }

    #[test]
    fn test_header_carries_target_tag() {
        let note = render_master(&layout(), &ReconModel::default(), "Forest");
        assert!(note.starts_with("---\nTopics:"));
        assert!(note.contains("tags:\n  - writeup\n  - Forest\n"));
    }

    #[test]
    fn test_unknown_rpc_port_diverted() {
        let model = ReconModel {
            tcp: vec![entry(Protocol::Tcp, 49670, UNKNOWN, &["nmap"])],
            udp: Vec::new(),
        };

        let note = render_master(&layout(), &model, "Forest");
        let footer_at = note
            .find("## Unknown Ports (Possible MSRPC Ports)")
            .unwrap();

        // Only the review table mentions the port.
        assert!(!note[..footer_at].contains("49670"));
        assert!(note[footer_at..].contains("| 49670 | <input type=\"checkbox\""));
    }

    #[test]
    fn test_resolved_port_in_rpc_window_listed_normally() {
        let model = ReconModel {
            tcp: vec![entry(Protocol::Tcp, 49999, "MSRPC", &["nmap"])],
            udp: Vec::new(),
        };

        let note = render_master(&layout(), &model, "Forest");

        assert!(note.contains("|MSRPC|49999|TCP|"));
        assert!(note.contains("### MSRPC (49999 TCP) %% fold %%"));
        let footer = &note[note.find("## Unknown Ports").unwrap()..];
        assert!(!footer.contains("49999"));
    }

    #[test]
    fn test_unknown_port_outside_window_stays_in_progress() {
        let model = ReconModel {
            tcp: vec![entry(Protocol::Tcp, 50001, UNKNOWN, &[])],
            udp: Vec::new(),
        };

        let note = render_master(&layout(), &model, "Forest");

        assert!(note.contains("|UNKNOWN|50001|TCP|"));
        // No body section without a resolved service.
        assert!(!note.contains("### UNKNOWN"));
    }

    #[test]
    fn test_window_bounds_are_exclusive() {
        assert!(!in_rpc_window(49500));
        assert!(in_rpc_window(49501));
        assert!(in_rpc_window(49999));
        assert!(!in_rpc_window(50000));
    }

    #[test]
    fn test_checkbox_ids_stable_and_distinct() {
        let a = checkbox_id(Protocol::Tcp, 80);
        assert_eq!(a, checkbox_id(Protocol::Tcp, 80));
        assert_eq!(a.len(), 6);
        assert_ne!(a, checkbox_id(Protocol::Udp, 80));
        assert_ne!(a, checkbox_id(Protocol::Tcp, 443));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let model = ReconModel {
            tcp: vec![
                entry(Protocol::Tcp, 80, "HTTP", &["nmap"]),
                entry(Protocol::Tcp, 49670, UNKNOWN, &[]),
            ],
            udp: vec![entry(Protocol::Udp, 161, "snmp", &["snmpwalk"])],
        };

        let first = render_master(&layout(), &model, "Forest");
        let second = render_master(&layout(), &model, "Forest");
        assert_eq!(first, second);
    }
}
