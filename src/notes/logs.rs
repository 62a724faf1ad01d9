//! Per-port log notes.
//!
//! One markdown note per port: a front-matter block naming the tools and
//! services as wikilink tokens, followed by one admonition section per
//! classified report file embedding the decoded command and the raw tool
//! output. Files the classifier could not place get no section, but the
//! port still gets its note.

use crate::models::{PortEntry, ReconModel, ReportFile, UNKNOWN};
use crate::notes::vault::VaultLayout;
use anyhow::{Context, Result};
use base64::prelude::*;
use std::fs;
use tracing::{debug, info};

/// Render and write every port's log note.
pub fn write_port_notes(layout: &VaultLayout, model: &ReconModel) -> Result<()> {
    let mut written = 0;
    for entry in model.tcp.iter().chain(model.udp.iter()) {
        let note = render_port_note(entry)?;
        let path = layout.log_path(entry.protocol, entry.port);
        fs::write(&path, note)
            .with_context(|| format!("Failed to write log note {}", path.display()))?;
        debug!(
            "Wrote log note for {}/{} ({} report files)",
            entry.port,
            entry.protocol,
            entry.reports.len()
        );
        written += 1;
    }

    info!("Wrote {} port log notes", written);
    Ok(())
}

/// Render a single port's log note.
pub fn render_port_note(entry: &PortEntry) -> Result<String> {
    let mut note = String::new();
    note.push_str(&render_front_matter(entry));
    note.push_str("\n\n\n");

    for report in &entry.reports {
        if let Some(section) = render_command_section(report)? {
            note.push_str(&section);
        }
    }

    Ok(note)
}

fn render_front_matter(entry: &PortEntry) -> String {
    let mut tools = String::from("tools: ");
    for tool in &entry.tools_used {
        tools.push_str(&format!("\n  - \"[[{}]]\"", tool.to_uppercase()));
    }

    let mut services = String::from("services: ");
    services.push_str(&format!(
        "\n - \"[[{}/{}]]\"",
        entry.port,
        entry.protocol.upper()
    ));
    let service = entry.service_upper();
    if service != UNKNOWN.to_uppercase() {
        services.push_str(&format!("\n - \"[[{}]]\"", service));
    }

    format!("---\nstatus: unprocessed\n{}\n{}\n---\n", tools, services)
}

/// Render the admonition section for one report file, or `None` when the
/// file carries no command template.
fn render_command_section(report: &ReportFile) -> Result<Option<String>> {
    let Some(ref blob) = report.command_b64 else {
        return Ok(None);
    };

    let command = BASE64_STANDARD
        .decode(blob)
        .with_context(|| format!("Invalid command blob for {}", report.file_name))?;
    let command = String::from_utf8(command)
        .with_context(|| format!("Command blob for {} is not UTF-8", report.file_name))?;

    let tool = report.tool.to_uppercase();
    Ok(Some(format!(
        "\n\n## {} \n\n~~~ad-info\ntitle: [[{}]] - Command Results ([[AUTORECON]])\n\n\
         **Command**\n```\n{}\n```\n\n**Output**\n```\n{}\n\n```\n~~~\n",
        tool, tool, command, report.contents
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ToolTable;
    use crate::models::Protocol;
    use std::path::PathBuf;

    fn classified_report(file_name: &str, contents: &str) -> ReportFile {
        let table = ToolTable::builtin().unwrap();
        let entry = table.classify(file_name).expect("fixture must classify");
        ReportFile {
            file_name: file_name.to_string(),
            path: PathBuf::from(file_name),
            contents: contents.to_string(),
            tool: entry.tool.to_string(),
            command_b64: Some(entry.command_b64.to_string()),
        }
    }

    fn http_entry() -> PortEntry {
        let mut entry = PortEntry::new(80, Protocol::Tcp, PathBuf::from("tcp80"), "HTTP".into());
        let report = classified_report("tcp_80_http_nmap.txt", "Nmap scan report for target");
        entry.record_tool(&report.tool);
        entry.reports.push(report);
        entry
    }

    #[test]
    fn test_front_matter_lists_tools_and_services() {
        let note = render_port_note(&http_entry()).unwrap();

        assert!(note.starts_with("---\nstatus: unprocessed\n"));
        assert!(note.contains("tools: \n  - \"[[NMAP]]\""));
        assert!(note.contains("services: \n - \"[[80/TCP]]\"\n - \"[[HTTP]]\""));
    }

    #[test]
    fn test_command_section_embeds_decoded_command_and_output() {
        let note = render_port_note(&http_entry()).unwrap();

        assert!(note.contains("## NMAP \n"));
        assert!(note.contains("title: [[NMAP]] - Command Results ([[AUTORECON]])"));
        // Decoded from the `_nmap.txt` command blob.
        assert!(note.contains("nmap {nmap_extra} -sV -p {port}"));
        assert!(note.contains("Nmap scan report for target"));
    }

    #[test]
    fn test_unknown_service_omitted_from_front_matter() {
        let mut entry = http_entry();
        entry.service = UNKNOWN.to_string();
        let note = render_port_note(&entry).unwrap();

        assert!(note.contains(" - \"[[80/TCP]]\""));
        assert!(!note.contains("[[UNKNOWN]]"));
    }

    #[test]
    fn test_unclassified_report_gets_no_section() {
        let mut entry = PortEntry::new(9999, Protocol::Udp, PathBuf::from("udp9999"), UNKNOWN.into());
        entry.reports.push(ReportFile {
            file_name: "manual-notes.txt".to_string(),
            path: PathBuf::from("manual-notes.txt"),
            contents: "scribbles".to_string(),
            tool: UNKNOWN.to_string(),
            command_b64: None,
        });

        let note = render_port_note(&entry).unwrap();
        assert!(note.contains("tools: \nservices: "));
        assert!(!note.contains("##"));
        assert!(!note.contains("scribbles"));
    }

    #[test]
    fn test_udp_service_token() {
        let entry = PortEntry::new(161, Protocol::Udp, PathBuf::from("udp161"), "snmp".into());
        let note = render_port_note(&entry).unwrap();
        assert!(note.contains(" - \"[[161/UDP]]\"\n - \"[[SNMP]]\""));
    }
}
