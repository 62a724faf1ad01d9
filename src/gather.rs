//! Report aggregation.
//!
//! Walks the AutoRecon results directory and builds the in-memory
//! [`ReconModel`]: one pass over the `tcp*` / `udp*` port directories,
//! classifying every report file and resolving each port's service name
//! once. Filesystem errors here are fatal so a broken results tree never
//! yields partial notes; the whole model exists before anything is written.

use crate::classifier::ToolTable;
use crate::config::GatherConfig;
use crate::models::{PortEntry, Protocol, ReconModel, ReportFile, UNKNOWN};
use crate::resolver::ServiceResolver;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Gathers report data from a results directory.
pub struct Gatherer<'a> {
    results_dir: &'a Path,
    table: &'a ToolTable,
    resolver: &'a ServiceResolver,
    config: &'a GatherConfig,
}

impl<'a> Gatherer<'a> {
    pub fn new(
        results_dir: &'a Path,
        table: &'a ToolTable,
        resolver: &'a ServiceResolver,
        config: &'a GatherConfig,
    ) -> Self {
        Self {
            results_dir,
            table,
            resolver,
            config,
        }
    }

    /// Build the full model, TCP then UDP.
    pub async fn gather(&self) -> Result<ReconModel> {
        let tcp = self.gather_protocol(Protocol::Tcp).await?;
        let udp = self.gather_protocol(Protocol::Udp).await?;

        let model = ReconModel { tcp, udp };
        info!(
            "Gathered {} ports ({} tcp, {} udp)",
            model.port_count(),
            model.tcp.len(),
            model.udp.len()
        );
        Ok(model)
    }

    async fn gather_protocol(&self, protocol: Protocol) -> Result<Vec<PortEntry>> {
        let mut entries = Vec::new();

        for (port, dir) in self.port_dirs(protocol)? {
            let service = self.resolver.resolve(port).await;
            let mut entry = PortEntry::new(port, protocol, dir.clone(), service);

            for path in self.report_files(&dir, port)? {
                let report = self.read_report(&path)?;
                entry.record_tool(&report.tool);
                entry.reports.push(report);
            }

            debug!(
                "Port {}/{}: {} report files, service {}",
                port,
                protocol,
                entry.reports.len(),
                entry.service
            );
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Immediate subdirectories whose names start with the protocol prefix,
    /// in ascending port order so output never depends on filesystem
    /// enumeration order.
    ///
    /// The remainder of the name must parse as a port number; directories
    /// like `tcpdump-notes` are skipped with a warning rather than carried
    /// as non-numeric keys.
    fn port_dirs(&self, protocol: Protocol) -> Result<Vec<(u16, PathBuf)>> {
        let entries = fs::read_dir(self.results_dir).with_context(|| {
            format!(
                "Error while getting {} port directories under {}",
                protocol,
                self.results_dir.display()
            )
        })?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| {
                format!(
                    "Error while getting {} port directories under {}",
                    protocol,
                    self.results_dir.display()
                )
            })?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            let Some(suffix) = name.strip_prefix(protocol.as_str()) else {
                continue;
            };

            match suffix.parse::<u16>() {
                Ok(port) => dirs.push((port, path)),
                Err(_) => {
                    warn!("Skipping directory {} (no port number after prefix)", name);
                }
            }
        }

        dirs.sort_by_key(|(port, _)| *port);
        Ok(dirs)
    }

    /// Immediate files in a port directory ending with the report suffix,
    /// sorted by name for a stable section order in the rendered note.
    fn report_files(&self, dir: &Path, port: u16) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).with_context(|| {
            format!("Error while getting report files for port {}", port)
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| {
                format!("Error while getting report files for port {}", port)
            })?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            if path.is_file() && name.ends_with(&self.config.report_extension) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    fn read_report(&self, path: &Path) -> Result<ReportFile> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Error while reading report file {}", path.display()))?;

        let (tool, command_b64) = match self.table.classify(&file_name) {
            Some(entry) => (entry.tool.to_string(), Some(entry.command_b64.to_string())),
            None => (UNKNOWN.to_string(), None),
        };

        Ok(ReportFile {
            file_name,
            path: path.to_path_buf(),
            contents,
            tool,
            command_b64,
        })
    }
}
