//! recon2obsidian - AutoRecon to Obsidian note generator
//!
//! A CLI tool that walks an AutoRecon results directory and writes
//! cross-linked, Obsidian-compatible enumeration notes into a vault:
//! one log note per open port plus a master document tying them together.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (bad arguments, unreadable results, write failure)

mod classifier;
mod cli;
mod config;
mod gather;
mod models;
mod notes;
mod resolver;
mod sorter;

use anyhow::Result;
use classifier::ToolTable;
use cli::Args;
use config::Config;
use gather::Gatherer;
use notes::vault::VaultLayout;
use resolver::ServiceResolver;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Initialize logging
    init_logging(&args);

    info!("recon2obsidian v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run(args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Note generation failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete gather-sort-render workflow.
async fn run(args: Args) -> Result<()> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    println!(
        "📡 Adding Obsidian-compatible preformatted notes to your vault from {}",
        args.results_dir.display()
    );

    let table = ToolTable::builtin()?;
    let resolver = ServiceResolver::new(&config.lookup)?;

    // Step 1: Gather report files and resolve service names
    let gatherer = Gatherer::new(&args.results_dir, &table, &resolver, &config.gather);
    let model = gatherer.gather().await?;

    // Step 2: Group ports by service so related notes sit together
    let model = sorter::sort_model(model);

    // Step 3: Render notes into the vault
    let layout = VaultLayout::new(&args.vault_dir, args.platform, &args.name);
    layout.create_directories()?;

    notes::logs::write_port_notes(&layout, &model)?;
    notes::master::write_master_note(&layout, &model, &args.name)?;

    println!("\n📊 Summary:");
    println!("   Ports: {} ({} tcp, {} udp)", model.port_count(), model.tcp.len(), model.udp.len());
    println!(
        "\n✅ Done! Notes written under: {}",
        layout.enumeration_dir().display()
    );
    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .recon2obsidian.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli::Platform;
    use config::{Config, GatherConfig, LookupConfig};
    use httpmock::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_report(results: &Path, proto: &str, port: u16, name: &str, contents: &str) {
        let dir = results.join(format!("{}{}", proto, port));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), contents).unwrap();
    }

    fn mock_port(server: &MockServer, port: u16, name: &str) {
        server.mock(|when, then| {
            when.method(GET).path(format!("/ports/{}", port));
            then.status(200)
                .json_body(serde_json::json!({ "ports": [[name]] }));
        });
    }

    async fn generate(results: &Path, vault: &Path, config: &Config) {
        let table = ToolTable::builtin().unwrap();
        let resolver = ServiceResolver::new(&config.lookup).unwrap();
        let gatherer = Gatherer::new(results, &table, &resolver, &config.gather);
        let model = sorter::sort_model(gatherer.gather().await.unwrap());

        let layout = VaultLayout::new(vault, Platform::Htb, "Forest");
        layout.create_directories().unwrap();
        notes::logs::write_port_notes(&layout, &model).unwrap();
        notes::master::write_master_note(&layout, &model, "Forest").unwrap();
    }

    fn test_config(server: &MockServer) -> Config {
        Config {
            lookup: LookupConfig {
                url: server.base_url(),
                timeout_seconds: 5,
            },
            gather: GatherConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_end_to_end_vault_generation() {
        let server = MockServer::start();
        mock_port(&server, 80, "http");
        mock_port(&server, 8080, "http");
        mock_port(&server, 139, "netbios-ssn");
        mock_port(&server, 445, "microsoft-ds");
        mock_port(&server, 161, "snmp");

        let results = TempDir::new().unwrap();
        let vault = TempDir::new().unwrap();
        write_report(results.path(), "tcp", 80, "tcp_80_http_whatweb.txt", "WhatWeb output");
        write_report(results.path(), "tcp", 8080, "tcp_8080_http_nmap.txt", "nmap output");
        write_report(results.path(), "tcp", 139, "tcp_139_smb_nmap.txt", "netbios");
        write_report(results.path(), "tcp", 445, "tcp_445_smb_nmap.txt", "smb scripts");
        write_report(results.path(), "udp", 161, "udp_161_snmp_snmpwalk.txt", "OIDs");

        generate(results.path(), vault.path(), &test_config(&server)).await;

        let prefix = vault.path().join("03 - Content/Write Ups/HTB/Forest");
        let enumeration = prefix.join("0 - Enumeration");

        // One log note per port
        let http_log = fs::read_to_string(enumeration.join("logs/tcp/80.md")).unwrap();
        assert!(http_log.starts_with("---\nstatus: unprocessed\n"));
        assert!(http_log.contains("tools: \n  - \"[[WHATWEB]]\""));
        assert!(http_log.contains("services: \n - \"[[80/TCP]]\"\n - \"[[HTTP]]\""));
        assert!(http_log.contains("title: [[WHATWEB]] - Command Results ([[AUTORECON]])"));
        assert!(http_log.contains("WhatWeb output"));

        let snmp_log = fs::read_to_string(enumeration.join("logs/udp/161.md")).unwrap();
        assert!(snmp_log.contains("\"[[161/UDP]]\""));

        // Master document: ports grouped by service, so 8080 jumps ahead of
        // the SMB ports discovered between it and 80.
        let master = fs::read_to_string(enumeration.join("Enumeration - Master.md")).unwrap();
        assert!(master.contains("  - Forest\n"));
        let p80 = master.find("|HTTP|80|TCP|").unwrap();
        let p8080 = master.find("|HTTP|8080|TCP|").unwrap();
        let p139 = master.find("|SMB|139|TCP|").unwrap();
        let p445 = master.find("|SMB|445|TCP|").unwrap();
        assert!(p80 < p8080 && p8080 < p139 && p139 < p445);
        assert!(master.contains("### HTTP (80 TCP) %% fold %%"));
        assert!(master.contains("### SNMP (161 UDP) %% fold %%"));

        // Skeleton directories for the rest of the workflow
        assert!(prefix.join("1 - Exploitation").is_dir());
        assert!(prefix.join("2 - Escalation").is_dir());
        assert!(prefix.join("3 - Loot").is_dir());
        assert!(enumeration.join("ports/tcp").is_dir());
    }

    #[tokio::test]
    async fn test_unresolved_rpc_port_only_in_review_table() {
        let server = MockServer::start();
        mock_port(&server, 445, "microsoft-ds");
        // 49670 gets no mock, so the lookup 404s and the service degrades
        // to Unknown.

        let results = TempDir::new().unwrap();
        let vault = TempDir::new().unwrap();
        write_report(results.path(), "tcp", 445, "tcp_445_smb_nmap.txt", "smb");
        write_report(results.path(), "tcp", 49670, "tcp_49670_nmap.txt", "rpc probe");

        generate(results.path(), vault.path(), &test_config(&server)).await;

        let master = fs::read_to_string(
            vault
                .path()
                .join("03 - Content/Write Ups/HTB/Forest/0 - Enumeration/Enumeration - Master.md"),
        )
        .unwrap();

        assert!(master.contains("|SMB|445|TCP|"));
        let footer = master.find("## Unknown Ports (Possible MSRPC Ports)").unwrap();
        assert!(!master[..footer].contains("49670"));
        assert!(master[footer..].contains("| 49670 |"));
    }

    #[tokio::test]
    async fn test_rerun_is_byte_identical() {
        let server = MockServer::start();
        mock_port(&server, 80, "http");
        mock_port(&server, 161, "snmp");

        let results = TempDir::new().unwrap();
        let vault = TempDir::new().unwrap();
        write_report(results.path(), "tcp", 80, "tcp_80_http_whatweb.txt", "WhatWeb output");
        write_report(results.path(), "udp", 161, "udp_161_snmp_snmpwalk.txt", "OIDs");

        let config = test_config(&server);
        generate(results.path(), vault.path(), &config).await;

        let enumeration = vault
            .path()
            .join("03 - Content/Write Ups/HTB/Forest/0 - Enumeration");
        let master_first = fs::read(enumeration.join("Enumeration - Master.md")).unwrap();
        let log_first = fs::read(enumeration.join("logs/tcp/80.md")).unwrap();

        generate(results.path(), vault.path(), &config).await;

        let master_second = fs::read(enumeration.join("Enumeration - Master.md")).unwrap();
        let log_second = fs::read(enumeration.join("logs/tcp/80.md")).unwrap();
        assert_eq!(master_first, master_second);
        assert_eq!(log_first, log_second);
    }
}
