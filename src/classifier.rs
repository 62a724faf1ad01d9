//! Filename classification.
//!
//! AutoRecon names its output files after the plugin that produced them, so
//! a report file can be mapped back to the tool and the command template it
//! ran by substring-matching the file name against a fixed, ordered pattern
//! table. Table order is part of the contract: the first pattern contained
//! in the file name wins.
//!
//! Command templates are stored as opaque base64 blobs and only decoded
//! when a note embeds them; they are documentation, never executed.

use thiserror::Error;

/// Error raised while building a [`ToolTable`].
#[derive(Debug, Error)]
pub enum TableError {
    #[error("duplicate filename pattern in tool table: {0}")]
    DuplicatePattern(String),
}

/// One classification record: a filename pattern and the tool/command pair
/// it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolPattern {
    /// Substring matched against the report file name.
    pub pattern: &'static str,
    /// Name of the tool that produced the file.
    pub tool: &'static str,
    /// Base64-encoded command template.
    pub command_b64: &'static str,
}

/// Ordered, duplicate-checked classification table.
///
/// Constructed once at process start and borrowed by the aggregator.
#[derive(Debug)]
pub struct ToolTable {
    patterns: &'static [ToolPattern],
}

impl ToolTable {
    /// Build a table, rejecting duplicate patterns.
    ///
    /// Duplicates would make the first-match contract ambiguous, so they
    /// are a construction-time error rather than a silent override.
    pub fn new(patterns: &'static [ToolPattern]) -> Result<Self, TableError> {
        let mut seen = std::collections::HashSet::new();
        for entry in patterns {
            if !seen.insert(entry.pattern) {
                return Err(TableError::DuplicatePattern(entry.pattern.to_string()));
            }
        }
        Ok(Self { patterns })
    }

    /// The built-in AutoRecon pattern table.
    pub fn builtin() -> Result<Self, TableError> {
        Self::new(TOOL_PATTERNS)
    }

    /// Classify a report file by its base name.
    ///
    /// Returns the first table entry whose pattern is a substring of the
    /// name, or `None` when nothing matches (the "Unknown" case).
    pub fn classify(&self, file_name: &str) -> Option<&'static ToolPattern> {
        self.patterns
            .iter()
            .find(|entry| file_name.contains(entry.pattern))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Patterns in match order. Earlier entries shadow later ones, so the
/// generic `_nmap.txt` has to stay below nothing that should outrank it:
/// a name like `tcp_53_dns_nmap.txt` matches `_nmap.txt` before
/// `_dns_nmap.txt` reaches it, exactly as the order dictates.
const TOOL_PATTERNS: &[ToolPattern] = &[
    ToolPattern {
        pattern: "_smtp_user-enum_hydra_vrfy.txt",
        tool: "hydra",
        command_b64: "aHlkcmEgc210cC1lbnVtOi8ve2FkZHJlc3N2Nn06e3BvcnR9L3ZyZnkgLUwgIicgKyBzZWxmLmdldF9nbG9iYWwoJ3VzZXJuYW1lX3dvcmRsaXN0JywgZGVmYXVsdD0nL3Vzci9zaGFyZS9zZWNsaXN0cy9Vc2VybmFtZXMvdG9wLXVzZXJuYW1lcy1zaG9ydGxpc3QudHh0JykgKyAnIiAyPiYxJywgb3V0ZmlsZT0ne3Byb3RvY29sfV97cG9ydH1fc210cF91c2VyLWVudW1faHlkcmFfdnJmeS50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_smtp_user-enum_hydra_expn.txt",
        tool: "hydra",
        command_b64: "aHlkcmEgc210cC1lbnVtOi8ve2FkZHJlc3N2Nn06e3BvcnR9L2V4cG4gLUwgIicgKyBzZWxmLmdldF9nbG9iYWwoJ3VzZXJuYW1lX3dvcmRsaXN0JywgZGVmYXVsdD0nL3Vzci9zaGFyZS9zZWNsaXN0cy9Vc2VybmFtZXMvdG9wLXVzZXJuYW1lcy1zaG9ydGxpc3QudHh0JykgKyAnIiAyPiYxJywgb3V0ZmlsZT0ne3Byb3RvY29sfV97cG9ydH1fc210cF91c2VyLWVudW1faHlkcmFfZXhwbi50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_mysql_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChteXNxbCogb3Igc3NsKikgYW5kIG5vdCAoYnJ1dGUgb3IgYnJvYWRjYXN0IG9yIGRvcyBvciBleHRlcm5hbCBvciBmdXp6ZXIpIiAtb04gIntzY2FuZGlyfS97cHJvdG9jb2x9X3twb3J0fV9teXNxbF9ubWFwLnR4dCIgLW9YICJ7c2NhbmRpcn0veG1sL3twcm90b2NvbH1fe3BvcnR9X215c3FsX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "enum4linux.txt",
        tool: "enum4linux",
        command_b64: "ZW51bTRsaW51eCAtYSAtTSAtbCAtZCB7YWRkcmVzc30gMj4mMScsIG91dGZpbGU9J2VudW00bGludXgudHh0JykK",
    },
    ToolPattern {
        pattern: "enum4linux-ng.txt",
        tool: "enum4linux",
        command_b64: "ZW51bTRsaW51eC1uZyAtQSAtZCAtdiB7YWRkcmVzc30gMj4mMScsIG91dGZpbGU9J2VudW00bGludXgtbmcudHh0JykK",
    },
    ToolPattern {
        pattern: "_oracle_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChvcmFjbGUqIG9yIHNzbCopIGFuZCBub3QgKGJydXRlIG9yIGJyb2FkY2FzdCBvciBkb3Mgb3IgZXh0ZXJuYWwgb3IgZnV6emVyKSIgLW9OICJ7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1fb3JhY2xlX25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fb3JhY2xlX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_rpc_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLG1zcnBjLWVudW0scnBjLWdyaW5kLHJwY2luZm8iIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3JwY19ubWFwLnR4dCIgLW9YICJ7c2NhbmRpcn0veG1sL3twcm90b2NvbH1fe3BvcnR9X3JwY19ubWFwLnhtbCIge2FkZHJlc3N9JykK",
    },
    ToolPattern {
        pattern: "_pop3_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChwb3AzKiBvciBzc2wqKSBhbmQgbm90IChicnV0ZSBvciBicm9hZGNhc3Qgb3IgZG9zIG9yIGV4dGVybmFsIG9yIGZ1enplcikiIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3BvcDNfbm1hcC50eHQiIC1vWCAie3NjYW5kaXJ9L3htbC97cHJvdG9jb2x9X3twb3J0fV9wb3AzX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_dns_zone-transfer-domain.txt",
        tool: "dig",
        command_b64: "ZGlnIEFYRlIgLXAge3BvcnR9IEB7YWRkcmVzc30gJyArIHNlbGYuZ2V0X2dsb2JhbCgnZG9tYWluJyksIG91dGZpbGU9J3twcm90b2NvbH1fe3BvcnR9X2Ruc196b25lLXRyYW5zZmVyLWRvbWFpbi50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_dns_zone-transfer-hostname.txt",
        tool: "dig",
        command_b64: "ZGlnIEFYRlIgLXAge3BvcnR9IEB7YWRkcmVzc30ge2FkZHJlc3N9Jywgb3V0ZmlsZT0ne3Byb3RvY29sfV97cG9ydH1fZG5zX3pvbmUtdHJhbnNmZXItaG9zdG5hbWUudHh0JykK",
    },
    ToolPattern {
        pattern: "_dns_zone-transfer.txt",
        tool: "dig",
        command_b64: "ZGlnIEFYRlIgLXAge3BvcnR9IEB7YWRkcmVzc30nLCBvdXRmaWxlPSd7cHJvdG9jb2x9X3twb3J0fV9kbnNfem9uZS10cmFuc2Zlci50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_oracle_tnscmd_ping.txt",
        tool: "tnscmd10g",
        command_b64: "dG5zY21kMTBnIHBpbmcgLWgge2FkZHJlc3N9IC1wIHtwb3J0fSAyPiYxJywgb3V0ZmlsZT0ne3Byb3RvY29sfV97cG9ydH1fb3JhY2xlX3Ruc2NtZF9waW5nLnR4dCcpCg==",
    },
    ToolPattern {
        pattern: "_oracle_tnscmd_version.txt",
        tool: "tnscmd10g",
        command_b64: "dG5zY21kMTBnIHZlcnNpb24gLWgge2FkZHJlc3N9IC1wIHtwb3J0fSAyPiYxJywgb3V0ZmlsZT0ne3Byb3RvY29sfV97cG9ydH1fb3JhY2xlX3Ruc2NtZF92ZXJzaW9uLnR4dCcpCg==",
    },
    ToolPattern {
        pattern: "_redis_info.txt",
        tool: "redis-cli",
        command_b64: "cmVkaXMtY2xpIC1wIHtwb3J0fSAtaCB7YWRkcmVzc30gSU5GTycsIG91dGZpbGU9J3twcm90b2NvbH1fe3BvcnR9X3JlZGlzX2luZm8udHh0JykK",
    },
    ToolPattern {
        pattern: "_redis_config.txt",
        tool: "redis-cli",
        command_b64: "cmVkaXMtY2xpIC1wIHtwb3J0fSAtaCB7YWRkcmVzc30gQ09ORklHIEdFVCBcJypcJycsIG91dGZpbGU9J3twcm90b2NvbH1fe3BvcnR9X3JlZGlzX2NvbmZpZy50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_redis_client-list.txt",
        tool: "redis-cli",
        command_b64: "cmVkaXMtY2xpIC1wIHtwb3J0fSAtaCB7YWRkcmVzc30gQ0xJRU5UIExJU1QnLCBvdXRmaWxlPSd7cHJvdG9jb2x9X3twb3J0fV9yZWRpc19jbGllbnQtbGlzdC50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_rsync_file_list.txt",
        tool: "rsync",
        command_b64: "cnN5bmMgLWF2IC0tbGlzdC1vbmx5IHJzeW5jOi8ve2FkZHJlc3N2Nn06e3BvcnR9Jywgb3V0ZmlsZT0ne3Byb3RvY29sfV97cG9ydH1fcnN5bmNfZmlsZV9saXN0LnR4dCcpCg==",
    },
    ToolPattern {
        pattern: "_vnc_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLCh2bmMqIG9yIHJlYWx2bmMqIG9yIHNzbCopIGFuZCBub3QgKGJydXRlIG9yIGJyb2FkY2FzdCBvciBkb3Mgb3IgZXh0ZXJuYWwgb3IgZnV6emVyKSIgLS1zY3JpcHQtYXJncz0idW5zYWZlPTEiIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3ZuY19ubWFwLnR4dCIgLW9YICJ7c2NhbmRpcn0veG1sL3twcm90b2NvbH1fe3BvcnR9X3ZuY19ubWFwLnhtbCIge2FkZHJlc3N9JykK",
    },
    ToolPattern {
        pattern: "_mssql_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChtcy1zcWwqIG9yIHNzbCopIGFuZCBub3QgKGJydXRlIG9yIGJyb2FkY2FzdCBvciBkb3Mgb3IgZXh0ZXJuYWwgb3IgZnV6emVyKSIgLS1zY3JpcHQtYXJncz0ibXNzcWwuaW5zdGFuY2UtcG9ydD17cG9ydH0sbXNzcWwudXNlcm5hbWU9c2EsbXNzcWwucGFzc3dvcmQ9c2EiIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X21zc3FsX25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fbXNzcWxfbm1hcC54bWwiIHthZGRyZXNzfScpCg==",
    },
    ToolPattern {
        pattern: "_mongodb_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChtb25nb2RiKiBvciBzc2wqKSBhbmQgbm90IChicnV0ZSBvciBicm9hZGNhc3Qgb3IgZG9zIG9yIGV4dGVybmFsIG9yIGZ1enplcikiIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X21vbmdvZGJfbm1hcC50eHQiIC1vWCAie3NjYW5kaXJ9L3htbC97cHJvdG9jb2x9X3twb3J0fV9tb25nb2RiX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_curl.html",
        tool: "curl",
        command_b64: "Y3VybCAtc1NpayB7aHR0cF9zY2hlbWV9Oi8ve2FkZHJlc3N2Nn06e3BvcnR9JyArIHNlbGYuZ2V0X29wdGlvbigncGF0aCcpLCBvdXRmaWxlPSd7cHJvdG9jb2x9X3twb3J0fV97aHR0cF9zY2hlbWV9X2N1cmwuaHRtbCcpCg==",
    },
    ToolPattern {
        pattern: "_telnet-nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLHRlbG5ldC1lbmNyeXB0aW9uLHRlbG5ldC1udGxtLWluZm8iIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3RlbG5ldC1ubWFwLnR4dCIgLW9YICJ7c2NhbmRpcn0veG1sL3twcm90b2NvbH1fe3BvcnR9X3RlbG5ldF9ubWFwLnhtbCIge2FkZHJlc3N9JykK",
    },
    ToolPattern {
        pattern: "_smb_vulnerabilities.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0ic21iLXZ1bG4tKiIgLS1zY3JpcHQtYXJncz0idW5zYWZlPTEiIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3NtYl92dWxuZXJhYmlsaXRpZXMudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fc21iX3Z1bG5lcmFiaWxpdGllcy54bWwiIHthZGRyZXNzfScpCg==",
    },
    ToolPattern {
        pattern: "smbclient.txt",
        tool: "smbclient",
        command_b64: "c21iY2xpZW50IC1MIC8ve2FkZHJlc3N9IC1OIC1JIHthZGRyZXNzfSAyPiYxJywgb3V0ZmlsZT0nc21iY2xpZW50LnR4dCcpCg==",
    },
    ToolPattern {
        pattern: "_mountd_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLG5mcyogYW5kIG5vdCAoYnJ1dGUgb3IgYnJvYWRjYXN0IG9yIGRvcyBvciBleHRlcm5hbCBvciBmdXp6ZXIpIiAtb04gIntzY2FuZGlyfS97cHJvdG9jb2x9X3twb3J0fV9tb3VudGRfbm1hcC50eHQiIC1vWCAie3NjYW5kaXJ9L3htbC97cHJvdG9jb2x9X3twb3J0fV9tb3VudGRfbm1hcC54bWwiIHthZGRyZXNzfScpCg==",
    },
    ToolPattern {
        pattern: "_ntp_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChudHAqIG9yIHNzbCopIGFuZCBub3QgKGJydXRlIG9yIGJyb2FkY2FzdCBvciBkb3Mgb3IgZXh0ZXJuYWwgb3IgZnV6emVyKSIgLW9OICJ7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1fbnRwX25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fbnRwX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_tftp-nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLHRmdHAtZW51bSIgLW9OICJ7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1fdGZ0cC1ubWFwLnR4dCIgLW9YICJ7c2NhbmRpcn0veG1sL3twcm90b2NvbH1fe3BvcnR9X3RmdHBfbm1hcC54bWwiIHthZGRyZXNzfScpCg==",
    },
    ToolPattern {
        pattern: "_ldap_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChsZGFwKiBvciBzc2wqKSBhbmQgbm90IChicnV0ZSBvciBicm9hZGNhc3Qgb3IgZG9zIG9yIGV4dGVybmFsIG9yIGZ1enplcikiIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X2xkYXBfbm1hcC50eHQiIC1vWCAie3NjYW5kaXJ9L3htbC97cHJvdG9jb2x9X3twb3J0fV9sZGFwX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_showmount.txt",
        tool: "showmount",
        command_b64: "c2hvd21vdW50IC1lIHthZGRyZXNzfSAyPiYxJywgb3V0ZmlsZT0ne3Byb3RvY29sfV97cG9ydH1fc2hvd21vdW50LnR4dCcpCg==",
    },
    ToolPattern {
        pattern: "_nikto.txt",
        tool: "nikto",
        command_b64: "bmlrdG8gLWFzaz1ubyAtVHVuaW5nPXg0NTY3ODkwYWMgLW5vaW50ZXJhY3RpdmUgLWhvc3Qge2h0dHBfc2NoZW1lfTovL3thZGRyZXNzfTp7cG9ydH0gMj4mMSB8IHRlZSAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3todHRwX3NjaGVtZX1fbmlrdG8udHh0IicpCg==",
    },
    ToolPattern {
        pattern: "_ftp_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChmdHAqIG9yIHNzbCopIGFuZCBub3QgKGJydXRlIG9yIGJyb2FkY2FzdCBvciBkb3Mgb3IgZXh0ZXJuYWwgb3IgZnV6emVyKSIgLW9OICJ7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1fZnRwX25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fZnRwX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_redis_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLHJlZGlzLWluZm8iIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3JlZGlzX25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fcmVkaXNfbm1hcC54bWwiIHthZGRyZXNzfScpCg==",
    },
    ToolPattern {
        pattern: "_snmp_snmpwalk.txt",
        tool: "snmpwalk",
        command_b64: "c25tcHdhbGsgLWMgcHVibGljIC12IDEge2FkZHJlc3N9IDI+JjEnLCBvdXRmaWxlPSd7cHJvdG9jb2x9X3twb3J0fV9zbm1wX3NubXB3YWxrLnR4dCcpCg==",
    },
    ToolPattern {
        pattern: "_snmp_snmpwalk_system_processes.txt",
        tool: "snmpwalk",
        command_b64: "c25tcHdhbGsgLWMgcHVibGljIC12IDEge2FkZHJlc3N9IDEuMy42LjEuMi4xLjI1LjEuNi4wIDI+JjEnLCBvdXRmaWxlPSd7cHJvdG9jb2x9X3twb3J0fV9zbm1wX3NubXB3YWxrX3N5c3RlbV9wcm9jZXNzZXMudHh0JykK",
    },
    ToolPattern {
        pattern: "_snmp_snmpwalk_running_processes.txt",
        tool: "snmpwalk",
        command_b64: "c25tcHdhbGsgLWMgcHVibGljIC12IDEge2FkZHJlc3N9IDEuMy42LjEuMi4xLjI1LjQuMi4xLjIgMj4mMScsIG91dGZpbGU9J3tzY2FuZGlyfS97cHJvdG9jb2x9X3twb3J0fV9zbm1wX3NubXB3YWxrX3J1bm5pbmdfcHJvY2Vzc2VzLnR4dCcpCg==",
    },
    ToolPattern {
        pattern: "_snmp_snmpwalk_process_paths.txt",
        tool: "snmpwalk",
        command_b64: "c25tcHdhbGsgLWMgcHVibGljIC12IDEge2FkZHJlc3N9IDEuMy42LjEuMi4xLjI1LjQuMi4xLjQgMj4mMScsIG91dGZpbGU9J3twcm90b2NvbH1fe3BvcnR9X3NubXBfc25tcHdhbGtfcHJvY2Vzc19wYXRocy50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_snmp_snmpwalk_storage_units.txt",
        tool: "snmpwalk",
        command_b64: "c25tcHdhbGsgLWMgcHVibGljIC12IDEge2FkZHJlc3N9IDEuMy42LjEuMi4xLjI1LjIuMy4xLjQgMj4mMScsIG91dGZpbGU9J3twcm90b2NvbH1fe3BvcnR9X3NubXBfc25tcHdhbGtfc3RvcmFnZV91bml0cy50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_snmp_snmpwalk_software_names.txt",
        tool: "snmpwalk",
        command_b64: "c25tcHdhbGsgLWMgcHVibGljIC12IDEge2FkZHJlc3N9IDEuMy42LjEuMi4xLjI1LjIuMy4xLjQgMj4mMScsIG91dGZpbGU9J3twcm90b2NvbH1fe3BvcnR9X3NubXBfc25tcHdhbGtfc29mdHdhcmVfbmFtZXMudHh0JykK",
    },
    ToolPattern {
        pattern: "_snmp_snmpwalk_user_accounts.txt",
        tool: "snmpwalk",
        command_b64: "c25tcHdhbGsgLWMgcHVibGljIC12IDEge2FkZHJlc3N9IDEuMy42LjEuNC4xLjc3LjEuMi4yNSAyPiYxJywgb3V0ZmlsZT0ne3Byb3RvY29sfV97cG9ydH1fc25tcF9zbm1wd2Fsa191c2VyX2FjY291bnRzLnR4dCcpCg==",
    },
    ToolPattern {
        pattern: "_snmp_snmpwalk_tcp_ports.txt",
        tool: "snmpwalk",
        command_b64: "c25tcHdhbGsgLWMgcHVibGljIC12IDEge2FkZHJlc3N9IDEuMy42LjEuMi4xLjYuMTMuMS4zIDI+JjEnLCBvdXRmaWxlPSd7cHJvdG9jb2x9X3twb3J0fV9zbm1wX3NubXB3YWxrX3RjcF9wb3J0cy50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_rpc_rpcdump.txt",
        tool: "rpcdump",
        command_b64: "aW1wYWNrZXQtcnBjZHVtcCAtcG9ydCB7cG9ydH0ge2FkZHJlc3N9Jywgb3V0ZmlsZT0ne3Byb3RvY29sfV97cG9ydH1fcnBjX3JwY2R1bXAudHh0JykK",
    },
    ToolPattern {
        pattern: "_smtp_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChzbXRwKiBvciBzc2wqKSBhbmQgbm90IChicnV0ZSBvciBicm9hZGNhc3Qgb3IgZG9zIG9yIGV4dGVybmFsIG9yIGZ1enplcikiIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3NtdHBfbm1hcC50eHQiIC1vWCAie3NjYW5kaXJ9L3htbC97cHJvdG9jb2x9X3twb3J0fV9zbXRwX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_snmp-nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChzbm1wKiBvciBzc2wqKSBhbmQgbm90IChicnV0ZSBvciBicm9hZGNhc3Qgb3IgZG9zIG9yIGV4dGVybmFsIG9yIGZ1enplcikiIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3NubXAtbm1hcC50eHQiIC1vWCAie3NjYW5kaXJ9L3htbC97cHJvdG9jb2x9X3twb3J0fV9zbm1wX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_nntp_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLG5udHAtbnRsbS1pbmZvIiAtb04gIntzY2FuZGlyfS97cHJvdG9jb2x9X3twb3J0fV9ubnRwX25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fbm50cF9ubWFwLnhtbCIge2FkZHJlc3N9JykK",
    },
    ToolPattern {
        pattern: "_whatweb.txt",
        tool: "whatweb",
        command_b64: "d2hhdHdlYiAtLWNvbG9yPW5ldmVyIC0tbm8tZXJyb3JzIC1hIDMgLXYge2h0dHBfc2NoZW1lfTovL3thZGRyZXNzfTp7cG9ydH0gMj4mMScsIG91dGZpbGU9J3twcm90b2NvbH1fe3BvcnR9X3todHRwX3NjaGVtZX1fd2hhdHdlYi50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_smb_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChuYnN0YXQgb3Igc21iKiBvciBzc2wqKSBhbmQgbm90IChicnV0ZSBvciBicm9hZGNhc3Qgb3IgZG9zIG9yIGV4dGVybmFsIG9yIGZ1enplcikiIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3NtYl9ubWFwLnR4dCIgLW9YICJ7c2NhbmRpcn0veG1sL3twcm90b2NvbH1fe3BvcnR9X3NtYl9ubWFwLnhtbCIge2FkZHJlc3N9JykK",
    },
    ToolPattern {
        pattern: "_dns_reverse-lookup.txt",
        tool: "dig",
        command_b64: "ZGlnIC1wIHtwb3J0fSAteCB7YWRkcmVzc30gQHthZGRyZXNzfScsIG91dGZpbGU9J3twcm90b2NvbH1fe3BvcnR9X2Ruc19yZXZlcnNlLWxvb2t1cC50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_oracle_scanner.txt",
        tool: "oscanner",
        command_b64: "b3NjYW5uZXIgLXYgLXMge2FkZHJlc3N9IC1QIHtwb3J0fSAyPiYxJywgb3V0ZmlsZT0ne3Byb3RvY29sfV97cG9ydH1fb3JhY2xlX3NjYW5uZXIudHh0JykK",
    },
    ToolPattern {
        pattern: "_subdomains_",
        tool: "gobuster",
        command_b64: "Z29idXN0ZXIgZG5zIC1kICcgKyBkb21haW4gKyAnIC1yIHthZGRyZXNzdjZ9IC13ICcgKyB3b3JkbGlzdCArICcgLW8gIntzY2FuZGlyfS97cHJvdG9jb2x9X3twb3J0fV8nICsgZG9tYWluICsgJ19zdWJkb21haW5zXycgKyBuYW1lICsgJy50eHQiJykK",
    },
    ToolPattern {
        pattern: "_screenshot.png",
        tool: "wkhtmltoimage",
        command_b64: "d2todG1sdG9pbWFnZSAtLWZvcm1hdCBwbmcge2h0dHBfc2NoZW1lfTovL3thZGRyZXNzdjZ9Ontwb3J0fS8ge3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3todHRwX3NjaGVtZX1fc2NyZWVuc2hvdC5wbmcnKQo=",
    },
    ToolPattern {
        pattern: "_rdp_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChyZHAqIG9yIHNzbCopIGFuZCBub3QgKGJydXRlIG9yIGJyb2FkY2FzdCBvciBkb3Mgb3IgZXh0ZXJuYWwgb3IgZnV6emVyKSIgLW9OICJ7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1fcmRwX25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fcmRwX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "nbtscan.txt",
        tool: "nbtscan",
        command_b64: "bmJ0c2NhbiAtcnZoIHtpcGFkZHJlc3N9IDI+JjEnLCBvdXRmaWxlPSduYnRzY2FuLnR4dCcpCg==",
    },
    ToolPattern {
        pattern: "_known-security.txt",
        tool: "curl",
        command_b64: "Y3VybCAtc1Npa2Yge2h0dHBfc2NoZW1lfTovL3thZGRyZXNzdjZ9Ontwb3J0fS8ud2VsbC1rbm93bi9zZWN1cml0eS50eHQnLCBmdXR1cmVfb3V0ZmlsZT0ne3Byb3RvY29sfV97cG9ydH1fe2h0dHBfc2NoZW1lfV9rbm93bi1zZWN1cml0eS50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_rsync_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChyc3luYyogb3Igc3NsKikgYW5kIG5vdCAoYnJ1dGUgb3IgYnJvYWRjYXN0IG9yIGRvcyBvciBleHRlcm5hbCBvciBmdXp6ZXIpIiAtb04gIntzY2FuZGlyfS97cHJvdG9jb2x9X3twb3J0fV9yc3luY19ubWFwLnR4dCIgLW9YICJ7c2NhbmRpcn0veG1sL3twcm90b2NvbH1fe3BvcnR9X3JzeW5jX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_imap_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChpbWFwKiBvciBzc2wqKSBhbmQgbm90IChicnV0ZSBvciBicm9hZGNhc3Qgb3IgZG9zIG9yIGV4dGVybmFsIG9yIGZ1enplcikiIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X2ltYXBfbm1hcC50eHQiIC1vWCAie3NjYW5kaXJ9L3htbC97cHJvdG9jb2x9X3twb3J0fV9pbWFwX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_sip_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLHNpcC1lbnVtLXVzZXJzLHNpcC1tZXRob2RzIiAtb04gIntzY2FuZGlyfS97cHJvdG9jb2x9X3twb3J0fV9zaXBfbm1hcC50eHQiIC1vWCAie3NjYW5kaXJ9L3htbC97cHJvdG9jb2x9X3twb3J0fV9zaXBfbm1hcC54bWwiIHthZGRyZXNzfScpCg==",
    },
    ToolPattern {
        pattern: "_vhosts_",
        tool: "ffuf",
        command_b64: "ZmZ1ZiAtdSB7aHR0cF9zY2hlbWV9Oi8vJyArIGhvc3RuYW1lICsgJzp7cG9ydH0vIC10ICcgKyBzdHIoc2VsZi5nZXRfb3B0aW9uKCd0aHJlYWRzJykpICsgJyAtdyAnICsgd29yZGxpc3QgKyAnIC1IICJIb3N0OiBGVVpaLicgKyBob3N0bmFtZSArICciIC1tYyBhbGwgLWZzICcgKyBzaXplICsgJyAtciAtbm9uaW50ZXJhY3RpdmUgLXMgfCB0ZWUgIntzY2FuZGlyfS97cHJvdG9jb2x9X3twb3J0fV97aHR0cF9zY2hlbWV9XycgKyBob3N0bmFtZSArICdfdmhvc3RzXycgKyBuYW1lICsgJy50eHQiJykK",
    },
    ToolPattern {
        pattern: "_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChodHRwKiBvciBzc2wqKSBhbmQgbm90IChicnV0ZSBvciBicm9hZGNhc3Qgb3IgZG9zIG9yIGV4dGVybmFsIG9yIGh0dHAtc2xvd2xvcmlzKiBvciBmdXp6ZXIpIiAtb04gIntzY2FuZGlyfS97cHJvdG9jb2x9X3twb3J0fV97aHR0cF9zY2hlbWV9X25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fe2h0dHBfc2NoZW1lfV9ubWFwLnhtbCIge2FkZHJlc3N9JykK",
    },
    ToolPattern {
        pattern: "_finger_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLGZpbmdlciIgLW9OICJ7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1fZmluZ2VyX25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fZmluZ2VyX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_dns_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChkbnMqIG9yIHNzbCopIGFuZCBub3QgKGJydXRlIG9yIGJyb2FkY2FzdCBvciBkb3Mgb3IgZXh0ZXJuYWwgb3IgZnV6emVyKSIgLW9OICJ7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1fZG5zX25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fZG5zX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_feroxbuster_",
        tool: "feroxbuster",
        command_b64: "ZmVyb3hidXN0ZXIgLXUge2h0dHBfc2NoZW1lfTovL3thZGRyZXNzdjZ9Ontwb3J0fS8gLXQgJyArIHN0cihzZWxmLmdldF9vcHRpb24oJ3RocmVhZHMnKSkgKyAnIC13ICcgKyB3b3JkbGlzdCArICcgLXggIicgKyBzZWxmLmdldF9vcHRpb24oJ2V4dCcpICsgJyIgLXYgLWsgJyArICgnJyBpZiBzZWxmLmdldF9vcHRpb24oJ3JlY3Vyc2l2ZScpIGVsc2UgJy1uICcpICArICctcSAtZSAtciAtbyAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3todHRwX3NjaGVtZX1fZmVyb3hidXN0ZXJfJyArIG5hbWUgKyAnLnR4dCInICsgKCcgJyArIHNlbGYuZ2V0X29wdGlvbignZXh0cmFzJykgaWYgc2VsZi5nZXRfb3B0aW9uKCdleHRyYXMnKSBlbHNlICcnKSkK",
    },
    ToolPattern {
        pattern: "_gobuster_",
        tool: "gobuster",
        command_b64: "Z29idXN0ZXIgZGlyIC11IHtodHRwX3NjaGVtZX06Ly97YWRkcmVzc3Y2fTp7cG9ydH0vIC10ICcgKyBzdHIoc2VsZi5nZXRfb3B0aW9uKCd0aHJlYWRzJykpICsgJyAtdyAnICsgd29yZGxpc3QgKyAnIC1lIC1rIC14ICInICsgc2VsZi5nZXRfb3B0aW9uKCdleHQnKSArICciIC16IC1yIC1vICJ7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1fe2h0dHBfc2NoZW1lfV9nb2J1c3Rlcl8nICsgbmFtZSArICcudHh0IicgKyAoJyAnICsgc2VsZi5nZXRfb3B0aW9uKCdleHRyYXMnKSBpZiBzZWxmLmdldF9vcHRpb24oJ2V4dHJhcycpIGVsc2UgJycpKQo=",
    },
    ToolPattern {
        pattern: "_dirsearch_",
        tool: "dirsearch",
        command_b64: "ZGlyc2VhcmNoIC11IHtodHRwX3NjaGVtZX06Ly97YWRkcmVzc306e3BvcnR9LyAtdCAnICsgc3RyKHNlbGYuZ2V0X29wdGlvbigndGhyZWFkcycpKSArICcgLWUgIicgKyBzZWxmLmdldF9vcHRpb24oJ2V4dCcpICsgJyIgLWYgLXEgLUYgJyArICgnLXIgJyBpZiBzZWxmLmdldF9vcHRpb24oJ3JlY3Vyc2l2ZScpIGVsc2UgJycpICsgJy13ICcgKyB3b3JkbGlzdCArICcgLS1mb3JtYXQ9cGxhaW4gLW8gIntzY2FuZGlyfS97cHJvdG9jb2x9X3twb3J0fV97aHR0cF9zY2hlbWV9X2RpcnNlYXJjaF8nICsgbmFtZSArICcudHh0IicgKyAoJyAnICsgc2VsZi5nZXRfb3B0aW9uKCdleHRyYXMnKSBpZiBzZWxmLmdldF9vcHRpb24oJ2V4dHJhcycpIGVsc2UgJycpKQo=",
    },
    ToolPattern {
        pattern: "_ffuf_",
        tool: "ffuf",
        command_b64: "ZmZ1ZiAtdSB7aHR0cF9zY2hlbWV9Oi8ve2FkZHJlc3N2Nn06e3BvcnR9L0ZVWlogLXQgJyArIHN0cihzZWxmLmdldF9vcHRpb24oJ3RocmVhZHMnKSkgKyAnIC13ICcgKyB3b3JkbGlzdCArICcgLWUgIicgKyBkb3RfZXh0ZW5zaW9ucyArICciIC12IC1yICcgKyAoJy1yZWN1cnNpb24gJyBpZiBzZWxmLmdldF9vcHRpb24oJ3JlY3Vyc2l2ZScpIGVsc2UgJycpICsgJy1ub25pbnRlcmFjdGl2ZScgKyAoJyAnICsgc2VsZi5nZXRfb3B0aW9uKCdleHRyYXMnKSBpZiBzZWxmLmdldF9vcHRpb24oJ2V4dHJhcycpIGVsc2UgJycpICsgJyB8IHRlZSB7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1fe2h0dHBfc2NoZW1lfV9mZnVmXycgKyBuYW1lICsgJy50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_dirb_",
        tool: "dirb",
        command_b64: "ZGlyYiB7aHR0cF9zY2hlbWV9Oi8ve2FkZHJlc3N2Nn06e3BvcnR9LyAnICsgd29yZGxpc3QgKyAnIC1sICcgKyAoJycgaWYgc2VsZi5nZXRfb3B0aW9uKCdyZWN1cnNpdmUnKSBlbHNlICctciAnKSAgKyAnLVMgLVggIiwnICsgZG90X2V4dGVuc2lvbnMgKyAnIiAtZiAtbyAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3todHRwX3NjaGVtZX1fZGlyYl8nICsgbmFtZSArICcudHh0IicgKyAoJyAnICsgc2VsZi5nZXRfb3B0aW9uKCdleHRyYXMnKSBpZiBzZWxmLmdldF9vcHRpb24oJ2V4dHJhcycpIGVsc2UgJycpKQo=",
    },
    ToolPattern {
        pattern: "_cassandra_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChjYXNzYW5kcmEqIG9yIHNzbCopIGFuZCBub3QgKGJydXRlIG9yIGJyb2FkY2FzdCBvciBkb3Mgb3IgZXh0ZXJuYWwgb3IgZnV6emVyKSIgLW9OICJ7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1fY2Fzc2FuZHJhX25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fY2Fzc2FuZHJhX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_curl-robots.txt",
        tool: "curl",
        command_b64: "Y3VybCAtc1Npa2Yge2h0dHBfc2NoZW1lfTovL3thZGRyZXNzdjZ9Ontwb3J0fS9yb2JvdHMudHh0JywgZnV0dXJlX291dGZpbGU9J3twcm90b2NvbH1fe3BvcnR9X3todHRwX3NjaGVtZX1fY3VybC1yb2JvdHMudHh0JykK",
    },
    ToolPattern {
        pattern: "_nfs_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChycGNpbmZvIG9yIG5mcyopIGFuZCBub3QgKGJydXRlIG9yIGJyb2FkY2FzdCBvciBkb3Mgb3IgZXh0ZXJuYWwgb3IgZnV6emVyKSIgLW9OICJ7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1fbmZzX25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fbmZzX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_multicastdns_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChkbnMqIG9yIHNzbCopIGFuZCBub3QgKGJydXRlIG9yIGJyb2FkY2FzdCBvciBkb3Mgb3IgZXh0ZXJuYWwgb3IgZnV6emVyKSIgLW9OICJ7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1fbXVsdGljYXN0ZG5zX25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1fbXVsdGljYXN0ZG5zX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_cups_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChjdXBzKiBvciBzc2wqKSBhbmQgbm90IChicnV0ZSBvciBicm9hZGNhc3Qgb3IgZG9zIG9yIGV4dGVybmFsIG9yIGZ1enplcikiIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X2N1cHNfbm1hcC50eHQiIC1vWCAie3NjYW5kaXJ9L3htbC97cHJvdG9jb2x9X3twb3J0fV9jdXBzX25tYXAueG1sIiB7YWRkcmVzc30nKQo=",
    },
    ToolPattern {
        pattern: "_irc_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC0tc2NyaXB0IGlyYy1ib3RuZXQtY2hhbm5lbHMsaXJjLWluZm8saXJjLXVucmVhbGlyY2QtYmFja2Rvb3IgLW9OICJ7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1faXJjX25tYXAudHh0IiAtb1ggIntzY2FuZGlyfS94bWwve3Byb3RvY29sfV97cG9ydH1faXJjX25tYXAueG1sIiAtcCB7cG9ydH0ge2FkZHJlc3N9JykK",
    },
    ToolPattern {
        pattern: "_distcc_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLGRpc3RjYy1jdmUyMDA0LTI2ODciIC0tc2NyaXB0LWFyZ3M9ImRpc3RjYy1jdmUyMDA0LTI2ODcuY21kPWlkIiAtb04gIntzY2FuZGlyfS97cHJvdG9jb2x9X3twb3J0fV9kaXN0Y2Nfbm1hcC50eHQiIC1vWCAie3NjYW5kaXJ9L3htbC97cHJvdG9jb2x9X3twb3J0fV9kaXN0Y2Nfbm1hcC54bWwiIHthZGRyZXNzfScpCg==",
    },
    ToolPattern {
        pattern: "_ajp_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLChhanAtKiBvciBzc2wqKSBhbmQgbm90IChicnV0ZSBvciBicm9hZGNhc3Qgb3IgZG9zIG9yIGV4dGVybmFsIG9yIGZ1enplcikiIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X2FqcF9ubWFwLnR4dCIgLW9YICJ7c2NhbmRpcn0veG1sL3twcm90b2NvbH1fe3BvcnR9X2FqcF9ubWFwLnhtbCIge2FkZHJlc3N9JykK",
    },
    ToolPattern {
        pattern: "smbmap-share-permissions.txt",
        tool: "smbmap",
        command_b64: "c21ibWFwIC11IG51bGwgLXAgIiIgLUgge2FkZHJlc3N9IC1QIHtwb3J0fSAyPiYxJywgb3V0ZmlsZT0nc21ibWFwLXNoYXJlLXBlcm1pc3Npb25zLnR4dCcpCg==",
    },
    ToolPattern {
        pattern: "smbmap-list-contents.txt",
        tool: "smbmap",
        command_b64: "c21ibWFwIC11IG51bGwgLXAgIiIgLUgge2FkZHJlc3N9IC1QIHtwb3J0fSAtciAyPiYxJywgb3V0ZmlsZT0nc21ibWFwLWxpc3QtY29udGVudHMudHh0JykK",
    },
    ToolPattern {
        pattern: "smbmap-execute-command.txt",
        tool: "smbmap",
        command_b64: "c21ibWFwIC11IG51bGwgLXAgIiIgLUgge2FkZHJlc3N9IC1QIHtwb3J0fSAteCAiaXBjb25maWcgL2FsbCIgMj4mMScsIG91dGZpbGU9J3NtYm1hcC1leGVjdXRlLWNvbW1hbmQudHh0JykK",
    },
    ToolPattern {
        pattern: "_kerberos_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLGtyYjUtZW51bS11c2VycyIgLW9OICJ7c2NhbmRpcn0ve3Byb3RvY29sfV97cG9ydH1fa2VyYmVyb3Nfbm1hcC50eHQiIC1vWCAie3NjYW5kaXJ9L3htbC97cHJvdG9jb2x9X3twb3J0fV9rZXJiZXJvc19ubWFwLnhtbCIge2FkZHJlc3N9JykK",
    },
    ToolPattern {
        pattern: "_dnsrecon_default.txt",
        tool: "dnsrecon",
        command_b64: "ZG5zcmVjb24gLW4ge2FkZHJlc3N9IC1kICcgKyBzZWxmLmdldF9nbG9iYWwoJ2RvbWFpbicpICsgJyAyPiYxJywgb3V0ZmlsZT0ne3Byb3RvY29sfV97cG9ydH1fZG5zcmVjb25fZGVmYXVsdC50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_ssh_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLHNzaDItZW51bS1hbGdvcyxzc2gtaG9zdGtleSxzc2gtYXV0aC1tZXRob2RzIiAtb04gIntzY2FuZGlyfS97cHJvdG9jb2x9X3twb3J0fV9zc2hfbm1hcC50eHQiIC1vWCAie3NjYW5kaXJ9L3htbC97cHJvdG9jb2x9X3twb3J0fV9zc2hfbm1hcC54bWwiIHthZGRyZXNzfScpCg==",
    },
    ToolPattern {
        pattern: "_sslscan.html",
        tool: "sslscan",
        command_b64: "c3Nsc2NhbiAtLXNob3ctY2VydGlmaWNhdGUgLS1uby1jb2xvdXIge2FkZHJlc3N2Nn06e3BvcnR9IDI+JjEnLCBvdXRmaWxlPSd7cHJvdG9jb2x9X3twb3J0fV9zc2xzY2FuLmh0bWwnKQo=",
    },
    ToolPattern {
        pattern: "_rpc_architecture.txt",
        tool: "getarch",
        command_b64: "aW1wYWNrZXQtZ2V0QXJjaCAtdGFyZ2V0IHthZGRyZXNzfScsIG91dGZpbGU9J3twcm90b2NvbH1fe3BvcnR9X3JwY19hcmNoaXRlY3R1cmUudHh0JykK",
    },
    ToolPattern {
        pattern: "_snmp_onesixtyone.txt",
        tool: "onesixtyone",
        command_b64: "b25lc2l4dHlvbmUgLWMgJyArIHNlbGYuZ2V0X29wdGlvbignY29tbXVuaXR5LXN0cmluZ3MnKSArICcgLWRkIHthZGRyZXNzfSAyPiYxJywgb3V0ZmlsZT0ne3Byb3RvY29sfV97cG9ydH1fc25tcF9vbmVzaXh0eW9uZS50eHQnKQo=",
    },
    ToolPattern {
        pattern: "_rmi_nmap.txt",
        tool: "nmap",
        command_b64: "bm1hcCB7bm1hcF9leHRyYX0gLXNWIC1wIHtwb3J0fSAtLXNjcmlwdD0iYmFubmVyLHJtaS12dWxuLWNsYXNzbG9hZGVyLHJtaS1kdW1wcmVnaXN0cnkiIC1vTiAie3NjYW5kaXJ9L3twcm90b2NvbH1fe3BvcnR9X3JtaV9ubWFwLnR4dCIgLW9YICJ7c2NhbmRpcn0veG1sL3twcm90b2NvbH1fe3BvcnR9X3JtaV9ubWFwLnhtbCIge2FkZHJlc3N9JykK",
    },];
