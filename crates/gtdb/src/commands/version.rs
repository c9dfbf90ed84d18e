//! `gtdb version` -- print the binary and core library versions.

use anyhow::Result;
use serde::Serialize;

use crate::context::RuntimeContext;
use crate::output::output_json;

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: &'static str,
    core_version: &'static str,
    os: &'static str,
    arch: &'static str,
}

impl VersionInfo {
    fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            core_version: gittextdb_core::VERSION,
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

/// Execute the `gtdb version` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let info = VersionInfo::current();
    if ctx.json {
        output_json(&info);
    } else {
        println!(
            "gtdb {} (gittextdb-core {}) {}/{}",
            info.version, info.core_version, info.os, info.arch
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_info_names_both_crates() {
        let info = VersionInfo::current();
        assert!(!info.version.is_empty());
        assert!(!info.core_version.is_empty());

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["core_version"], gittextdb_core::VERSION);
    }
}
