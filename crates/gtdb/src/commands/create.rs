//! `gtdb create` -- open a handle on a database directory that must not exist yet.
//!
//! Only the existence check runs; the directory itself is left untouched.

use anyhow::Result;
use gittextdb_core::TextDatabase;
use gittextdb_ui::styles::{render_bold, render_pass_icon};

use crate::cli::DirArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `gtdb create` command.
pub fn run(ctx: &RuntimeContext, args: &DirArgs) -> Result<()> {
    let (dir, source) = ctx.resolve_dir(args.dir.as_deref())?;
    tracing::debug!(directory = %dir.display(), %source, "create");

    let db = TextDatabase::create(dir)?;

    if ctx.json {
        output_json(&serde_json::json!({
            "directory": db.directory().display().to_string(),
            "status": "ready",
        }));
    } else if !ctx.quiet {
        println!(
            "{} ready: {}",
            render_pass_icon(),
            render_bold(&db.directory().display().to_string())
        );
    }

    Ok(())
}
