//! `gtdb info` -- show which directory would be used and whether it exists.

use anyhow::Result;
use gittextdb_core::TextDatabase;
use gittextdb_ui::styles::{render_fail, render_fail_icon, render_muted, render_pass, render_pass_icon};

use crate::cli::DirArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `gtdb info` command.
pub fn run(ctx: &RuntimeContext, args: &DirArgs) -> Result<()> {
    let (dir, source) = ctx.resolve_dir(args.dir.as_deref())?;
    let db = TextDatabase::create(dir).unwrap_or_else(|e| e.into_database());
    let exists = db.structure_exists();
    let directory = db.directory().display().to_string();

    if ctx.json {
        output_json(&serde_json::json!({
            "directory": directory,
            "source": source.as_str(),
            "exists": exists,
        }));
        return Ok(());
    }
    if ctx.quiet {
        return Ok(());
    }

    let state = if exists {
        format!("{} {}", render_pass_icon(), render_pass("present"))
    } else {
        format!("{} {}", render_fail_icon(), render_fail("absent"))
    };
    println!("directory: {}", directory);
    println!("source:    {}", render_muted(source.as_str()));
    println!("state:     {}", state);
    Ok(())
}
