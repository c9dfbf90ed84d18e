//! `gtdb exists` -- report whether the database directory is present.
//!
//! Exits 0 when present and 2 when absent, so it can drive shell scripts
//! the way `test -d` does.

use anyhow::Result;
use gittextdb_core::TextDatabase;

use crate::cli::DirArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Exit status used when the directory is absent.
const EXIT_ABSENT: i32 = 2;

/// Execute the `gtdb exists` command.
pub fn run(ctx: &RuntimeContext, args: &DirArgs) -> Result<()> {
    let (dir, _) = ctx.resolve_dir(args.dir.as_deref())?;

    // The constructor's error still carries the handle, so both arms yield one.
    let db = TextDatabase::create(dir).unwrap_or_else(|e| e.into_database());
    let exists = db.structure_exists();

    if ctx.json {
        output_json(&serde_json::json!({
            "directory": db.directory().display().to_string(),
            "exists": exists,
        }));
    } else if !ctx.quiet {
        println!("{}", exists);
    }

    if !exists {
        std::process::exit(EXIT_ABSENT);
    }
    Ok(())
}
