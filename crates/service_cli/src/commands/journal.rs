//! Journal and session-history commands.

use std::io::Write;
use std::path::Path;

use super::Context;
use crate::Result;

/// Run `log show`
pub fn show(ctx: &mut Context, lines: usize, out: &mut dyn Write) -> Result<()> {
    let tail = ctx.journal.tail(lines)?;
    if tail.is_empty() {
        writeln!(out, "No log entries yet.")?;
        return Ok(());
    }
    for line in tail {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Run `log clear`
pub fn clear(ctx: &mut Context, confirmed: bool, out: &mut dyn Write) -> Result<()> {
    if !confirmed {
        writeln!(out, "Abort clear (pass --yes to confirm)")?;
        return Ok(());
    }
    ctx.journal.clear()?;
    writeln!(out, "Log cleared")?;
    Ok(())
}

/// Run `log export`
pub fn export_log(ctx: &mut Context, output: &Path, out: &mut dyn Write) -> Result<()> {
    let rows = ctx.journal.export_log(output)?;
    writeln!(out, "Exported {rows} log entries -> {}", output.display())?;
    Ok(())
}

/// Run `history export`
pub fn export_history(ctx: &mut Context, output: &Path, out: &mut dyn Write) -> Result<()> {
    if ctx.journal.history().next().is_none() {
        writeln!(out, "Session history empty")?;
        return Ok(());
    }
    let rows = ctx.journal.export_history(output)?;
    writeln!(out, "Exported {rows} history entries -> {}", output.display())?;
    ctx.journal.note(
        "HISTORY_EXPORT",
        &format!("Session history exported -> {}", output.display()),
    )?;
    Ok(())
}
