use std::io::Write;

use tinysplit_config::OutputFormat;
use tinysplit_engine::{EntryKind, LineClass, NestingStack, Sigil, StackEntry};

/// Writes one classified line in the chosen format.
pub fn render_line<W: Write>(
    out: &mut W,
    format: OutputFormat,
    c: &LineClass,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Summary => render_summary(out, c),
        OutputFormat::Stack => render_stack(out, c),
        OutputFormat::Tree => render_tree(out, c),
    }
}

fn render_summary<W: Write>(out: &mut W, c: &LineClass) -> std::io::Result<()> {
    let closed: Vec<&str> = c.closed.iter().map(|e| e.raw_text.as_str()).collect();
    writeln!(
        out,
        "[{}] {}; [{}]",
        c.stack_after.depth(),
        c.trimmed,
        closed.join(", ")
    )
}

fn render_stack<W: Write>(out: &mut W, c: &LineClass) -> std::io::Result<()> {
    writeln!(out, "Trimmed: {:?}", c.trimmed)?;
    match c.sigil {
        Some(sigil) => writeln!(out, "Sigil: {sigil}")?,
        None => writeln!(out, "Sigil:")?,
    }
    write_stack(out, &c.stack_after)?;
    writeln!(out)
}

/// `stack[n]:` followed by one row per entry, innermost first.
pub fn write_stack<W: Write>(out: &mut W, stack: &NestingStack) -> std::io::Result<()> {
    writeln!(out, "stack[{}]:", stack.depth())?;
    for n in 0..stack.depth() {
        if let Some(entry) = stack.from_top(n) {
            writeln!(out, "  - {}", entry.raw_text)?;
        }
    }
    Ok(())
}

/// Number of open blocks and sections in `entries`; attributes don't indent.
fn scope_depth(entries: &[StackEntry]) -> usize {
    entries
        .iter()
        .filter(|e| e.kind != EntryKind::Attribute)
        .count()
}

fn render_tree<W: Write>(out: &mut W, c: &LineClass) -> std::io::Result<()> {
    let entries = c.stack_after.entries();
    if let Some(opened) = &c.opened {
        let parents = &entries[..entries.len() - 1];
        return writeln!(out, "{}{}", "  ".repeat(scope_depth(parents)), opened.raw_text);
    }
    match c.sigil {
        Some(Sigil::Text(_)) => {
            writeln!(out, "{}{}", "  ".repeat(scope_depth(entries)), c.trimmed)
        }
        None => writeln!(out),
        _ => Ok(()),
    }
}
