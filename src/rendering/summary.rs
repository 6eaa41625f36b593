//! Human-readable summary rendering
//!
//! Groups recorded diagnostics by severity (errors, then warnings, then
//! notices) under a short header with the detected type, the furthest tier
//! reached, and per-severity counts. Non-verbose output is one compact line
//! per message; verbose output adds each message's location breadcrumb and
//! description, so it is never shorter than the compact form.

use super::colors::{Colors, strip_ansi};
use crate::bundle::{DiagnosticBundle, MessageCounts};
use crate::types::{Description, Message, Severity};

/// Render the summary for a bundle snapshot.
///
/// `use_color` selects the palette explicitly; with color disabled the
/// output contains no ANSI markers at all, including any that appear inside
/// recorded message text.
pub fn render_summary(bundle: &DiagnosticBundle, verbose: bool, use_color: bool) -> String {
    let colors = if use_color {
        Colors::with_color()
    } else {
        Colors::no_color()
    };

    let mut out = String::new();
    out.push_str(colors.bold);
    out.push_str("Validation summary");
    out.push_str(colors.reset);
    out.push('\n');
    out.push_str("------------------\n");
    out.push_str(&format!("Detected type: {}\n", detected_display(bundle)));
    out.push_str(&format!("Ending tier: {}\n", bundle.ending_tier()));
    out.push_str(&counts_line(&bundle.counts()));
    out.push('\n');

    for severity in [Severity::Error, Severity::Warning, Severity::Notice] {
        let group: Vec<&Message> = bundle
            .messages()
            .iter()
            .filter(|message| message.severity == severity)
            .collect();
        if group.is_empty() {
            continue;
        }
        out.push('\n');
        for message in group {
            render_message(&mut out, message, verbose, &colors);
        }
    }

    out
}

fn render_message(out: &mut String, message: &Message, verbose: bool, colors: &Colors) {
    let color = match message.severity {
        Severity::Error => colors.red,
        Severity::Warning => colors.yellow,
        Severity::Notice => colors.cyan,
    };
    out.push_str(color);
    out.push_str(message.severity.label());
    out.push_str(colors.reset);
    out.push_str(": ");
    out.push_str(&strip_ansi(&message.message));
    out.push('\n');

    if !verbose {
        return;
    }

    let location = location_display(message);
    if !location.is_empty() {
        out.push_str(&format!("  --> {}\n", location));
    }
    match &message.description {
        Some(Description::Text(text)) => {
            for line in text.lines() {
                out.push_str(&format!("    {}\n", strip_ansi(line)));
            }
        }
        Some(Description::Lines(lines)) => {
            for line in lines {
                out.push_str(&format!("    {}\n", strip_ansi(line)));
            }
        }
        None => {}
    }
}

/// Breadcrumb location: scope labels joined by `" > "` with the leaf
/// appended, then `:line[:column]` when a line was recorded.
fn location_display(message: &Message) -> String {
    let mut location = message.file.display();
    if !location.is_empty() {
        if let Some(line) = message.line {
            location.push_str(&format!(":{line}"));
            if let Some(column) = message.column {
                location.push_str(&format!(":{column}"));
            }
        }
    }
    location
}

fn detected_display(bundle: &DiagnosticBundle) -> String {
    match (bundle.detected_type(), bundle.detected_type_name()) {
        (_, Some(name)) => name.to_string(),
        (Some(code), None) => code.to_string(),
        (None, None) => "unknown".to_string(),
    }
}

fn counts_line(counts: &MessageCounts) -> String {
    if counts.total() == 0 {
        return "No problems found.".to_string();
    }

    let mut parts = Vec::new();
    if counts.errors > 0 {
        parts.push(format!("{} error{}", counts.errors, plural(counts.errors)));
    }
    if counts.warnings > 0 {
        parts.push(format!(
            "{} warning{}",
            counts.warnings,
            plural(counts.warnings)
        ));
    }
    if counts.notices > 0 {
        parts.push(format!("{} notice{}", counts.notices, plural(counts.notices)));
    }

    format!("Found {}.", join_parts(&parts))
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

fn join_parts(parts: &[String]) -> String {
    match parts.len() {
        0 => String::new(),
        1 => parts[0].clone(),
        2 => format!("{} and {}", parts[0], parts[1]),
        _ => {
            let mut all = parts.to_vec();
            let last = all.pop().unwrap();
            format!("{}, and {}", all.join(", "), last)
        }
    }
}
