//! Turns API results into terminal text.
//!
//! Every function here is pure: it takes data and a [`Palette`] and returns
//! a `String`. Printing happens in `commands.rs`.

use super::styles::Palette;
use rosterapp::commands::{CmdMessage, Listing, MessageLevel};
use rosterapp::model::{Record, Status, UserProfile};
use rosterapp::theme::{ResolvedTheme, ThemePreference};
use rosterapp::validation::ValidationErrors;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 5] = ["ID", "Name", "Email", "Role", "Status"];

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn cells(record: &Record) -> [String; 5] {
    [
        record.id.to_string(),
        record.name.clone(),
        record.email.clone(),
        record.role.label().to_string(),
        record.status.label().to_string(),
    ]
}

/// A table of records, one per line, columns aligned by display width.
pub fn render_records(records: &[Record], palette: &Palette) -> String {
    let rows: Vec<[String; 5]> = records.iter().map(cells).collect();
    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| palette.header.apply_to(pad(h, *w)).to_string())
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    for (record, row) in records.iter().zip(rows.iter()) {
        let status_style = match record.status {
            Status::Active => &palette.active,
            Status::Inactive => &palette.inactive,
        };
        let line = [
            palette.id.apply_to(pad(&row[0], widths[0])).to_string(),
            palette.regular.apply_to(pad(&row[1], widths[1])).to_string(),
            palette.muted.apply_to(pad(&row[2], widths[2])).to_string(),
            palette.regular.apply_to(pad(&row[3], widths[3])).to_string(),
            status_style.apply_to(&row[4]).to_string(),
        ];
        out.push_str(&line.join("  "));
        out.push('\n');
    }
    out
}

/// The page table followed by a footer with the position and the view's
/// shareable query string.
pub fn render_listing(listing: &Listing, palette: &Palette) -> String {
    let view = &listing.view;
    if view.rows.is_empty() {
        return String::new();
    }

    let mut out = render_records(&view.rows, palette);
    let noun = if view.total_matches == 1 { "record" } else { "records" };
    let mut footer = format!(
        "Page {} of {} · {} {} · {} per page",
        listing.state.page, view.total_pages, view.total_matches, noun, listing.state.page_size
    );
    if !listing.query.is_empty() {
        footer.push_str(&format!(" · ?{}", listing.query));
    }
    out.push('\n');
    out.push_str(&palette.muted.apply_to(footer).to_string());
    out.push('\n');
    out
}

pub fn render_record(record: &Record, palette: &Palette) -> String {
    let fields = [
        ("ID", record.id.to_string()),
        ("Name", record.name.clone()),
        ("Email", record.email.clone()),
        ("Role", record.role.label().to_string()),
        ("Status", record.status.label().to_string()),
    ];
    fields
        .iter()
        .map(|(label, value)| {
            format!(
                "{} {}\n",
                palette.muted.apply_to(pad(&format!("{}:", label), 7)),
                palette.regular.apply_to(value)
            )
        })
        .collect()
}

pub fn render_messages(messages: &[CmdMessage], palette: &Palette) -> String {
    messages
        .iter()
        .map(|m| {
            let style = match m.level {
                MessageLevel::Info => &palette.info,
                MessageLevel::Success => &palette.success,
                MessageLevel::Warning => &palette.warning,
            };
            format!("{}\n", style.apply_to(&m.content))
        })
        .collect()
}

pub fn render_validation(errors: &ValidationErrors, palette: &Palette) -> String {
    let mut out = format!("{}\n", palette.error.apply_to("Invalid record:"));
    for error in &errors.errors {
        out.push_str(&format!(
            "  {} {}\n",
            palette.muted.apply_to(format!("{}:", error.field.as_str())),
            error.message
        ));
    }
    out
}

pub fn render_profile(user: &UserProfile, palette: &Palette) -> String {
    format!(
        "{} {}\n",
        palette.header.apply_to(&user.full_name),
        palette.muted.apply_to(format!("({})", user.username))
    )
}

pub fn render_theme(preference: ThemePreference, resolved: ResolvedTheme, palette: &Palette) -> String {
    let resolved = match resolved {
        ResolvedTheme::Light => "light",
        ResolvedTheme::Dark => "dark",
    };
    if preference == ThemePreference::System {
        format!("system {}\n", palette.muted.apply_to(format!("(currently {})", resolved)))
    } else {
        format!("{}\n", preference)
    }
}
