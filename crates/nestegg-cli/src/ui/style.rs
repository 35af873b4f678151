//! Shared styling helpers for the screen renderers.

use colored::{Color, Colorize};

use nestegg_domain::{ColorTag, GoalStatus};

/// Screen title, in the app's accent color.
pub fn header(text: &str) -> String {
    text.green().bold().to_string()
}

/// Breadcrumb trail above a screen title.
pub fn breadcrumb(parts: &[&str]) -> String {
    parts
        .iter()
        .enumerate()
        .map(|(idx, part)| {
            if idx + 1 < parts.len() {
                part.green().to_string()
            } else {
                part.normal().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

pub fn section(text: &str) -> String {
    text.bold().to_string()
}

pub fn dim(text: &str) -> String {
    text.dimmed().to_string()
}

pub fn error_line(text: &str) -> String {
    text.red().to_string()
}

pub fn warning(text: &str) -> String {
    text.yellow().to_string()
}

pub fn success(text: &str) -> String {
    text.green().to_string()
}

/// Status badge matching the web app's color coding.
pub fn badge(status: GoalStatus) -> String {
    match status {
        GoalStatus::InProgress => status.to_string().blue().to_string(),
        GoalStatus::Completed => status.to_string().green().to_string(),
    }
}

pub fn color_for(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Blue => Color::Blue,
        ColorTag::Green => Color::Green,
        ColorTag::Purple => Color::Magenta,
        ColorTag::Pink => Color::BrightMagenta,
        ColorTag::Yellow => Color::Yellow,
        ColorTag::Gray => Color::BrightBlack,
    }
}

pub fn tag_label(text: &str, tag: ColorTag) -> String {
    text.color(color_for(tag)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_text_matches_derived_status() {
        colored::control::set_override(false);
        assert_eq!(badge(GoalStatus::InProgress), "In Progress");
        assert_eq!(badge(GoalStatus::Completed), "Completed");
        colored::control::unset_override();
    }

    #[test]
    fn breadcrumb_joins_with_slashes() {
        colored::control::set_override(false);
        assert_eq!(
            breadcrumb(&["Saving Goals", "Vacation Fund"]),
            "Saving Goals / Vacation Fund"
        );
        colored::control::unset_override();
    }
}
