//! Catch-all screen for paths outside the route table.

use crate::router::{suggest, KNOWN_PATHS};
use crate::ui::style;

pub fn render(path: &str) -> String {
    let mut out = Vec::new();
    out.push(style::header("Page Not Found"));
    out.push(format!(
        "The path {} does not match any route.",
        style::section(path)
    ));
    if let Some(candidate) = suggest(path) {
        out.push(format!("Did you mean {}?", style::section(candidate)));
    }
    out.push(String::new());
    out.push(style::dim("Known routes:"));
    for known in KNOWN_PATHS {
        out.push(style::dim(&format!("  {known}")));
    }
    out.push(String::new());
    out.push(format!(
        "Head back to {} to keep browsing.",
        style::section("/budgets")
    ));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_routes_and_suggests_near_misses() {
        colored::control::set_override(false);
        let rendered = render("/budget");
        assert!(rendered.contains("does not match any route"));
        assert!(rendered.contains("Did you mean /budgets?"));
        assert!(rendered.contains("/saving-goals/{id}"));
    }
}
