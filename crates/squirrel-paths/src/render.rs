use std::fmt::Write;

use squirrel_dirs::{Layout, Location};

/// One `label: path` line per location, labels padded to a common width.
pub fn render_text(layout: &Layout) -> String {
    let width = Location::ALL
        .iter()
        .map(|l| l.to_string().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{:width$}  {}", "identifier", layout.identifier, width = width);
    for location in Location::ALL {
        let _ = writeln!(
            out,
            "{:width$}  {}",
            location.to_string(),
            layout.get(location).display(),
            width = width
        );
    }
    out
}
