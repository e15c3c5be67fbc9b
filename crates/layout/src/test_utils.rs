use hotsheet_types::{CheatSheet, Hotkey};

/// Builds a sheet from `(section, subsection, hotkey_count)` rows, in order.
/// A subsection named "General" produces hotkeys without a subsection.
pub fn sheet_with_sections(buckets: &[(&str, &str, usize)]) -> CheatSheet {
    let mut hotkeys = Vec::new();
    for &(section, subsection, count) in buckets {
        let subsection = if subsection == "General" { "" } else { subsection };
        for i in 0..count {
            hotkeys.push(
                Hotkey::new(
                    format!("Ctrl+{i}"),
                    format!("{section} {subsection} action {i}"),
                    section,
                    subsection,
                )
                .unwrap(),
            );
        }
    }
    CheatSheet::new("Test Sheet", hotkeys)
}

/// `sections` sections named "Section N", each with four subsections of `per_subsection` hotkeys.
pub fn uniform_sheet(sections: usize, per_subsection: usize) -> CheatSheet {
    let mut hotkeys = Vec::new();
    for s in 1..=sections {
        for sub in 1..=4 {
            for i in 0..per_subsection {
                hotkeys.push(
                    Hotkey::new(
                        format!("Alt+{i}"),
                        format!("Action {s}.{sub}.{i}"),
                        format!("Section {s}"),
                        format!("Group {sub}"),
                    )
                    .unwrap(),
                );
            }
        }
    }
    CheatSheet::new("Uniform", hotkeys)
}
