use hotsheet::{CheatSheet, Hotkey};

pub fn hotkey(key: &str, description: &str, section: &str, subsection: &str) -> Hotkey {
    Hotkey::new(key, description, section, subsection).unwrap()
}

/// A small editor sheet: two sections, one with named subsections
pub fn editor_sheet() -> CheatSheet {
    CheatSheet::new(
        "Editor Shortcuts",
        vec![
            hotkey("Ctrl+S", "Save file", "File", ""),
            hotkey("Ctrl+O", "Open file", "File", ""),
            hotkey("Ctrl+W", "Close tab", "File", ""),
            hotkey("dd", "Delete line", "Editing", "Lines"),
            hotkey("yy", "Yank line", "Editing", "Lines"),
            hotkey("dw", "Delete word", "Editing", "Words"),
            hotkey("cw", "Change word", "Editing", "Words"),
        ],
    )
}

/// `sections` sections of `subsections` x `per_subsection` hotkeys with unique descriptions
pub fn large_sheet(sections: usize, subsections: usize, per_subsection: usize) -> CheatSheet {
    let mut hotkeys = Vec::new();
    for s in 1..=sections {
        for sub in 1..=subsections {
            for i in 1..=per_subsection {
                hotkeys.push(hotkey(
                    &format!("Ctrl+{i}"),
                    &format!("Command {s}-{sub}-{i}"),
                    &format!("Section {s}"),
                    &format!("Group {sub}"),
                ));
            }
        }
    }
    CheatSheet::new("Large Sheet", hotkeys)
}

pub const VIM_YAML: &str = r#"title: Vim
config:
  columns: 4
hotkeys:
  - key: dd
    description: Delete line
    section: Editing
    subsection: Lines
  - key: u
    description: Undo
    section: Editing
  - key: ":w"
    description: Write file
    section: Files
"#;

pub const INVALID_YAML: &str = r#"hotkeys:
  - key: dd
    section: Editing
  - description: Undo
    section: Editing
"#;
