//! The cheat sheet document and its derived section index.

use crate::config::LayoutConfig;
use crate::hotkey::{DEFAULT_SUBSECTION, Hotkey};
use indexmap::IndexMap;

pub const DEFAULT_TITLE: &str = "Hotkey Cheat Sheet";

/// A titled, ordered list of hotkeys and the layout configuration it is printed with.
///
/// The config may be adjusted freely before a generation run starts; layout only
/// ever borrows the sheet immutably.
#[derive(Debug, Clone, PartialEq)]
pub struct CheatSheet {
    pub title: String,
    pub hotkeys: Vec<Hotkey>,
    pub config: LayoutConfig,
}

impl CheatSheet {
    pub fn new(title: impl Into<String>, hotkeys: Vec<Hotkey>) -> Self {
        Self::with_config(title, hotkeys, LayoutConfig::default())
    }

    pub fn with_config(
        title: impl Into<String>,
        hotkeys: Vec<Hotkey>,
        config: LayoutConfig,
    ) -> Self {
        Self {
            title: title.into(),
            hotkeys,
            config,
        }
    }

    /// Groups the hotkeys by section and subsection.
    ///
    /// Computed on every call so it always reflects the current hotkey list.
    pub fn sections(&self) -> SectionIndex<'_> {
        SectionIndex::build(&self.hotkeys)
    }
}

/// One section of the index: its subsections in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub name: &'a str,
    pub subsections: IndexMap<&'a str, Vec<&'a Hotkey>>,
}

impl<'a> Section<'a> {
    /// Number of hotkeys across all subsections.
    pub fn total_items(&self) -> usize {
        self.subsections.values().map(Vec::len).sum()
    }

    pub fn subsection_count(&self) -> usize {
        self.subsections.len()
    }

    pub fn iter_subsections(&self) -> impl Iterator<Item = (&'a str, &[&'a Hotkey])> + '_ {
        self.subsections
            .iter()
            .map(|(name, hotkeys)| (*name, hotkeys.as_slice()))
    }
}

/// Section name → subsection name → hotkeys, preserving first-seen order at both
/// levels. Hotkeys without a subsection land under [`DEFAULT_SUBSECTION`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionIndex<'a> {
    sections: IndexMap<&'a str, Section<'a>>,
}

impl<'a> SectionIndex<'a> {
    pub fn build(hotkeys: &'a [Hotkey]) -> Self {
        let mut sections: IndexMap<&'a str, Section<'a>> = IndexMap::new();
        for hotkey in hotkeys {
            let section = sections
                .entry(hotkey.section())
                .or_insert_with(|| Section {
                    name: hotkey.section(),
                    subsections: IndexMap::new(),
                });
            section
                .subsections
                .entry(hotkey.subsection_or_default())
                .or_default()
                .push(hotkey);
        }
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Section<'a>> {
        self.sections.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section<'a>> {
        self.sections.values()
    }

    /// Number of (section, subsection) buckets.
    pub fn total_subsections(&self) -> usize {
        self.sections.values().map(Section::subsection_count).sum()
    }

    pub fn total_hotkeys(&self) -> usize {
        self.sections.values().map(Section::total_items).sum()
    }

    pub fn is_default_subsection(name: &str) -> bool {
        name == DEFAULT_SUBSECTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hk(key: &str, section: &str, subsection: &str) -> Hotkey {
        Hotkey::new(key, format!("does {key}"), section, subsection).unwrap()
    }

    #[test]
    fn test_sections_preserve_first_seen_order() {
        let sheet = CheatSheet::new(
            "Editor",
            vec![
                hk("a", "Navigation", ""),
                hk("b", "Editing", "Lines"),
                hk("c", "Navigation", "Jumps"),
                hk("d", "Editing", "Words"),
                hk("e", "Editing", "Lines"),
                hk("f", "Navigation", ""),
            ],
        );
        let index = sheet.sections();

        let names: Vec<_> = index.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Navigation", "Editing"]);

        let nav = index.get("Navigation").unwrap();
        let subs: Vec<_> = nav.iter_subsections().map(|(name, _)| name).collect();
        assert_eq!(subs, [DEFAULT_SUBSECTION, "Jumps"]);
        let general: Vec<_> = nav.subsections[DEFAULT_SUBSECTION]
            .iter()
            .map(|h| h.key())
            .collect();
        assert_eq!(general, ["a", "f"]);

        let editing = index.get("Editing").unwrap();
        let lines: Vec<_> = editing.subsections["Lines"].iter().map(|h| h.key()).collect();
        assert_eq!(lines, ["b", "e"]);
        assert_eq!(editing.total_items(), 3);
    }

    #[test]
    fn test_every_hotkey_lands_in_exactly_one_bucket() {
        let hotkeys: Vec<_> = (0..30)
            .map(|i| {
                let subsection = if i % 4 == 0 { "" } else { ["X", "Y", "Z"][i % 3] };
                hk(&format!("k{i}"), ["S1", "S2"][i % 2], subsection)
            })
            .collect();
        let sheet = CheatSheet::new("t", hotkeys);
        let index = sheet.sections();

        assert_eq!(index.total_hotkeys(), 30);
        let mut seen: Vec<&str> = index
            .iter()
            .flat_map(|s| s.subsections.values().flatten().map(|h| h.key()))
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 30);
    }

    #[test]
    fn test_index_reflects_current_membership() {
        let mut sheet = CheatSheet::new("t", vec![hk("a", "One", "")]);
        assert_eq!(sheet.sections().len(), 1);
        sheet.hotkeys.push(hk("b", "Two", ""));
        assert_eq!(sheet.sections().len(), 2);
        assert_eq!(sheet.sections().total_subsections(), 2);
    }

    #[test]
    fn test_empty_sheet_has_empty_index() {
        let sheet = CheatSheet::new(DEFAULT_TITLE, Vec::new());
        assert!(sheet.sections().is_empty());
        assert_eq!(sheet.sections().total_hotkeys(), 0);
    }
}
