//! Advisory page count, computed without laying anything out.

use crate::constants::LayoutConstants;
use crate::estimate::estimate_document_height;
use crate::frames::FramePlan;
use hotsheet_types::{LayoutConfig, SectionIndex};

const MIN_PAGES: usize = 1;

/// Approximate number of pages the sheet will need.
///
/// The document estimate is spread over every frame of a page. Without
/// `fill_top_half` that is `columns` frames of the full usable height; with it,
/// twice as many frames of half height minus the row gap.
pub fn estimate_pages(
    index: &SectionIndex,
    config: &LayoutConfig,
    plan: &FramePlan,
    constants: &LayoutConstants,
) -> usize {
    let total_height = estimate_document_height(index, config, constants);
    let per_frame = total_height / plan.frames_per_page() as f32;
    let pages = (per_frame / plan.frame_height).ceil() as usize;
    pages.max(MIN_PAGES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::plan_frames;
    use crate::test_utils::{sheet_with_sections, uniform_sheet};
    use hotsheet_types::CheatSheet;

    fn pages_for(sheet: &CheatSheet) -> usize {
        let constants = LayoutConstants::default();
        let plan = plan_frames(&sheet.config, &constants).unwrap();
        estimate_pages(&sheet.sections(), &sheet.config, &plan, &constants)
    }

    #[test]
    fn test_empty_sheet_needs_one_page() {
        assert_eq!(pages_for(&uniform_sheet(0, 0)), 1);
    }

    #[test]
    fn test_small_sheet_fits_one_page() {
        let sheet = sheet_with_sections(&[("Editing", "General", 2)]);
        assert_eq!(pages_for(&sheet), 1);
    }

    #[test]
    fn test_matches_closed_form_without_fill_top_half() {
        // 10 sections x 4 subsections x 20 hotkeys
        let sheet = uniform_sheet(10, 20);
        let total = 30.0 + 10.0 * 15.0 + 40.0 * 12.0 + 800.0 * 11.0 + 10.0 * 8.0;
        let expected = (total / 5.0 / 742.0_f32).ceil() as usize;
        assert_eq!(pages_for(&sheet), expected);
        assert!(expected > 1);
    }

    #[test]
    fn test_monotonic_in_hotkey_count() {
        let mut previous = 0;
        for per_subsection in (0..200).step_by(7) {
            let pages = pages_for(&uniform_sheet(3, per_subsection));
            assert!(pages >= previous, "estimate decreased at {per_subsection}");
            assert!(pages >= 1);
            previous = pages;
        }
    }

    #[test]
    fn test_fill_top_half_uses_half_height_frames() {
        let mut sheet = uniform_sheet(10, 20);
        sheet.config.fill_top_half = true;
        let total: f32 = 30.0 + 10.0 * 15.0 + 40.0 * 12.0 + 800.0 * 11.0 + 10.0 * 8.0;
        let expected = (total / 10.0 / 358.5).ceil() as usize;
        assert_eq!(pages_for(&sheet), expected);
    }
}
