//! Closed-form height estimates.
//!
//! These never look at rendered text; they are deterministic functions of the
//! section shape and the configuration, which keeps packing decisions reproducible.

use crate::constants::LayoutConstants;
use hotsheet_types::{LayoutConfig, Section, SectionIndex};

/// Estimated vertical space a section needs, in points.
pub fn estimate_section_height(
    section: &Section,
    config: &LayoutConfig,
    constants: &LayoutConstants,
) -> f32 {
    let mut total = config.header_font_size + constants.section_header_estimate;

    for (name, hotkeys) in section.iter_subsections() {
        if !SectionIndex::is_default_subsection(name) {
            total += config.font_size + constants.subsection_header_estimate;
        }
        total += hotkeys.len() as f32 * config.row_height;
        total += config.subsection_spacing;
    }

    total + config.section_spacing
}

/// Estimated height of the whole document laid out in a single column.
pub fn estimate_document_height(
    index: &SectionIndex,
    config: &LayoutConfig,
    constants: &LayoutConstants,
) -> f32 {
    let sections = index.len() as f32;
    constants.document_title_estimate
        + sections * constants.document_section_estimate
        + index.total_subsections() as f32 * constants.document_subsection_estimate
        + index.total_hotkeys() as f32 * config.row_height
        + sections * config.section_spacing
}
