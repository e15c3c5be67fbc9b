use hotsheet_types::Padding;

/// Every fixed number the layout core relies on.
///
/// Passed explicitly to the estimator, packer, planner and engine. `Default`
/// holds the values cheat sheets are tuned for; tests and benchmarks may override
/// individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConstants {
    /// Horizontal gap between adjacent columns.
    pub column_spacing: f32,
    /// Interior padding of every frame.
    pub frame_padding: Padding,

    /// Sections estimated taller than this are split per subsection.
    pub large_section_threshold: f32,
    /// Sections estimated shorter than this are kept whole.
    pub small_section_threshold: f32,
    /// Sections with fewer hotkeys than this are never split when awkward breaks are avoided.
    pub min_items_for_breaking: usize,

    /// Section header allowance added to `header_font_size` by the section estimate.
    pub section_header_estimate: f32,
    /// Subsection header allowance added to `font_size` by the section estimate.
    pub subsection_header_estimate: f32,
    /// Title allowance of the document estimate.
    pub document_title_estimate: f32,
    /// Per-section header allowance of the document estimate.
    pub document_section_estimate: f32,
    /// Per-subsection allowance of the document estimate.
    pub document_subsection_estimate: f32,

    /// Fraction of the frame's interior height above which a conditional spacer
    /// considers itself at the top of a frame.
    pub frame_top_threshold: f32,

    /// Space below the title line itself.
    pub title_space_after: f32,
    /// Fixed spacer packed after the title block.
    pub title_spacer: f32,
    pub section_header_space_after: f32,
    /// Padding of the band drawn behind section headers.
    pub section_header_padding: Padding,
    pub subsection_header_space_before: f32,
    pub subsection_header_space_after: f32,
    pub subsection_header_indent: f32,
    /// Space below each key and description paragraph inside a row.
    pub row_text_space_after: f32,

    /// Share of the column width given to the key cell.
    pub key_column_ratio: f32,
    /// Share of the column width given to the description cell.
    pub description_column_ratio: f32,
    pub cell_padding: Padding,
    pub row_rule_width: f32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            column_spacing: 15.0,
            frame_padding: Padding::symmetric(6.0, 3.0),
            large_section_threshold: 200.0,
            small_section_threshold: 100.0,
            min_items_for_breaking: 3,
            section_header_estimate: 15.0,
            subsection_header_estimate: 8.0,
            document_title_estimate: 30.0,
            document_section_estimate: 15.0,
            document_subsection_estimate: 12.0,
            frame_top_threshold: 0.95,
            title_space_after: 12.0,
            title_spacer: 12.0,
            section_header_space_after: 8.0,
            section_header_padding: Padding::new(2.0, 3.0, 6.0, 3.0),
            subsection_header_space_before: 5.0,
            subsection_header_space_after: 3.0,
            subsection_header_indent: 8.0,
            row_text_space_after: 1.0,
            key_column_ratio: 0.35,
            description_column_ratio: 0.65,
            cell_padding: Padding::symmetric(1.0, 3.0),
            row_rule_width: 0.25,
        }
    }
}
