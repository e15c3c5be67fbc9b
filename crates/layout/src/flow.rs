//! The flow packer: turns the section index into keep-together blocks.
//!
//! Each section is packed according to its estimated height:
//!
//! - fewer than `min_items_for_breaking` hotkeys (only with `section_no_awkward_breaks`):
//!   one atomic block, whatever its height;
//! - taller than `large_section_threshold`: one block per subsection, the first
//!   carrying the section header;
//! - shorter than `small_section_threshold`: one block for the whole section;
//! - otherwise: the header together with the first subsection, then one block per
//!   remaining subsection.
//!
//! No header can therefore end up alone at the bottom of a frame.

use crate::constants::LayoutConstants;
use crate::estimate::estimate_section_height;
use crate::frames::FramePlan;
use hotsheet_types::{Hotkey, LayoutConfig, Section, SectionIndex};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpacerPolicy {
    /// Always takes its full height.
    Fixed,
    /// Collapses to nothing when placed at the top of a frame.
    ///
    /// A spacer is at the top when the available height is at least `threshold`
    /// of the frame's interior height (`frame_height - vertical_padding`).
    CollapseAtFrameTop {
        frame_height: f32,
        vertical_padding: f32,
        threshold: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacer {
    pub height: f32,
    pub policy: SpacerPolicy,
}

impl Spacer {
    pub fn fixed(height: f32) -> Self {
        Self {
            height,
            policy: SpacerPolicy::Fixed,
        }
    }

    pub fn collapse_at_frame_top(
        height: f32,
        frame_height: f32,
        vertical_padding: f32,
        threshold: f32,
    ) -> Self {
        Self {
            height,
            policy: SpacerPolicy::CollapseAtFrameTop {
                frame_height,
                vertical_padding,
                threshold,
            },
        }
    }

    /// The height this spacer takes when `available_height` remains in its frame.
    pub fn resolve(&self, available_height: f32) -> f32 {
        match self.policy {
            SpacerPolicy::Fixed => self.height,
            SpacerPolicy::CollapseAtFrameTop {
                frame_height,
                vertical_padding,
                threshold,
            } => {
                let expected_at_top = frame_height - vertical_padding;
                if available_height >= expected_at_top * threshold {
                    0.0
                } else {
                    self.height
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HotkeyRow {
    pub key: String,
    pub description: String,
}

/// Two-column key/description table of one subsection.
#[derive(Debug, Clone, PartialEq)]
pub struct HotkeyTable {
    pub rows: Vec<HotkeyRow>,
    pub key_width: f32,
    pub description_width: f32,
}

impl HotkeyTable {
    pub fn width(&self) -> f32 {
        self.key_width + self.description_width
    }
}

/// A unit of content inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Flowable {
    Title(String),
    /// Section header text, already upper-cased.
    SectionHeader(String),
    SubsectionHeader(String),
    Table(HotkeyTable),
    Spacer(Spacer),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Title,
    /// Free-standing inter-section spacing.
    Spacer,
    /// A whole section: header and every subsection.
    Section,
    /// The section header together with its first subsection.
    SectionHead,
    /// A subsection without the section header.
    Subsection,
}

/// An ordered run of flowables handed to the pagination engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    /// Whether the block must not be split across frames.
    pub keep_together: bool,
    pub items: Vec<Flowable>,
}

impl Block {
    fn atomic(kind: BlockKind, items: Vec<Flowable>) -> Self {
        Self {
            kind,
            keep_together: true,
            items,
        }
    }

    fn loose(kind: BlockKind, items: Vec<Flowable>) -> Self {
        Self {
            kind,
            keep_together: false,
            items,
        }
    }

    pub fn has_section_header(&self) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, Flowable::SectionHeader(_)))
    }
}

/// How a section is cut into blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBreak {
    /// Too few hotkeys to be worth splitting.
    ForcedAtomic,
    /// The inter-section spacer is still emitted, as its own loose block ahead
    /// of the subsection blocks.
    SplitBySubsection,
    KeepWhole,
    HeaderWithFirst,
}

pub struct FlowPacker<'a> {
    config: &'a LayoutConfig,
    constants: &'a LayoutConstants,
    frame_height: f32,
    vertical_padding: f32,
    column_width: f32,
}

impl<'a> FlowPacker<'a> {
    pub fn new(config: &'a LayoutConfig, constants: &'a LayoutConstants, plan: &FramePlan) -> Self {
        Self {
            config,
            constants,
            frame_height: plan.frame_height,
            vertical_padding: plan.vertical_padding(),
            column_width: plan.column_width,
        }
    }

    /// Packs the title and every section, in index order.
    pub fn pack(&self, title: &str, index: &SectionIndex) -> Vec<Block> {
        let mut blocks = vec![Block::loose(
            BlockKind::Title,
            vec![
                Flowable::Title(title.to_string()),
                Flowable::Spacer(Spacer::fixed(self.constants.title_spacer)),
            ],
        )];

        for (i, section) in index.iter().enumerate() {
            self.pack_section(section, i == 0, &mut blocks);
        }

        log::debug!(
            "Packed {} section(s) into {} block(s)",
            index.len(),
            blocks.len()
        );
        blocks
    }

    pub fn section_break(&self, section: &Section) -> SectionBreak {
        let height = estimate_section_height(section, self.config, self.constants);
        let total_items = section.total_items();

        if self.config.section_no_awkward_breaks
            && total_items < self.constants.min_items_for_breaking
        {
            SectionBreak::ForcedAtomic
        } else if height > self.constants.large_section_threshold {
            SectionBreak::SplitBySubsection
        } else if height < self.constants.small_section_threshold {
            SectionBreak::KeepWhole
        } else {
            SectionBreak::HeaderWithFirst
        }
    }

    fn pack_section(&self, section: &Section, first: bool, blocks: &mut Vec<Block>) {
        let decision = self.section_break(section);
        log::debug!(
            "Section '{}' ({} hotkeys, {} subsections): {:?}",
            section.name,
            section.total_items(),
            section.subsection_count(),
            decision
        );

        let spacer = (!first).then(|| Flowable::Spacer(self.section_spacer()));
        let header = [
            Flowable::SectionHeader(section.name.to_uppercase()),
            Flowable::Spacer(Spacer::fixed(self.constants.section_header_space_after)),
        ];

        match decision {
            SectionBreak::ForcedAtomic | SectionBreak::KeepWhole => {
                let mut items: Vec<Flowable> = spacer.into_iter().chain(header).collect();
                for (name, hotkeys) in section.iter_subsections() {
                    items.extend(self.subsection_items(name, hotkeys));
                }
                blocks.push(Block::atomic(BlockKind::Section, items));
            }
            SectionBreak::SplitBySubsection => {
                // The spacing may be consumed by a frame break on its own.
                if let Some(spacer) = spacer {
                    blocks.push(Block::loose(BlockKind::Spacer, vec![spacer]));
                }
                self.push_subsections(section, header.into(), blocks);
            }
            SectionBreak::HeaderWithFirst => {
                let lead = spacer.into_iter().chain(header).collect();
                self.push_subsections(section, lead, blocks);
            }
        }
    }

    /// One atomic block per subsection; `lead` is prepended to the first one.
    fn push_subsections(&self, section: &Section, lead: Vec<Flowable>, blocks: &mut Vec<Block>) {
        let mut lead = Some(lead);
        for (name, hotkeys) in section.iter_subsections() {
            let (kind, mut items) = match lead.take() {
                Some(lead) => (BlockKind::SectionHead, lead),
                None => (BlockKind::Subsection, Vec::new()),
            };
            items.extend(self.subsection_items(name, hotkeys));
            if !items.is_empty() {
                blocks.push(Block::atomic(kind, items));
            }
        }
    }

    fn section_spacer(&self) -> Spacer {
        if self.config.section_align_flush {
            Spacer::collapse_at_frame_top(
                self.config.section_spacing,
                self.frame_height,
                self.vertical_padding,
                self.constants.frame_top_threshold,
            )
        } else {
            Spacer::fixed(self.config.section_spacing)
        }
    }

    /// Optional subsection header, then the table and its trailing spacing.
    fn subsection_items(&self, name: &str, hotkeys: &[&Hotkey]) -> Vec<Flowable> {
        let mut items = Vec::new();
        if !SectionIndex::is_default_subsection(name) {
            items.push(Flowable::SubsectionHeader(name.to_string()));
        }
        if let Some(table) = self.hotkey_table(hotkeys) {
            items.push(Flowable::Table(table));
            items.push(Flowable::Spacer(Spacer::fixed(self.config.subsection_spacing)));
        }
        items
    }

    fn hotkey_table(&self, hotkeys: &[&Hotkey]) -> Option<HotkeyTable> {
        if hotkeys.is_empty() {
            return None;
        }
        let rows = hotkeys
            .iter()
            .map(|hotkey| HotkeyRow {
                key: hotkey.key().to_string(),
                description: hotkey.description().to_string(),
            })
            .collect();
        Some(HotkeyTable {
            rows,
            key_width: self.column_width * self.constants.key_column_ratio,
            description_width: self.column_width * self.constants.description_column_ratio,
        })
    }
}
