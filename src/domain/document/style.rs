//! Shared GOST style table.
//!
//! Both output backends read the same per-role styling so the layout
//! convention is defined exactly once. Sizes are points; indents are
//! centimeters; page geometry is millimeters.

use super::EntryRole;

/// Paragraph alignment in abstract terms; each backend maps it to its own
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Styling for one entry role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleStyle {
    pub alignment: Alignment,
    pub size_pt: u32,
    /// First-line indent in centimeters; 0.0 means none.
    pub first_line_indent_cm: f32,
    pub bold: bool,
    /// Muted gray text color (disclaimer only).
    pub muted: bool,
    /// Vertical space after the paragraph, in points.
    pub space_after_pt: u32,
    /// Line spacing multiplier.
    pub line_spacing: f32,
}

impl EntryRole {
    /// GOST styling for this role.
    pub fn style(&self) -> RoleStyle {
        match self {
            EntryRole::Title => RoleStyle {
                alignment: Alignment::Center,
                size_pt: 16,
                first_line_indent_cm: 0.0,
                bold: true,
                muted: false,
                space_after_pt: 12,
                line_spacing: 1.15,
            },
            EntryRole::MetaLine => RoleStyle {
                alignment: Alignment::Right,
                size_pt: 12,
                first_line_indent_cm: 0.0,
                bold: false,
                muted: false,
                space_after_pt: 6,
                line_spacing: 1.15,
            },
            EntryRole::Body => RoleStyle {
                alignment: Alignment::Justify,
                size_pt: 14,
                first_line_indent_cm: 1.25,
                bold: false,
                muted: false,
                space_after_pt: 6,
                line_spacing: 1.15,
            },
            EntryRole::Footer => RoleStyle {
                alignment: Alignment::Left,
                size_pt: 12,
                first_line_indent_cm: 0.0,
                bold: false,
                muted: false,
                space_after_pt: 6,
                line_spacing: 1.15,
            },
            EntryRole::Disclaimer => RoleStyle {
                alignment: Alignment::Justify,
                size_pt: 10,
                first_line_indent_cm: 0.0,
                bold: false,
                muted: true,
                space_after_pt: 6,
                line_spacing: 1.0,
            },
        }
    }
}

/// Page geometry in millimeters.
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_top_mm: f32,
    pub margin_bottom_mm: f32,
    pub margin_left_mm: f32,
    pub margin_right_mm: f32,
}

impl PageGeometry {
    /// Usable width between the left and right margins.
    pub fn content_width_mm(&self) -> f32 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm
    }
}

/// A4 page with GOST document margins.
pub const GOST_PAGE: PageGeometry = PageGeometry {
    width_mm: 210.0,
    height_mm: 297.0,
    margin_top_mm: 20.0,
    margin_bottom_mm: 20.0,
    margin_left_mm: 30.0,
    margin_right_mm: 10.0,
};
