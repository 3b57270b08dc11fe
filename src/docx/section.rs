/// Section properties including page setup and margins.
///
/// A section defines the page geometry for a contiguous range of pages;
/// documents produced here have exactly one.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionProperties {
    /// Page width in twips (twentieth of a point, 1440 = 1 inch)
    pub page_width: u32,
    /// Page height in twips
    pub page_height: u32,
    /// Top margin in twips
    pub margin_top: u32,
    /// Bottom margin in twips
    pub margin_bottom: u32,
    /// Left margin in twips
    pub margin_left: u32,
    /// Right margin in twips
    pub margin_right: u32,
    /// Header distance from top in twips
    pub header_distance: u32,
    /// Footer distance from bottom in twips
    pub footer_distance: u32,
}

impl Default for SectionProperties {
    fn default() -> Self {
        // US Letter size: 8.5" x 11" = 12240 x 15840 twips
        Self {
            page_width: 12240,
            page_height: 15840,
            margin_top: 1440,     // 1 inch
            margin_bottom: 1440,  // 1 inch
            margin_left: 1440,    // 1 inch
            margin_right: 1440,   // 1 inch
            header_distance: 720, // 0.5 inch
            footer_distance: 720, // 0.5 inch
        }
    }
}

impl SectionProperties {
    /// Create A4 page size (210mm x 297mm).
    pub fn a4() -> Self {
        Self {
            page_width: 11906,  // 210mm = 8.27 inches
            page_height: 16838, // 297mm = 11.69 inches
            ..Default::default()
        }
    }

    /// Set margins (all in inches).
    pub fn set_margins(&mut self, top: f64, bottom: f64, left: f64, right: f64) {
        self.margin_top = (top * 1440.0) as u32;
        self.margin_bottom = (bottom * 1440.0) as u32;
        self.margin_left = (left * 1440.0) as u32;
        self.margin_right = (right * 1440.0) as u32;
    }
}
