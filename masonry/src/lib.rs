//! Masonry layout for a CSS grid with fixed-height auto rows.
//!
//! The grid never knows image dimensions up front. Each tile measures its
//! image once it has loaded and claims `ceil(height / row_unit)` rows, so the
//! grid engine can pack tiles of any aspect ratio without vertical gaps.

pub mod tile;

pub use tile::TileLayout;

use thiserror::Error;

pub const DEFAULT_ROW_UNIT_PX: u32 = 10;
pub const DEFAULT_COLUMN_WIDTH_PX: u32 = 250;
pub const DEFAULT_COLUMN_GAP_PX: u32 = 10;
pub const DEFAULT_FALLBACK_SPAN: u32 = 1;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridConfigError {
    #[error("row unit must be at least 1px")]
    ZeroRowUnit,
    #[error("column width must be at least 1px")]
    ZeroColumnWidth,
}

/// Sizes shared by the grid container and all of its tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    row_unit_px: u32,
    column_width_px: u32,
    column_gap_px: u32,
    row_gap_px: u32,
    fallback_span: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_unit_px: DEFAULT_ROW_UNIT_PX,
            column_width_px: DEFAULT_COLUMN_WIDTH_PX,
            column_gap_px: DEFAULT_COLUMN_GAP_PX,
            row_gap_px: 0,
            fallback_span: DEFAULT_FALLBACK_SPAN,
        }
    }
}

impl GridConfig {
    pub fn new(row_unit_px: u32, column_width_px: u32) -> Result<Self, GridConfigError> {
        if row_unit_px == 0 {
            return Err(GridConfigError::ZeroRowUnit);
        }
        if column_width_px == 0 {
            return Err(GridConfigError::ZeroColumnWidth);
        }
        Ok(Self {
            row_unit_px,
            column_width_px,
            ..Self::default()
        })
    }

    /// Span given to tiles whose image failed to load. Never below 1.
    pub fn with_fallback_span(mut self, span: u32) -> Self {
        self.fallback_span = span.max(1);
        self
    }

    pub fn fallback_span(&self) -> u32 {
        self.fallback_span
    }

    pub fn row_span(&self, height_px: f64) -> u32 {
        row_span(height_px, self.row_unit_px)
    }

    pub fn container_style(&self) -> String {
        format!(
            "display: grid; \
             grid-template-columns: repeat(auto-fill, minmax({}px, 1fr)); \
             grid-gap: {}px {}px; \
             grid-auto-rows: {}px;",
            self.column_width_px, self.row_gap_px, self.column_gap_px, self.row_unit_px
        )
    }

    /// Inline style of a tile occupying `span` rows. A span of 0 leaves the
    /// placement to the grid.
    pub fn tile_style(&self, span: u32) -> String {
        let row_end = match span {
            0 => "auto".to_string(),
            span => format!("span {span}"),
        };
        format!(
            "width: {}px; grid-row-end: {};",
            self.column_width_px, row_end
        )
    }
}

/// Number of `row_unit_px` rows needed to fit `height_px`, rounded up.
pub fn row_span(height_px: f64, row_unit_px: u32) -> u32 {
    if row_unit_px == 0 || !height_px.is_finite() || height_px <= 0.0 {
        return 0;
    }
    (height_px / f64::from(row_unit_px)).ceil().min(f64::from(u32::MAX)) as u32
}
