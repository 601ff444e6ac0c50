use crate::GridConfig;

/// Layout state of one grid tile.
///
/// A tile starts unmeasured and settles exactly once: either when its image
/// loads and can be measured, or when the image fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileLayout {
    #[default]
    Unmeasured,
    Measured { span: u32 },
    LoadFailed { span: u32 },
}

impl TileLayout {
    pub fn span(&self) -> u32 {
        match *self {
            TileLayout::Unmeasured => 0,
            TileLayout::Measured { span } | TileLayout::LoadFailed { span } => span,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, TileLayout::Unmeasured)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TileLayout::LoadFailed { .. })
    }

    /// Records the rendered height of a loaded image. Returns whether the
    /// state changed.
    ///
    /// A load that measures no height is treated like a failed load, so a
    /// settled tile never keeps a span of 0.
    pub fn on_load(&mut self, height_px: f64, config: &GridConfig) -> bool {
        if self.is_settled() {
            return false;
        }
        let span = config.row_span(height_px);
        log::trace!("tile measured at {height_px}px -> span {span}");
        if span == 0 {
            log::warn!("loaded image measured {height_px}px, using fallback span");
            return self.on_error(config);
        }
        *self = TileLayout::Measured { span };
        true
    }

    /// Records that the image could not be loaded. Returns whether the state
    /// changed.
    pub fn on_error(&mut self, config: &GridConfig) -> bool {
        if self.is_settled() {
            return false;
        }
        *self = TileLayout::LoadFailed {
            span: config.fallback_span(),
        };
        true
    }
}
