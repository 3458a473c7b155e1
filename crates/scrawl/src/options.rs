//! Fill configuration.

/// Style parameters for one fill call. Immutable for the duration of the
/// call.
#[derive(Debug, Clone)]
pub struct FillOptions {
    /// Hachure angle in degrees. Any real value; normalized into `[0, 180)`
    /// before use (a family and its 180-degree rotation are identical).
    pub angle: f64,
    /// Distance between hachure lines. Non-positive requests a default
    /// derived from the stroke width.
    pub gap: f64,
    /// Line-thickness hint for fill strokes. Negative requests half the
    /// stroke width.
    pub fill_weight: f64,
    /// Ambient stroke width the defaults above derive from.
    pub stroke_width: f64,
    /// Join the exit of each hachure row to the entry of the next. Used when
    /// stacking fills across nested boundaries (rings, donuts); off for a
    /// single simple shape.
    pub connect_ends: bool,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            angle: -41.0,
            gap: -1.0,
            fill_weight: -1.0,
            stroke_width: 1.0,
            connect_ends: false,
        }
    }
}

impl FillOptions {
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_fill_weight(mut self, fill_weight: f64) -> Self {
        self.fill_weight = fill_weight;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_connect_ends(mut self, connect_ends: bool) -> Self {
        self.connect_ends = connect_ends;
        self
    }

    /// The gap actually used for sweeping: the requested gap, or four stroke
    /// widths when the request is non-positive, floored at 0.1 either way so
    /// the sweep always advances.
    pub fn effective_gap(&self) -> f64 {
        let gap = if self.gap <= 0.0 {
            self.stroke_width * 4.0
        } else {
            self.gap
        };
        gap.max(0.1)
    }

    /// The thickness used for fill strokes: the requested weight, or half the
    /// stroke width when the request is negative.
    pub fn effective_fill_weight(&self) -> f64 {
        if self.fill_weight < 0.0 {
            self.stroke_width / 2.0
        } else {
            self.fill_weight
        }
    }
}
