//! Animatable properties and partial property patches.

/// The full set of properties an animation program can drive on a target.
///
/// Translation is in CSS pixels, rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Props {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
    pub rotation: f64,
}

impl Default for Props {
    fn default() -> Self {
        Self::NATURAL
    }
}

impl Props {
    /// An element in its natural, untransformed state.
    pub const NATURAL: Self = Self {
        x: 0.0,
        y: 0.0,
        opacity: 1.0,
        scale: 1.0,
        rotation: 0.0,
    };

    /// Overlay every field the patch sets.
    #[must_use]
    pub fn patched(self, patch: &PropsPatch) -> Self {
        Self {
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
            opacity: patch.opacity.unwrap_or(self.opacity),
            scale: patch.scale.unwrap_or(self.scale),
            rotation: patch.rotation.unwrap_or(self.rotation),
        }
    }

    /// Copy only the fields selected by `mask` from `other`.
    #[must_use]
    pub fn merged(self, other: &Self, mask: &FieldMask) -> Self {
        Self {
            x: if mask.x { other.x } else { self.x },
            y: if mask.y { other.y } else { self.y },
            opacity: if mask.opacity { other.opacity } else { self.opacity },
            scale: if mask.scale { other.scale } else { self.scale },
            rotation: if mask.rotation { other.rotation } else { self.rotation },
        }
    }

    /// Linear interpolation between two property sets.
    #[must_use]
    pub fn lerp(from: &Self, to: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            opacity: mix(from.opacity, to.opacity),
            scale: mix(from.scale, to.scale),
            rotation: mix(from.rotation, to.rotation),
        }
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            round(self.x),
            round(self.y),
            round(self.scale),
            round(self.rotation)
        )
    }

    /// Inline style declarations for this property set.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "transform: {}; opacity: {};",
            self.transform(),
            round(self.opacity)
        )
    }
}

/// Trim float noise so styles stay readable in the DOM.
fn round(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// A partial set of property values, used for `from` and `to` states.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropsPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub opacity: Option<f64>,
    pub scale: Option<f64>,
    pub rotation: Option<f64>,
}

impl PropsPatch {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x: None,
            y: None,
            opacity: None,
            scale: None,
            rotation: None,
        }
    }

    #[must_use]
    pub const fn x(mut self, value: f64) -> Self {
        self.x = Some(value);
        self
    }

    #[must_use]
    pub const fn y(mut self, value: f64) -> Self {
        self.y = Some(value);
        self
    }

    #[must_use]
    pub const fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    #[must_use]
    pub const fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    #[must_use]
    pub const fn rotation(mut self, value: f64) -> Self {
        self.rotation = Some(value);
        self
    }

    /// Which fields this patch touches.
    #[must_use]
    pub const fn mask(&self) -> FieldMask {
        FieldMask {
            x: self.x.is_some(),
            y: self.y.is_some(),
            opacity: self.opacity.is_some(),
            scale: self.scale.is_some(),
            rotation: self.rotation.is_some(),
        }
    }
}

/// Field selection, so programs driving different fields of one target don't clobber each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FieldMask {
    pub x: bool,
    pub y: bool,
    pub opacity: bool,
    pub scale: bool,
    pub rotation: bool,
}

impl FieldMask {
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            x: self.x || other.x,
            y: self.y || other.y,
            opacity: self.opacity || other.opacity,
            scale: self.scale || other.scale,
            rotation: self.rotation || other.rotation,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.x || self.y || self.opacity || self.scale || self.rotation)
    }
}
