/// Format hints attached to a scalar field.
///
/// Hints are interpreted by the converter the field resolves to; a converter
/// ignores hints that do not apply to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    /// Fixed width of the remote field, in characters or digits.
    pub width: Option<usize>,

    /// Side on which fixed-width text is padded.
    pub pad: Pad,

    /// Number of fractional digits of a decimal field.
    pub scale: Option<u32>,

    /// Maximum number of significant digits of a decimal field.
    pub precision: Option<u32>,

    /// A `chrono` format string for date and time fields.
    pub pattern: Option<String>,
}

/// Side on which fixed-width text is padded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pad {
    /// Pad on the left: the text is right-justified.
    Left,

    /// Pad on the right: the text is left-justified.
    #[default]
    Right,
}

impl Format {
    pub fn new() -> Format {
        Format::default()
    }

    pub fn width(mut self, width: usize) -> Format {
        self.width = Some(width);
        self
    }

    pub fn pad(mut self, pad: Pad) -> Format {
        self.pad = pad;
        self
    }

    pub fn scale(mut self, scale: u32) -> Format {
        self.scale = Some(scale);
        self
    }

    pub fn precision(mut self, precision: u32) -> Format {
        self.precision = Some(precision);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Format {
        self.pattern = Some(pattern.into());
        self
    }

    /// Returns `true` if no hint is set.
    pub fn is_empty(&self) -> bool {
        *self == Format::default()
    }
}
