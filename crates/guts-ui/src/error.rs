use std::fmt;

/// Which style axis a configuration value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleAxis {
    Variant,
    Size,
}

impl fmt::Display for StyleAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleAxis::Variant => write!(f, "variant"),
            StyleAxis::Size => write!(f, "size"),
        }
    }
}

/// A style name that does not map to any known variant or size.
///
/// Unknown names are always rejected; nothing silently falls back to the
/// default style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleError {
    pub axis: StyleAxis,
    pub value: String,
    pub expected: &'static [&'static str],
}

impl StyleError {
    pub fn unknown_variant(value: impl Into<String>, expected: &'static [&'static str]) -> Self {
        Self {
            axis: StyleAxis::Variant,
            value: value.into(),
            expected,
        }
    }

    pub fn unknown_size(value: impl Into<String>, expected: &'static [&'static str]) -> Self {
        Self {
            axis: StyleAxis::Size,
            value: value.into(),
            expected,
        }
    }
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown button {} `{}` (expected one of: {})",
            self.axis,
            self.value,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for StyleError {}
