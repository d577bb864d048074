use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::utils::cn;

/// Classes shared by every button regardless of variant or size.
const BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md \
    text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 \
    [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 \
    outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] \
    aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 \
    aria-invalid:border-destructive";

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
    Ghost,
    Link,
}

impl ButtonVariant {
    /// Every variant, in display order.
    pub const ALL: [ButtonVariant; 6] = [
        ButtonVariant::Default,
        ButtonVariant::Secondary,
        ButtonVariant::Destructive,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];

    const NAMES: &'static [&'static str] = &[
        "default",
        "secondary",
        "destructive",
        "outline",
        "ghost",
        "link",
    ];

    /// Configuration key for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }

    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90",
            ButtonVariant::Secondary => {
                "bg-secondary text-secondary-foreground shadow-xs hover:bg-secondary/80"
            }
            ButtonVariant::Destructive => {
                "bg-destructive text-white shadow-xs hover:bg-destructive/90 \
                 focus-visible:ring-destructive/20 dark:focus-visible:ring-destructive/40 \
                 dark:bg-destructive/60"
            }
            ButtonVariant::Outline => {
                "border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground \
                 dark:bg-input/30 dark:border-input dark:hover:bg-input/50"
            }
            ButtonVariant::Ghost => {
                "hover:bg-accent hover:text-accent-foreground dark:hover:bg-accent/50"
            }
            ButtonVariant::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonVariant {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonVariant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| StyleError::unknown_variant(s, Self::NAMES))
    }
}

impl TryFrom<String> for ButtonVariant {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Size for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    /// Square button sized for a single glyph.
    Icon,
}

impl ButtonSize {
    /// Every size, in display order.
    pub const ALL: [ButtonSize; 4] = [
        ButtonSize::Default,
        ButtonSize::Sm,
        ButtonSize::Lg,
        ButtonSize::Icon,
    ];

    const NAMES: &'static [&'static str] = &["default", "sm", "lg", "icon"];

    /// Configuration key for this size.
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
            ButtonSize::Icon => "icon",
        }
    }

    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "h-9 px-4 py-2 has-[>svg]:px-3",
            ButtonSize::Sm => "h-8 gap-1.5 px-3 has-[>svg]:px-2.5",
            ButtonSize::Lg => "h-10 px-6 has-[>svg]:px-4",
            ButtonSize::Icon => "size-9",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonSize {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| StyleError::unknown_size(s, Self::NAMES))
    }
}

impl TryFrom<String> for ButtonSize {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Resolve the class string for a button.
///
/// Fragments are emitted base first, then variant, then size, with the
/// caller's `class` appended last so it wins under the stylesheet cascade.
pub fn button_variants(variant: ButtonVariant, size: ButtonSize, class: Option<&str>) -> String {
    cn([Some(BASE), Some(variant.class()), Some(size.class()), class])
}

/// A variant and size pair, loadable from host configuration.
///
/// ```toml
/// variant = "outline"
/// size = "sm"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
}

impl ButtonStyle {
    pub fn new(variant: ButtonVariant, size: ButtonSize) -> Self {
        Self { variant, size }
    }

    pub fn class(&self, extra: Option<&str>) -> String {
        button_variants(self.variant, self.size, extra)
    }
}
