//! Style flags passed through to the platform.

use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Style bits for a toolbar.
///
/// The toolbar interprets none of them except [`DOUBLE_BUFFERED`], which it
/// always forces on. Everything else is forwarded to the platform unchanged.
///
/// [`DOUBLE_BUFFERED`]: StyleFlags::DOUBLE_BUFFERED
///
/// # Example
///
/// ```
/// use rounded_toolbar::StyleFlags;
///
/// let style = StyleFlags::BORDER | StyleFlags::NO_FOCUS;
/// assert!(style.contains(StyleFlags::BORDER));
/// assert!(!style.contains(StyleFlags::DOUBLE_BUFFERED));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleFlags(u32);

impl StyleFlags {
    /// No style bits.
    pub const NONE: StyleFlags = StyleFlags(0);
    /// Ask the platform to draw a native border around the control.
    pub const BORDER: StyleFlags = StyleFlags(1 << 0);
    /// The control never takes keyboard focus.
    pub const NO_FOCUS: StyleFlags = StyleFlags(1 << 1);
    /// Paint into an off-screen buffer first. Always set on toolbars.
    pub const DOUBLE_BUFFERED: StyleFlags = StyleFlags(1 << 29);

    /// Wrap raw platform bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw bits.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Check if every bit of `flags` is set.
    pub fn contains(&self, flags: StyleFlags) -> bool {
        (self.0 & flags.0) == flags.0
    }

    /// Check if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for StyleFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        StyleFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for StyleFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for StyleFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        StyleFlags(self.0 & rhs.0)
    }
}
