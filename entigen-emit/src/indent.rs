//! Indentation configuration for emitted source.

const SPACES: &str = "                ";

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width, clamped to `1..=16`.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (C#, the default for generated units).
    pub const CSHARP: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const TWO_SPACES: Self = Self::Spaces(2);

    /// Build an indent from a width, where `0` selects tabs.
    pub fn from_width(width: u8) -> Self {
        if width == 0 {
            Self::Tab
        } else {
            Self::Spaces(width)
        }
    }

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(n) => {
                let width = usize::from(*n).clamp(1, SPACES.len());
                &SPACES[..width]
            }
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_width_is_clamped() {
        assert_eq!(Indent::Spaces(0).as_str(), " ");
        assert_eq!(Indent::Spaces(200).as_str().len(), 16);
    }

    #[test]
    fn test_from_width() {
        assert_eq!(Indent::from_width(0), Indent::Tab);
        assert_eq!(Indent::from_width(2), Indent::TWO_SPACES);
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::CSHARP);
    }
}
