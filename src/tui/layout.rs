//! Width breakpoints for layout decisions
//!
//! Render code asks for a breakpoint instead of comparing widths itself.

/// Terminal width class, ordered narrow to wide
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Under 60 columns (split panes, phone terminals)
    Compact,
    /// 60 to 99
    Normal,
    /// 100 to 139
    Wide,
    /// 140 and up
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Self::Compact,
            60..=99 => Self::Normal,
            100..=139 => Self::Wide,
            _ => Self::UltraWide,
        }
    }

    pub fn at_least(self, min: Breakpoint) -> bool {
        self >= min
    }

    /// Cards per grid row
    pub fn grid_columns(self) -> usize {
        match self {
            Self::Compact => 1,
            Self::Normal => 2,
            Self::Wide => 3,
            Self::UltraWide => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_edges() {
        let cases = [
            (0, Breakpoint::Compact),
            (59, Breakpoint::Compact),
            (60, Breakpoint::Normal),
            (99, Breakpoint::Normal),
            (100, Breakpoint::Wide),
            (139, Breakpoint::Wide),
            (140, Breakpoint::UltraWide),
        ];
        for (width, expected) in cases {
            assert_eq!(Breakpoint::from_width(width), expected, "width {}", width);
        }
    }

    #[test]
    fn at_least_is_inclusive() {
        assert!(Breakpoint::Wide.at_least(Breakpoint::Normal));
        assert!(Breakpoint::Wide.at_least(Breakpoint::Wide));
        assert!(!Breakpoint::Wide.at_least(Breakpoint::UltraWide));
    }

    #[test]
    fn grid_columns_grow_with_width() {
        assert_eq!(Breakpoint::from_width(50).grid_columns(), 1);
        assert_eq!(Breakpoint::from_width(80).grid_columns(), 2);
        assert_eq!(Breakpoint::from_width(120).grid_columns(), 3);
        assert_eq!(Breakpoint::from_width(200).grid_columns(), 4);
    }
}
