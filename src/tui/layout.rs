/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered
/// in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: split pane, minimal terminal
    Base,
    /// 60-99 cols: half-screen
    Md,
    /// 100-139 cols: full terminal
    Lg,
    /// 140+ cols: ultrawide monitor
    Xl,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Base,
            60..=99 => Breakpoint::Md,
            100..=139 => Breakpoint::Lg,
            _ => Breakpoint::Xl,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Base => 0,
            Breakpoint::Md => 1,
            Breakpoint::Lg => 2,
            Breakpoint::Xl => 3,
        }
    }
}

/// A value that varies by breakpoint: `{ base, md?, lg? }`
///
/// `resolve` picks the value for the widest breakpoint at or below the
/// current width, falling back toward `base` where steps are unset.
#[derive(Debug, Clone)]
pub struct Responsive<T> {
    base: T,
    md: Option<T>,
    lg: Option<T>,
}

impl<T: Clone> Responsive<T> {
    pub fn base(value: T) -> Self {
        Self {
            base: value,
            md: None,
            lg: None,
        }
    }

    pub fn md(mut self, value: T) -> Self {
        self.md = Some(value);
        self
    }

    pub fn lg(mut self, value: T) -> Self {
        self.lg = Some(value);
        self
    }

    /// Resolve the value for the given terminal width
    pub fn resolve(&self, width: u16) -> T {
        let current = Breakpoint::from_width(width);
        let steps = [(Breakpoint::Lg, &self.lg), (Breakpoint::Md, &self.md)];
        for (level, value) in steps {
            if current.at_least(level) {
                if let Some(v) = value {
                    return v.clone();
                }
            }
        }
        self.base.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Base);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Base);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Md);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Md);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Lg);
        assert_eq!(Breakpoint::from_width(139), Breakpoint::Lg);
        assert_eq!(Breakpoint::from_width(140), Breakpoint::Xl);
    }

    #[test]
    fn at_least_comparisons() {
        let lg = Breakpoint::Lg;
        assert!(lg.at_least(Breakpoint::Base));
        assert!(lg.at_least(Breakpoint::Md));
        assert!(lg.at_least(Breakpoint::Lg));
        assert!(!lg.at_least(Breakpoint::Xl));
    }

    #[test]
    fn resolve_below_md_uses_base() {
        let size = Responsive::base("sm").md("md");
        assert_eq!(size.resolve(59), "sm");
        assert_eq!(size.resolve(60), "md");
        assert_eq!(size.resolve(120), "md");
    }

    #[test]
    fn resolve_skips_unset_steps() {
        // No md value: lg widths fall through to lg, md widths to base
        let width = Responsive::base(30u16).lg(48);
        assert_eq!(width.resolve(80), 30);
        assert_eq!(width.resolve(110), 48);
        assert_eq!(width.resolve(150), 48);
    }
}
