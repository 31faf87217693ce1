//! Static style tables: colour palette and tone modifiers.
//!
//! Everything here is a constant; components pick classes from these tables
//! instead of building style strings ad hoc.

pub mod palette {
    pub const BRAND: &str = "#f7931a";
    pub const SUCCESS: &str = "#52c41a";
    pub const WARNING: &str = "#faad14";
    pub const DANGER: &str = "#ff4d4f";
    pub const MUTED: &str = "#8c8c8c";
    pub const SURFACE: &str = "#141414";
    pub const TEXT: &str = "#f0f0f0";
}

/// Semantic colour of a status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Muted,
}

impl Tone {
    /// BEM modifier applied on `.status`
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Success => "status status--success",
            Tone::Warning => "status status--warning",
            Tone::Danger => "status status--danger",
            Tone::Muted => "status status--muted",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Tone::Success => palette::SUCCESS,
            Tone::Warning => palette::WARNING,
            Tone::Danger => palette::DANGER,
            Tone::Muted => palette::MUTED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_classes_are_distinct() {
        let tones = [Tone::Success, Tone::Warning, Tone::Danger, Tone::Muted];
        let mut classes: Vec<_> = tones.iter().map(|t| t.class()).collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), tones.len());
    }

    #[test]
    fn test_tone_colors_come_from_palette() {
        assert_eq!(Tone::Success.color(), palette::SUCCESS);
        assert_eq!(Tone::Danger.color(), palette::DANGER);
        assert_eq!(Tone::Warning.color(), palette::WARNING);
        assert_eq!(Tone::Muted.color(), palette::MUTED);
    }
}
