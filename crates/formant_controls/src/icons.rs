//! Semantic status icons
//!
//! A closed set of decorative markers the controls can attach to their
//! status (an error cross next to a failing input, a check next to a passing
//! one). Each icon is a `&'static str` containing the SVG inner elements;
//! the engine never inspects the content, it only forwards the reference.
//! Use [`to_svg`] to wrap a fragment in a complete SVG tag.

/// success
pub const SUCCESS: &str = r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#;

/// cancel
pub const CANCEL: &str = r#"<circle cx="12" cy="12" r="10"/><path d="m15 9-6 6"/><path d="m9 9 6 6"/>"#;

/// add
pub const ADD: &str = r#"<circle cx="12" cy="12" r="10"/><path d="M8 12h8"/><path d="M12 8v8"/>"#;

/// warning
pub const WARNING: &str = r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#;

/// remove
pub const REMOVE: &str = r#"<circle cx="12" cy="12" r="10"/><path d="M8 12h8"/>"#;

/// question
pub const QUESTION: &str = r#"<circle cx="12" cy="12" r="10"/><path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/><path d="M12 17h.01"/>"#;

/// The closed set of semantic icon kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Success,
    Cancel,
    Add,
    Warning,
    Remove,
    Question,
}

impl IconKind {
    /// The semantic name, as hosting configuration spells it
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::Success => "success",
            IconKind::Cancel => "cancel",
            IconKind::Add => "add",
            IconKind::Warning => "warning",
            IconKind::Remove => "remove",
            IconKind::Question => "question",
        }
    }

    /// The opaque renderable reference for this kind
    pub fn fragment(&self) -> &'static str {
        match self {
            IconKind::Success => SUCCESS,
            IconKind::Cancel => CANCEL,
            IconKind::Add => ADD,
            IconKind::Warning => WARNING,
            IconKind::Remove => REMOVE,
            IconKind::Question => QUESTION,
        }
    }

    /// Parse a semantic name from hosting configuration
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "success" => Some(IconKind::Success),
            "cancel" => Some(IconKind::Cancel),
            "add" => Some(IconKind::Add),
            "warning" => Some(IconKind::Warning),
            "remove" => Some(IconKind::Remove),
            "question" => Some(IconKind::Question),
            _ => None,
        }
    }
}

/// Wrap an icon fragment in a complete SVG tag at the given pixel size
pub fn to_svg(kind: IconKind, size: f32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{}</svg>"#,
        kind.fragment()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for kind in [
            IconKind::Success,
            IconKind::Cancel,
            IconKind::Add,
            IconKind::Warning,
            IconKind::Remove,
            IconKind::Question,
        ] {
            assert_eq!(IconKind::parse(kind.name()), Some(kind));
        }
        assert_eq!(IconKind::parse("sparkles"), None);
    }

    #[test]
    fn test_to_svg_wraps_fragment() {
        let svg = to_svg(IconKind::Success, 16.0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(SUCCESS));
        assert!(svg.contains(r#"width="16""#));
    }
}
