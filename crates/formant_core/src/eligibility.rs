//! Toggle eligibility
//!
//! The precondition consulted before every attempted value flip. Pure and
//! total: no side effects, an answer for every input.

use crate::config::ControlFlags;

/// May a toggle control flip from `current`?
///
/// Disabled always wins, with no further checks. An already-selected
/// exclusive (radio-like) control cannot be deselected by direct
/// interaction; only an external reconcile can force it back off.
pub fn can_toggle(flags: ControlFlags, current: bool) -> bool {
    if flags.disabled {
        return false;
    }
    if flags.exclusive && current {
        return false;
    }
    true
}

/// May a text control accept a replacement value?
///
/// Text controls have no flip semantics; only `disabled` gates them.
pub fn can_edit(flags: ControlFlags) -> bool {
    !flags.disabled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_always_blocks() {
        let flags = ControlFlags::new().disabled(true);
        assert!(!can_toggle(flags, false));
        assert!(!can_toggle(flags, true));
        assert!(!can_toggle(flags.exclusive(true), false));
        assert!(!can_edit(flags));
    }

    #[test]
    fn test_selected_exclusive_blocks() {
        let flags = ControlFlags::new().exclusive(true);
        assert!(!can_toggle(flags, true));
        // An unselected exclusive control can still be selected
        assert!(can_toggle(flags, false));
    }

    #[test]
    fn test_plain_control_is_eligible() {
        let flags = ControlFlags::new();
        assert!(can_toggle(flags, false));
        assert!(can_toggle(flags, true));
        assert!(can_edit(flags));
    }

    #[test]
    fn test_validation_flags_do_not_gate() {
        let flags = ControlFlags::new().required(true).error(true);
        assert!(can_toggle(flags, true));
        assert!(can_edit(flags));
    }
}
