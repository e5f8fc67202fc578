//! Outcome of a cancelable configuration hook.

/// Result returned by cancelable hooks.
///
/// `Yes` means the host fully handled the event and the editor must not
/// apply its default behavior for it. `No` (or an absent hook) means the
/// default behavior applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

impl Handled {
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Chain a fallback: runs `f` only when this outcome is `No`.
    pub fn or_else(self, f: impl FnOnce() -> Handled) -> Handled {
        match self {
            Self::Yes => Self::Yes,
            Self::No => f(),
        }
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled { Self::Yes } else { Self::No }
    }
}

impl From<Handled> for bool {
    fn from(handled: Handled) -> bool {
        handled.is_handled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_round_trip() {
        assert_eq!(Handled::from(true), Handled::Yes);
        assert_eq!(Handled::from(false), Handled::No);
        assert!(bool::from(Handled::Yes));
        assert!(!Handled::No.is_handled());
    }

    #[test]
    fn test_or_else_short_circuits() {
        let outcome = Handled::Yes.or_else(|| panic!("must not run"));
        assert_eq!(outcome, Handled::Yes);
        assert_eq!(Handled::No.or_else(|| Handled::Yes), Handled::Yes);
    }
}
