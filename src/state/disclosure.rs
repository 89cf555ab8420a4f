/// Show/hide state of the SQL block. Hidden by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    shown: bool,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.shown = !self.shown;
    }

    /// Hide again; called whenever a new answer replaces the old one.
    pub fn reset(&mut self) {
        self.shown = false;
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Label of the toggle control.
    pub fn label(&self) -> &'static str {
        if self.shown {
            "Hide SQL Query"
        } else {
            "Show SQL Query"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_by_default() {
        let disclosure = Disclosure::new();
        assert!(!disclosure.is_shown());
        assert_eq!(disclosure.label(), "Show SQL Query");
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut disclosure = Disclosure::new();
        disclosure.toggle();
        assert!(disclosure.is_shown());
        assert_eq!(disclosure.label(), "Hide SQL Query");
        disclosure.toggle();
        assert_eq!(disclosure, Disclosure::new());
    }

    #[test]
    fn test_reset_hides() {
        let mut disclosure = Disclosure::new();
        disclosure.toggle();
        disclosure.reset();
        assert!(!disclosure.is_shown());
    }
}
