//! Modifier state for one decode run.

bitflags::bitflags! {
    /// Modifier flags tracked by the decoder.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const NONE      = 0;
        /// Latched on Shift down, cleared on Shift up. Left and right share it.
        const SHIFT     = 1 << 0;
        /// Toggled on every Caps Lock down.
        const CAPS_LOCK = 1 << 1;
    }
}

/// Mutable decoder state. Starts with both flags clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderState {
    modifiers: Modifiers,
}

impl DecoderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn caps_active(&self) -> bool {
        self.modifiers.contains(Modifiers::CAPS_LOCK)
    }

    pub fn shift_active(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Shift XOR Caps Lock. Applied to every glyph pair, not just letters.
    pub fn effective_shift(&self) -> bool {
        self.shift_active() != self.caps_active()
    }

    pub fn toggle_caps(&mut self) {
        self.modifiers.toggle(Modifiers::CAPS_LOCK);
    }

    pub fn set_shift(&mut self, held: bool) {
        self.modifiers.set(Modifiers::SHIFT, held);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DecoderState::new();
        assert!(!state.caps_active());
        assert!(!state.shift_active());
        assert_eq!(state.modifiers(), Modifiers::NONE);
    }

    #[test]
    fn test_effective_shift_truth_table() {
        let mut state = DecoderState::new();
        assert!(!state.effective_shift());

        state.set_shift(true);
        assert!(state.effective_shift());

        state.toggle_caps();
        assert!(!state.effective_shift());

        state.set_shift(false);
        assert!(state.effective_shift());
    }

    #[test]
    fn test_caps_toggles() {
        let mut state = DecoderState::new();
        state.toggle_caps();
        assert!(state.caps_active());
        state.toggle_caps();
        assert!(!state.caps_active());
    }

    #[test]
    fn test_shift_clear_is_idempotent() {
        let mut state = DecoderState::new();
        state.set_shift(false);
        assert!(!state.shift_active());
        state.set_shift(true);
        state.set_shift(true);
        state.set_shift(false);
        assert!(!state.shift_active());
    }
}
