use super::types::{InputEvent, Modifiers, PointerButtonEvent, PointerMoveEvent};

/// What the platform translation needs to remember between events.
///
/// winit reports button and wheel events without a position or modifiers, so
/// both are carried over from earlier events.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    pub modifiers: Modifiers,

    /// Last pointer position in logical pixels; `None` once it leaves the window.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }
            InputEvent::PointerLeft => self.pointer_pos = None,
            InputEvent::PointerButton(PointerButtonEvent { x, y, modifiers, .. }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;
            }
            InputEvent::Key { modifiers, .. } | InputEvent::MouseWheel { modifiers, .. } => {
                self.modifiers = *modifiers;
            }
            InputEvent::Focused(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState};

    #[test]
    fn tracks_pointer_until_it_leaves() {
        let mut state = InputState::default();
        state.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 10.0, y: 20.0 }));
        assert_eq!(state.pointer_pos, Some((10.0, 20.0)));
        state.apply_event(&InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn key_events_refresh_modifiers() {
        let mut state = InputState::default();
        let shift = Modifiers { shift: true, ..Modifiers::default() };
        state.apply_event(&InputEvent::Key {
            key: Key::Escape,
            state: KeyState::Pressed,
            modifiers: shift,
            code: 0,
            repeat: false,
        });
        assert_eq!(state.modifiers, shift);
        state.apply_event(&InputEvent::ModifiersChanged(Modifiers::default()));
        assert_eq!(state.modifiers, Modifiers::default());
    }
}
