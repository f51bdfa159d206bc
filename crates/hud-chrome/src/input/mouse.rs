//! Mouse state and button types

/// Per-component mouse interaction state
///
/// `Drag` is the frozen-snapshot state: while a component is in `Drag` its
/// pre-drag snapshot stops refreshing and all deltas are computed against it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MouseState {
    /// Pointer not over the component
    #[default]
    None,
    /// Pointer over the component, no button held
    Hover,
    /// Button pressed on the component, not yet moved
    Click,
    /// Button held and pointer moving
    Drag,
}

impl MouseState {
    /// Check if the component is in a drag
    #[inline]
    pub fn is_drag(self) -> bool {
        self == MouseState::Drag
    }
}

/// Mouse button identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Map a raw host button index (0 = left, 1 = right, 2 = middle)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Right),
            2 => Some(MouseButton::Middle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_state_default() {
        assert_eq!(MouseState::default(), MouseState::None);
        assert!(!MouseState::default().is_drag());
        assert!(MouseState::Drag.is_drag());
    }

    #[test]
    fn test_button_from_index() {
        assert_eq!(MouseButton::from_index(0), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_index(1), Some(MouseButton::Right));
        assert_eq!(MouseButton::from_index(2), Some(MouseButton::Middle));
        assert_eq!(MouseButton::from_index(7), None);
    }
}
