/// Logical viewer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    Up,
    Down,
    ZoomIn,
    ZoomOut,
    Turbo,
    Quit,
}

impl Button {
    pub const ALL: [Button; 10] = [
        Button::Forward,
        Button::Back,
        Button::StrafeLeft,
        Button::StrafeRight,
        Button::Up,
        Button::Down,
        Button::ZoomIn,
        Button::ZoomOut,
        Button::Turbo,
        Button::Quit,
    ];
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_button_variants_unique() {
        let set: HashSet<_> = Button::ALL.iter().collect();
        assert_eq!(set.len(), Button::ALL.len());
    }

    #[test]
    fn test_button_debug() {
        assert_eq!(format!("{:?}", Button::ZoomIn), "ZoomIn");
        assert_eq!(format!("{:?}", Button::StrafeLeft), "StrafeLeft");
    }

    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::Forward, Button::Turbo],
        };

        assert!(controller.is_down(Button::Forward));
        assert!(controller.is_down(Button::Turbo));
        assert!(!controller.is_down(Button::Back));
    }

    #[test]
    fn test_controller_no_keys_pressed() {
        let controller = MockController { pressed: vec![] };

        for button in Button::ALL {
            assert!(!controller.is_down(button));
        }
    }
}
