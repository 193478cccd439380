#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use lanc_control::bsp::pin::Pin;
    use lanc_control::joystick::{ButtonJoystick, ButtonSet, Direction, Joystick};
    use lanc_control::pinout::Role;

    #[test]
    fn directions_map_to_buttons_both_ways() {
        for role in Role::BUTTONS.iter() {
            let direction = role.direction().expect("buttons have a direction");
            assert_eq!(Role::from_direction(direction), *role);
        }
        assert_eq!(Role::LancOut.direction(), None);
        assert_eq!(Role::LancIn.direction(), None);
        assert_eq!(Role::RecButton.direction(), Some(Direction::Center));
        assert_eq!(Role::ZoomOutButton.direction(), Some(Direction::Down));
        assert_eq!(Role::ZoomInButton.direction(), Some(Direction::Up));
        assert_eq!(Role::FocusNearButton.direction(), Some(Direction::Right));
        assert_eq!(Role::FocusFarButton.direction(), Some(Direction::Left));
    }

    #[test]
    fn idle_joystick_reads_nothing() {
        with_bench(&|joystick, _pins| {
            assert_eq!(joystick.read(), None);
            assert!(joystick.pressed().is_empty());
        });
    }

    #[test]
    fn each_button_reads_as_its_direction() {
        with_bench(&|joystick, pins| {
            for (i, role) in Role::BUTTONS.iter().enumerate() {
                pins[i].set(true);
                assert_eq!(joystick.read(), role.direction());
                pins[i].set(false);
            }
        });
    }

    #[test]
    fn all_held_buttons_are_reported() {
        with_bench(&|joystick, pins| {
            pins[1].set(true); // zoom out
            pins[4].set(true); // focus far

            let pressed = joystick.pressed();
            assert_eq!(pressed.len(), 2);
            assert!(pressed.contains(Role::ZoomOutButton));
            assert!(pressed.contains(Role::FocusFarButton));
            assert!(!pressed.contains(Role::RecButton));
            assert_eq!(
                pressed.iter().collect::<Vec<_>>(),
                vec![Role::ZoomOutButton, Role::FocusFarButton]
            );
            assert_eq!(joystick.read(), Some(Direction::Down));
        });
    }

    #[test]
    fn center_wins_when_several_are_held() {
        with_bench(&|joystick, pins| {
            pins[3].set(true);
            pins[0].set(true);
            assert_eq!(joystick.read(), Some(Direction::Center));
        });
    }

    #[test]
    fn pins_are_found_by_role() {
        with_bench(&|joystick, pins| {
            pins[2].set(true);
            assert!(joystick.pin(Role::ZoomInButton).map_or(false, |it| it.is_down()));
            assert!(joystick.pin(Role::LancIn).is_none());
        });
    }

    #[test]
    fn lanc_lines_do_not_enter_button_set() {
        let mut set = ButtonSet::empty();
        set.insert(Role::LancOut);
        set.insert(Role::LancIn);
        assert!(set.is_empty());
        assert!(!set.contains(Role::LancOut));
    }

    fn with_bench(block: &dyn Fn(&ButtonJoystick<TestPin>, &[Cell<bool>; 5])) {
        let pins = [
            Cell::new(false),
            Cell::new(false),
            Cell::new(false),
            Cell::new(false),
            Cell::new(false),
        ];
        let joystick = ButtonJoystick::new(
            TestPin { is_down: &pins[0] },
            TestPin { is_down: &pins[1] },
            TestPin { is_down: &pins[2] },
            TestPin { is_down: &pins[3] },
            TestPin { is_down: &pins[4] },
        );
        block(&joystick, &pins);
    }

    struct TestPin<'a> {
        is_down: &'a Cell<bool>,
    }

    impl<'a> Pin for TestPin<'a> {
        /// returns true is pin is tied to the ground
        fn is_down(&self) -> bool {
            return self.is_down.get();
        }
    }
}
