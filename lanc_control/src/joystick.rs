use crate::bsp::pin::Pin;
use crate::pinout::Role;

#[derive(Clone, Debug, Eq, PartialEq, Copy, Hash)]
pub enum Direction {
    Center,
    Up,
    Down,
    Left,
    Right,
}

/// Joystick which reports at most one direction at a time
pub trait Joystick {
    /// None when the joystick is idle
    fn read(&self) -> Option<Direction>;
}

/// Set of held buttons
#[derive(Clone, Debug, Eq, PartialEq, Copy, Default)]
pub struct ButtonSet {
    bits: u8,
}

impl ButtonSet {
    pub const fn empty() -> Self {
        ButtonSet { bits: 0 }
    }

    fn bit(role: Role) -> u8 {
        Role::BUTTONS
            .iter()
            .position(|it| *it == role)
            .map(|i| 1u8 << i)
            .unwrap_or(0)
    }

    /// Lanc lines are not buttons and are ignored
    pub fn insert(&mut self, role: Role) {
        self.bits |= Self::bit(role);
    }

    pub fn contains(&self, role: Role) -> bool {
        let bit = Self::bit(role);
        bit != 0 && self.bits & bit != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Held buttons in [Role::BUTTONS] order
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        IntoIterator::into_iter(Role::BUTTONS).filter(move |role| self.contains(*role))
    }
}

/// Joystick made of five push buttons, one per direction
pub struct ButtonJoystick<P: Pin> {
    rec: P,
    zoom_out: P,
    zoom_in: P,
    focus_near: P,
    focus_far: P,
}

impl<P: Pin> ButtonJoystick<P> {
    pub fn new(rec: P, zoom_out: P, zoom_in: P, focus_near: P, focus_far: P) -> Self {
        ButtonJoystick {
            rec,
            zoom_out,
            zoom_in,
            focus_near,
            focus_far,
        }
    }

    /// Pins in [Role::BUTTONS] order
    fn pins(&self) -> [(Role, &P); 5] {
        [
            (Role::RecButton, &self.rec),
            (Role::ZoomOutButton, &self.zoom_out),
            (Role::ZoomInButton, &self.zoom_in),
            (Role::FocusNearButton, &self.focus_near),
            (Role::FocusFarButton, &self.focus_far),
        ]
    }

    pub fn pin(&self, role: Role) -> Option<&P> {
        self.pins()
            .iter()
            .find(|(it, _)| *it == role)
            .map(|(_, pin)| *pin)
    }

    /// Snapshot of all buttons which are down right now
    pub fn pressed(&self) -> ButtonSet {
        let mut set = ButtonSet::empty();
        for (role, pin) in self.pins().iter() {
            if pin.is_down() {
                set.insert(*role);
            }
        }
        set
    }
}

impl<P: Pin> Joystick for ButtonJoystick<P> {
    /// Center wins over the others, the rest follow [Role::BUTTONS] order
    fn read(&self) -> Option<Direction> {
        self.pressed().iter().next().and_then(Role::direction)
    }
}
