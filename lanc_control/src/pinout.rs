use core::fmt;

use crate::joystick::Direction;

/// Physical I/O index of a pin on the board
pub type PinNumber = u8;

/// LANC output, inverted
pub const PIN_LANC_OUT: PinNumber = 12;
pub const PIN_LANC_IN: PinNumber = 11;

/// Also the central button of the joystick
pub const PIN_REC_BUTTON: PinNumber = 3;
pub const PIN_ZOOM_OUT_BUTTON: PinNumber = 6; // down
pub const PIN_ZOOM_IN_BUTTON: PinNumber = 4; // up
pub const PIN_FOCUS_NEAR_BUTTON: PinNumber = 2; // right
pub const PIN_FOCUS_FAR_BUTTON: PinNumber = 5; // left

/// Electrical polarity of a pin
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub enum Polarity {
    Normal,
    Inverted,
}

impl Polarity {
    /// Electrical level (true is high) which encodes the given logical state
    pub const fn level(self, active: bool) -> bool {
        match self {
            Polarity::Normal => active,
            Polarity::Inverted => !active,
        }
    }

    /// Logical state encoded by the given electrical level
    pub const fn is_active(self, level: bool) -> bool {
        self.level(level)
    }
}

/// What a pin is used for
#[derive(Clone, Debug, Eq, PartialEq, Copy, Hash, Ord, PartialOrd)]
pub enum Role {
    LancOut,
    LancIn,
    RecButton,
    ZoomOutButton,
    ZoomInButton,
    FocusNearButton,
    FocusFarButton,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::LancOut,
        Role::LancIn,
        Role::RecButton,
        Role::ZoomOutButton,
        Role::ZoomInButton,
        Role::FocusNearButton,
        Role::FocusFarButton,
    ];

    pub const BUTTONS: [Role; 5] = [
        Role::RecButton,
        Role::ZoomOutButton,
        Role::ZoomInButton,
        Role::FocusNearButton,
        Role::FocusFarButton,
    ];

    pub const fn pin(self) -> PinNumber {
        match self {
            Role::LancOut => PIN_LANC_OUT,
            Role::LancIn => PIN_LANC_IN,
            Role::RecButton => PIN_REC_BUTTON,
            Role::ZoomOutButton => PIN_ZOOM_OUT_BUTTON,
            Role::ZoomInButton => PIN_ZOOM_IN_BUTTON,
            Role::FocusNearButton => PIN_FOCUS_NEAR_BUTTON,
            Role::FocusFarButton => PIN_FOCUS_FAR_BUTTON,
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Role::LancOut => Polarity::Inverted,
            _ => Polarity::Normal,
        }
    }

    pub const fn is_button(self) -> bool {
        !matches!(self, Role::LancOut | Role::LancIn)
    }

    /// Joystick direction of a button, None for the LANC lines
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Role::RecButton => Some(Direction::Center),
            Role::ZoomOutButton => Some(Direction::Down),
            Role::ZoomInButton => Some(Direction::Up),
            Role::FocusNearButton => Some(Direction::Right),
            Role::FocusFarButton => Some(Direction::Left),
            Role::LancOut | Role::LancIn => None,
        }
    }

    pub const fn from_direction(direction: Direction) -> Role {
        match direction {
            Direction::Center => Role::RecButton,
            Direction::Down => Role::ZoomOutButton,
            Direction::Up => Role::ZoomInButton,
            Direction::Right => Role::FocusNearButton,
            Direction::Left => Role::FocusFarButton,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Role::LancOut => "lanc out",
            Role::LancIn => "lanc in",
            Role::RecButton => "rec",
            Role::ZoomOutButton => "zoom out",
            Role::ZoomInButton => "zoom in",
            Role::FocusNearButton => "focus near",
            Role::FocusFarButton => "focus far",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A role wired to a pin
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub struct PinAssignment {
    pub role: Role,
    pub pin: PinNumber,
    pub polarity: Polarity,
}

impl PinAssignment {
    pub const fn of(role: Role) -> Self {
        PinAssignment {
            role,
            pin: role.pin(),
            polarity: role.polarity(),
        }
    }
}

/// The board, in declaration order
pub const PINOUT: [PinAssignment; 7] = [
    PinAssignment::of(Role::LancOut),
    PinAssignment::of(Role::LancIn),
    PinAssignment::of(Role::RecButton),
    PinAssignment::of(Role::ZoomOutButton),
    PinAssignment::of(Role::ZoomInButton),
    PinAssignment::of(Role::FocusNearButton),
    PinAssignment::of(Role::FocusFarButton),
];

const _: () = assert!(pins_are_distinct(&PINOUT), "pinout reuses a pin");

pub fn assignment(role: Role) -> PinAssignment {
    PinAssignment::of(role)
}

/// Reverse lookup, None if nothing is wired to the pin
pub fn role_at(pin: PinNumber) -> Option<Role> {
    PINOUT
        .iter()
        .find(|assignment| assignment.pin == pin)
        .map(|assignment| assignment.role)
}

/// Returns true if no two entries share a pin number. Usable in const context.
pub const fn pins_are_distinct(table: &[PinAssignment]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i].pin == table[j].pin {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub enum PinoutError {
    /// Two roles share a pin
    DuplicatePin {
        pin: PinNumber,
        first: Role,
        second: Role,
    },
    DuplicateRole(Role),
    MissingRole(Role),
}

impl fmt::Display for PinoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinoutError::DuplicatePin { pin, first, second } => {
                write!(f, "pin {} is used by both {} and {}", pin, first, second)
            }
            PinoutError::DuplicateRole(role) => write!(f, "{} is assigned twice", role),
            PinoutError::MissingRole(role) => write!(f, "{} has no pin", role),
        }
    }
}

/// Checks that every role is wired exactly once and no pin is shared
pub fn validate(table: &[PinAssignment]) -> Result<(), PinoutError> {
    let result = check(table);
    if let Err(error) = &result {
        log::error!("invalid pinout: {}", error);
    }
    result
}

fn check(table: &[PinAssignment]) -> Result<(), PinoutError> {
    for (i, lhs) in table.iter().enumerate() {
        for rhs in &table[i + 1..] {
            if lhs.role == rhs.role {
                return Err(PinoutError::DuplicateRole(lhs.role));
            }
            if lhs.pin == rhs.pin {
                return Err(PinoutError::DuplicatePin {
                    pin: lhs.pin,
                    first: lhs.role,
                    second: rhs.role,
                });
            }
        }
    }

    match Role::ALL
        .iter()
        .find(|role| !table.iter().any(|it| it.role == **role))
    {
        Some(role) => Err(PinoutError::MissingRole(*role)),
        None => Ok(()),
    }
}
