pub mod pin {
    /// A pin (of a button) which may be down (tied to the ground) or up (floating pin)
    pub trait Pin {
        fn is_down(&self) -> bool;
    }
}

pub mod line {
    /// A digital line in logical terms. Implementations take care of the polarity.
    pub trait Line {
        fn set_active(&self, active: bool);
        fn is_active(&self) -> bool;
    }
}
