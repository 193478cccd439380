#![no_std]
pub mod bsp;
pub mod hal;
pub mod joystick;
pub mod pinout;
