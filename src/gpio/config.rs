//! Pin functions and the configuration builder
//!
//! A [`PinConfig`] collects the three settings the FM4 GPIO block offers for
//! a digital pin: direction, initial output level and pull-up. It is passed by
//! value and applied in one go.
//!
//! ```
//! use fm4_gpio_hal::gpio::{Direction, PinConfig, PinState};
//!
//! let cfg = PinConfig::new().output().initial_level(PinState::High);
//! assert_eq!(cfg.direction, Direction::Output);
//! assert!(!cfg.pull_up);
//! ```

/// Configuration intents accepted by [`GpioHal::init`](super::GpioHal::init)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinFunction {
    /// Digital GPIO output with an initial low level
    OutputLow,
}

impl PinFunction {
    /// Register settings performed for this function
    #[inline]
    pub const fn config(self) -> PinConfig {
        match self {
            PinFunction::OutputLow => PinConfig::new().output().initial_level(PinState::Low),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    Low = 0,
    High = 1,
}

impl From<bool> for PinState {
    #[inline]
    fn from(level: bool) -> Self {
        if level {
            PinState::High
        } else {
            PinState::Low
        }
    }
}

impl From<PinState> for bool {
    #[inline]
    fn from(state: PinState) -> bool {
        state == PinState::High
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

/// Settings for a single GPIO pin
///
/// The defaults are input direction, initial level low and pull-up disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    pub direction: Direction,
    /// Output level written before the direction is switched to output.
    /// Ignored for inputs.
    pub initial: PinState,
    /// Only applied for inputs
    pub pull_up: bool,
}

impl PinConfig {
    #[inline]
    pub const fn new() -> Self {
        PinConfig {
            direction: Direction::Input,
            initial: PinState::Low,
            pull_up: false,
        }
    }

    #[inline]
    pub const fn output(mut self) -> Self {
        self.direction = Direction::Output;
        self
    }

    #[inline]
    pub const fn input(mut self) -> Self {
        self.direction = Direction::Input;
        self
    }

    #[inline]
    pub const fn initial_level(mut self, initial: PinState) -> Self {
        self.initial = initial;
        self
    }

    #[inline]
    pub const fn pull_up(mut self, pull_up: bool) -> Self {
        self.pull_up = pull_up;
        self
    }
}

impl Default for PinConfig {
    fn default() -> Self {
        PinConfig::new()
    }
}

impl From<PinFunction> for PinConfig {
    #[inline]
    fn from(function: PinFunction) -> Self {
        function.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let cfg = PinConfig::default();
        assert_eq!(cfg.direction, Direction::Input);
        assert_eq!(cfg.initial, PinState::Low);
        assert!(!cfg.pull_up);
    }

    #[test]
    fn builder_last_call_wins() {
        let cfg = PinConfig::new()
            .output()
            .pull_up(true)
            .input()
            .initial_level(PinState::High);
        assert_eq!(cfg.direction, Direction::Input);
        assert_eq!(cfg.initial, PinState::High);
        assert!(cfg.pull_up);
    }

    #[test]
    fn output_low_function() {
        let cfg: PinConfig = PinFunction::OutputLow.into();
        assert_eq!(cfg.direction, Direction::Output);
        assert_eq!(cfg.initial, PinState::Low);
        assert!(!cfg.pull_up);
    }

    #[test]
    fn pin_state_conversions() {
        assert_eq!(PinState::from(true), PinState::High);
        assert_eq!(PinState::from(false), PinState::Low);
        assert!(bool::from(PinState::High));
        assert!(!bool::from(PinState::Low));
    }
}
