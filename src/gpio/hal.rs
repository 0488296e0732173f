//! # Static pin access
//!
//! [`GpioHal`] offers the four pin operations as methods taking the pin as a
//! type parameter. It does not own any pin, which makes it usable from any
//! context without moving pins around. In turn, nothing stops two contexts
//! from driving the same pin, or from interleaving a toggle with a write to
//! another bit of the same port. Keeping that in order is up to the caller.
//!
//! ```no_run
//! use fm4_gpio_hal::gpio::{DebugPin1, GpioHal, PinFunction};
//!
//! let hal = unsafe { GpioHal::steal() };
//! hal.init::<DebugPin1>(PinFunction::OutputLow);
//! hal.set_out::<DebugPin1>(true);
//! hal.toggle_out::<DebugPin1>();
//! ```
use super::config::{PinConfig, PinFunction};
use super::pins::{PinId, Registers};
use super::reg::RegisterInterface;
use crate::pac::{BitAccess, BitBand, Gpio};

/// Pin operations for any board pin, selected by type parameter
#[derive(Clone, Copy)]
pub struct GpioHal<R: BitAccess + Copy = BitBand> {
    regs: R,
}

impl GpioHal<BitBand> {
    /// Static pin access on top of the GPIO block handle
    #[inline]
    pub fn from_gpio(gpio: Gpio) -> Self {
        GpioHal { regs: gpio.regs() }
    }

    /// # Safety
    ///
    /// See [`BitBand::steal`]. The result may alias pins owned through
    /// [`Pins`](super::Pins).
    #[inline]
    pub const unsafe fn steal() -> Self {
        GpioHal {
            regs: BitBand::steal(),
        }
    }
}

impl<R: BitAccess + Copy> GpioHal<R> {
    #[inline]
    pub const fn new(regs: R) -> Self {
        GpioHal { regs }
    }

    #[inline(always)]
    fn pin<I: PinId>(&self) -> Registers<I, R> {
        Registers::new(self.regs)
    }

    /// Configure pin `I` for `function`
    ///
    /// For [`PinFunction::OutputLow`] the output bit is cleared first, then
    /// the pin is switched to output and to GPIO function. Pins sharing their
    /// pad with an ADC channel get the analog function disabled last.
    #[inline]
    pub fn init<I: PinId>(&self, function: PinFunction) {
        match function {
            PinFunction::OutputLow => self.configure::<I>(function.config()),
        }
    }

    /// Apply `config` to pin `I`
    ///
    /// Outputs get their level written before the direction is switched.
    /// Inputs get the pull-up setting before the direction is switched and
    /// keep their output bit. Both end up in GPIO function with the analog
    /// function disabled.
    #[inline]
    pub fn configure<I: PinId>(&self, config: PinConfig) {
        self.pin::<I>().configure(config);
    }

    /// Set the output level of pin `I`
    ///
    /// Only has an effect on the pad once the pin was configured as output.
    #[inline]
    pub fn set_out<I: PinId>(&self, level: bool) {
        self.pin::<I>().write_pin(level);
    }

    /// Invert the output level of pin `I`
    ///
    /// Reads and writes the output bit in two steps.
    #[inline]
    pub fn toggle_out<I: PinId>(&self) {
        self.pin::<I>().toggle();
    }

    /// Input level of pin `I`
    ///
    /// Returns `false` without touching any register if input readback is
    /// not wired for the pin, see [`PinId::READABLE`].
    #[inline]
    pub fn get_in<I: PinId>(&self) -> bool {
        self.pin::<I>().read_pin()
    }

    /// Current value of the output bit of pin `I`
    #[inline]
    pub fn get_out<I: PinId>(&self) -> bool {
        self.pin::<I>().read_output()
    }
}
