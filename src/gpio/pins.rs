//! # Type-level module for GPIO pins
//!
//! This module provides a type-level API for the pins wired on the board. It
//! uses the type system to track the state of each pin at compile-time. Each
//! pin identifier is an uninhabited type, and its register bits are an
//! associated constant of that type, so the generated code is a fixed
//! sequence of bit-band stores with no lookup and no branch.
//!
//! Type-level [`Pin`]s are parameterized by a [`PinId`], a [`PinMode`] and the
//! register backend `R`.
//!
//! ```
//! # use fm4_gpio_hal::gpio::{PinId, PinMode};
//! # use fm4_gpio_hal::pac::BitAccess;
//! pub struct Pin<I, M, R>
//! where
//!     I: PinId,
//!     M: PinMode,
//!     R: BitAccess,
//! {
//!     // ...
//! #   i: I, m: M, r: R,
//! }
//! ```
//!
//! The available `PinMode` variants are [`Unconfigured`], [`Output`] and
//! [`Input`]. Pins start out as [`Unconfigured`] and there is no way back to
//! it once a pin was configured.
//!
//! It is not possible for users to create new instances of a [`Pin`].
//! Singleton instances of each pin are made available through the [`Pins`]
//! struct, which consumes the [`Gpio`] peripheral handle.
//!
//! ```no_run
//! use embedded_hal::digital::v2::ToggleableOutputPin;
//! use fm4_gpio_hal::{gpio::Pins, pac::Gpio};
//!
//! let pins = Pins::new(Gpio::take().unwrap());
//! let mut led = pins.led_red.into_output_low();
//! led.toggle().ok();
//! ```
//!
//! # Embedded HAL traits
//!
//! [`Pin`]s in [`Output`] mode implement [`OutputPin`], [`StatefulOutputPin`]
//! and [`ToggleableOutputPin`]. [`Pin`]s in [`Input`] mode implement
//! [`InputPin`]. For pins without input readback, [`InputPin::is_high`]
//! always reports `false`. Use [`Pin::is_readable`] to tell such a pin apart
//! from one that reads low.
//!
//! # Build-time checks
//!
//! Only the pin identifiers of this module are [`PinId`]s. Passing anything
//! else does not compile:
//!
//! ```compile_fail
//! use fm4_gpio_hal::{gpio::GpioHal, pac::BitBand};
//!
//! enum Unbound {}
//! let hal = GpioHal::new(unsafe { BitBand::steal() });
//! hal.set_out::<Unbound>(true);
//! ```
//!
//! and a type outside of this crate cannot become a [`PinId`], because it
//! cannot satisfy the crate-private `Sealed` bound:
//!
//! ```compile_fail
//! use fm4_gpio_hal::gpio::{DynPinId, PinId};
//!
//! enum Extra {}
//! impl PinId for Extra {
//!     const DYN: DynPinId = DynPinId::LedRed;
//! }
//! ```

use super::config::{PinConfig, PinFunction, PinState};
use super::dynpins::{Binding, DynPinId};
use super::reg::RegisterInterface;
use crate::{
    pac::{BitAccess, BitBand, Gpio},
    Sealed,
};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin, StatefulOutputPin, ToggleableOutputPin};
use paste::paste;

//==================================================================================================
// Input configuration
//==================================================================================================

/// Type-level enum for input configurations
///
/// The valid options are [`Floating`] and [`PullUp`]. The port has no
/// pull-down resistors.
pub trait InputConfig: Sealed {
    const PULL_UP: bool;
}

pub enum Floating {}
pub enum PullUp {}

impl InputConfig for Floating {
    const PULL_UP: bool = false;
}
impl InputConfig for PullUp {
    const PULL_UP: bool = true;
}

impl Sealed for Floating {}
impl Sealed for PullUp {}

/// Type-level variant of [`PinMode`] for input modes
///
/// Type `C` is one of two input configurations: [`Floating`] or [`PullUp`]
pub struct Input<C: InputConfig> {
    cfg: PhantomData<C>,
}

impl<C: InputConfig> Sealed for Input<C> {}

/// Type-level variant of [`PinMode`] for floating input mode
pub type InputFloating = Input<Floating>;
/// Type-level variant of [`PinMode`] for pull-up input mode
pub type InputPullUp = Input<PullUp>;

//==================================================================================================
//  Other modes
//==================================================================================================

/// Type-level variant of [`PinMode`] for push-pull GPIO output
pub enum Output {}
impl Sealed for Output {}

/// Type-level variant of [`PinMode`] for a pin that was not configured yet
pub enum Unconfigured {}
impl Sealed for Unconfigured {}

/// Type alias for the [`PinMode`] at reset
pub type Reset = Unconfigured;

/// Type-level enum representing pin modes
///
/// The valid options are [`Unconfigured`], [`Input`] and [`Output`].
pub trait PinMode: Sealed {}

impl PinMode for Unconfigured {}
impl PinMode for Output {}
impl<C: InputConfig> PinMode for Input<C> {}

//==================================================================================================
//  Pin IDs
//==================================================================================================

/// Type-level enum for pin IDs
pub trait PinId: Sealed {
    /// Corresponding [`DynPinId`]
    const DYN: DynPinId;
    /// Register bits of this pin, resolved while building
    const BINDING: Binding = Self::DYN.binding();
    /// Whether input readback is wired for this pin
    const READABLE: bool = Self::BINDING.input.is_some();
}

macro_rules! pin_id {
    ($Id:ident, $Port:tt) => {
        // Need paste macro to use ident in doc attribute
        paste! {
            #[doc = "Pin ID representing board pin " $Id " (port pin " $Port ")"]
            pub enum $Id {}
            impl Sealed for $Id {}
            impl PinId for $Id {
                const DYN: DynPinId = DynPinId::$Id;
            }
        }
    };
}

//==================================================================================================
//  Registers
//==================================================================================================

/// Provide a register interface for [`Pin`]s
///
/// This `struct` takes ownership of a [`PinId`] and provides an API to
/// access the corresponding registers.
pub(super) struct Registers<I: PinId, R: BitAccess> {
    regs: R,
    id: PhantomData<I>,
}

impl<I: PinId, R: BitAccess> RegisterInterface for Registers<I, R> {
    type Regs = R;

    #[inline(always)]
    fn regs(&self) -> &R {
        &self.regs
    }

    #[inline(always)]
    fn id(&self) -> DynPinId {
        I::DYN
    }

    #[inline(always)]
    fn binding(&self) -> Binding {
        I::BINDING
    }
}

impl<I: PinId, R: BitAccess> Registers<I, R> {
    #[inline]
    pub(super) fn new(regs: R) -> Self {
        Registers {
            regs,
            id: PhantomData,
        }
    }

    #[inline]
    fn release(self) -> R {
        self.regs
    }
}

//==================================================================================================
//  Pin
//==================================================================================================

/// A type-level GPIO pin, parameterized by [`PinId`] and [`PinMode`] types
pub struct Pin<I: PinId, M: PinMode, R: BitAccess = BitBand> {
    regs: Registers<I, R>,
    mode: PhantomData<M>,
}

impl<I: PinId, M: PinMode, R: BitAccess> Pin<I, M, R> {
    /// Create a new [`Pin`]
    ///
    /// Each [`Pin`] must be a singleton. For a given [`PinId`], there must be
    /// at most one corresponding [`Pin`] in existence at any given time.
    #[inline]
    fn new(regs: R) -> Pin<I, M, R> {
        Pin {
            regs: Registers::new(regs),
            mode: PhantomData,
        }
    }

    #[inline]
    fn into_configured<N: PinMode>(mut self, config: PinConfig) -> Pin<I, N, R> {
        self.regs.configure(config);
        Pin::new(self.regs.release())
    }

    #[inline]
    pub fn id(&self) -> DynPinId {
        I::DYN
    }

    /// Whether [`InputPin`] reads the pad. `false` means reads are a stub
    /// that always return `false`.
    #[inline]
    pub fn is_readable(&self) -> bool {
        I::READABLE
    }

    /// Configure the pin as output with an initial low level
    #[inline]
    pub fn into_output_low(self) -> Pin<I, Output, R> {
        self.into_configured(PinFunction::OutputLow.config())
    }

    /// Configure the pin to operate as a push-pull output
    #[inline]
    pub fn into_push_pull_output(self, initial: PinState) -> Pin<I, Output, R> {
        self.into_configured(PinConfig::new().output().initial_level(initial))
    }

    /// Configure the pin to operate as a floating input
    #[inline]
    pub fn into_floating_input(self) -> Pin<I, InputFloating, R> {
        self.into_configured(PinConfig::new().input().pull_up(Floating::PULL_UP))
    }

    /// Configure the pin to operate as a pulled up input
    #[inline]
    pub fn into_pull_up_input(self) -> Pin<I, InputPullUp, R> {
        self.into_configured(PinConfig::new().input().pull_up(PullUp::PULL_UP))
    }

    #[inline]
    pub(crate) fn _set_high(&mut self) {
        self.regs.write_pin(true)
    }

    #[inline]
    pub(crate) fn _set_low(&mut self) {
        self.regs.write_pin(false)
    }

    #[inline]
    pub(crate) fn _toggle(&mut self) {
        self.regs.toggle();
    }

    #[inline]
    pub(crate) fn _is_set_high(&self) -> bool {
        self.regs.read_output()
    }

    #[inline]
    pub(crate) fn _is_high(&self) -> bool {
        self.regs.read_pin()
    }
}

//==================================================================================================
//  Embedded HAL traits
//==================================================================================================

impl<I: PinId, R: BitAccess> OutputPin for Pin<I, Output, R> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self._set_high();
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self._set_low();
        Ok(())
    }
}

impl<I: PinId, R: BitAccess> StatefulOutputPin for Pin<I, Output, R> {
    #[inline]
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        Ok(self._is_set_high())
    }

    #[inline]
    fn is_set_low(&self) -> Result<bool, Self::Error> {
        Ok(!self._is_set_high())
    }
}

impl<I: PinId, R: BitAccess> ToggleableOutputPin for Pin<I, Output, R> {
    type Error = Infallible;

    #[inline]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        self._toggle();
        Ok(())
    }
}

impl<I: PinId, C: InputConfig, R: BitAccess> InputPin for Pin<I, Input<C>, R> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self._is_high())
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self._is_high())
    }
}

//==================================================================================================
//  Pin definitions
//==================================================================================================

macro_rules! pins {
    (
        $PinsName:ident, [$(($Id:ident, $Port:tt),)+]
    ) => {
        paste!(
            /// Collection of all the individual [`Pin`]s wired on the board
            pub struct $PinsName<R: BitAccess + Copy = BitBand> {
                regs: R,
                $(
                    #[doc = "Pin " $Id ", port pin " $Port]
                    pub [<$Id:snake>]: Pin<$Id, Reset, R>,
                )+
            }

            impl $PinsName<BitBand> {
                /// Take ownership of the GPIO block and split it into pins
                #[inline]
                pub fn new(gpio: Gpio) -> Self {
                    Self::with_registers(gpio.regs())
                }

                /// Consumes the Pins struct and returns the GPIO block
                pub fn release(self) -> Gpio {
                    // Safe because all pins are consumed together with `self`
                    unsafe { Gpio::steal() }
                }
            }

            impl<R: BitAccess + Copy> $PinsName<R> {
                /// Create all pins on top of an arbitrary register backend,
                /// for example a simulated register file
                #[inline]
                pub fn with_registers(regs: R) -> Self {
                    $PinsName {
                        regs,
                        $(
                            [<$Id:snake>]: Pin::new(regs),
                        )+
                    }
                }

                /// Register backend the pins were created on
                #[inline]
                pub fn regs(&self) -> R {
                    self.regs
                }
            }
        );
    }
}

macro_rules! declare_pins {
    (
        $PinsName:ident, [$(($Id:ident, $Port:tt),)+]
    ) => {
        pins!($PinsName, [$(($Id, $Port),)+]);
        $(
            pin_id!($Id, $Port);
        )+
    }
}

declare_pins!(
    Pins,
    [
        (DebugPin1, "P1F"),
        (DebugPin2, "P1A"),
        (DebugPin3, "P19"),
        (DebugPin4, "P25"),
        (LedRed, "P27"),
        (LedGreen, "P38"),
        (LedBlue, "PE0"),
    ]
);
