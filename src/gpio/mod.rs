//! # GPIO module
//!
//! Pin access for the GPIO pins wired on the board, modelled after the
//! type-level GPIO API of the
//! [ATSAMD HAL](https://docs.rs/atsamd-hal/0.13.0/atsamd_hal/gpio/v2/index.html).
//!
//! Every pin identifier resolves to its register bits while building. Two
//! front ends sit on top of the same register contract:
//!
//! - [`pins`]: type-level [`Pin`]s tracking their mode in the type, with the
//!   embedded-hal digital traits. Pins are singletons created from the
//!   [`Gpio`](crate::pac::Gpio) handle.
//! - [`hal`]: [`GpioHal`], plain `init` / `set_out` / `toggle_out` /
//!   `get_in` methods taking the pin as type parameter.
//!
//! Value-level identifiers and the binding table are in [`dynpins`], the
//! configuration builder in [`config`].
//!
//! ## Examples
//!
//! - `demos/blinky.rs`: type-level pins
//! - `demos/blinky-hal.rs`: static pin access
pub mod config;
pub use config::*;

pub mod dynpins;
pub use dynpins::*;

pub mod hal;
pub use hal::*;

pub mod pins;
pub use pins::*;

mod reg;
