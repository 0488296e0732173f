//! Blinky example using the static pin access only
//!
//! Drives the four debug pins as a binary counter, which is handy for
//! measuring timing with a logic analyzer.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use fm4_gpio_hal::{
    gpio::{DebugPin1, DebugPin2, DebugPin3, DebugPin4, GpioHal, PinFunction},
    pac::Gpio,
};
use panic_halt as _;

#[entry]
fn main() -> ! {
    let hal = GpioHal::from_gpio(Gpio::take().unwrap());
    hal.init::<DebugPin1>(PinFunction::OutputLow);
    hal.init::<DebugPin2>(PinFunction::OutputLow);
    hal.init::<DebugPin3>(PinFunction::OutputLow);
    hal.init::<DebugPin4>(PinFunction::OutputLow);
    let mut count: u8 = 0;
    loop {
        hal.toggle_out::<DebugPin1>();
        hal.set_out::<DebugPin2>(count & 0b010 != 0);
        hal.set_out::<DebugPin3>(count & 0b100 != 0);
        hal.set_out::<DebugPin4>(count & 0b1000 != 0);
        count = count.wrapping_add(1);
        cortex_m::asm::delay(1_000_000);
    }
}
