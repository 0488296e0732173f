//! Simple blinky example
//!
//! Cycles through the red, green and blue channels of the board LED. Depending
//! on how the LED is wired, a low level may be the lit state.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use embedded_hal::digital::v2::{OutputPin, ToggleableOutputPin};
use fm4_gpio_hal::{gpio::Pins, pac::Gpio};
use panic_halt as _;

#[entry]
fn main() -> ! {
    let pins = Pins::new(Gpio::take().unwrap());
    let mut red = pins.led_red.into_output_low();
    let mut green = pins.led_green.into_output_low();
    let mut blue = pins.led_blue.into_output_low();
    for _ in 0..10 {
        red.set_low().ok();
        green.set_low().ok();
        blue.set_low().ok();
        cortex_m::asm::delay(5_000_000);
        red.set_high().ok();
        green.set_high().ok();
        blue.set_high().ok();
        cortex_m::asm::delay(5_000_000);
    }
    loop {
        red.toggle().ok();
        cortex_m::asm::delay(5_000_000);
        green.toggle().ok();
        cortex_m::asm::delay(5_000_000);
        blue.toggle().ok();
        cortex_m::asm::delay(5_000_000);
    }
}
