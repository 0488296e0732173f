//! Test image
//!
//! Runs the pin checks on the target and reports over RTT. The debug pins
//! should be left unconnected or tied to a logic analyzer only.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use embedded_hal::digital::v2::{InputPin, OutputPin, StatefulOutputPin, ToggleableOutputPin};
use fm4_gpio_hal::{
    gpio::{DebugPin1, DebugPin4, DynPinId, GpioHal, PinFunction, PinState, Pins},
    pac::Gpio,
};
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

#[allow(dead_code)]
#[derive(Debug)]
enum TestCase {
    OutputReadback,
    Toggle,
    StaticAccess,
    // Reads of unwired pins must stay false
    InputStub,
    // Tie DebugPin1 to an oscilloscope to watch the square wave
    Square,
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("-- FM4 GPIO Test Application --");
    let gpio = Gpio::take().unwrap();
    let hal = GpioHal::from_gpio(unsafe { Gpio::steal() });
    let pins = Pins::new(gpio);
    let mut led = pins.led_red.into_output_low();
    let test_case = TestCase::OutputReadback;
    rprintln!("Test case {:?}", test_case);

    match test_case {
        TestCase::OutputReadback => {
            let mut out = pins.led_green.into_push_pull_output(PinState::High);
            assert!(out.is_set_high().unwrap());
            out.set_low().unwrap();
            assert!(out.is_set_low().unwrap());
        }
        TestCase::Toggle => {
            let mut out = pins.led_blue.into_output_low();
            out.toggle().unwrap();
            assert!(out.is_set_high().unwrap());
            out.toggle().unwrap();
            assert!(out.is_set_low().unwrap());
        }
        TestCase::StaticAccess => {
            hal.init::<DebugPin4>(PinFunction::OutputLow);
            assert!(!hal.get_out::<DebugPin4>());
            hal.set_out::<DebugPin4>(true);
            assert!(hal.get_out::<DebugPin4>());
        }
        TestCase::InputStub => {
            let input = pins.debug_pin2.into_pull_up_input();
            assert!(!input.is_readable());
            assert!(!input.is_high().unwrap());
            for id in DynPinId::ALL {
                rprintln!("{:?}: readable {}", id, id.is_readable());
            }
        }
        TestCase::Square => {
            hal.init::<DebugPin1>(PinFunction::OutputLow);
            for _ in 0..20 {
                hal.toggle_out::<DebugPin1>();
                cortex_m::asm::delay(25_000_000);
            }
        }
    }

    rprintln!("Test success");
    loop {
        led.toggle().ok();
        cortex_m::asm::delay(25_000_000);
    }
}
