//! # Value-level pin identifiers and the register binding table
//!
//! [`DynPinId`] is the closed set of pins wired on the board. Each variant
//! resolves to a [`Binding`], the set of register bits controlling that pin.
//! The table is a `const fn` with an exhaustive `match`, so it is evaluated
//! while building and a variant without bits does not compile.
//!
//! The type-level [`PinId`](super::PinId)s read their binding from here
//! through an associated constant, which keeps all lookups out of the
//! generated code.
//!
//! | Pin         | Port pin | Analog channel |
//! |-------------|----------|----------------|
//! | `DebugPin1` | P1F      | -              |
//! | `DebugPin2` | P1A      | AN10           |
//! | `DebugPin3` | P19      | AN09           |
//! | `DebugPin4` | P25      | -              |
//! | `LedRed`    | P27      | -              |
//! | `LedGreen`  | P38      | -              |
//! | `LedBlue`   | PE0      | -              |
use crate::pac::{BitField, ADE, DDR, PCR, PDIR, PDOR, PFR};

//==================================================================================================
//  Binding
//==================================================================================================

/// Register bits controlling a single pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Port function select, 0 selects GPIO
    pub function: BitField,
    /// Pull-up enable
    pub pull_up: BitField,
    /// Direction, 1 selects output
    pub direction: BitField,
    /// Output data
    pub output: BitField,
    /// Input data. `None` if input readback is not wired for this pin.
    pub input: Option<BitField>,
    /// Analog enable of the ADC channel sharing this pin, if any
    pub analog: Option<BitField>,
}

impl Binding {
    /// Binding of port pin `P<port><bit>` without input readback or analog channel
    pub const fn gpio(port: u8, bit: u8) -> Self {
        Binding {
            function: BitField::port(PFR, port, bit),
            pull_up: BitField::port(PCR, port, bit),
            direction: BitField::port(DDR, port, bit),
            output: BitField::port(PDOR, port, bit),
            input: None,
            analog: None,
        }
    }

    /// Pin shares its pad with ADC channel `ANn`
    pub const fn with_analog(mut self, channel: u8) -> Self {
        self.analog = Some(BitField::new(ADE, channel));
        self
    }

    /// Enable input readback through the port's PDIR register
    pub const fn with_input(mut self) -> Self {
        self.input = Some(BitField::new(
            self.output.offset - PDOR + PDIR,
            self.output.bit,
        ));
        self
    }
}

//==================================================================================================
//  DynPinId
//==================================================================================================

/// Value-level `enum` of all pins wired on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DynPinId {
    DebugPin1,
    DebugPin2,
    DebugPin3,
    DebugPin4,
    LedRed,
    LedGreen,
    LedBlue,
}

impl DynPinId {
    pub const ALL: [DynPinId; 7] = [
        DynPinId::DebugPin1,
        DynPinId::DebugPin2,
        DynPinId::DebugPin3,
        DynPinId::DebugPin4,
        DynPinId::LedRed,
        DynPinId::LedGreen,
        DynPinId::LedBlue,
    ];

    /// Register bits of this pin
    pub const fn binding(self) -> Binding {
        match self {
            DynPinId::DebugPin1 => Binding::gpio(0x1, 0xF),
            DynPinId::DebugPin2 => Binding::gpio(0x1, 0xA).with_analog(10),
            DynPinId::DebugPin3 => Binding::gpio(0x1, 0x9).with_analog(9),
            DynPinId::DebugPin4 => Binding::gpio(0x2, 0x5),
            DynPinId::LedRed => Binding::gpio(0x2, 0x7),
            DynPinId::LedGreen => Binding::gpio(0x3, 0x8),
            DynPinId::LedBlue => Binding::gpio(0xE, 0x0),
        }
    }

    /// Whether reading the input level is wired for this pin. Reads of the
    /// other pins always return `false`.
    #[inline]
    pub const fn is_readable(self) -> bool {
        self.binding().input.is_some()
    }

    #[inline]
    pub const fn has_analog(self) -> bool {
        self.binding().analog.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pac::PORT_COUNT;

    #[test]
    fn led_red_binding() {
        let b = DynPinId::LedRed.binding();
        assert_eq!(b.function, BitField::new(0x008, 7));
        assert_eq!(b.pull_up, BitField::new(0x108, 7));
        assert_eq!(b.direction, BitField::new(0x208, 7));
        assert_eq!(b.output, BitField::new(0x408, 7));
        assert_eq!(b.input, None);
        assert_eq!(b.analog, None);
    }

    #[test]
    fn analog_channels() {
        assert_eq!(
            DynPinId::DebugPin2.binding().analog,
            Some(BitField::new(ADE, 10))
        );
        assert_eq!(
            DynPinId::DebugPin3.binding().analog,
            Some(BitField::new(ADE, 9))
        );
        let analog: usize = DynPinId::ALL.iter().filter(|id| id.has_analog()).count();
        assert_eq!(analog, 2);
    }

    #[test]
    fn no_pin_is_readable_yet() {
        for id in DynPinId::ALL {
            assert!(!id.is_readable(), "{:?}", id);
        }
    }

    #[test]
    fn bindings_are_distinct_and_in_range() {
        for (i, a) in DynPinId::ALL.iter().enumerate() {
            let ba = a.binding();
            assert!(ba.output.bit < 16);
            assert!((ba.output.offset - PDOR) / 4 < PORT_COUNT as u16);
            for b in &DynPinId::ALL[i + 1..] {
                assert_ne!(ba.output, b.binding().output, "{:?} / {:?}", a, b);
            }
        }
    }

    #[test]
    fn with_input_uses_pdir_of_same_port() {
        let b = Binding::gpio(0x3, 0x8).with_input();
        assert_eq!(b.input, Some(BitField::new(0x30C, 8)));
    }
}
