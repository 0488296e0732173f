use super::config::{Direction, PinConfig};
use super::dynpins::{Binding, DynPinId};
use crate::pac::BitAccess;

//==================================================================================================
// Register Interface
//==================================================================================================

/// Register access contract for a single pin
///
/// Implementers supply the register file and the [`DynPinId`]. The provided
/// methods translate each pin operation into single-bit accesses on the bits
/// of the pin's [`Binding`]. When the implementer's `id` is a constant, as it
/// is for the type-level pins, the binding is folded at compile time and
/// every method reduces to a fixed sequence of stores.
///
/// No method performs any check of the current pin mode. Writing the output
/// of a pin configured as input has whatever effect the hardware gives it.
pub(super) trait RegisterInterface {
    type Regs: BitAccess;

    fn regs(&self) -> &Self::Regs;

    fn id(&self) -> DynPinId;

    #[inline(always)]
    fn binding(&self) -> Binding {
        self.id().binding()
    }

    /// Apply a [`PinConfig`]
    ///
    /// For outputs, the level is written before the direction changes, so the
    /// pad never drives the stale PDOR value. The function select is set to
    /// GPIO afterwards and the analog function is switched off last.
    #[inline]
    fn configure(&mut self, config: PinConfig) {
        let binding = self.binding();
        let regs = self.regs();
        match config.direction {
            Direction::Output => {
                regs.write_bit(binding.output, config.initial.into());
                regs.write_bit(binding.direction, true);
            }
            Direction::Input => {
                regs.write_bit(binding.pull_up, config.pull_up);
                regs.write_bit(binding.direction, false);
            }
        }
        regs.write_bit(binding.function, false);
        if let Some(analog) = binding.analog {
            regs.write_bit(analog, false);
        }
    }

    /// Write the logic level of an output pin
    #[inline]
    fn write_pin(&mut self, level: bool) {
        self.regs().write_bit(self.binding().output, level);
    }

    /// Toggle the logic level of an output pin
    #[inline]
    fn toggle(&mut self) {
        self.regs().toggle_bit(self.binding().output);
    }

    /// Read the logic level of an input pin
    ///
    /// Pins without input readback return `false` without any register access.
    #[inline]
    fn read_pin(&self) -> bool {
        match self.binding().input {
            Some(input) => self.regs().read_bit(input),
            None => false,
        }
    }

    /// Read back the output data bit
    #[inline]
    fn read_output(&self) -> bool {
        self.regs().read_bit(self.binding().output)
    }
}
