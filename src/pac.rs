//! # Minimal peripheral access for the FM4 GPIO block
//!
//! Only the registers this HAL touches are described here: the function
//! select (PFR), pull-up (PCR), direction (DDR), input data (PDIR), output
//! data (PDOR) and analog enable (ADE) registers. Every port has one 32-bit
//! word per register, bit `n` controls pin `n` of that port.
//!
//! Single bits are accessed through the Cortex-M4 peripheral bit-band alias,
//! so a bit write is a single store and never touches the neighbouring bits
//! of the same register word.
use core::sync::atomic::{AtomicBool, Ordering};

/// Base address of the GPIO register block
pub const GPIO_BASE: u32 = 0x4006_F000;

/// Start of the peripheral bit-band region
const BITBAND_REGION: u32 = 0x4000_0000;
/// Start of the peripheral bit-band alias region
const BITBAND_ALIAS: u32 = 0x4200_0000;

/// Port function setting registers, `PFR0..PFRF`
pub const PFR: u16 = 0x000;
/// Pull-up setting registers, `PCR0..PCRF`
pub const PCR: u16 = 0x100;
/// Port direction setting registers, `DDR0..DDRF`
pub const DDR: u16 = 0x200;
/// Port input data registers, `PDIR0..PDIRF`
pub const PDIR: u16 = 0x300;
/// Port output data registers, `PDOR0..PDORF`
pub const PDOR: u16 = 0x400;
/// Analog input setting register, bit `n` belongs to channel `ANn`
pub const ADE: u16 = 0x500;

/// Number of GPIO ports (0x0..0xF)
pub const PORT_COUNT: u8 = 16;

/// A single bit inside the GPIO register block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    /// Byte offset of the register word from [`GPIO_BASE`]
    pub offset: u16,
    /// Bit position inside the register word
    pub bit: u8,
}

impl BitField {
    #[inline]
    pub const fn new(offset: u16, bit: u8) -> Self {
        BitField { offset, bit }
    }

    /// Bit of a per-port register, e.g. `BitField::port(DDR, 0x2, 7)` for `DDR2.P7`
    #[inline]
    pub const fn port(register: u16, port: u8, bit: u8) -> Self {
        BitField::new(register + 4 * port as u16, bit)
    }

    /// Analog enable bit for channel `ANn`
    #[inline]
    pub const fn analog(channel: u8) -> Self {
        BitField::new(ADE, channel)
    }

    #[inline]
    pub const fn mask(&self) -> u32 {
        1 << self.bit
    }

    /// Absolute address of the register word
    #[inline]
    pub const fn address(&self) -> u32 {
        GPIO_BASE + self.offset as u32
    }

    /// Address of the bit-band alias word for this bit
    #[inline]
    pub const fn alias_address(&self) -> u32 {
        BITBAND_ALIAS + (self.address() - BITBAND_REGION) * 32 + self.bit as u32 * 4
    }
}

/// Register file interface used by every pin operation
///
/// Hardware registers are interior-mutable by nature, so writes take `&self`
/// like a volatile cell does. Implementations must touch exactly the
/// requested bit and nothing else.
///
/// No synchronization is provided. Two contexts modifying bits of the same
/// register need to coordinate on their own.
pub trait BitAccess {
    fn read_bit(&self, field: BitField) -> bool;

    fn write_bit(&self, field: BitField, bit: bool);

    /// Read-invert-write of a single bit. Not atomic with respect to interrupts.
    #[inline]
    fn toggle_bit(&self, field: BitField) {
        let bit = self.read_bit(field);
        self.write_bit(field, !bit);
    }
}

/// Bit-band backed access to the real GPIO block
///
/// Zero-sized. Obtain it through [`Gpio::take`] or [`BitBand::steal`].
#[derive(Debug, Clone, Copy)]
pub struct BitBand {
    _private: (),
}

impl BitBand {
    /// Create a register accessor without going through the [`Gpio`] singleton
    ///
    /// # Safety
    ///
    /// The caller must be running on an FM4 device with the GPIO block
    /// clocked, and is responsible for any aliasing with other owners of the
    /// same pins.
    #[inline]
    pub const unsafe fn steal() -> Self {
        BitBand { _private: () }
    }
}

impl BitAccess for BitBand {
    #[inline(always)]
    fn read_bit(&self, field: BitField) -> bool {
        // Safety: The alias address lies inside the bit-band alias of the GPIO block
        unsafe { core::ptr::read_volatile(field.alias_address() as *const u32) & 0x01 == 1 }
    }

    #[inline(always)]
    fn write_bit(&self, field: BitField, bit: bool) {
        // Safety: A store to the alias word only modifies the aliased bit
        unsafe { core::ptr::write_volatile(field.alias_address() as *mut u32, bit as u32) }
    }
}

static TAKEN: AtomicBool = AtomicBool::new(false);

/// Owned handle to the GPIO register block
pub struct Gpio {
    regs: BitBand,
}

impl Gpio {
    /// Returns the GPIO block exactly once
    #[inline]
    pub fn take() -> Option<Self> {
        cortex_m::interrupt::free(|_| {
            if TAKEN.load(Ordering::Relaxed) {
                None
            } else {
                TAKEN.store(true, Ordering::Relaxed);
                // Safety: Guarded by the flag above
                Some(unsafe { Self::steal() })
            }
        })
    }

    /// Unchecked version of [`Gpio::take`]
    ///
    /// # Safety
    ///
    /// Each of the returned handles grants access to every GPIO pin. Creating
    /// more than one breaks the singleton guarantee of the pin API.
    #[inline]
    pub unsafe fn steal() -> Self {
        TAKEN.store(true, Ordering::Relaxed);
        Gpio {
            regs: BitBand::steal(),
        }
    }

    #[inline]
    pub fn regs(&self) -> BitBand {
        self.regs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_port_offsets() {
        assert_eq!(BitField::port(DDR, 0x2, 7), BitField::new(0x208, 7));
        assert_eq!(BitField::port(PFR, 0xE, 0), BitField::new(0x038, 0));
        assert_eq!(BitField::port(PDOR, 0x1, 0xF).address(), 0x4006_F404);
        assert_eq!(BitField::analog(10), BitField::new(0x500, 10));
        assert_eq!(BitField::new(PDOR, 3).mask(), 0b1000);
    }

    #[test]
    fn bitband_alias() {
        // PDOR1 bit 15: 0x4200_0000 + 0x6F404 * 32 + 15 * 4
        let field = BitField::port(PDOR, 0x1, 0xF);
        assert_eq!(field.alias_address(), 0x42DE_80BC);
        assert_eq!(BitField::new(PFR, 0).alias_address(), 0x42DE_0000);
    }
}
