//! # Simulated GPIO register file
//!
//! A RAM copy of the GPIO block for running pin code off-target. All words
//! start at zero. Every bit access made through [`BitAccess`] is recorded in a
//! bounded trace, so tests can check which bits were touched and in which
//! order.
//!
//! ```ignore
//! use fm4_gpio_hal::gpio::{GpioHal, LedRed, PinFunction};
//! use fm4_gpio_hal::pac::DDR;
//! use fm4_gpio_hal::sim::RegisterFile;
//!
//! let regs = RegisterFile::new();
//! let hal = GpioHal::new(&regs);
//! hal.init::<LedRed>(PinFunction::OutputLow);
//! assert_eq!(regs.word(DDR + 4 * 2), 1 << 7);
//! ```
//!
//! Requires the `sim` feature outside of this crate's own tests. The example
//! above is checked by the `module_example` unit test.
//!
//! Register offsets handed to this module must be word aligned and below
//! `0x600`, see the `# Panics` sections.
use crate::pac::{BitAccess, BitField};
use core::cell::{Cell, RefCell};
use heapless::Vec;

/// Number of 32-bit words covering the GPIO registers up to and including `ADE`
pub const WORDS: usize = 0x600 / 4;

/// Number of accesses kept in the trace
pub const TRACE_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(BitField),
    Write(BitField, bool),
}

impl Access {
    #[inline]
    pub fn field(&self) -> BitField {
        match *self {
            Access::Read(field) | Access::Write(field, _) => field,
        }
    }
}

pub struct RegisterFile {
    words: [Cell<u32>; WORDS],
    trace: RefCell<Vec<Access, TRACE_DEPTH>>,
    /// Set when the trace ran full and further accesses were not recorded
    overflow: Cell<bool>,
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile {
            words: core::array::from_fn(|_| Cell::new(0)),
            trace: RefCell::new(Vec::new()),
            overflow: Cell::new(false),
        }
    }

    #[inline]
    fn cell(&self, offset: u16) -> &Cell<u32> {
        assert!(offset % 4 == 0, "unaligned register offset {:#x}", offset);
        assert!(
            (offset as usize) < WORDS * 4,
            "register offset {:#x} outside the GPIO block",
            offset
        );
        &self.words[offset as usize / 4]
    }

    /// Full register word at byte offset `offset`
    ///
    /// # Panics
    ///
    /// If `offset` is not a multiple of 4 or not below `0x600`.
    pub fn word(&self, offset: u16) -> u32 {
        self.cell(offset).get()
    }

    /// Overwrite a full register word. Not recorded in the trace.
    ///
    /// # Panics
    ///
    /// Same as [`RegisterFile::word`].
    pub fn set_word(&self, offset: u16, value: u32) {
        self.cell(offset).set(value)
    }

    /// Fill every register word with `value`. Not recorded in the trace.
    pub fn fill(&self, value: u32) {
        for word in &self.words {
            word.set(value);
        }
    }

    /// Copy of all register words
    pub fn snapshot(&self) -> [u32; WORDS] {
        core::array::from_fn(|i| self.words[i].get())
    }

    /// Single bit, bypassing the trace
    ///
    /// # Panics
    ///
    /// If `field.offset` is rejected by [`RegisterFile::word`].
    pub fn bit(&self, field: BitField) -> bool {
        self.word(field.offset) & field.mask() != 0
    }

    /// Set a single bit, bypassing the trace
    ///
    /// # Panics
    ///
    /// Same as [`RegisterFile::bit`].
    pub fn set_bit(&self, field: BitField, bit: bool) {
        let cell = self.cell(field.offset);
        if bit {
            cell.set(cell.get() | field.mask());
        } else {
            cell.set(cell.get() & !field.mask());
        }
    }

    /// Recorded accesses, oldest first
    pub fn trace(&self) -> Vec<Access, TRACE_DEPTH> {
        self.trace.borrow().clone()
    }

    /// Recorded accesses to the register word at `offset`
    pub fn accesses_to(&self, offset: u16) -> usize {
        self.trace
            .borrow()
            .iter()
            .filter(|access| access.field().offset == offset)
            .count()
    }

    pub fn trace_overflowed(&self) -> bool {
        self.overflow.get()
    }

    pub fn clear_trace(&self) {
        self.trace.borrow_mut().clear();
        self.overflow.set(false);
    }

    fn record(&self, access: Access) {
        if self.trace.borrow_mut().push(access).is_err() {
            self.overflow.set(true);
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        RegisterFile::new()
    }
}

impl BitAccess for &RegisterFile {
    fn read_bit(&self, field: BitField) -> bool {
        self.record(Access::Read(field));
        self.bit(field)
    }

    fn write_bit(&self, field: BitField, bit: bool) {
        self.record(Access::Write(field, bit));
        self.set_bit(field, bit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::{GpioHal, LedRed, PinFunction};
    use crate::pac::{ADE, DDR, PDOR};

    #[test]
    fn module_example() {
        let regs = RegisterFile::new();
        let hal = GpioHal::new(&regs);
        hal.init::<LedRed>(PinFunction::OutputLow);
        assert_eq!(regs.word(DDR + 4 * 2), 1 << 7);
    }

    #[test]
    #[should_panic(expected = "unaligned")]
    fn unaligned_offset_panics() {
        RegisterFile::new().word(PDOR + 2);
    }

    #[test]
    #[should_panic(expected = "outside the GPIO block")]
    fn offset_past_block_panics() {
        let regs = RegisterFile::new();
        regs.set_bit(BitField::new(0x600, 0), true);
    }

    #[test]
    fn bit_access_only_touches_one_bit() {
        let regs = RegisterFile::new();
        regs.set_word(PDOR, 0xA5A5_0000);
        let field = BitField::new(PDOR, 3);
        (&regs).write_bit(field, true);
        assert_eq!(regs.word(PDOR), 0xA5A5_0008);
        assert!((&regs).read_bit(field));
        (&regs).toggle_bit(field);
        assert_eq!(regs.word(PDOR), 0xA5A5_0000);
    }

    #[test]
    fn trace_records_in_order() {
        let regs = RegisterFile::new();
        let a = BitField::new(PDOR, 1);
        let b = BitField::new(ADE, 9);
        (&regs).write_bit(a, true);
        (&regs).read_bit(b);
        assert_eq!(
            regs.trace().as_slice(),
            &[Access::Write(a, true), Access::Read(b)]
        );
        assert_eq!(regs.accesses_to(ADE), 1);
        regs.clear_trace();
        assert!(regs.trace().is_empty());
    }

    #[test]
    fn trace_overflow_is_flagged() {
        let regs = RegisterFile::new();
        let field = BitField::new(PDOR, 0);
        for _ in 0..=TRACE_DEPTH {
            (&regs).write_bit(field, true);
        }
        assert_eq!(regs.trace().len(), TRACE_DEPTH);
        assert!(regs.trace_overflowed());
    }

    #[test]
    fn last_word_is_addressable() {
        let regs = RegisterFile::new();
        regs.fill(u32::MAX);
        assert_eq!(regs.word(ADE), u32::MAX);
        assert_eq!(regs.word((WORDS as u16 - 1) * 4), u32::MAX);
    }
}
