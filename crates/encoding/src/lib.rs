//! Bit-level codec for 32-bit RISC-V instruction words.
//!
//! This crate implements the operand-field manipulation layer used when
//! assembling and patching RISC-V machine code, with the following:
//! 1. **Fields:** Extraction, OR-merge insertion, and clear-then-set updates
//!    for every contiguous operand field (`rd`, `rs1`, `rs2`, `shamt`,
//!    `imm12`, `imm20`).
//! 2. **Split immediates:** Scatter/gather codecs for the S-type store offset
//!    and B-type branch offset, which are spread across non-contiguous bit
//!    ranges of the word.
//! 3. **Construction:** Recognition and assembly of the `addi` instruction
//!    from its opcode template.
//! 4. **Catalog:** A name-keyed table of field descriptors for tooling that
//!    works with serialized field layouts.
//!
//! All codec operations are total: operand values wider than their target
//! field are silently truncated to the field width, mirroring what the
//! hardware encoding can represent. Nothing here validates register numbers
//! or immediate ranges.

/// `addi` recognition and construction.
pub mod addi;
/// Name-keyed field descriptor lookup.
pub mod catalog;
/// Field descriptors, named operand fields, and word-level accessors.
pub mod fields;
/// Split-immediate codecs for the S-type and B-type formats.
pub mod imm;

/// Recognizer and constructor for the register-immediate add instruction.
pub use crate::addi::{is_addi, make_addi};
/// Descriptor for one contiguous operand field; use the constants in
/// [`fields`] rather than constructing positions by hand.
pub use crate::fields::Field;
/// Extension trait giving `u32` instruction words named field accessors.
pub use crate::fields::InstructionFields;
