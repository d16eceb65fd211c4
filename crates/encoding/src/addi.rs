//! Recognition and construction of the register-immediate add instruction.
//!
//! `addi` is an I-type instruction: `imm[11:0] | rs1 | funct3 | rd | opcode`.
//! Recognition masks the word down to its fixed bits (opcode and funct3) and
//! compares against the known pattern; construction starts from the opcode
//! template and inserts the operand fields.

use tracing::trace;

use crate::fields::InstructionFields;

/// Bitmask covering the fixed bits of an I-type encoding: the opcode field
/// (bits 6-0) and the funct3 field (bits 14-12).
pub const ADDI_MASK: u32 = 0x0000_707F;

/// Encoding pattern for `addi`: funct3 `000` under the OP-IMM major opcode.
///
/// Every operand field is zero, so this constant doubles as the opcode
/// template that [`make_addi`] builds from.
pub const ADDI_MATCH: u32 = 0x0000_0013;

/// Returns `true` if `insn` encodes an `addi` instruction.
///
/// Total over all 32-bit inputs; only the fixed opcode and funct3 bits are
/// inspected, so any combination of operand fields is accepted.
#[inline(always)]
pub const fn is_addi(insn: u32) -> bool {
    (insn & ADDI_MASK) == ADDI_MATCH
}

/// Assembles an `addi` instruction from its operands.
///
/// Starts from the [`ADDI_MATCH`] template and inserts `rd`, `rs1`, and
/// `imm12`. Operand bits beyond each field's width are silently discarded
/// (`rd` and `rs1` keep their low 5 bits, `imm12` its low 12), mirroring
/// what the fixed-width encoding can represent. A negative immediate is
/// passed as its 12-bit two's-complement pattern.
pub fn make_addi(rd: u32, rs1: u32, imm12: u32) -> u32 {
    let insn = ADDI_MATCH
        .insert_rd(rd)
        .insert_rs1(rs1)
        .insert_imm12(imm12);
    trace!(rd, rs1, imm12, insn, "assembled addi");
    insn
}
