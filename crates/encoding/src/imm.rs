//! Split-immediate codecs for the S-type and B-type instruction formats.
//!
//! Unlike the contiguous fields in [`crate::fields`], the store and branch
//! offsets are scattered across two non-contiguous bit ranges of the word:
//!
//! ```text
//! S-type:  imm[11:5] | rs2 | rs1 | funct3 | imm[4:0]        | opcode
//! B-type:  imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode
//! ```
//!
//! Extraction gathers the pieces into immediate bit order and sign-extends
//! from the immediate's top bit, so the result is the full two's-complement
//! bit pattern of the offset (contiguous fields zero-extend instead).
//! Insertion and update take the immediate in that same layout and scatter
//! its pieces, with the same OR-merge and clear-then-set contracts as the
//! contiguous primitives. The B-type immediate has no bit 0; branch targets
//! are always even and bit 0 of the value is ignored.

/// Bit position of the word's top bit, which carries the sign of both
/// split immediates.
const WORD_SIGN_SHIFT: u32 = 31;

/// Bit shift of the S-type immediate high piece (imm[11:5] at bits 31-25).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask for the S-type immediate high piece (7 bits).
const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Bit shift of the S-type immediate low piece (imm[4:0] at bits 11-7).
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for the S-type immediate low piece (5 bits).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit position of the high piece within the reconstructed S-type immediate.
const S_IMM_HIGH_POS: u32 = 5;

/// Bit position of the S-type immediate's sign bit.
const S_IMM_SIGN_POS: u32 = 11;

/// Positioned mask covering both S-type immediate ranges in the word.
const S_IMM_FIELD_MASK: u32 =
    (S_IMM_HIGH_MASK << S_IMM_HIGH_SHIFT) | (S_IMM_LOW_MASK << S_IMM_LOW_SHIFT);

/// Bit shift of B-type immediate bit 12 (bit 31 of the word).
const B_IMM_12_SHIFT: u32 = 31;

/// Bit mask for B-type immediate bit 12 (sign bit).
const B_IMM_12_MASK: u32 = 1;

/// Bit shift of B-type immediate bits 10-5 (bits 30-25 of the word).
const B_IMM_10_5_SHIFT: u32 = 25;

/// Bit mask for B-type immediate bits 10-5 (6 bits).
const B_IMM_10_5_MASK: u32 = 0x3F;

/// Bit shift of B-type immediate bits 4-1 (bits 11-8 of the word).
const B_IMM_4_1_SHIFT: u32 = 8;

/// Bit mask for B-type immediate bits 4-1 (4 bits).
const B_IMM_4_1_MASK: u32 = 0xF;

/// Bit shift of B-type immediate bit 11 (bit 7 of the word).
const B_IMM_11_SHIFT: u32 = 7;

/// Bit mask for B-type immediate bit 11.
const B_IMM_11_MASK: u32 = 1;

/// Bit position of bit 12 in the reconstructed B-type immediate.
const B_IMM_12_POS: u32 = 12;

/// Bit position of bit 11 in the reconstructed B-type immediate.
const B_IMM_11_POS: u32 = 11;

/// Bit position of bits 10-5 in the reconstructed B-type immediate.
const B_IMM_10_5_POS: u32 = 5;

/// Bit position of bits 4-1 in the reconstructed B-type immediate.
const B_IMM_4_1_POS: u32 = 1;

/// Positioned mask covering both B-type immediate ranges in the word.
const B_IMM_FIELD_MASK: u32 = ((B_IMM_12_MASK << 6 | B_IMM_10_5_MASK) << B_IMM_10_5_SHIFT)
    | ((B_IMM_4_1_MASK << 1 | B_IMM_11_MASK) << B_IMM_11_SHIFT);

/// Extracts the S-type store offset, sign-extended to 32 bits.
///
/// Gathers imm[11:5] from bits 31-25 and imm[4:0] from bits 11-7, then
/// replicates the sign bit (bit 31 of the word) through the upper bits of
/// the result.
#[inline(always)]
pub const fn extract_simm12(insn: u32) -> u32 {
    let high = (insn >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    let low = (insn >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let sign = (insn >> WORD_SIGN_SHIFT) & 1;
    (high << S_IMM_HIGH_POS) | low | (sign.wrapping_neg() << S_IMM_SIGN_POS)
}

/// ORs an S-type store offset into `insn`.
///
/// `value` is truncated to 12 bits and scattered across bits 31-25 and
/// 11-7. Same contract as the contiguous insert: the target ranges must
/// already be zero, or the pieces merge with the existing bits.
#[inline(always)]
pub const fn insert_simm12(insn: u32, value: u32) -> u32 {
    insn | (((value >> S_IMM_HIGH_POS) & S_IMM_HIGH_MASK) << S_IMM_HIGH_SHIFT)
        | ((value & S_IMM_LOW_MASK) << S_IMM_LOW_SHIFT)
}

/// Overwrites the S-type store offset in `insn`.
///
/// Clears both immediate ranges, then inserts. Bits outside the two ranges
/// are untouched.
#[inline(always)]
pub const fn update_simm12(insn: u32, value: u32) -> u32 {
    insert_simm12(insn & !S_IMM_FIELD_MASK, value)
}

/// Extracts the B-type branch offset, sign-extended to 32 bits.
///
/// Gathers imm[12|10:5] from bits 31-25 and imm[4:1|11] from bits 11-7 into
/// immediate bit order, then replicates the sign bit through the upper bits.
/// Bit 0 of the result is always zero.
#[inline(always)]
pub const fn extract_bimm12(insn: u32) -> u32 {
    let bit_12 = (insn >> B_IMM_12_SHIFT) & B_IMM_12_MASK;
    let bits_10_5 = (insn >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bits_4_1 = (insn >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bit_11 = (insn >> B_IMM_11_SHIFT) & B_IMM_11_MASK;

    (bit_12 << B_IMM_12_POS)
        | (bit_11 << B_IMM_11_POS)
        | (bits_10_5 << B_IMM_10_5_POS)
        | (bits_4_1 << B_IMM_4_1_POS)
        | (bit_12.wrapping_neg() << B_IMM_12_POS)
}

/// ORs a B-type branch offset into `insn`.
///
/// `value` is taken in immediate bit order (bit 0 ignored, bits beyond 12
/// discarded) and scattered into the B-type ranges. Target ranges must
/// already be zero, or the pieces merge.
#[inline(always)]
pub const fn insert_bimm12(insn: u32, value: u32) -> u32 {
    insn | (((value >> B_IMM_12_POS) & B_IMM_12_MASK) << B_IMM_12_SHIFT)
        | (((value >> B_IMM_10_5_POS) & B_IMM_10_5_MASK) << B_IMM_10_5_SHIFT)
        | (((value >> B_IMM_4_1_POS) & B_IMM_4_1_MASK) << B_IMM_4_1_SHIFT)
        | (((value >> B_IMM_11_POS) & B_IMM_11_MASK) << B_IMM_11_SHIFT)
}

/// Overwrites the B-type branch offset in `insn`.
///
/// Clears both immediate ranges, then inserts. Bits outside the two ranges
/// are untouched.
#[inline(always)]
pub const fn update_bimm12(insn: u32, value: u32) -> u32 {
    insert_bimm12(insn & !B_IMM_FIELD_MASK, value)
}
