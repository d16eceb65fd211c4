//! Contiguous field codec tests.
//!
//! The algebraic properties hold for every descriptor in the catalog, so the
//! property tests iterate over all of them rather than repeating one test per
//! field. Concrete positions are pinned separately per field.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use rvinsn_core::catalog::FIELDS;
use rvinsn_core::fields::{Field, IMM12, IMM20, InstructionFields, RD, RS1, RS2, SHAMT};

// ──────────────────────────────────────────────────────────
// Descriptor positions
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(RD, 7, 5)]
#[case(RS1, 15, 5)]
#[case(RS2, 20, 5)]
#[case(SHAMT, 20, 5)]
#[case(IMM12, 20, 12)]
#[case(IMM20, 12, 20)]
fn descriptor_positions(#[case] field: Field, #[case] lsb: u32, #[case] width: u32) {
    assert_eq!(field, Field::new(lsb, width));
}

#[test]
fn masks_are_field_width_ones() {
    assert_eq!(RD.mask(), 0x1F);
    assert_eq!(IMM12.mask(), 0xFFF);
    assert_eq!(IMM20.mask(), 0xF_FFFF);
    assert_eq!(IMM12.positioned_mask(), 0xFFF0_0000);
    assert_eq!(RD.positioned_mask(), 0x0000_0F80);
}

// ──────────────────────────────────────────────────────────
// Codec algebra
// ──────────────────────────────────────────────────────────

proptest! {
    /// After an update, extraction returns the value truncated to the field
    /// width, for any starting word.
    #[test]
    fn update_then_extract_returns_value(insn in any::<u32>(), value in any::<u32>()) {
        for (name, field) in FIELDS {
            prop_assert_eq!(
                field.extract(field.update(insn, value)),
                value & field.mask(),
                "field {}", name
            );
        }
    }

    /// Update touches no bits outside the field's declared position.
    #[test]
    fn update_preserves_outside_bits(insn in any::<u32>(), value in any::<u32>()) {
        for (name, field) in FIELDS {
            let outside = !field.positioned_mask();
            prop_assert_eq!(
                field.update(insn, value) & outside,
                insn & outside,
                "field {}", name
            );
        }
    }

    /// On a word whose target field is already zero, the cheap OR-merge
    /// insert and the clearing update agree.
    #[test]
    fn insert_equals_update_on_cleared_field(insn in any::<u32>(), value in any::<u32>()) {
        for (name, field) in FIELDS {
            let cleared = insn & !field.positioned_mask();
            prop_assert_eq!(
                field.insert(cleared, value),
                field.update(cleared, value),
                "field {}", name
            );
        }
    }

    /// Insert never clears: every bit set in the input word survives.
    #[test]
    fn insert_is_or_merge(insn in any::<u32>(), value in any::<u32>()) {
        for (name, field) in FIELDS {
            let merged = field.insert(insn, value);
            prop_assert_eq!(merged & insn, insn, "field {}", name);
        }
    }

    /// Extraction reads only the field's declared bits.
    #[test]
    fn extract_ignores_outside_bits(insn in any::<u32>(), noise in any::<u32>()) {
        for (name, field) in FIELDS {
            let noisy = insn ^ (noise & !field.positioned_mask());
            prop_assert_eq!(field.extract(noisy), field.extract(insn), "field {}", name);
        }
    }
}

// ──────────────────────────────────────────────────────────
// Named accessors on u32
// ──────────────────────────────────────────────────────────

#[test]
fn accessors_read_known_word() {
    // addi x5, x10, 1
    let insn: u32 = 0x00A0_0293;
    assert_eq!(insn.extract_rd(), 5);
    assert_eq!(insn.extract_rs1(), 10);
    assert_eq!(insn.extract_imm12(), 1);
}

#[test]
fn accessors_match_descriptors() {
    let insn: u32 = 0xDEAD_BEEF;
    assert_eq!(insn.extract_rd(), RD.extract(insn));
    assert_eq!(insn.extract_rs1(), RS1.extract(insn));
    assert_eq!(insn.extract_rs2(), RS2.extract(insn));
    assert_eq!(insn.extract_shamt(), SHAMT.extract(insn));
    assert_eq!(insn.extract_imm12(), IMM12.extract(insn));
    assert_eq!(insn.extract_imm20(), IMM20.extract(insn));
}

#[test]
fn rs2_and_shamt_share_a_position() {
    // Both live at bits 24-20; the immediate shifts reuse the rs2 slot.
    let insn = 0u32.insert_rs2(0b10110);
    assert_eq!(insn.extract_shamt(), 0b10110);
}

#[test]
fn update_overwrites_a_populated_field() {
    let insn = 0u32.insert_imm12(0xFFF).insert_rd(31);
    let patched = insn.update_imm12(0x123);
    assert_eq!(patched.extract_imm12(), 0x123);
    assert_eq!(patched.extract_rd(), 31);
}

#[test]
fn insert_into_populated_field_merges() {
    // The documented hazard: insert does not clear first.
    let insn = 0u32.insert_rd(0b00101);
    assert_eq!(insn.insert_rd(0b11000).extract_rd(), 0b11101);
}
