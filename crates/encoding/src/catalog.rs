//! Name-keyed lookup of operand field descriptors.
//!
//! The upstream instruction tables identify operand fields by name, and
//! tooling built on them exchanges field layouts as serialized tables. This
//! module exposes the same view: every contiguous operand field under its
//! conventional name, resolvable at runtime.
//!
//! The split S-type and B-type immediates are not listed here; they cannot be
//! described by a single (lsb, width) pair and are only available through the
//! codecs in [`crate::imm`].

use thiserror::Error;

use crate::fields::{Field, IMM12, IMM20, RD, RS1, RS2, SHAMT};

/// Error returned when a field name does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operand field `{name}`")]
pub struct UnknownField {
    /// The name that failed to resolve.
    pub name: String,
}

/// Every named contiguous operand field and its descriptor.
pub const FIELDS: [(&str, Field); 6] = [
    ("rd", RD),
    ("rs1", RS1),
    ("rs2", RS2),
    ("shamt", SHAMT),
    ("imm12", IMM12),
    ("imm20", IMM20),
];

/// Resolves a field descriptor by its conventional name.
///
/// # Errors
///
/// Returns [`UnknownField`] if `name` is not one of the entries in
/// [`FIELDS`].
pub fn lookup(name: &str) -> Result<Field, UnknownField> {
    FIELDS
        .iter()
        .find_map(|&(candidate, field)| (candidate == name).then_some(field))
        .ok_or_else(|| UnknownField {
            name: name.to_owned(),
        })
}
