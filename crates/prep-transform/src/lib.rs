//! Adapters from track-native record shapes into the canonical model.
//!
//! Each non-native certification track authors content in its own shape:
//! different field names, different category vocabularies, different
//! optional fields. One module per track defines that native shape as
//! typed structs and one pure adapter function into `StudyUnit`.
//!
//! Adapter contract: one output per input, same relative order, the
//! native `id` carried through unchanged. Native card kinds are closed
//! enums, so an unmapped category is a compile error; the only runtime
//! defaulting is documented per field and never drops a record.

pub mod cfp;
pub mod cia;
pub mod ea;

pub use cfp::{CfpCardKind, CfpDomain, CfpFlashcard, adapt_cfp};
pub use cia::{CiaCardKind, CiaFlashcard, CiaPart, adapt_cia};
pub use ea::{EaCardKind, EaFlashcard, EaSection, adapt_ea};
