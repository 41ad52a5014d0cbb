//! Pure text extractors for procfs-style fact documents.
//!
//! Each submodule parses one logical source file (CPU identity, aggregate
//! CPU counters, memory totals, OS identity, routing table, load averages).
//! The parsers take the raw document text and return typed values; a parse
//! miss is reported as `None` or a defaulted field, never as an error, so
//! the caller can substitute its local fallback.
pub mod cpu;
pub mod load;
pub mod memory;
pub mod net;
pub mod os;
