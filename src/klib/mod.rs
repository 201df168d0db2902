//! Rawsys Library (KLib).
//!
//! Utilitários agnósticos de plataforma para uso interno.
//! Funciona como uma extensão da `core` library.

pub mod mem;
pub mod string;
pub mod test_framework;
