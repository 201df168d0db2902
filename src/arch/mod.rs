//! Arquitetura.
//!
//! Apenas x86_64 é suportado; o gate de plataforma está em `lib.rs`.

pub mod x86_64;
