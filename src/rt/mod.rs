//! Runtime Module
//!
//! Tudo que um processo sem libc precisa ao redor do invocador:
//! decodificação da stack inicial, configuração, logging em stderr e self-tests.

pub mod config;
pub mod console;
pub mod entry;
pub mod logging;
pub mod startup;
pub mod test;
