//! x86_64
//!
//! Código dependente da ABI de syscalls do Linux x86_64.

pub mod trap;

pub use trap::{syscall_insn, SyscallRequest};
