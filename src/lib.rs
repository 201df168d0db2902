//! Rawsys - Invocador de Syscalls Cru.
//!
//! Ponto central de exportação dos módulos da biblioteca.
//! Chama o kernel Linux x86_64 diretamente pela instrução `syscall`,
//! sem libc e sem runtime.
//!
//! # Camadas
//! - `arch`: rotina naked que posiciona os registradores e executa o trap.
//! - `syscall`: fachada `syscall()`/`syscall!`, números, errno e wrappers tipados.
//! - `klib`: utilitários estilo C (strlen, memcpy/memset) e framework de self-test.
//! - `rt`: startup do processo, configuração e logging em stderr.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(not(all(target_arch = "x86_64", target_os = "linux")))]
compile_error!("rawsys suporta apenas x86_64 Linux");

// --- Baixo Nível (Hardware/ABI) ---
pub mod arch; // Trap de syscall (naked)

// --- Interface com o Kernel ---
pub mod syscall; // Invocador, números, errno, wrappers

// --- Utilitários e Runtime ---
pub mod klib; // strlen, mem, framework de testes
pub mod rt; // Startup, config, logging

// Re-exports principais
pub use crate::arch::x86_64::trap::SyscallRequest;
pub use crate::syscall::{syscall, ArityError, IntoWord, SyscallArgs};
