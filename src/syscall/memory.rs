//! Mapeamento de memória
//!
//! `mmap` é a syscall que ocupa os 6 registradores de argumento
//! (RDI, RSI, RDX, R10, R8, R9), por isso serve de prova do mapeamento completo.

use super::error::{check, SysResult};
use super::flags::{MapFlags, ProtFlags};
use super::io::Fd;
use super::numbers::{SYS_MMAP, SYS_MUNMAP};
use super::syscall;

/// Mapeia `len` bytes. Retorna o endereço do mapeamento.
///
/// # Safety
/// Com `MapFlags::FIXED` o kernel substitui qualquer mapeamento existente em
/// `addr`, inclusive memória em uso pelo programa.
pub unsafe fn mmap(
    addr: *mut u8,
    len: usize,
    prot: ProtFlags,
    flags: MapFlags,
    fd: Fd,
    offset: i64,
) -> SysResult<*mut u8> {
    // SAFETY: repassado ao chamador.
    let ret = unsafe { syscall(SYS_MMAP, (addr, len, prot.bits(), flags.bits(), fd, offset)) };
    check(ret).map(|addr| addr as *mut u8)
}

/// Desmapeia `[addr, addr + len)`.
///
/// # Safety
/// Nenhuma referência viva pode apontar para a região.
pub unsafe fn munmap(addr: *mut u8, len: usize) -> SysResult<()> {
    // SAFETY: repassado ao chamador.
    check(unsafe { syscall(SYS_MUNMAP, (addr, len)) }).map(|_| ())
}
