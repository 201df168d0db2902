//! IO em file descriptors
//!
//! Wrappers tipados de read/write/close/pipe2/dup2 sobre o invocador cru.

use super::error::{check, Errno, SysResult};
use super::flags::PipeFlags;
use super::numbers::{SYS_CLOSE, SYS_DUP2, SYS_PIPE2, SYS_READ, SYS_WRITE};
use super::syscall;

/// File descriptor
pub type Fd = i32;

pub const STDIN: Fd = 0;
pub const STDOUT: Fd = 1;
pub const STDERR: Fd = 2;

/// Escreve `buf` em `fd`. Pode escrever menos que `buf.len()`.
pub fn write(fd: Fd, buf: &[u8]) -> SysResult<usize> {
    // SAFETY: buf é legível por buf.len() bytes.
    check(unsafe { syscall(SYS_WRITE, (fd, buf.as_ptr(), buf.len())) })
}

/// Escreve `buf` inteiro, repetindo em escritas parciais e em EINTR.
pub fn write_all(fd: Fd, mut buf: &[u8]) -> SysResult<()> {
    while !buf.is_empty() {
        match write(fd, buf) {
            Ok(0) => return Err(Errno::IoError),
            Ok(n) => buf = &buf[n..],
            Err(Errno::Interrupted) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Lê de `fd` para `buf`. Retorna 0 em fim de arquivo.
pub fn read(fd: Fd, buf: &mut [u8]) -> SysResult<usize> {
    // SAFETY: buf é gravável por buf.len() bytes.
    check(unsafe { syscall(SYS_READ, (fd, buf.as_mut_ptr(), buf.len())) })
}

pub fn close(fd: Fd) -> SysResult<()> {
    // SAFETY: close não acessa memória do processo.
    check(unsafe { syscall(SYS_CLOSE, (fd,)) }).map(|_| ())
}

/// Cria um pipe. Retorna `(leitura, escrita)`.
pub fn pipe2(flags: PipeFlags) -> SysResult<(Fd, Fd)> {
    let mut fds: [Fd; 2] = [-1; 2];
    // SAFETY: o kernel escreve exatamente 2 i32 em fds.
    check(unsafe { syscall(SYS_PIPE2, (fds.as_mut_ptr(), flags.bits())) })?;
    Ok((fds[0], fds[1]))
}

/// Duplica `old` em `new`. Retorna `new`.
pub fn dup2(old: Fd, new: Fd) -> SysResult<Fd> {
    // SAFETY: dup2 não acessa memória do processo.
    check(unsafe { syscall(SYS_DUP2, (old, new)) }).map(|fd| fd as Fd)
}
