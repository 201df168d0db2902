//! # Syscall Numbers Registry
//!
//! Números de syscall do Linux x86_64 usados pela biblioteca e pelos consumidores.
//!
//! **ATENÇÃO**: Estes números são fatos da ABI do kernel (`arch/x86/entry/syscalls/syscall_64.tbl`),
//! não escolhas deste crate. Outras arquiteturas usam tabelas diferentes.
//!
//! # Organização
//!
//! | Categoria | Syscalls                                  |
//! |-----------|-------------------------------------------|
//! | IO        | read, write, close, dup2, pipe2           |
//! | Memória   | mmap, munmap                              |
//! | Processo  | getpid, getppid, fork, exit, wait4, kill, exit_group |

// ============================================================================
// IO
// ============================================================================

/// Lê de um file descriptor.
/// Args: (fd, buf_ptr, buf_len)
/// Retorno: bytes lidos ou -errno
pub const SYS_READ: usize = 0;

/// Escreve em um file descriptor.
/// Args: (fd, buf_ptr, buf_len)
/// Retorno: bytes escritos ou -errno
pub const SYS_WRITE: usize = 1;

/// Fecha um file descriptor.
/// Args: (fd)
/// Retorno: 0 ou -errno
pub const SYS_CLOSE: usize = 3;

/// Duplica `old` em `new` (fechando `new` se aberto).
/// Args: (old_fd, new_fd)
/// Retorno: new_fd ou -errno
pub const SYS_DUP2: usize = 33;

/// Cria um pipe.
/// Args: (fds_ptr: *mut [i32; 2], flags)
/// Retorno: 0 ou -errno
pub const SYS_PIPE2: usize = 293;

// ============================================================================
// MEMÓRIA
// ============================================================================

/// Mapeia memória. Única syscall aqui que usa os 6 registradores.
/// Args: (addr, len, prot, flags, fd, offset)
/// Retorno: endereço ou -errno
pub const SYS_MMAP: usize = 9;

/// Desmapeia memória.
/// Args: (addr, len)
/// Retorno: 0 ou -errno
pub const SYS_MUNMAP: usize = 11;

// ============================================================================
// PROCESSO
// ============================================================================

/// Obtém o PID do processo atual.
/// Args: nenhum
/// Retorno: pid
pub const SYS_GETPID: usize = 39;

/// Cria um processo filho (cópia).
/// Args: nenhum
/// Retorno: pid do filho no pai, 0 no filho, ou -errno
pub const SYS_FORK: usize = 57;

/// Encerra a thread atual (o processo, se for a única thread).
/// Args: (exit_code)
/// Retorno: Nunca retorna
pub const SYS_EXIT: usize = 60;

/// Espera um filho mudar de estado.
/// Args: (pid, status_ptr, options, rusage_ptr)
/// Retorno: pid ou -errno
pub const SYS_WAIT4: usize = 61;

/// Envia um sinal.
/// Args: (pid, sig)
/// Retorno: 0 ou -errno
pub const SYS_KILL: usize = 62;

/// Obtém o PID do processo pai.
/// Args: nenhum
/// Retorno: ppid
pub const SYS_GETPPID: usize = 110;

/// Encerra todas as threads do processo.
/// Args: (exit_code)
/// Retorno: Nunca retorna
pub const SYS_EXIT_GROUP: usize = 231;

/// Nome legível de um número conhecido (para logs).
pub fn name(nr: usize) -> Option<&'static str> {
    Some(match nr {
        SYS_READ => "read",
        SYS_WRITE => "write",
        SYS_CLOSE => "close",
        SYS_DUP2 => "dup2",
        SYS_PIPE2 => "pipe2",
        SYS_MMAP => "mmap",
        SYS_MUNMAP => "munmap",
        SYS_GETPID => "getpid",
        SYS_FORK => "fork",
        SYS_EXIT => "exit",
        SYS_WAIT4 => "wait4",
        SYS_KILL => "kill",
        SYS_GETPPID => "getppid",
        SYS_EXIT_GROUP => "exit_group",
        _ => return None,
    })
}
