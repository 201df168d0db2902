//! Ciclo de vida de processos
//!
//! exit, exit_group, getpid, getppid, kill, fork e wait4.

use super::error::{check, SysResult};
use super::flags::WaitFlags;
use super::numbers::{
    SYS_EXIT, SYS_EXIT_GROUP, SYS_FORK, SYS_GETPID, SYS_GETPPID, SYS_KILL, SYS_WAIT4,
};
use super::syscall;

/// Process ID
pub type Pid = i32;

/// Encerra a thread atual com `code`. Nunca retorna.
///
/// Em um processo de thread única (o caso do binário `hello`) isso encerra o
/// processo. Se o kernel recusar, cai para `exit_group`.
pub fn exit(code: i32) -> ! {
    // SAFETY: exit não acessa memória do processo.
    unsafe { syscall(SYS_EXIT, (code,)) };
    exit_group(code)
}

/// Encerra todas as threads do processo. Nunca retorna.
pub fn exit_group(code: i32) -> ! {
    loop {
        // SAFETY: exit_group não acessa memória do processo.
        unsafe { syscall(SYS_EXIT_GROUP, (code,)) };
        core::hint::spin_loop();
    }
}

pub fn getpid() -> Pid {
    // SAFETY: getpid não tem argumentos e sempre sucede.
    unsafe { syscall(SYS_GETPID, ()) as Pid }
}

pub fn getppid() -> Pid {
    // SAFETY: getppid não tem argumentos e sempre sucede.
    unsafe { syscall(SYS_GETPPID, ()) as Pid }
}

/// Envia o sinal `sig` para `pid`. `sig == 0` apenas testa a existência.
pub fn kill(pid: Pid, sig: i32) -> SysResult<()> {
    // SAFETY: kill não acessa memória do processo.
    check(unsafe { syscall(SYS_KILL, (pid, sig)) }).map(|_| ())
}

/// Resultado de `fork` visto por cada lado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkResult {
    Parent { child: Pid },
    Child,
}

/// Cria um processo filho.
///
/// # Safety
/// O filho é uma cópia de UMA thread do pai. Locks mantidos por outras threads
/// ficam travados para sempre no filho; ele deve se limitar a syscalls até
/// chamar `exit`.
pub unsafe fn fork() -> SysResult<ForkResult> {
    // SAFETY: repassado ao chamador.
    let ret = check(unsafe { syscall(SYS_FORK, ()) })?;
    Ok(match ret {
        0 => ForkResult::Child,
        pid => ForkResult::Parent { child: pid as Pid },
    })
}

/// Estado de um filho decodificado do `status` de `wait4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitStatus {
    /// Terminou normalmente com este código (0..=255)
    Exited(i32),
    /// Terminou por este sinal
    Signaled(i32),
    /// Parado por este sinal (WUNTRACED)
    Stopped(i32),
    /// Retomado por SIGCONT (WCONTINUED)
    Continued,
    /// Nenhum filho mudou de estado (WNOHANG)
    StillAlive,
}

impl WaitStatus {
    /// Decodifica a palavra de status do kernel.
    pub const fn from_raw(status: i32) -> Self {
        let low = status & 0x7f;
        if status == 0xffff {
            Self::Continued
        } else if low == 0 {
            Self::Exited((status >> 8) & 0xff)
        } else if status & 0xff == 0x7f {
            Self::Stopped((status >> 8) & 0xff)
        } else {
            Self::Signaled(low)
        }
    }
}

/// Espera `pid` mudar de estado. Retorna o pid observado e o estado.
pub fn wait4(pid: Pid, options: WaitFlags) -> SysResult<(Pid, WaitStatus)> {
    let mut status: i32 = 0;
    // SAFETY: o kernel escreve um i32 em status; rusage nulo é permitido.
    let ret = check(unsafe {
        syscall(
            SYS_WAIT4,
            (pid, &mut status as *mut i32, options.bits(), core::ptr::null_mut::<u8>()),
        )
    })?;

    if ret == 0 {
        return Ok((0, WaitStatus::StillAlive));
    }
    Ok((ret as Pid, WaitStatus::from_raw(status)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syscall::Errno;

    const SIGKILL: i32 = 9;
    const SIGSTOP: i32 = 19;

    #[test]
    fn test_ids_match_std() {
        assert_eq!(getpid() as u32, std::process::id());
        assert_eq!(getppid() as u32, std::os::unix::process::parent_id());
        assert_eq!(kill(getpid(), 0), Ok(()));
    }

    #[test]
    fn test_status_decoding() {
        assert_eq!(WaitStatus::from_raw(0), WaitStatus::Exited(0));
        assert_eq!(WaitStatus::from_raw(42 << 8), WaitStatus::Exited(42));
        assert_eq!(WaitStatus::from_raw(SIGKILL), WaitStatus::Signaled(SIGKILL));
        assert_eq!(WaitStatus::from_raw((SIGSTOP << 8) | 0x7f), WaitStatus::Stopped(SIGSTOP));
        assert_eq!(WaitStatus::from_raw(0xffff), WaitStatus::Continued);
    }

    #[test]
    fn test_child_exit_code_reaches_parent() {
        match unsafe { fork() }.unwrap() {
            ForkResult::Child => exit(42),
            ForkResult::Parent { child } => {
                assert_eq!(wait4(child, WaitFlags::empty()), Ok((child, WaitStatus::Exited(42))));
            }
        }
    }

    #[test]
    fn test_wait_without_child() {
        assert_eq!(wait4(getpid(), WaitFlags::empty()), Err(Errno::NoChild));
    }
}
