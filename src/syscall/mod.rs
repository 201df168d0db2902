//! System Call Interface
//!
//! Fachada de chamada de syscalls do Linux x86_64.
//!
//! # Camadas
//! - `syscall()` / `syscall!`: invocador cru. Monta o pedido de 7 palavras na
//!   stack do chamador, entrega ao trap naked e devolve RAX verbatim. Sem
//!   validação, sem errno, sem retry, sem log.
//! - `error`: interpretação opcional do retorno (`Errno`, `SysResult`).
//! - `io`, `process`, `memory`: wrappers tipados construídos sobre o invocador.
//!
//! # Syscalls usadas
//! - 1: write(fd, buf, len)
//! - 60: exit(status)
//! - ver `numbers` para a lista completa

pub mod error;
pub mod flags;
pub mod io;
pub mod memory;
pub mod numbers;
pub mod process;
mod request;

pub use error::{check, Errno, SysResult};
pub use flags::{MapFlags, PipeFlags, ProtFlags, WaitFlags};
pub use request::{ArityError, IntoWord, SyscallArgs};

use crate::arch::x86_64::trap::SyscallRequest;

/// Invoca a syscall `nr` com até 6 argumentos e devolve o resultado cru.
///
/// Valores negativos em `-4095..=-1` são o errno codificado pelo kernel; esta
/// função não os distingue de sucesso (use [`check`] para isso).
///
/// ```
/// use rawsys::syscall::numbers::SYS_GETPID;
///
/// let pid = unsafe { rawsys::syscall(SYS_GETPID, ()) };
/// assert_eq!(pid, std::process::id() as isize);
/// ```
///
/// Mais de 6 argumentos não compila:
///
/// ```compile_fail
/// let _ = unsafe { rawsys::syscall(39, (1, 2, 3, 4, 5, 6, 7)) };
/// ```
///
/// # Safety
/// O chamador garante que os argumentos são válidos para a syscall `nr`
/// (ponteiros legíveis/graváveis pelo tamanho informado, etc.).
#[inline(always)]
pub unsafe fn syscall<A: SyscallArgs>(nr: usize, args: A) -> isize {
    let request = SyscallRequest::new(nr, args);
    // SAFETY: repassado ao chamador.
    unsafe { request.invoke() }
}

/// Invocação estilo variádico: `syscall!(nr, a1, ..., a6)`.
///
/// Expande para [`syscall`](crate::syscall::syscall) e deve ser usado dentro de
/// um bloco `unsafe`.
///
/// ```
/// use rawsys::syscall::numbers::SYS_GETPPID;
///
/// let ppid = unsafe { rawsys::syscall!(SYS_GETPPID) };
/// assert_eq!(ppid, std::os::unix::process::parent_id() as isize);
/// ```
///
/// ```compile_fail
/// let _ = unsafe { rawsys::syscall!(39, 1, 2, 3, 4, 5, 6, 7) };
/// ```
#[macro_export]
macro_rules! syscall {
    ($nr:expr $(,)?) => {
        $crate::syscall::syscall($nr, ())
    };
    ($nr:expr, $a1:expr $(,)?) => {
        $crate::syscall::syscall($nr, ($a1,))
    };
    ($nr:expr, $a1:expr, $a2:expr $(,)?) => {
        $crate::syscall::syscall($nr, ($a1, $a2))
    };
    ($nr:expr, $a1:expr, $a2:expr, $a3:expr $(,)?) => {
        $crate::syscall::syscall($nr, ($a1, $a2, $a3))
    };
    ($nr:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr $(,)?) => {
        $crate::syscall::syscall($nr, ($a1, $a2, $a3, $a4))
    };
    ($nr:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr $(,)?) => {
        $crate::syscall::syscall($nr, ($a1, $a2, $a3, $a4, $a5))
    };
    ($nr:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr $(,)?) => {
        $crate::syscall::syscall($nr, ($a1, $a2, $a3, $a4, $a5, $a6))
    };
    ($nr:expr, $($rest:expr),+ $(,)?) => {
        compile_error!("syscall! aceita no máximo 6 argumentos")
    };
}
