//! Self-Tests do Invocador
//!
//! Suite executada pelo binário `hello` com a feature `self_test`, antes da demo.
//! Cada caso passa por syscalls reais, então a suite valida o trap de ponta a ponta
//! no kernel em que o binário está rodando.

use crate::arch::x86_64::trap::SyscallRequest;
use crate::klib::test_framework::{run_test_suite, Tally, TestCase, TestResult};
use crate::syscall::numbers::{SYS_DUP2, SYS_GETPID, SYS_WRITE};
use crate::syscall::process::{self, ForkResult, WaitStatus};
use crate::syscall::{io, memory, Errno, MapFlags, PipeFlags, ProtFlags, WaitFlags};

/// fd alvo do teste de dois slots (longe dos fds normalmente abertos).
const DUP_TARGET: i32 = 911;

const PAGE_SIZE: usize = 4096;

/// Executa todos os self-tests
pub fn run_self_tests() -> Tally {
    crate::kinfo!("╔════════════════════════════════════════╗");
    crate::kinfo!("║     🧪 SELF-TESTS DO INVOCADOR         ║");
    crate::kinfo!("╚════════════════════════════════════════╝");

    let tally = run_test_suite(
        "syscall",
        &[
            TestCase { name: "getpid via trap", func: test_getpid },
            TestCase { name: "write de 12 bytes", func: test_write_twelve_bytes },
            TestCase { name: "dois slots (dup2)", func: test_two_slots },
            TestCase { name: "seis slots (mmap)", func: test_six_slots },
            TestCase { name: "errno EBADF", func: test_bad_fd },
            TestCase { name: "syscall desconhecida", func: test_unknown_number },
            TestCase { name: "aridade > 6 rejeitada", func: test_arity },
            TestCase { name: "exit(0) do filho", func: test_child_exit },
        ],
    );

    if tally.all_passed() {
        crate::kinfo!("╔════════════════════════════════════════╗");
        crate::kinfo!("║  ✅ INVOCADOR VALIDADO!                ║");
        crate::kinfo!("╚════════════════════════════════════════╝");
    }
    tally
}

fn verdict(ok: bool) -> TestResult {
    if ok {
        TestResult::Passed
    } else {
        TestResult::Failed
    }
}

fn test_getpid() -> TestResult {
    let pid = unsafe { crate::syscall!(SYS_GETPID) };
    crate::ktrace!("(SelfTest) pid=", pid);
    verdict(pid > 0 && pid == process::getpid() as isize)
}

fn test_write_twelve_bytes() -> TestResult {
    let Ok((rd, wr)) = io::pipe2(PipeFlags::CLOEXEC) else {
        return TestResult::Skipped;
    };

    let msg = b"Hello World!";
    let ret = unsafe { crate::syscall!(SYS_WRITE, wr, msg.as_ptr(), msg.len()) };

    let mut buf = [0u8; 16];
    let read = io::read(rd, &mut buf);
    let _ = io::close(rd);
    let _ = io::close(wr);

    verdict(ret == 12 && read == Ok(12) && &buf[..12] == msg)
}

fn test_two_slots() -> TestResult {
    let Ok((rd, wr)) = io::pipe2(PipeFlags::CLOEXEC) else {
        return TestResult::Skipped;
    };

    let ret = unsafe { crate::syscall!(SYS_DUP2, wr, DUP_TARGET) };
    let ok = ret == DUP_TARGET as isize;
    crate::ktrace!("(SelfTest) dup2=", ret);

    if ok {
        let _ = io::close(DUP_TARGET);
    }
    let _ = io::close(rd);
    let _ = io::close(wr);
    verdict(ok)
}

fn test_six_slots() -> TestResult {
    let page = unsafe {
        memory::mmap(
            core::ptr::null_mut(),
            PAGE_SIZE,
            ProtFlags::READ | ProtFlags::WRITE,
            MapFlags::PRIVATE | MapFlags::ANONYMOUS,
            -1,
            0,
        )
    };

    match page {
        Ok(page) => {
            crate::ktrace!("(SelfTest) mmap=", page);
            let ok = unsafe {
                page.write(0x5A);
                let stored = page.read();
                memory::munmap(page, PAGE_SIZE).is_ok() && stored == 0x5A
            };
            verdict(ok && page as usize % PAGE_SIZE == 0)
        }
        Err(e) => {
            crate::kerror!("(SelfTest) mmap falhou: ", e.name());
            TestResult::Failed
        }
    }
}

fn test_bad_fd() -> TestResult {
    let msg = b"x";
    let ret = unsafe { crate::syscall!(SYS_WRITE, -1i32, msg.as_ptr(), msg.len()) };
    verdict(Errno::from_ret(ret) == Some(Errno::BadFileDescriptor))
}

fn test_unknown_number() -> TestResult {
    let ret = unsafe { crate::syscall!(100_000usize) };
    verdict(Errno::from_ret(ret) == Some(Errno::NotImplemented))
}

fn test_arity() -> TestResult {
    let too_many = SyscallRequest::from_slice(SYS_GETPID, &[0; 7]);
    let six = SyscallRequest::from_slice(SYS_GETPID, &[0; 6]);
    verdict(too_many.is_err() && six.is_ok())
}

fn test_child_exit() -> TestResult {
    match unsafe { process::fork() } {
        Ok(ForkResult::Child) => process::exit(0),
        Ok(ForkResult::Parent { child }) => {
            verdict(process::wait4(child, WaitFlags::empty()) == Ok((child, WaitStatus::Exited(0))))
        }
        Err(_) => TestResult::Skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_suite_passes_on_host() {
        let tally = run_self_tests();
        assert_eq!(tally.failed, 0);
        assert_eq!(tally.passed + tally.skipped, 8);
    }
}
