//! Hello - Binário de Demonstração.
//!
//! Responsabilidade:
//! 1. Definir o `_start` naked (sem crt1.o, sem libc).
//! 2. Entregar o RSP original ao runtime (`rt::entry::init`).
//! 3. Executar os self-tests (feature `self_test`).
//! 4. Escrever "Hello World!" em stdout e encerrar com status 0, tudo pelo
//!    invocador cru.

#![no_std]
#![no_main]

mod builtins;
mod panic;

use rawsys::klib::string::strlen;
use rawsys::syscall::io::STDOUT;
use rawsys::syscall::numbers::{SYS_EXIT, SYS_WRITE};
use rawsys::syscall::process;
use rawsys::syscall::Errno;

/// Mensagem terminada em nulo, medida com `strlen` como em C.
const MESSAGE: &[u8] = b"Hello World!\0";

/// Ponto de entrada Naked.
///
/// Na entrada RSP aponta para `argc` (ver `rt::startup`). Não há endereço de
/// retorno na stack: esta função nunca retorna.
///
/// 1. Zera RBP (fim da cadeia de frames para debuggers).
/// 2. Passa o RSP original em RDI.
/// 3. Alinha RSP em 16 bytes; o `call` empilha 8 e o callee vê o alinhamento
///    exigido pelo System V.
#[unsafe(naked)]
#[no_mangle]
pub unsafe extern "C" fn _start() -> ! {
    core::arch::naked_asm!(
        "xor rbp, rbp",
        "mov rdi, rsp",
        "and rsp, -16",
        "call {main}",
        // hello_main não retorna
        "ud2",
        main = sym hello_main,
    )
}

extern "C" fn hello_main(sp: *const usize) -> ! {
    // SAFETY: sp é o RSP original de _start.
    let _info = unsafe { rawsys::rt::entry::init(sp) };

    run_self_tests();

    let msg = MESSAGE.as_ptr();
    // SAFETY: MESSAGE é terminada em nulo.
    let len = unsafe { strlen(msg) };

    // SAFETY: msg é legível por len bytes.
    let ret = unsafe { rawsys::syscall!(SYS_WRITE, STDOUT, msg, len) };
    if ret != len as isize {
        match Errno::from_ret(ret) {
            Some(err) => rawsys::kerror!("(Hello) write falhou: ", err.name()),
            None => rawsys::kerror!("(Hello) escrita parcial: ", ret),
        }
        process::exit(1);
    }
    rawsys::kdebug!("(Hello) bytes escritos=", rawsys::rt::console::Dec(ret as u64));

    // SAFETY: exit não acessa memória do processo.
    unsafe { rawsys::syscall!(SYS_EXIT, 0) };

    // exit(2) não retorna; se retornar, encerra o grupo inteiro.
    process::exit_group(0)
}

#[cfg(feature = "self_test")]
fn run_self_tests() {
    if !rawsys::rt::test::run_self_tests().all_passed() {
        rawsys::kerror!("(Hello) self-tests falharam");
        process::exit(1);
    }
}

#[cfg(not(feature = "self_test"))]
fn run_self_tests() {}
