//! Panic Handler - Tratamento de pânicos do binário
//!
//! Implementação do panic handler obrigatório para binários no_std.
//! Sem unwinder: registra o local em stderr e encerra o processo com 101.

use core::panic::PanicInfo;

use rawsys::syscall::process;

/// Status de saída de um pânico (mesmo valor do runtime padrão do Rust).
const PANIC_EXIT_CODE: i32 = 101;

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    rawsys::kerror!("!!! PANIC !!!");

    if let Some(location) = info.location() {
        rawsys::kerror!("Arquivo: ", location.file());
        rawsys::kerror!("Linha: ", rawsys::rt::console::Dec(location.line() as u64));
    }

    if let Some(message) = info.message().as_str() {
        rawsys::kerror!("Mensagem: ", message);
    }

    process::exit_group(PANIC_EXIT_CODE)
}
