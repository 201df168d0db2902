//! Entry Point Lógico do Processo.
//!
//! Primeiro código Rust de alto nível executado após o trampolim naked `_start`
//! do binário.
//!
//! # Responsabilidades
//! 1. **Decodificação**: Lê argc/argv/envp da stack inicial.
//! 2. **Configuração**: Fixa a configuração de runtime a partir do ambiente.
//! 3. **Diagnóstico**: Registra o estado inicial em nível TRACE.

use crate::rt::config::{self, Config};
use crate::rt::startup::StartupInfo;

/// Inicializa o runtime.
///
/// # Safety
/// `sp` deve ser o RSP original de `_start` (ver [`StartupInfo::from_stack`]).
/// Deve ser chamada uma única vez, antes de qualquer log.
pub unsafe fn init(sp: *const usize) -> StartupInfo<'static> {
    // SAFETY: repassado ao chamador; a stack inicial vive pelo processo todo.
    let info = unsafe { StartupInfo::from_stack(sp) };
    config::init(Config::from_env(info.env()));

    crate::ktrace!("(Startup) sp=", sp);
    crate::ktrace!("(Startup) argc=", crate::rt::console::Dec(info.argc() as u64));
    #[cfg(feature = "log_trace")]
    for arg in info.args() {
        crate::ktrace!("(Startup) argv: ", arg);
    }
    crate::kdebug!("(Startup) nivel de log: ", config::get().level.name());

    info
}
