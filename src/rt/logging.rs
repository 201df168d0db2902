// =============================================================================
// LOGGING - ZERO OVERHEAD
// =============================================================================
//
// Sistema de logging do rawsys com custo ZERO quando desligado.
//
// ARQUITETURA:
// - Usa features do Cargo para compile-time filtering
// - Com feature "no_logs", TODOS os macros viram expressões vazias
// - Filtro de run-time adicional via `rt::config` (RAWSYS_LOG)
// - SEM core::fmt, SEM alocação
// - Escreve APENAS em stderr (fd 2); stdout fica livre para o programa
//
// O invocador cru (`syscall()`) NUNCA loga. Os macros são usados pelo startup,
// pela demo e pelos self-tests.
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Erros fatais ou críticos
// - WARN:  Situações suspeitas mas recuperáveis
// - INFO:  Fluxo normal de execução
// - DEBUG: Informações de debugging
// - TRACE: Detalhes extremos (cada etapa do startup)
//
// COMO USAR:
//   kinfo!("(Startup) Iniciando...");          // Apenas string
//   kinfo!("(Startup) sp=", sp);               // String + hex
//   kinfo!("(Startup) argv: ", arg);           // String + texto
//
// =============================================================================

use crate::rt::config::{self, Level};
use crate::rt::console;

pub use crate::rt::config::Level as LogLevel;

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================
//
// Formato: \x1b[<código>m  onde:
//   1;31 = Bold Red
//   1;33 = Bold Yellow
//   32   = Green
//   36   = Cyan
//   35   = Magenta
//   0    = Reset
//

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";
pub const P_OK: &str = "\x1b[32m[OK]\x1b[0m ";
pub const P_FAIL: &str = "\x1b[1;31m[FAIL]\x1b[0m ";

// Variantes sem cor (NO_COLOR)
pub const P_ERROR_PLAIN: &str = "[ERRO] ";
pub const P_WARN_PLAIN: &str = "[WARN] ";
pub const P_INFO_PLAIN: &str = "[INFO] ";
pub const P_DEBUG_PLAIN: &str = "[DEBG] ";
pub const P_TRACE_PLAIN: &str = "[TRAC] ";
pub const P_OK_PLAIN: &str = "[OK] ";
pub const P_FAIL_PLAIN: &str = "[FAIL] ";

/// Prefixo de um nível.
pub const fn prefix(level: Level, color: bool) -> &'static str {
    match (level, color) {
        (Level::Error, true) => P_ERROR,
        (Level::Warn, true) => P_WARN,
        (Level::Info, true) => P_INFO,
        (Level::Debug, true) => P_DEBUG,
        (Level::Trace, true) => P_TRACE,
        (Level::Error, false) => P_ERROR_PLAIN,
        (Level::Warn, false) => P_WARN_PLAIN,
        (Level::Info, false) => P_INFO_PLAIN,
        (Level::Debug, false) => P_DEBUG_PLAIN,
        (Level::Trace, false) => P_TRACE_PLAIN,
        (Level::Off, _) => "",
    }
}

/// Abre uma linha de log: filtra em run-time e emite o prefixo.
#[doc(hidden)]
pub fn begin(level: Level) -> bool {
    if !config::enabled(level) {
        return false;
    }
    console::emit_str(prefix(level, config::get().color));
    true
}

/// Abre uma linha de status ([OK]/[FAIL]).
#[doc(hidden)]
pub fn begin_status(ok: bool) -> bool {
    let level = if ok { Level::Info } else { Level::Error };
    if !config::enabled(level) {
        return false;
    }
    let p = match (ok, config::get().color) {
        (true, true) => P_OK,
        (true, false) => P_OK_PLAIN,
        (false, true) => P_FAIL,
        (false, false) => P_FAIL_PLAIN,
    };
    console::emit_str(p);
    true
}

// =============================================================================
// MACRO INTERNO
// =============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! __klog_line {
    ($level:expr, $msg:expr) => {{
        if $crate::rt::logging::begin($level) {
            $crate::rt::console::emit_str($msg);
            $crate::rt::console::emit_nl();
        }
    }};
    ($level:expr, $msg:expr, $val:expr) => {{
        if $crate::rt::logging::begin($level) {
            $crate::rt::console::emit_str($msg);
            $crate::rt::console::LogValue::emit($val);
            $crate::rt::console::emit_nl();
        }
    }};
}

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    ($($arg:expr),+ $(,)?) => {
        $crate::__klog_line!($crate::rt::logging::LogLevel::Error, $($arg),+)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL WARN
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    ($($arg:expr),+ $(,)?) => {
        $crate::__klog_line!($crate::rt::logging::LogLevel::Warn, $($arg),+)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================
//
// kinfo! - Ativo com log_info, log_debug ou log_trace
//

#[cfg(all(
    not(feature = "no_logs"),
    any(feature = "log_info", feature = "log_debug", feature = "log_trace")
))]
#[macro_export]
macro_rules! kinfo {
    ($($arg:expr),+ $(,)?) => {
        $crate::__klog_line!($crate::rt::logging::LogLevel::Info, $($arg),+)
    };
}

#[cfg(not(all(
    not(feature = "no_logs"),
    any(feature = "log_info", feature = "log_debug", feature = "log_trace")
)))]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================
//
// kdebug! - Ativo com log_debug ou log_trace
//

#[cfg(all(
    not(feature = "no_logs"),
    any(feature = "log_debug", feature = "log_trace")
))]
#[macro_export]
macro_rules! kdebug {
    ($($arg:expr),+ $(,)?) => {
        $crate::__klog_line!($crate::rt::logging::LogLevel::Debug, $($arg),+)
    };
}

#[cfg(not(all(
    not(feature = "no_logs"),
    any(feature = "log_debug", feature = "log_trace")
)))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL TRACE
// =============================================================================
//
// ktrace! - Ativo apenas com log_trace
//

#[cfg(all(not(feature = "no_logs"), feature = "log_trace"))]
#[macro_export]
macro_rules! ktrace {
    ($($arg:expr),+ $(,)?) => {
        $crate::__klog_line!($crate::rt::logging::LogLevel::Trace, $($arg),+)
    };
}

#[cfg(not(all(not(feature = "no_logs"), feature = "log_trace")))]
#[macro_export]
macro_rules! ktrace {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS AUXILIARES
// =============================================================================

/// klog! - Continuação de linha sem prefixo (filtrada como TRACE).
///
/// # Uso
/// ```ignore
/// ktrace!("(Startup) argc=", argc);
/// klog!("Start=", start, " End=", end);
/// knl!();
/// ```
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! klog {
    ($msg:expr) => {{
        if $crate::rt::config::enabled($crate::rt::logging::LogLevel::Trace) {
            $crate::rt::console::emit_str($msg);
        }
    }};
    ($msg:expr, $val:expr) => {{
        if $crate::rt::config::enabled($crate::rt::logging::LogLevel::Trace) {
            $crate::rt::console::emit_str($msg);
            $crate::rt::console::LogValue::emit($val);
        }
    }};
    ($msg1:expr, $val1:expr, $msg2:expr, $val2:expr) => {{
        if $crate::rt::config::enabled($crate::rt::logging::LogLevel::Trace) {
            $crate::rt::console::emit_str($msg1);
            $crate::rt::console::LogValue::emit($val1);
            $crate::rt::console::emit_str($msg2);
            $crate::rt::console::LogValue::emit($val2);
        }
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! klog {
    ($($t:tt)*) => {{}};
}

/// knl! - Emite apenas newline.
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! knl {
    () => {{
        if $crate::rt::config::enabled($crate::rt::logging::LogLevel::Trace) {
            $crate::rt::console::emit_nl();
        }
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! knl {
    () => {{}};
}

// =============================================================================
// MACROS DE STATUS (OK/FAIL)
// =============================================================================

/// kok! - Log de sucesso (prefixo verde [OK]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kok {
    ($msg:expr) => {{
        if $crate::rt::logging::begin_status(true) {
            $crate::rt::console::emit_str($msg);
            $crate::rt::console::emit_nl();
        }
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kok {
    ($($t:tt)*) => {{}};
}

/// kfail! - Log de falha (prefixo vermelho [FAIL]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kfail {
    ($msg:expr) => {{
        if $crate::rt::logging::begin_status(false) {
            $crate::rt::console::emit_str($msg);
            $crate::rt::console::emit_nl();
        }
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kfail {
    ($($t:tt)*) => {{}};
}
