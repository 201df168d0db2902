//! Configuração de Runtime
//!
//! Duas camadas:
//! - Compile-time: features do Cargo (`no_logs`, `log_*`, `self_test`) removem
//!   código do binário.
//! - Run-time: variáveis de ambiente lidas UMA vez no startup:
//!   - `RAWSYS_LOG=off|error|warn|info|debug|trace`
//!   - `NO_COLOR` (não vazio) desliga cores ANSI
//!
//! Antes de `init` (e nos testes do host) vale `Config::default()`.

use spin::Once;

use crate::klib::string::split_env;

/// Variável que define o nível de log.
pub const ENV_LOG: &[u8] = b"RAWSYS_LOG";

/// Variável padrão para desligar cores.
pub const ENV_NO_COLOR: &[u8] = b"NO_COLOR";

/// Nível de log (do mais crítico ao menos)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Level {
    pub fn parse(value: &[u8]) -> Option<Self> {
        Some(match value {
            b"off" => Self::Off,
            b"error" => Self::Error,
            b"warn" => Self::Warn,
            b"info" => Self::Info,
            b"debug" => Self::Debug,
            b"trace" => Self::Trace,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub level: Level,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Info,
            color: true,
        }
    }
}

impl Config {
    /// Lê a configuração de entradas `KEY=VALUE`.
    ///
    /// Valores desconhecidos mantêm o padrão.
    pub fn from_env<'a, I>(env: I) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut config = Self::default();

        for entry in env {
            let Some((key, value)) = split_env(entry) else {
                continue;
            };

            if key == ENV_LOG {
                if let Some(level) = Level::parse(value) {
                    config.level = level;
                }
            } else if key == ENV_NO_COLOR && !value.is_empty() {
                config.color = false;
            }
        }

        config
    }
}

static CONFIG: Once<Config> = Once::new();

/// Fixa a configuração do processo. Chamadas seguintes não têm efeito.
pub fn init(config: Config) -> &'static Config {
    CONFIG.call_once(|| config)
}

/// Configuração atual (padrão antes de `init`).
pub fn get() -> Config {
    CONFIG.get().copied().unwrap_or_default()
}

/// O nível está habilitado em run-time?
#[inline]
pub fn enabled(level: Level) -> bool {
    level != Level::Off && level <= get().level
}
