//! Códigos de Erro do Linux
//!
//! Interpretação, do lado do chamador, do valor cru devolvido pelo trap.
//! Erros chegam como valores negativos em RAX, no intervalo `-4095..=-1`.
//!
//! O invocador (`syscall()`) nunca usa este módulo: ele devolve RAX verbatim.

/// Maior errno que o kernel codifica no retorno.
pub const MAX_ERRNO: i32 = 4095;

/// Enum de erros do kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Errno {
    /// EPERM - Operação não permitida
    PermissionDenied,
    /// ENOENT - Arquivo ou diretório inexistente
    NotFound,
    /// ESRCH - Processo inexistente
    NoSuchProcess,
    /// EINTR - Syscall interrompida por sinal
    Interrupted,
    /// EIO - Erro de IO
    IoError,
    /// E2BIG - Lista de argumentos longa demais
    ArgumentListTooLong,
    /// EBADF - File descriptor inválido
    BadFileDescriptor,
    /// ECHILD - Nenhum filho para esperar
    NoChild,
    /// EAGAIN - Recurso temporariamente indisponível
    WouldBlock,
    /// ENOMEM - Sem memória
    OutOfMemory,
    /// EACCES - Permissão negada
    AccessDenied,
    /// EFAULT - Endereço inválido
    BadAddress,
    /// EBUSY - Recurso ocupado
    Busy,
    /// EEXIST - Já existe
    AlreadyExists,
    /// EINVAL - Argumento inválido
    InvalidArgument,
    /// EMFILE - Tabela de fds do processo cheia
    TooManyOpenFiles,
    /// ENOSPC - Sem espaço no dispositivo
    NoSpace,
    /// ESPIPE - Seek ilegal
    IllegalSeek,
    /// EPIPE - Pipe quebrado
    BrokenPipe,
    /// ERANGE - Resultado fora do intervalo
    OutOfRange,
    /// ENOSYS - Syscall não implementada
    NotImplemented,
    /// Qualquer outro código (1..=4095)
    Other(i32),
}

impl Errno {
    /// Código positivo do errno.
    pub const fn raw(self) -> i32 {
        match self {
            Self::PermissionDenied => 1,
            Self::NotFound => 2,
            Self::NoSuchProcess => 3,
            Self::Interrupted => 4,
            Self::IoError => 5,
            Self::ArgumentListTooLong => 7,
            Self::BadFileDescriptor => 9,
            Self::NoChild => 10,
            Self::WouldBlock => 11,
            Self::OutOfMemory => 12,
            Self::AccessDenied => 13,
            Self::BadAddress => 14,
            Self::Busy => 16,
            Self::AlreadyExists => 17,
            Self::InvalidArgument => 22,
            Self::TooManyOpenFiles => 24,
            Self::NoSpace => 28,
            Self::IllegalSeek => 29,
            Self::BrokenPipe => 32,
            Self::OutOfRange => 34,
            Self::NotImplemented => 38,
            Self::Other(code) => code,
        }
    }

    /// Cria o erro a partir do código positivo.
    pub const fn from_raw(code: i32) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::NotFound,
            3 => Self::NoSuchProcess,
            4 => Self::Interrupted,
            5 => Self::IoError,
            7 => Self::ArgumentListTooLong,
            9 => Self::BadFileDescriptor,
            10 => Self::NoChild,
            11 => Self::WouldBlock,
            12 => Self::OutOfMemory,
            13 => Self::AccessDenied,
            14 => Self::BadAddress,
            16 => Self::Busy,
            17 => Self::AlreadyExists,
            22 => Self::InvalidArgument,
            24 => Self::TooManyOpenFiles,
            28 => Self::NoSpace,
            29 => Self::IllegalSeek,
            32 => Self::BrokenPipe,
            34 => Self::OutOfRange,
            38 => Self::NotImplemented,
            other => Self::Other(other),
        }
    }

    /// Converte para isize negativo (formato de retorno da syscall)
    #[inline]
    pub const fn as_isize(self) -> isize {
        -(self.raw() as isize)
    }

    /// Extrai o erro de um retorno cru, se houver.
    ///
    /// Só `-4095..=-1` é erro: endereços altos devolvidos por `mmap` e
    /// outros valores negativos fora dessa faixa são sucesso.
    pub const fn from_ret(ret: isize) -> Option<Self> {
        if ret < 0 && ret >= -(MAX_ERRNO as isize) {
            Some(Self::from_raw((-ret) as i32))
        } else {
            None
        }
    }

    /// Nome simbólico (`"EBADF"`), para logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PermissionDenied => "EPERM",
            Self::NotFound => "ENOENT",
            Self::NoSuchProcess => "ESRCH",
            Self::Interrupted => "EINTR",
            Self::IoError => "EIO",
            Self::ArgumentListTooLong => "E2BIG",
            Self::BadFileDescriptor => "EBADF",
            Self::NoChild => "ECHILD",
            Self::WouldBlock => "EAGAIN",
            Self::OutOfMemory => "ENOMEM",
            Self::AccessDenied => "EACCES",
            Self::BadAddress => "EFAULT",
            Self::Busy => "EBUSY",
            Self::AlreadyExists => "EEXIST",
            Self::InvalidArgument => "EINVAL",
            Self::TooManyOpenFiles => "EMFILE",
            Self::NoSpace => "ENOSPC",
            Self::IllegalSeek => "ESPIPE",
            Self::BrokenPipe => "EPIPE",
            Self::OutOfRange => "ERANGE",
            Self::NotImplemented => "ENOSYS",
            Self::Other(_) => "E?",
        }
    }
}

impl core::fmt::Display for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name(), self.raw())
    }
}

/// Resultado de syscall: Ok(valor) ou Err(Errno)
pub type SysResult<T> = Result<T, Errno>;

/// Converte o retorno cru em `SysResult<usize>`.
#[inline]
pub const fn check(ret: isize) -> SysResult<usize> {
    match Errno::from_ret(ret) {
        Some(err) => Err(err),
        None => Ok(ret as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_window() {
        assert_eq!(Errno::from_ret(0), None);
        assert_eq!(Errno::from_ret(12), None);
        assert_eq!(Errno::from_ret(-9), Some(Errno::BadFileDescriptor));
        assert_eq!(Errno::from_ret(-4095), Some(Errno::Other(4095)));
        assert_eq!(Errno::from_ret(-4096), None);
        assert_eq!(Errno::from_ret(isize::MIN), None);
    }

    #[test]
    fn test_check() {
        assert_eq!(check(12), Ok(12));
        assert_eq!(check(-38), Err(Errno::NotImplemented));
        // Endereço "negativo" de mmap não é erro.
        assert_eq!(check(-8192), Ok((-8192isize) as usize));
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        assert_eq!(Errno::from_raw(95), Errno::Other(95));
        assert_eq!(Errno::Other(95).as_isize(), -95);
        assert_eq!(Errno::Other(95).name(), "E?");
        assert_eq!(Errno::BadFileDescriptor.name(), "EBADF");
        assert_eq!(std::format!("{}", Errno::Interrupted), "EINTR (4)");
    }
}
