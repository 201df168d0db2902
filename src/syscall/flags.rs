//! # Syscall Flags
//!
//! Flags usadas pelos wrappers tipados. Valores da ABI do Linux x86_64.

use bitflags::bitflags;

bitflags! {
    /// Flags de `pipe2`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PipeFlags: u32 {
        const NONBLOCK = 0o4000;
        const CLOEXEC  = 0o2000000;
    }
}

bitflags! {
    /// Opções de `wait4`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WaitFlags: u32 {
        const NOHANG    = 1 << 0;
        const UNTRACED  = 1 << 1;
        const CONTINUED = 1 << 3;
    }
}

bitflags! {
    /// Proteção de páginas (`mmap`)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ProtFlags: u32 {
        const READ  = 1 << 0;
        const WRITE = 1 << 1;
        const EXEC  = 1 << 2;
    }
}

bitflags! {
    /// Tipo de mapeamento (`mmap`)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MapFlags: u32 {
        const SHARED    = 0x01;
        const PRIVATE   = 0x02;
        const FIXED     = 0x10;
        const ANONYMOUS = 0x20;
    }
}
