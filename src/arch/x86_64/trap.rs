//! Arquivo: x86_64/trap.rs
//!
//! Propósito: Rotina de transferência para o kernel (instrução SYSCALL).
//!
//! Detalhes de Implementação:
//! - `SyscallRequest` espelha EXATAMENTE a sequência de 7 palavras lida pelo assembly.
//! - `syscall_insn` é naked: nenhuma instrução de prólogo/epílogo é emitida pelo
//!   compilador, então as cargas de registradores são as primeiras instruções.
//!
//! Convenção de registradores (Linux x86_64):
//! - RAX: número da syscall
//! - RDI: arg1
//! - RSI: arg2
//! - RDX: arg3
//! - R10: arg4 (RCX é destruído por syscall)
//! - R8:  arg5
//! - R9:  arg6
//! - Retorno em RAX. O kernel destrói RCX (RIP de retorno) e R11 (RFLAGS).

use core::mem::{offset_of, size_of};

/// Máximo de argumentos suportados
pub const MAX_ARGS: usize = 6;

/// Pedido de syscall: número + 6 argumentos, sempre completo.
///
/// Slots não usados DEVEM ser zero: o trap carrega todos os 7 registradores
/// independentemente de quantos a syscall realmente consome.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyscallRequest {
    pub num: isize,
    pub arg1: isize,
    pub arg2: isize,
    pub arg3: isize,
    pub arg4: isize,
    pub arg5: isize,
    pub arg6: isize,
}

// O assembly indexa o pedido como [isize; 7].
const _: () = assert!(size_of::<SyscallRequest>() == (MAX_ARGS + 1) * size_of::<isize>());
const _: () = assert!(offset_of!(SyscallRequest, arg6) == MAX_ARGS * size_of::<isize>());

impl SyscallRequest {
    /// Pedido vazio (todos os slots zerados)
    pub const fn empty() -> Self {
        Self {
            num: 0,
            arg1: 0,
            arg2: 0,
            arg3: 0,
            arg4: 0,
            arg5: 0,
            arg6: 0,
        }
    }

    /// Monta o pedido a partir do número e dos 6 slots de argumento.
    pub const fn from_slots(num: isize, args: [isize; MAX_ARGS]) -> Self {
        Self {
            num,
            arg1: args[0],
            arg2: args[1],
            arg3: args[2],
            arg4: args[3],
            arg5: args[4],
            arg6: args[5],
        }
    }

    /// Os 7 slots na ordem em que são carregados nos registradores.
    pub const fn slots(&self) -> [isize; MAX_ARGS + 1] {
        [
            self.num, self.arg1, self.arg2, self.arg3, self.arg4, self.arg5, self.arg6,
        ]
    }

    /// Executa o pedido e devolve RAX sem interpretação.
    ///
    /// # Safety
    /// A syscall executada pode fazer qualquer coisa que o processo possa fazer:
    /// escrever em ponteiros passados como argumento, mapear memória, encerrar o
    /// processo. O chamador garante que os argumentos são válidos para `num`.
    #[inline]
    pub unsafe fn invoke(&self) -> isize {
        // SAFETY: `self` é um SyscallRequest válido e vivo durante a chamada.
        unsafe { syscall_insn(self) }
    }
}

/// Trampolim naked: carrega os 7 slots de `*request` e executa `syscall`.
///
/// O endereço do pedido chega em RDI (System V). Ele é copiado para R11, que não
/// é registrador de argumento nem de retorno, antes que RDI seja sobrescrito
/// com arg1. R11 só é destruído pelo kernel DEPOIS das cargas.
///
/// RBX, RBP e R12-R15 (callee-saved) não são tocados, então não há nada a salvar.
/// O resultado já está em RAX, que é o registrador de retorno do System V.
///
/// # Safety
/// `request` deve apontar para um `SyscallRequest` legível. Ver
/// [`SyscallRequest::invoke`] para o contrato da syscall em si.
#[unsafe(naked)]
pub unsafe extern "C" fn syscall_insn(request: *const SyscallRequest) -> isize {
    core::arch::naked_asm!(
        "mov r11, rdi",
        "mov rax, [r11 + {num}]",
        "mov rdi, [r11 + {arg1}]",
        "mov rsi, [r11 + {arg2}]",
        "mov rdx, [r11 + {arg3}]",
        "mov r10, [r11 + {arg4}]",
        "mov r8,  [r11 + {arg5}]",
        "mov r9,  [r11 + {arg6}]",
        "syscall",
        "ret",
        num = const offset_of!(SyscallRequest, num),
        arg1 = const offset_of!(SyscallRequest, arg1),
        arg2 = const offset_of!(SyscallRequest, arg2),
        arg3 = const offset_of!(SyscallRequest, arg3),
        arg4 = const offset_of!(SyscallRequest, arg4),
        arg5 = const offset_of!(SyscallRequest, arg5),
        arg6 = const offset_of!(SyscallRequest, arg6),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYS_GETPID: isize = 39;

    #[test]
    fn test_request_layout_matches_slot_order() {
        assert_eq!(offset_of!(SyscallRequest, num), 0);
        assert_eq!(offset_of!(SyscallRequest, arg1), 8);
        assert_eq!(offset_of!(SyscallRequest, arg4), 32);
        assert_eq!(offset_of!(SyscallRequest, arg6), 48);

        let req = SyscallRequest::from_slots(1, [2, 3, 4, 5, 6, 7]);
        assert_eq!(req.slots(), [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(SyscallRequest::empty(), SyscallRequest::default());
    }

    #[test]
    fn test_trap_getpid() {
        let req = SyscallRequest::from_slots(SYS_GETPID, [0; MAX_ARGS]);
        let pid = unsafe { req.invoke() };
        assert_eq!(pid, std::process::id() as isize);
    }

    #[test]
    fn test_trap_returns_raw_negative_code() {
        // Número fora da tabela: o kernel devolve -ENOSYS cru.
        let req = SyscallRequest::from_slots(100_000, [0; MAX_ARGS]);
        assert_eq!(unsafe { syscall_insn(&req) }, -38);
    }
}
