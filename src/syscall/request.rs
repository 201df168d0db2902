//! # Syscall Arguments
//!
//! Conversão dos argumentos do chamador para os 7 slots do `SyscallRequest`.
//!
//! O limite de 6 argumentos é verificado em tempo de compilação (só existem
//! impls de `SyscallArgs` para tuplas de aridade 0..=6) ou em tempo de execução
//! (`SyscallRequest::from_slice`). Nunca há truncamento silencioso.

use crate::arch::x86_64::trap::{SyscallRequest, MAX_ARGS};

/// Valor convertível para uma palavra de máquina (slot de registrador).
///
/// Tipos com sinal estendem o sinal (fd `-1` vira a palavra `-1`),
/// tipos sem sinal estendem com zero.
pub trait IntoWord {
    fn into_word(self) -> isize;
}

macro_rules! impl_into_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoWord for $t {
                #[inline(always)]
                fn into_word(self) -> isize {
                    self as isize
                }
            }
        )*
    };
}

impl_into_word!(isize, usize, i8, i16, i32, i64, u8, u16, u32, u64);

impl IntoWord for bool {
    #[inline(always)]
    fn into_word(self) -> isize {
        self as isize
    }
}

impl<T> IntoWord for *const T {
    #[inline(always)]
    fn into_word(self) -> isize {
        self as isize
    }
}

impl<T> IntoWord for *mut T {
    #[inline(always)]
    fn into_word(self) -> isize {
        self as isize
    }
}

/// Lista de argumentos de syscall com no máximo 6 elementos.
///
/// Implementado para `()` e tuplas de 1 a 6 elementos. Slots não usados são
/// preenchidos com zero.
pub trait SyscallArgs {
    /// Quantidade de argumentos significativos.
    const COUNT: usize;

    fn into_slots(self) -> [isize; MAX_ARGS];
}

impl SyscallArgs for () {
    const COUNT: usize = 0;

    #[inline(always)]
    fn into_slots(self) -> [isize; MAX_ARGS] {
        [0; MAX_ARGS]
    }
}

macro_rules! impl_syscall_args {
    ($count:expr; $($name:ident : $idx:tt),+) => {
        impl<$($name: IntoWord),+> SyscallArgs for ($($name,)+) {
            const COUNT: usize = $count;

            #[inline(always)]
            fn into_slots(self) -> [isize; MAX_ARGS] {
                let mut slots = [0; MAX_ARGS];
                $( slots[$idx] = self.$idx.into_word(); )+
                slots
            }
        }
    };
}

impl_syscall_args!(1; A: 0);
impl_syscall_args!(2; A: 0, B: 1);
impl_syscall_args!(3; A: 0, B: 1, C: 2);
impl_syscall_args!(4; A: 0, B: 1, C: 2, D: 3);
impl_syscall_args!(5; A: 0, B: 1, C: 2, D: 3, E: 4);
impl_syscall_args!(6; A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);

/// Erro de aridade no caminho dinâmico (`from_slice`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArityError {
    /// Mais de 6 argumentos foram fornecidos.
    TooManyArguments { given: usize },
}

impl core::fmt::Display for ArityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooManyArguments { given } => write!(
                f,
                "syscall aceita no máximo {} argumentos, recebeu {}",
                MAX_ARGS, given
            ),
        }
    }
}

impl SyscallRequest {
    /// Monta o pedido a partir de uma tupla tipada (limite verificado pelo tipo).
    #[inline(always)]
    pub fn new<A: SyscallArgs>(nr: usize, args: A) -> Self {
        Self::from_slots(nr as isize, args.into_slots())
    }

    /// Monta o pedido a partir de uma lista dinâmica.
    ///
    /// Rejeita mais de 6 argumentos em vez de truncar.
    pub fn from_slice(nr: usize, args: &[isize]) -> Result<Self, ArityError> {
        if args.len() > MAX_ARGS {
            return Err(ArityError::TooManyArguments { given: args.len() });
        }

        let mut slots = [0; MAX_ARGS];
        slots[..args.len()].copy_from_slice(args);
        Ok(Self::from_slots(nr as isize, slots))
    }

    /// Número da syscall.
    pub const fn number(&self) -> usize {
        self.num as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unused_slots_are_zero() {
        let req = SyscallRequest::new(60, (0i32,));
        assert_eq!(req.slots(), [60, 0, 0, 0, 0, 0, 0]);

        let req = SyscallRequest::new(39, ());
        assert_eq!(req, SyscallRequest::from_slots(39, [0; MAX_ARGS]));
    }

    #[test]
    fn test_two_slots_keep_order() {
        let req = SyscallRequest::new(33, (5i32, 77u32));
        assert_eq!(req.arg1, 5);
        assert_eq!(req.arg2, 77);
        assert_eq!([req.arg3, req.arg4, req.arg5, req.arg6], [0; 4]);
        assert_eq!(req.number(), 33);
    }

    #[test]
    fn test_word_conversion() {
        assert_eq!((-1i32).into_word(), -1);
        assert_eq!(u32::MAX.into_word(), 0xFFFF_FFFF);
        assert_eq!(true.into_word(), 1);
        assert_eq!(core::ptr::null::<u8>().into_word(), 0);

        let buf = [0u8; 4];
        assert_eq!(buf.as_ptr().into_word(), buf.as_ptr() as isize);
    }

    #[test]
    fn test_six_arguments_fill_every_slot() {
        let req = SyscallRequest::new(9, (1u8, 2u16, 3u32, 4u64, 5i64, 6isize));
        assert_eq!(req.slots(), [9, 1, 2, 3, 4, 5, 6]);
        assert_eq!(<(u8, u8, u8, u8, u8, u8) as SyscallArgs>::COUNT, 6);
    }

    #[test]
    fn test_from_slice_rejects_seventh_argument() {
        let err = SyscallRequest::from_slice(1, &[1, 2, 3, 4, 5, 6, 7]).unwrap_err();
        assert_eq!(err, ArityError::TooManyArguments { given: 7 });

        let ok = SyscallRequest::from_slice(1, &[1, 2]).unwrap();
        assert_eq!(ok.slots(), [1, 1, 2, 0, 0, 0, 0]);

        let full = SyscallRequest::from_slice(1, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(full.arg6, 6);
    }

    #[test]
    fn test_arity_error_message() {
        let msg = std::format!("{}", ArityError::TooManyArguments { given: 9 });
        assert!(msg.contains("9"));
    }
}
