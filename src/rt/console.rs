// =============================================================================
// CONSOLE DE LOG (STDERR) - ZERO OVERHEAD
// =============================================================================
//
// Saída dos macros de log. Escreve direto no fd 2 pelo invocador cru.
//
// ARQUITETURA:
// - SEM Mutex/Spinlock - cada chamada é um write(2) independente
// - SEM core::fmt - números são formatados em buffers na stack
// - SEM alocação
//
// FUNÇÕES DISPONÍVEIS:
// - emit(byte)       : Envia um byte
// - emit_str(s)      : Envia string
// - emit_bytes(b)    : Envia bytes crus (argv/envp)
// - emit_hex(v)      : Envia u64 em hexadecimal
// - emit_dec(v)      : Envia u64 em decimal
// - emit_nl()        : Envia newline
//
// NOTA IMPORTANTE:
// Erros de escrita são ignorados: não há para onde reportar uma falha do
// próprio canal de log. Com várias threads, linhas podem se intercalar.
//
// =============================================================================

use crate::syscall::io::{write_all, STDERR};

// =============================================================================
// FUNÇÕES DE ESCRITA - CORE
// =============================================================================

#[inline]
pub fn emit_bytes(bytes: &[u8]) {
    let _ = write_all(STDERR, bytes);
}

#[inline]
pub fn emit(byte: u8) {
    emit_bytes(&[byte]);
}

#[inline]
pub fn emit_str(s: &str) {
    emit_bytes(s.as_bytes());
}

#[inline]
pub fn emit_nl() {
    emit(b'\n');
}

// =============================================================================
// FUNÇÕES DE ESCRITA - FORMATAÇÃO NUMÉRICA
// =============================================================================

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Formato de saída: 0x0123456789ABCDEF (sempre 18 caracteres)
pub fn format_hex(value: u64) -> [u8; 18] {
    let mut buf = [0u8; 18];
    buf[0] = b'0';
    buf[1] = b'x';
    for i in 0..16 {
        let nibble = (value >> (60 - i * 4)) & 0xF;
        buf[2 + i] = HEX_DIGITS[nibble as usize];
    }
    buf
}

pub fn emit_hex(value: u64) {
    emit_bytes(&format_hex(value));
}

/// Escreve `value` em decimal no fim de `buf`; retorna o índice inicial.
pub fn format_dec(mut value: u64, buf: &mut [u8; 20]) -> usize {
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            return i;
        }
    }
}

pub fn emit_dec(value: u64) {
    let mut buf = [0u8; 20];
    emit_bytes(Dec(value).digits(&mut buf));
}

/// Inteiro emitido em decimal pelos macros de log (o padrão é hexadecimal).
///
/// ```ignore
/// kerror!("Linha: ", Dec(location.line() as u64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dec(pub u64);

impl Dec {
    /// Dígitos decimais de `self`, escritos no fim de `buf`.
    pub fn digits(self, buf: &mut [u8; 20]) -> &[u8] {
        let start = format_dec(self.0, buf);
        &buf[start..]
    }
}

// =============================================================================
// VALORES DE LOG
// =============================================================================

/// Valor aceito como segundo argumento dos macros de log.
///
/// Strings são emitidas como texto; inteiros e ponteiros em hexadecimal,
/// [`Dec`] em decimal.
pub trait LogValue {
    fn emit(self);
}

impl LogValue for &str {
    fn emit(self) {
        emit_str(self);
    }
}

impl LogValue for &[u8] {
    fn emit(self) {
        emit_bytes(self);
    }
}

macro_rules! impl_log_value_hex {
    ($($t:ty),* $(,)?) => {
        $(
            impl LogValue for $t {
                fn emit(self) {
                    emit_hex(self as u64);
                }
            }
        )*
    };
}

impl_log_value_hex!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl LogValue for Dec {
    fn emit(self) {
        emit_dec(self.0);
    }
}

impl<T> LogValue for *const T {
    fn emit(self) {
        emit_hex(self as usize as u64);
    }
}

impl<T> LogValue for *mut T {
    fn emit(self) {
        emit_hex(self as usize as u64);
    }
}
