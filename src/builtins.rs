//! # Compiler Builtins
//!
//! Sem libc, o binário precisa fornecer memcpy, memset, etc., que o compilador
//! pode chamar automaticamente. Marcadas com #[no_mangle] para o linker.

use rawsys::klib::mem;

#[no_mangle]
pub unsafe extern "C" fn memcpy(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    // SAFETY: contrato de memcpy(3), garantido pelo código gerado.
    unsafe { mem::copy(dest, src, n) };
    dest
}

#[no_mangle]
pub unsafe extern "C" fn memset(s: *mut u8, c: i32, n: usize) -> *mut u8 {
    // SAFETY: contrato de memset(3).
    unsafe { mem::fill(s, c as u8, n) };
    s
}

#[no_mangle]
pub unsafe extern "C" fn memmove(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    // SAFETY: contrato de memmove(3).
    unsafe { mem::move_bytes(dest, src, n) };
    dest
}

#[no_mangle]
pub unsafe extern "C" fn memcmp(s1: *const u8, s2: *const u8, n: usize) -> i32 {
    // SAFETY: contrato de memcmp(3).
    unsafe { mem::compare(s1, s2, n) }
}

/// Igualdade de slices vira `bcmp` no LLVM.
#[no_mangle]
pub unsafe extern "C" fn bcmp(s1: *const u8, s2: *const u8, n: usize) -> i32 {
    // SAFETY: contrato de bcmp(3).
    unsafe { mem::compare(s1, s2, n) }
}

/// A libcore pré-compilada referencia a personality de unwind; com
/// `panic = "abort"` ela nunca é chamada, só precisa existir para o linker.
#[no_mangle]
pub extern "C" fn rust_eh_personality() {}
