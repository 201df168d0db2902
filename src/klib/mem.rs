//! # Operações de Memória
//!
//! Cópia, preenchimento e comparação de bytes sem libc.
//!
//! O binário exporta estas rotinas como `memcpy`/`memset`/`memmove`/`memcmp`
//! (ver `builtins.rs` do `hello`), que o código gerado pelo rustc chama
//! implicitamente. Por isso nenhuma delas pode ser escrita como um laço
//! simples de cópia: o LLVM reconheceria o padrão e emitiria uma chamada
//! ao próprio `memcpy`. Cópias e preenchimentos usam `rep movsb`/`rep stosb`;
//! a comparação usa leituras volatile.

use core::arch::asm;

/// Copia `len` bytes de `src` para `dst`.
///
/// # Safety
/// - `src` legível e `dst` gravável por `len` bytes
/// - Regiões não devem se sobrepor (use [`move_bytes`] para overlap)
#[inline]
pub unsafe fn copy(dst: *mut u8, src: *const u8, len: usize) {
    // SAFETY: repassado ao chamador. DF está limpo pela ABI.
    unsafe {
        asm!(
            "rep movsb",
            inout("rcx") len => _,
            inout("rdi") dst => _,
            inout("rsi") src => _,
            options(nostack, preserves_flags)
        );
    }
}

/// Preenche `len` bytes a partir de `dst` com `val`.
///
/// # Safety
/// `dst` gravável por `len` bytes.
#[inline]
pub unsafe fn fill(dst: *mut u8, val: u8, len: usize) {
    // SAFETY: repassado ao chamador.
    unsafe {
        asm!(
            "rep stosb",
            inout("rcx") len => _,
            inout("rdi") dst => _,
            in("al") val,
            options(nostack, preserves_flags)
        );
    }
}

/// Copia `len` bytes permitindo sobreposição entre origem e destino.
///
/// # Safety
/// `src` legível e `dst` gravável por `len` bytes.
#[inline]
pub unsafe fn move_bytes(dst: *mut u8, src: *const u8, len: usize) {
    if len == 0 {
        return;
    }

    if (dst as usize) <= (src as usize) || (dst as usize) >= (src as usize) + len {
        // SAFETY: cópia para frente nunca lê um byte já sobrescrito.
        unsafe { copy(dst, src, len) };
        return;
    }

    // Cópia reversa para overlap: DF=1, começa no último byte, DF volta a 0.
    // SAFETY: repassado ao chamador; os ponteiros finais estão dentro das regiões.
    unsafe {
        asm!(
            "std",
            "rep movsb",
            "cld",
            inout("rcx") len => _,
            inout("rdi") dst.add(len - 1) => _,
            inout("rsi") src.add(len - 1) => _,
            options(nostack)
        );
    }
}

/// Compara `len` bytes. Retorna a diferença do primeiro byte distinto (0 se iguais).
///
/// # Safety
/// `a` e `b` legíveis por `len` bytes.
#[inline]
pub unsafe fn compare(a: *const u8, b: *const u8, len: usize) -> i32 {
    for i in 0..len {
        // SAFETY: i < len.
        let (x, y) = unsafe { (a.add(i).read_volatile(), b.add(i).read_volatile()) };
        if x != y {
            return x as i32 - y as i32;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_and_fill() {
        let src = *b"Hello World!";
        let mut dst = [0u8; 12];
        unsafe { copy(dst.as_mut_ptr(), src.as_ptr(), src.len()) };
        assert_eq!(&dst, b"Hello World!");

        unsafe { fill(dst.as_mut_ptr().add(5), b'-', 7) };
        assert_eq!(&dst, b"Hello-------");

        unsafe { copy(dst.as_mut_ptr(), src.as_ptr(), 0) };
        assert_eq!(&dst, b"Hello-------");
    }

    #[test]
    fn test_move_overlapping() {
        let mut buf = *b"abcdef____";
        let p = buf.as_mut_ptr();
        // Destino depois da origem: precisa da cópia reversa.
        unsafe { move_bytes(p.add(2), p, 6) };
        assert_eq!(&buf, b"ababcdef__");

        // Destino antes da origem.
        unsafe { move_bytes(p, p.add(2), 6) };
        assert_eq!(&buf, b"abcdefef__");
    }

    #[test]
    fn test_compare() {
        let a = b"abcd";
        let b = b"abce";
        unsafe {
            assert_eq!(compare(a.as_ptr(), a.as_ptr(), 4), 0);
            assert_eq!(compare(a.as_ptr(), b.as_ptr(), 3), 0);
            assert!(compare(a.as_ptr(), b.as_ptr(), 4) < 0);
            assert!(compare(b.as_ptr(), a.as_ptr(), 4) > 0);
        }
    }
}
