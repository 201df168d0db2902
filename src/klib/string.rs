//! Arquivo: klib/string.rs
//!
//! Propósito: Manipulação de strings de baixo nível (estilo C).
//! Útil para lidar com argv/envp recebidos do kernel e com mensagens terminadas em nulo.
//!
//! Detalhes de Implementação:
//! - Operações byte-a-byte.

/// Calcula tamanho de string terminada em nulo
///
/// # Safety
/// `s` deve apontar para uma sequência de bytes legível terminada em `0`.
pub unsafe fn strlen(s: *const u8) -> usize {
    let mut len = 0;
    // SAFETY: repassado ao chamador; paramos no primeiro 0.
    unsafe {
        while *s.add(len) != 0 {
            len += 1;
        }
    }
    len
}

/// Fatia os bytes de uma string terminada em nulo (sem o terminador).
///
/// # Safety
/// Mesmas condições de [`strlen`]; a memória deve viver por `'a`.
pub unsafe fn cstr_bytes<'a>(s: *const u8) -> &'a [u8] {
    // SAFETY: repassado ao chamador.
    unsafe { core::slice::from_raw_parts(s, strlen(s)) }
}

/// Divide `KEY=VALUE` no primeiro `=`.
pub fn split_env(entry: &[u8]) -> Option<(&[u8], &[u8])> {
    let eq = entry.iter().position(|&b| b == b'=')?;
    Some((&entry[..eq], &entry[eq + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strlen() {
        assert_eq!(unsafe { strlen(b"Hello World!\0".as_ptr()) }, 12);
        assert_eq!(unsafe { strlen(b"\0".as_ptr()) }, 0);
        assert_eq!(unsafe { cstr_bytes(b"abc\0def\0".as_ptr()) }, b"abc");
    }

    #[test]
    fn test_split_env() {
        assert_eq!(split_env(b"RAWSYS_LOG=trace"), Some((&b"RAWSYS_LOG"[..], &b"trace"[..])));
        assert_eq!(split_env(b"A=b=c"), Some((&b"A"[..], &b"b=c"[..])));
        assert_eq!(split_env(b"EMPTY="), Some((&b"EMPTY"[..], &b""[..])));
        assert_eq!(split_env(b"NOEQ"), None);
    }
}
