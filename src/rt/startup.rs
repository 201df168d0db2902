//! Stack Inicial do Processo.
//!
//! Layout deixado pelo kernel em RSP na entrada de `_start` (System V x86_64):
//!
//! ```text
//! rsp + 0          argc
//! rsp + 8          argv[0] .. argv[argc - 1]
//!                  NULL
//!                  envp[0] .. envp[n - 1]
//!                  NULL
//!                  auxv (par chave/valor) .. AT_NULL
//! ```

use core::marker::PhantomData;

use crate::klib::string::{cstr_bytes, split_env};

/// Visão de argc/argv/envp.
#[derive(Debug, Clone, Copy)]
pub struct StartupInfo<'a> {
    argc: usize,
    argv: *const *const u8,
    envp: *const *const u8,
    _stack: PhantomData<&'a [u8]>,
}

impl<'a> StartupInfo<'a> {
    /// Decodifica a stack inicial.
    ///
    /// # Safety
    /// `sp` deve apontar para uma stack no formato acima (o RSP original de
    /// `_start`), válida por `'a`.
    pub unsafe fn from_stack(sp: *const usize) -> Self {
        // SAFETY: repassado ao chamador.
        unsafe {
            let argc = *sp;
            let argv = sp.add(1) as *const *const u8;
            let envp = argv.add(argc + 1);
            Self {
                argc,
                argv,
                envp,
                _stack: PhantomData,
            }
        }
    }

    pub fn argc(&self) -> usize {
        self.argc
    }

    /// Argumento `index`, sem o terminador nulo.
    pub fn arg(&self, index: usize) -> Option<&'a [u8]> {
        self.args().nth(index)
    }

    pub fn args(&self) -> CStrArray<'a> {
        CStrArray {
            cursor: self.argv,
            remaining: self.argc,
            _stack: PhantomData,
        }
    }

    /// Entradas `KEY=VALUE` do ambiente.
    pub fn env(&self) -> CStrArray<'a> {
        CStrArray {
            cursor: self.envp,
            remaining: usize::MAX,
            _stack: PhantomData,
        }
    }

    /// Valor da variável `name`.
    pub fn var(&self, name: &[u8]) -> Option<&'a [u8]> {
        self.env()
            .filter_map(split_env)
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

/// Iterador sobre um vetor de strings C terminado em NULL.
pub struct CStrArray<'a> {
    cursor: *const *const u8,
    remaining: usize,
    _stack: PhantomData<&'a [u8]>,
}

impl<'a> Iterator for CStrArray<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // SAFETY: o cursor nunca passa do NULL terminador (garantia de from_stack).
        let entry = unsafe { *self.cursor };
        if entry.is_null() {
            self.remaining = 0;
            return None;
        }

        self.remaining -= 1;
        // SAFETY: idem; entry é uma string C válida por 'a.
        unsafe {
            self.cursor = self.cursor.add(1);
            Some(cstr_bytes(entry))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Monta uma stack inicial falsa: [argc, argv.., NULL, envp.., NULL, AT_NULL].
    fn fake_stack(args: &[&[u8]], env: &[&[u8]]) -> std::vec::Vec<usize> {
        let mut stack = std::vec![args.len()];
        stack.extend(args.iter().map(|s| s.as_ptr() as usize));
        stack.push(0);
        stack.extend(env.iter().map(|s| s.as_ptr() as usize));
        stack.push(0);
        stack.extend([0, 0]);
        stack
    }

    #[test]
    fn test_decode_args_and_env() {
        let args: [&[u8]; 2] = [b"./hello\0", b"--fast\0"];
        let env: [&[u8]; 2] = [b"RAWSYS_LOG=trace\0", b"HOME=/root\0"];
        let stack = fake_stack(&args, &env);

        let info = unsafe { StartupInfo::from_stack(stack.as_ptr()) };
        assert_eq!(info.argc(), 2);
        assert_eq!(info.arg(0), Some(&b"./hello"[..]));
        assert_eq!(info.arg(1), Some(&b"--fast"[..]));
        assert_eq!(info.arg(2), None);
        assert_eq!(info.env().count(), 2);
        assert_eq!(info.var(b"HOME"), Some(&b"/root"[..]));
        assert_eq!(info.var(b"PATH"), None);
    }

    #[test]
    fn test_empty_vectors() {
        let stack = fake_stack(&[], &[]);
        let info = unsafe { StartupInfo::from_stack(stack.as_ptr()) };
        assert_eq!(info.argc(), 0);
        assert_eq!(info.args().next(), None);
        assert_eq!(info.env().next(), None);
    }
}
