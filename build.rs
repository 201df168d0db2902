//! Build script.
//!
//! O binário define seu próprio `_start` e não usa libc:
//! - `-nostdlib`: nem crt1.o/crti.o nem libc/libgcc. memcpy e afins vêm de
//!   `builtins.rs`, o resto de compiler_builtins.
//! - `-static -no-pie`: sem interpretador dinâmico. Como ninguém aplicaria
//!   relocações em runtime, o endereço de carga é fixado no link.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    if arch == "x86_64" && os == "linux" {
        println!("cargo:rustc-link-arg-bins=-nostdlib");
        println!("cargo:rustc-link-arg-bins=-static");
        println!("cargo:rustc-link-arg-bins=-no-pie");
    }
}
