//! Executa o binário `hello` como processo real.

use std::os::unix::process::CommandExt;
use std::process::{Command, Output};

use rawsys::syscall::io::{self, STDOUT};

fn hello() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hello"));
    cmd.env_remove("RAWSYS_LOG").env("NO_COLOR", "1");
    cmd
}

fn run(mut cmd: Command) -> Output {
    cmd.output().expect("falha ao executar hello")
}

#[test]
fn test_hello_writes_exactly_twelve_bytes_to_stdout() {
    let out = run(hello());
    assert_eq!(out.stdout, b"Hello World!");
    assert_eq!(out.stdout.len(), 12);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_hello_ignores_arguments() {
    let mut cmd = hello();
    cmd.args(["um", "dois"]).env("RAWSYS_LOG", "trace");
    let out = run(cmd);
    assert_eq!(out.stdout, b"Hello World!");
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_hello_exits_one_when_stdout_is_closed() {
    let mut cmd = hello();
    // SAFETY: close(2) é async-signal-safe; nada mais roda entre fork e exec.
    unsafe {
        cmd.pre_exec(|| {
            let _ = io::close(STDOUT);
            Ok(())
        });
    }
    let out = run(cmd);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    #[cfg(not(feature = "no_logs"))]
    assert!(stderr.contains("write falhou: EBADF"), "stderr: {stderr}");
}
