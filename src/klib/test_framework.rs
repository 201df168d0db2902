//! Framework de self-tests embutido no binário

/// Resultado de teste
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TestResult {
    Passed,
    Failed,
    Skipped,
}

/// Um caso de teste
pub struct TestCase {
    pub name: &'static str,
    pub func: fn() -> TestResult,
}

/// Placar de uma suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Tally {
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Executa suite de testes
pub fn run_test_suite(name: &str, tests: &[TestCase]) -> Tally {
    crate::kinfo!("=== Executando suite: ", name);

    let mut tally = Tally::default();

    for test in tests {
        match (test.func)() {
            TestResult::Passed => {
                crate::kok!(test.name);
                tally.passed += 1;
            }
            TestResult::Failed => {
                crate::kfail!(test.name);
                tally.failed += 1;
            }
            TestResult::Skipped => {
                crate::kwarn!("[SKIP] ", test.name);
                tally.skipped += 1;
            }
        }
    }

    crate::kinfo!("Resultados: passed=", tally.passed);
    if tally.failed > 0 {
        crate::kerror!("Resultados: failed=", tally.failed);
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass() -> TestResult {
        TestResult::Passed
    }

    fn fail() -> TestResult {
        TestResult::Failed
    }

    fn skip() -> TestResult {
        TestResult::Skipped
    }

    #[test]
    fn test_tally() {
        let suite = [
            TestCase { name: "pass", func: pass },
            TestCase { name: "fail", func: fail },
            TestCase { name: "skip", func: skip },
            TestCase { name: "pass again", func: pass },
        ];
        let tally = run_test_suite("framework", &suite);
        assert_eq!(
            tally,
            Tally {
                passed: 2,
                failed: 1,
                skipped: 1
            }
        );
        assert!(!tally.all_passed());
        assert!(run_test_suite("vazia", &[]).all_passed());
    }
}
