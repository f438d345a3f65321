//! Runs every comparison of a plan and prints the closing note.

use std::io::Write;

use anyhow::{Context, Result};
use td_compare::{CompareOptions, ComparisonPlan, SessionSummary, compare_request};
use tracing::debug;

const TITLE: &str = "=== Сравнение результатов двух версий программы ===";

// Thread ids, scheduling order and the synchronization primitive are expected
// to differ between the builds; fighters, winners and rounds are not.
const CLOSING_NOTE: &str = "
=== Итог ===
Ожидаемые небольшие различия из-за:
1. Разных ID потоков
2. Разного порядка выполнения потоков
3. Разных синхропримитивов

Основная логика (бойцы, победители, раунды) должна совпадать!";

pub fn run(
    plan: &ComparisonPlan,
    options: &CompareOptions,
    out: &mut impl Write,
) -> Result<SessionSummary> {
    writeln!(out, "{}", TITLE)?;
    debug!(base_dir = %plan.base_dir.display(), counts = ?plan.counts, "starting comparisons");

    let mut summary = SessionSummary::new();
    for request in plan.requests() {
        let report = compare_request(&request, options, out)
            .with_context(|| format!("comparison '{}' failed", request.description))?;
        summary.add(&report);
    }

    writeln!(out, "{}", CLOSING_NOTE)?;
    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn put(base: &Path, dir: &str, name: &str, content: &str) {
        let build = base.join(dir).join("build");
        fs::create_dir_all(&build).unwrap();
        fs::write(build.join(name), content).unwrap();
    }

    fn run_to_string(plan: &ComparisonPlan) -> (SessionSummary, String) {
        let mut out = Vec::new();
        let summary = run(plan, &CompareOptions::default(), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_run_layout() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();
        put(base, "version_4_8", "results_mutex_8.txt", "Поток 1\nПобедитель: 3\n");
        put(base, "version_9_10", "results_atomic_8.txt", "Поток 2\nПобедитель: 3\n");
        put(base, "version_4_8", "results_mutex_16.txt", "a\nb\nc\n");
        put(base, "version_9_10", "results_atomic_16.txt", "a\nb\nc\nd\n");

        let (summary, text) = run_to_string(&ComparisonPlan::standard(base));

        let expected = "=== Сравнение результатов двух версий программы ===\n\
            \n\
            Сравнение для 8 бойцов:\n  Файлы идентичны (игнорируя ID потоков)\n\
            \n\
            Сравнение для 16 бойцов:\n  Разное количество строк: 3 vs 4\n\
            \n\
            === Итог ===\n\
            Ожидаемые небольшие различия из-за:\n\
            1. Разных ID потоков\n\
            2. Разного порядка выполнения потоков\n\
            3. Разных синхропримитивов\n\
            \n\
            Основная логика (бойцы, победители, раунды) должна совпадать!\n";
        assert_eq!(text, expected);
        assert_eq!(summary.equivalent_count, 1);
        assert!(!summary.passed());
    }

    #[test]
    fn test_missing_files_do_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let (summary, text) = run_to_string(&ComparisonPlan::standard(dir.path()));

        assert!(text.contains("results_mutex_8.txt не найден"));
        assert!(text.contains("results_mutex_16.txt не найден"));
        assert!(text.contains("=== Итог ==="));
        assert_eq!(summary.mismatch_count, 2);
    }

    #[test]
    fn test_read_error_aborts_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();
        // a directory where a file is expected exists but cannot be read
        fs::create_dir_all(base.join("version_4_8/build/results_mutex_8.txt")).unwrap();
        put(base, "version_9_10", "results_atomic_8.txt", "x\n");

        let err = run(
            &ComparisonPlan::standard(base),
            &CompareOptions::default(),
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Сравнение для 8 бойцов"));
    }
}
