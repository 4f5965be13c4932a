// ═══════════════════════════════════════════════════════════════════
// Shell Tests — interactive commands driven through stdin
// ═══════════════════════════════════════════════════════════════════

use assert_cmd::Command;
use predicates::prelude::*;

fn shell(script: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("modtrader")
        .unwrap()
        .arg("shell")
        .write_stdin(script.to_string())
        .assert()
}

// ── Adding ──────────────────────────────────────────────────────────

mod adding {
    use super::*;

    #[test]
    fn totals_use_display_formatting() {
        shell("16 50\n13 50\ntotals\nquit\n")
            .success()
            .stdout(predicate::str::contains("Total cost:     1.450,000000"))
            .stdout(predicate::str::contains("Total quantity: 100,000000"))
            .stdout(predicate::str::contains("Average price:  14,500000"));
    }

    #[test]
    fn add_keyword_echoes_entry() {
        shell("add 1.234,5 2\nquit\n")
            .success()
            .stdout(predicate::str::contains("#1  1.234,500000 x 2,000000 = 2.469,000000"));
    }

    #[test]
    fn bad_input_is_reported_and_session_continues() {
        shell("abc 5\n100 0\n10 5\ntotals\n")
            .success()
            .stdout(predicate::str::contains("Error: Invalid number 'abc'"))
            .stdout(predicate::str::contains("Error: Quantity must not be zero"))
            .stdout(predicate::str::contains("Average price:  10,000000"));
    }

    #[test]
    fn precision_flag() {
        Command::cargo_bin("modtrader")
            .unwrap()
            .args(["shell", "--precision", "2"])
            .write_stdin("16 50\n13 50\ntotals\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Average price:  14,50"));
    }
}

// ── Editing ─────────────────────────────────────────────────────────

mod editing {
    use super::*;

    #[test]
    fn undo_removes_last() {
        shell("16 50\n13 50\nundo\ntotals\n")
            .success()
            .stdout(predicate::str::contains("Removed 13,000000 x 50,000000"))
            .stdout(predicate::str::contains("Average price:  16,000000"));
    }

    #[test]
    fn keyword_with_argument_is_rejected_not_added() {
        shell("10 5\nundo 5\ntotals\n")
            .success()
            .stdout(predicate::str::contains("'undo' takes no arguments"))
            .stdout(predicate::str::contains("Invalid number").not())
            .stdout(predicate::str::contains("Average price:  10,000000"));
    }

    #[test]
    fn undo_on_empty_session() {
        shell("undo\n")
            .success()
            .stdout(predicate::str::contains("Nothing to undo."));
    }

    #[test]
    fn delete_renumbers_list() {
        shell("10 5\n20 5\ndelete 1\nlist\ntotals\n")
            .success()
            .stdout(predicate::str::contains("Deleted 1 entries."))
            .stdout(predicate::str::is_match(r"(?m)^\s+1\s+20,000000\s+5,000000\s+100,000000$").unwrap())
            .stdout(predicate::str::contains("Average price:  20,000000"));
    }

    #[test]
    fn delete_skips_non_numeric_and_out_of_range() {
        shell("10 5\ndelete x 9\nlist\n")
            .success()
            .stdout(predicate::str::contains("Skipping 'x': not an entry number"))
            .stdout(predicate::str::contains("No matching entries."))
            .stdout(predicate::str::contains("10,000000"));
    }

    #[test]
    fn reset_requires_confirmation() {
        shell("10 5\nreset\nn\nlist\n")
            .success()
            .stdout(predicate::str::contains("Reset cancelled."))
            .stdout(predicate::str::contains("No entries.").not());
    }

    #[test]
    fn reset_confirmed_clears_everything() {
        shell("10 5\n20 5\nreset\ny\nlist\ntotals\n")
            .success()
            .stdout(predicate::str::contains("All entries removed."))
            .stdout(predicate::str::contains("No entries."))
            .stdout(predicate::str::contains("Total cost:     0,000000"));
    }
}

// ── Export & exit ───────────────────────────────────────────────────

mod export_and_exit {
    use super::*;

    #[test]
    fn export_then_quit_is_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avg_calc.csv");
        let script = format!("16 50\nexport {}\nquit\n", path.display());

        shell(&script)
            .success()
            .stdout(predicate::str::contains("Saved CSV:"))
            .stdout(predicate::str::contains("were not saved").not());

        let csv = std::fs::read_to_string(&path).unwrap();
        assert!(csv.contains("1,16,50,800"));
    }

    #[test]
    fn export_failure_keeps_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("avg_calc.csv");
        let script = format!("16 50\nexport {}\ntotals\n", path.display());

        shell(&script)
            .success()
            .stdout(predicate::str::contains("Export failed: File I/O error"))
            .stdout(predicate::str::contains("Total cost:     800,000000"));
    }

    #[test]
    fn export_of_empty_session_is_refused() {
        shell("export out.csv\n")
            .success()
            .stdout(predicate::str::contains("Export failed: No entries to export"));
    }

    #[test]
    fn unexported_changes_warned_on_eof() {
        shell("16 50\n")
            .success()
            .stdout(predicate::str::contains("changes since the last export were not saved"));
    }

    #[test]
    fn help_and_unknown_commands() {
        shell("help\nfrobnicate\n")
            .success()
            .stdout(predicate::str::contains("export <path>"))
            .stdout(predicate::str::contains("unknown command 'frobnicate'"));
    }
}
