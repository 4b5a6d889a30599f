use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::{archive::*, assertions};

#[cfg(test)]
mod shell_command_tests {
    use super::*;

    fn tar_shell(archive: &TestArchive) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("tar-shell")?;
        cmd.arg("alice")
            .arg("box")
            .arg(archive.path())
            .arg("--no-color")
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        Ok(cmd)
    }

    #[test]
    fn test_interactive_session() -> anyhow::Result<()> {
        let archive = create_docs_archive()?;

        tar_shell(&archive)?
            .write_stdin("ls\ncd docs\nls\nexit\n")
            .assert()
            .success()
            .stdout(assertions::has_prompt("alice", "box", "~"))
            .stdout(assertions::has_prompt("alice", "box", "~/docs"))
            .stdout(predicate::str::contains("docs backup\n"))
            .stdout(predicate::str::contains("readme.txt sub\n"));

        Ok(())
    }

    #[test]
    fn test_exact_transcript() -> anyhow::Result<()> {
        let archive = create_archive(&["docs/", "docs/readme.txt"])?;

        tar_shell(&archive)?
            .write_stdin("tree\nexit\n")
            .assert()
            .success()
            .stdout("alice@box:~$ ~\n|--docs\n|--|--readme.txt\nalice@box:~$ ");

        Ok(())
    }

    #[test]
    fn test_command_errors_keep_session_alive() -> anyhow::Result<()> {
        let archive = create_docs_archive()?;

        tar_shell(&archive)?
            .write_stdin("cd nowhere\nmkdir x\ncp docs\nls\n")
            .assert()
            .success()
            .stdout(assertions::no_such_directory("nowhere"))
            .stdout(predicate::str::contains("Command \"mkdir\" is not found"))
            .stdout(predicate::str::contains("Command 'cp' must have two arguments."))
            .stdout(predicate::str::contains("docs backup\n"));

        Ok(())
    }

    #[test]
    fn test_copy_is_visible_in_later_commands() -> anyhow::Result<()> {
        let archive = create_docs_archive()?;

        tar_shell(&archive)?
            .write_stdin("cp docs backup\ntree backup\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "backup\n|--docs\n|--|--readme.txt\n|--|--sub\n|--|--|--deep.txt\n",
            ));

        Ok(())
    }

    #[test]
    fn test_startup_script_runs_first() -> anyhow::Result<()> {
        let archive = create_docs_archive()?;
        let script = create_file_with("cd docs\nls\n")?;

        tar_shell(&archive)?
            .arg(script.path())
            .write_stdin("exit\n")
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "alice@box:~$ cd docs\nalice@box:~/docs$ ls\nreadme.txt sub\nalice@box:~/docs$ ",
            ));

        Ok(())
    }

    #[test]
    fn test_exit_in_script_skips_interactive_input() -> anyhow::Result<()> {
        let archive = create_docs_archive()?;
        let script = create_file_with("exit\n")?;

        tar_shell(&archive)?
            .arg(script.path())
            .write_stdin("ls\n")
            .assert()
            .success()
            .stdout("alice@box:~$ exit\n");

        Ok(())
    }

    #[test]
    fn test_config_file_changes_tree_marker() -> anyhow::Result<()> {
        let archive = create_archive(&["docs/", "docs/readme.txt"])?;
        let config = create_file_with(r#"{ "tree_marker": "  " }"#)?;

        tar_shell(&archive)?
            .arg("--config")
            .arg(config.path())
            .write_stdin("tree\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("~\n  docs\n    readme.txt\n"));

        Ok(())
    }

    #[test]
    fn test_invalid_archive_fails() -> anyhow::Result<()> {
        let not_tar = create_file_with("plain text, not an archive")?;

        Command::cargo_bin("tar-shell")?
            .arg("alice")
            .arg("box")
            .arg(not_tar.path())
            .arg("--no-color")
            .write_stdin("ls\n")
            .assert()
            .failure()
            .stdout(assertions::invalid_archive());

        Ok(())
    }

    #[test]
    fn test_missing_archive_fails() -> anyhow::Result<()> {
        Command::cargo_bin("tar-shell")?
            .args(["alice", "box", "/no/such/archive.tar", "--no-color"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("Archive does not exist"));

        Ok(())
    }

    #[test]
    fn test_missing_arguments_fail() -> anyhow::Result<()> {
        Command::cargo_bin("tar-shell")?
            .arg("alice")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));

        Ok(())
    }
}
