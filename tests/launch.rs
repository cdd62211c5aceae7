#![cfg(unix)]

mod common;
use crate::common::{init_tracing, with_timeout};

use std::error::Error;
use std::path::PathBuf;

use devlaunch::exec::{LaunchOutcome, launch, shell_line};
use devlaunch::exit::{ExitTrigger, register_process_exit};
use devlaunch::startup::ResolvedCommand;
use tokio::sync::watch;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn shell_line_quotes_script_paths() {
    assert_eq!(
        shell_line(&ResolvedCommand::Shell("npm run dev --if-present".to_string())),
        "npm run dev --if-present"
    );
    assert_eq!(
        shell_line(&ResolvedCommand::Path(PathBuf::from("/srv/my app/run.sh"))),
        "'/srv/my app/run.sh'"
    );
    assert_eq!(
        shell_line(&ResolvedCommand::Path(PathBuf::from("/srv/it's.sh"))),
        r"'/srv/it'\''s.sh'"
    );
}

#[tokio::test]
async fn exit_code_is_reported() -> TestResult {
    with_timeout(async {
        init_tracing();
        let dir = tempfile::tempdir()?;
        let (_tx, rx) = watch::channel(false);

        let outcome = launch(&ResolvedCommand::Shell("exit 3".to_string()), dir.path(), rx).await?;
        assert_eq!(outcome, LaunchOutcome::Exited(3));
        Ok(())
    })
    .await
}

#[tokio::test]
async fn runs_in_app_directory() -> TestResult {
    with_timeout(async {
        init_tracing();
        let dir = tempfile::tempdir()?;
        let (_tx, rx) = watch::channel(false);

        let outcome = launch(
            &ResolvedCommand::Shell("pwd > where.txt".to_string()),
            dir.path(),
            rx,
        )
        .await?;
        assert_eq!(outcome, LaunchOutcome::Exited(0));

        let written = std::fs::read_to_string(dir.path().join("where.txt"))?;
        let expected = dir.path().canonicalize()?;
        assert_eq!(PathBuf::from(written.trim()).canonicalize()?, expected);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn script_path_is_executed() -> TestResult {
    use std::os::unix::fs::PermissionsExt;

    with_timeout(async {
        init_tracing();
        let dir = tempfile::tempdir()?;
        let script = dir.path().join("start.sh");
        std::fs::write(&script, "#!/bin/sh\nexit 7\n")?;
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))?;

        let (_tx, rx) = watch::channel(false);
        let outcome = launch(&ResolvedCommand::Path(script), dir.path(), rx).await?;
        assert_eq!(outcome, LaunchOutcome::Exited(7));
        Ok(())
    })
    .await
}

#[tokio::test]
async fn exit_registration_stops_running_app() -> TestResult {
    with_timeout(async {
        init_tracing();
        let dir = tempfile::tempdir()?;
        let (tx, rx) = watch::channel(false);

        let registration = register_process_exit(move || {
            let _ = tx.send(true);
        });

        let stopper = tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(200)).await;
            registration.trigger(ExitTrigger::Interrupt)
        });

        let outcome = launch(&ResolvedCommand::Shell("sleep 30".to_string()), dir.path(), rx).await?;
        assert_eq!(outcome, LaunchOutcome::Stopped);
        assert!(stopper.await?);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn shutdown_before_launch_does_not_spawn() -> TestResult {
    with_timeout(async {
        init_tracing();
        let dir = tempfile::tempdir()?;
        let (_tx, rx) = watch::channel(true);

        let outcome = launch(
            &ResolvedCommand::Shell("touch should-not-exist".to_string()),
            dir.path(),
            rx,
        )
        .await?;
        assert_eq!(outcome, LaunchOutcome::Stopped);
        assert!(!dir.path().join("should-not-exist").exists());
        Ok(())
    })
    .await
}

#[tokio::test]
async fn dropped_shutdown_sender_lets_app_finish() -> TestResult {
    with_timeout(async {
        init_tracing();
        let dir = tempfile::tempdir()?;
        let (tx, rx) = watch::channel(false);
        drop(tx);

        let outcome = launch(&ResolvedCommand::Shell("exit 0".to_string()), dir.path(), rx).await?;
        assert_eq!(outcome, LaunchOutcome::Exited(0));
        Ok(())
    })
    .await
}
