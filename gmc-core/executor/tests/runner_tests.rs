//! CommandRunner 集成测试
//!
//! 使用系统自带命令（echo/sh/sleep）验证真实子进程行为

use std::time::Duration;

use anyhow::Result;
use gmc_executor::{CommandRunner, ExecError, RunnerConfig};

fn runner() -> CommandRunner {
    CommandRunner::new(RunnerConfig::default())
}

#[tokio::test]
async fn test_run_captures_stdout() -> Result<()> {
    let output = runner().run("echo", &["hello"]).await?;

    assert!(output.is_success());
    assert_eq!(output.stdout, "hello");
    assert!(output.stderr.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_run_captures_exit_code() -> Result<()> {
    let output = runner().run("sh", &["-c", "exit 3"]).await?;

    assert!(!output.is_success());
    assert_eq!(output.exit_code, Some(3));
    Ok(())
}

#[tokio::test]
async fn test_run_captures_stderr() -> Result<()> {
    let output = runner().run("sh", &["-c", "echo oops >&2; exit 1"]).await?;

    assert_eq!(output.stderr, "oops");
    assert_eq!(output.combined_output(), "oops");
    Ok(())
}

#[tokio::test]
async fn test_missing_binary_is_start_error() {
    let result = runner().run("/nonexistent/gmc-no-such-binary", &[]).await;

    assert!(matches!(result, Err(ExecError::StartError(_))));
}

#[tokio::test]
async fn test_timeout_kills_child() {
    let runner = CommandRunner::new(RunnerConfig::default().command_timeout(Duration::from_millis(200)));

    let result = runner.run("sleep", &["5"]).await;

    // 超时必须返回 TimeoutError，而不是部分输出
    assert!(matches!(result, Err(ExecError::TimeoutError(_))));
}

#[tokio::test]
async fn test_run_checked_rejects_failure() {
    let result = runner().run_checked("sh", &["-c", "echo broken >&2; exit 2"]).await;

    match result {
        Err(ExecError::ExecutionError(msg)) => {
            assert!(msg.contains("2"));
            assert!(msg.contains("broken"));
        }
        other => panic!("预期 ExecutionError，实际为 {:?}", other.map(|o| o.exit_code)),
    }
}
