//! 本地命令执行实现
//!
//! 使用 tokio 子进程执行本机命令，捕获输出并强制超时

use std::ffi::OsStr;
use std::process::Stdio;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::config::RunnerConfig;
use crate::error::{ExecError, Result};

/// 命令执行输出
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// 标准输出
    pub stdout: String,
    /// 标准错误
    pub stderr: String,
    /// 退出码
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// 检查命令是否成功执行
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// 获取合并的输出（stdout + stderr）
    pub fn combined_output(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// 本地命令执行器
///
/// 每次调用启动一个子进程，同步等待其退出并捕获输出；
/// 超过配置的超时后终止子进程，不返回部分输出
pub struct CommandRunner {
    config: RunnerConfig,
}

impl CommandRunner {
    /// 创建新的执行器
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// 执行命令
    ///
    /// # Arguments
    /// * `program` - 可执行文件路径或名称
    /// * `args` - 参数列表
    pub async fn run(&self, program: impl AsRef<OsStr>, args: &[&str]) -> Result<CommandOutput> {
        let program = program.as_ref();
        debug!("执行命令: {:?} {}", program, args.join(" "));

        let result = timeout(self.config.command_timeout, self.run_internal(program, args))
            .await
            .map_err(|_| {
                ExecError::TimeoutError(format!(
                    "{:?} {} (超时 {:?}，子进程已终止)",
                    program,
                    args.join(" "),
                    self.config.command_timeout
                ))
            })?;

        result
    }

    /// 执行命令内部实现
    async fn run_internal(&self, program: &OsStr, args: &[&str]) -> Result<CommandOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // 超时导致 future 被丢弃时终止子进程
            .kill_on_drop(true);

        let child = cmd
            .spawn()
            .map_err(|e| ExecError::StartError(format!("启动进程 {:?} 失败: {}", program, e)))?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ExecError::ExecutionError(format!("等待进程 {:?} 失败: {}", program, e)))?;

        let result = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            exit_code: output.status.code(),
        };

        debug!(
            "命令执行完成, 退出码: {:?}, stdout 长度: {}, stderr 长度: {}",
            result.exit_code,
            result.stdout.len(),
            result.stderr.len()
        );

        Ok(result)
    }

    /// 执行命令并检查是否成功
    pub async fn run_checked(
        &self,
        program: impl AsRef<OsStr>,
        args: &[&str],
    ) -> Result<CommandOutput> {
        let output = self.run(program, args).await?;

        if !output.is_success() {
            return Err(ExecError::ExecutionError(format!(
                "命令执行失败 (退出码 {:?}): {}",
                output.exit_code,
                output.combined_output()
            )));
        }

        Ok(output)
    }

    /// 获取配置
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }
}
