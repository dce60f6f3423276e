//! GMC 本地执行器
//!
//! 提供本机管理命令的执行能力，支持：
//! - 子进程启动和输出捕获（stdout/stderr/退出码）
//! - 超时控制（超时后终止子进程，不返回部分输出）
//! - 退出码检查
//!
//! # 示例
//!
//! ```ignore
//! use gmc_executor::{CommandRunner, RunnerConfig};
//!
//! let runner = CommandRunner::new(RunnerConfig::default());
//! let output = runner.run("gluster", &["volume", "list", "--xml"]).await?;
//! println!("{}", output.stdout);
//! ```

mod config;
mod error;
mod runner;

pub use config::RunnerConfig;
pub use error::{ExecError, Result};
pub use runner::{CommandOutput, CommandRunner};
