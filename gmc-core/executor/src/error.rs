//! 执行器错误定义

use thiserror::Error;

/// 执行器操作结果类型
pub type Result<T> = std::result::Result<T, ExecError>;

/// 执行器错误类型
#[derive(Error, Debug)]
pub enum ExecError {
    /// 进程启动错误（命令不存在或无法执行）
    #[error("进程启动失败: {0}")]
    StartError(String),

    /// 命令执行错误（进程已启动但以失败状态退出）
    #[error("命令执行失败: {0}")]
    ExecutionError(String),

    /// 超时错误（子进程已被终止）
    #[error("命令执行超时: {0}")]
    TimeoutError(String),

    /// IO 错误
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
