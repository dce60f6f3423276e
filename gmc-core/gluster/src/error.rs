//! Gluster 采集错误定义

use thiserror::Error;

/// Gluster 采集结果类型
pub type Result<T> = std::result::Result<T, GlusterError>;

/// Gluster 采集错误类型
///
/// 三类失败必须可区分：工具不可用/执行失败、输出不可解析、字段不可转换，
/// 上层对三者的告警和重试策略不同
#[derive(Error, Debug)]
pub enum GlusterError {
    /// 进程执行错误（工具无法启动或以非零状态退出）
    #[error("gluster 命令执行失败 ({command}): {detail}")]
    ProcessError {
        /// 执行的子命令（不含 --xml 标志）
        command: String,
        /// 底层错误详情
        detail: String,
    },

    /// XML 解码错误（输出与预期文档形状不符，通常意味着工具版本不兼容）
    #[error("XML 解码失败 ({command}): {detail}")]
    DecodeError {
        /// 产生该输出的子命令
        command: String,
        /// 解码器错误详情
        detail: String,
    },

    /// 字段转换错误（预期为数值的文本字段无法解析，整个聚合中止）
    #[error("字段转换失败: {0}")]
    ConversionError(String),

    /// IO 错误（挂载点探测的文件操作）
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
