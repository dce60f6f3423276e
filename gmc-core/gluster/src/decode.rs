//! XML 解码
//!
//! 将成功执行的命令输出反序列化为对应的数据模型。
//! 解码失败与进程失败严格区分：解码失败意味着工具版本/文档形状不兼容，
//! 而不是暂时不可用

use serde::de::DeserializeOwned;

use crate::error::{GlusterError, Result};

/// 解码命令的 XML 输出
///
/// # Arguments
/// * `command` - 产生该输出的子命令（用于错误上下文）
/// * `xml` - 命令的标准输出
pub(crate) fn decode<T>(command: &str, xml: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    quick_xml::de::from_str(xml).map_err(|e| GlusterError::DecodeError {
        command: command.to_string(),
        detail: e.to_string(),
    })
}
