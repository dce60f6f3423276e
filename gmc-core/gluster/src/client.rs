//! Gluster 采集客户端
//!
//! 每个采集操作是一次独立的事务：执行命令 → 解码 XML → 归约为指标值。
//! 操作之间不共享可变状态，可由外部调度器并发驱动

use gmc_executor::{CommandRunner, RunnerConfig};
use tracing::{debug, info};

use crate::config::GlusterConfig;
use crate::decode::decode;
use crate::error::{GlusterError, Result};
use crate::models::{
    HealInfo, Peer, PeerStatusOutput, QuotaLimit, StatusVolume, VolProfile, Volume,
    VolumeHealOutput, VolumeInfoOutput, VolumeListOutput, VolumeProfileOutput,
    VolumeQuotaOutput, VolumeStatusOutput,
};

/// 统一请求机器可解析输出的标志，始终作为最后一个参数追加，
/// 不由调用方提供
const XML_FLAG: &str = "--xml";

/// Gluster 采集客户端
///
/// 通过本地执行器调用 gluster 管理命令并解析其 XML 输出
pub struct GlusterClient {
    config: GlusterConfig,
    runner: CommandRunner,
}

impl GlusterClient {
    /// 创建新的采集客户端
    ///
    /// # Arguments
    /// * `config` - 采集配置（命令路径、超时）
    pub fn new(config: GlusterConfig) -> Self {
        let runner =
            CommandRunner::new(RunnerConfig::default().command_timeout(config.command_timeout));
        Self { config, runner }
    }

    /// 获取配置
    pub fn config(&self) -> &GlusterConfig {
        &self.config
    }

    /// 获取内部执行器的引用
    pub fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    /// 执行 gluster 子命令并返回标准输出
    ///
    /// 进程无法启动、超时或以非零状态退出时返回 ProcessError，
    /// 携带子命令和底层详情；失败调用的输出不会进入解码
    async fn run_gluster(&self, args: &[&str]) -> Result<String> {
        let command = args.join(" ");

        let mut argv = args.to_vec();
        argv.push(XML_FLAG);
        debug!("{} {}", self.config.binary.display(), argv.join(" "));

        let output = self
            .runner
            .run(&self.config.binary, &argv)
            .await
            .map_err(|e| GlusterError::ProcessError {
                command: command.clone(),
                detail: e.to_string(),
            })?;

        if !output.is_success() {
            return Err(GlusterError::ProcessError {
                command,
                detail: format!(
                    "退出码 {:?}: {}",
                    output.exit_code,
                    output.combined_output()
                ),
            });
        }

        Ok(output.stdout)
    }

    /// 获取所有卷的信息
    ///
    /// 执行 `gluster volume info`，透传各卷记录
    pub async fn volume_info(&self) -> Result<Vec<Volume>> {
        let args = ["volume", "info"];
        let xml = self.run_gluster(&args).await?;
        let output: VolumeInfoOutput = decode(&args.join(" "), &xml)?;

        let volumes = output.vol_info.volumes.volume;
        info!("获取到 {} 个卷的信息", volumes.len());
        Ok(volumes)
    }

    /// 获取卷名列表
    ///
    /// 执行 `gluster volume list`，返回卷名
    pub async fn volume_list(&self) -> Result<Vec<String>> {
        let args = ["volume", "list"];
        let xml = self.run_gluster(&args).await?;
        let output: VolumeListOutput = decode(&args.join(" "), &xml)?;

        info!("找到 {} 个卷", output.vol_list.volume.len());
        Ok(output.vol_list.volume)
    }

    /// 获取集群成员状态
    ///
    /// 执行 `gluster peer status`，透传各成员记录
    pub async fn peer_status(&self) -> Result<Vec<Peer>> {
        let args = ["peer", "status"];
        let xml = self.run_gluster(&args).await?;
        let output: PeerStatusOutput = decode(&args.join(" "), &xml)?;

        let peers = output.peer_status.peer;
        info!(
            "集群成员 {} 个，其中已连接 {} 个",
            peers.len(),
            peers.iter().filter(|p| p.is_connected()).count()
        );
        Ok(peers)
    }

    /// 获取卷的累计性能统计
    ///
    /// 执行 `gluster volume profile <vol> info cumulative`。
    /// 各 Brick 的计数器独立透传，不做跨 Brick 汇总
    pub async fn volume_profile_cumulative(&self, volume: &str) -> Result<VolProfile> {
        let args = ["volume", "profile", volume, "info", "cumulative"];
        let xml = self.run_gluster(&args).await?;
        let output: VolumeProfileOutput = decode("volume profile info cumulative", &xml)?;

        debug!(
            "卷 {} 的性能统计包含 {} 个 Brick",
            volume,
            output.vol_profile.brick.len()
        );
        Ok(output.vol_profile)
    }

    /// 获取所有卷的节点状态明细
    ///
    /// 执行 `gluster volume status all detail`，透传各卷的节点记录
    pub async fn volume_status_all_detail(&self) -> Result<Vec<StatusVolume>> {
        let args = ["volume", "status", "all", "detail"];
        let xml = self.run_gluster(&args).await?;
        let output: VolumeStatusOutput = decode(&args.join(" "), &xml)?;

        let volumes = output.vol_status.volumes.volume;
        debug!("获取到 {} 个卷的状态明细", volumes.len());
        Ok(volumes)
    }

    /// 获取卷的待修复条目总数
    ///
    /// 执行 `gluster volume heal <vol> info`，对所有 Brick 的
    /// 待修复条目数求和。任一 Brick 的计数无法转换为整数时
    /// 整个调用失败，不返回部分和
    pub async fn volume_heal_entries(&self, volume: &str) -> Result<u64> {
        let args = ["volume", "heal", volume, "info"];
        let xml = self.run_gluster(&args).await?;
        let output: VolumeHealOutput = decode("volume heal info", &xml)?;

        let total = sum_entries_out_of_sync(&output.heal_info)?;
        info!("卷 {} 待修复条目总数: {}", volume, total);
        Ok(total)
    }

    /// 获取卷的目录配额列表
    ///
    /// 执行 `gluster volume quota <vol> list`，按文档顺序透传配额条目
    pub async fn volume_quota_list(&self, volume: &str) -> Result<Vec<QuotaLimit>> {
        let args = ["volume", "quota", volume, "list"];
        let xml = self.run_gluster(&args).await?;
        let output: VolumeQuotaOutput = decode("volume quota list", &xml)?;

        debug!("卷 {} 配置了 {} 条目录配额", volume, output.vol_quota.limit.len());
        Ok(output.vol_quota.limit)
    }
}

/// 汇总所有 Brick 的待修复条目数
///
/// 工具以文本输出每个 Brick 的计数（Brick 离线时为 "-" 或 "N/A"）。
/// 任一 Brick 转换失败则整个归约失败：健康信号不允许静默降级为部分和
pub fn sum_entries_out_of_sync(heal_info: &HealInfo) -> Result<u64> {
    let mut total: u64 = 0;

    for brick in &heal_info.bricks.brick {
        let count: u64 = brick.number_of_entries.trim().parse().map_err(|_| {
            GlusterError::ConversionError(format!(
                "Brick {} 的待修复条目数无法解析为整数: {:?}",
                brick.name, brick.number_of_entries
            ))
        })?;
        total += count;
    }

    Ok(total)
}
