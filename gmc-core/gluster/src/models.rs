//! Gluster 管理命令 XML 输出数据模型
//!
//! 每个管理子命令的 cliOutput 文档各自有独立的形状，逐一建模。
//! 解码时容忍未知元素；聚合依赖的字段缺失则整个文档解码失败。
//! 工具可能输出 "N/A" 的字段（待修复条目数、端口号）保持为文本，
//! 由聚合侧负责转换

use serde::{Deserialize, Serialize};

// ============================================
// volume info
// ============================================

/// `gluster volume info` 顶层输出
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfoOutput {
    pub op_ret: i32,
    pub op_errno: i32,
    #[serde(default)]
    pub op_errstr: String,
    pub vol_info: VolInfo,
}

/// 卷信息包装
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolInfo {
    pub volumes: Volumes,
}

/// 卷列表包装
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volumes {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub volume: Vec<Volume>,
}

/// 单个卷的信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// 卷名
    pub name: String,
    /// 卷 ID（UUID）
    #[serde(default)]
    pub id: String,
    /// 状态码（1 = Started）
    pub status: i32,
    /// 状态文本
    pub status_str: String,
    /// Brick 数量
    pub brick_count: u32,
    /// 分布数
    #[serde(default)]
    pub dist_count: u32,
    /// 副本数
    #[serde(default)]
    pub replica_count: u32,
    /// 仲裁数
    #[serde(default)]
    pub arbiter_count: u32,
    /// 纠删数
    #[serde(default)]
    pub disperse_count: u32,
    /// 冗余数
    #[serde(default)]
    pub redundancy_count: u32,
    /// 卷类型码
    #[serde(rename = "type", default)]
    pub volume_type: i32,
    /// 卷类型文本（Replicate/Distribute 等）
    #[serde(default)]
    pub type_str: String,
    /// 传输类型码
    #[serde(default)]
    pub transport: i32,
    /// Brick 列表
    pub bricks: Bricks,
    /// 选项数量
    #[serde(default)]
    pub opt_count: u32,
}

impl Volume {
    /// 卷是否已启动
    pub fn is_started(&self) -> bool {
        self.status == 1
    }
}

/// Brick 列表包装
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bricks {
    #[serde(default)]
    pub brick: Vec<Brick>,
}

/// 单个 Brick 的信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brick {
    /// Brick 标识（host:/path 格式）
    pub name: String,
    /// 所在节点 UUID
    #[serde(default)]
    pub host_uuid: String,
    /// 是否为仲裁 Brick
    #[serde(default)]
    pub is_arbiter: i32,
}

// ============================================
// volume list
// ============================================

/// `gluster volume list` 顶层输出
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeListOutput {
    pub op_ret: i32,
    pub op_errno: i32,
    #[serde(default)]
    pub op_errstr: String,
    pub vol_list: VolList,
}

/// 卷名列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub volume: Vec<String>,
}

// ============================================
// peer status
// ============================================

/// `gluster peer status` 顶层输出
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerStatusOutput {
    pub op_ret: i32,
    pub op_errno: i32,
    #[serde(default)]
    pub op_errstr: String,
    pub peer_status: PeerStatus,
}

/// 集群成员列表包装
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerStatus {
    #[serde(default)]
    pub peer: Vec<Peer>,
}

/// 单个集群成员的信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    /// 成员 UUID
    pub uuid: String,
    /// 主机名
    pub hostname: String,
    /// 全部已知主机名
    #[serde(default)]
    pub hostnames: Hostnames,
    /// 是否已连接（1 = 已连接）
    pub connected: i32,
    /// 状态码
    #[serde(default)]
    pub state: i32,
    /// 状态文本
    pub state_str: String,
}

impl Peer {
    /// 成员是否已连接
    pub fn is_connected(&self) -> bool {
        self.connected == 1
    }
}

/// 主机名列表包装
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hostnames {
    #[serde(default)]
    pub hostname: Vec<String>,
}

// ============================================
// volume profile <vol> info cumulative
// ============================================

/// `gluster volume profile <vol> info cumulative` 顶层输出
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeProfileOutput {
    pub op_ret: i32,
    pub op_errno: i32,
    #[serde(default)]
    pub op_errstr: String,
    pub vol_profile: VolProfile,
}

/// 卷累计性能统计
///
/// 各 Brick 的计数器保持独立，不做跨 Brick 汇总，
/// 维度信息留给上层按 Brick 标签导出
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolProfile {
    /// 卷名
    pub volname: String,
    /// profile 操作码
    #[serde(default)]
    pub profile_op: i32,
    /// Brick 数量
    #[serde(default)]
    pub brick_count: u32,
    /// 各 Brick 的统计
    #[serde(default)]
    pub brick: Vec<ProfileBrick>,
}

/// 单个 Brick 的性能统计
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBrick {
    /// Brick 标识（host:/path 格式）
    pub brick_name: String,
    /// 累计统计
    pub cumulative_stats: CumulativeStats,
}

/// 累计统计计数器
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeStats {
    /// 各文件操作的延迟统计
    #[serde(default)]
    pub fop_stats: FopStats,
    /// 统计时长（秒）
    pub duration: u64,
    /// 累计读取字节数
    pub total_read: u64,
    /// 累计写入字节数
    pub total_write: u64,
}

/// 文件操作统计列表包装
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FopStats {
    #[serde(default)]
    pub fop: Vec<FopStat>,
}

/// 单个文件操作的延迟统计
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FopStat {
    /// 操作名（WRITE/LOOKUP 等）
    pub name: String,
    /// 调用次数
    pub hits: u64,
    /// 平均延迟（微秒）
    pub avg_latency: f64,
    /// 最小延迟（微秒）
    pub min_latency: f64,
    /// 最大延迟（微秒）
    pub max_latency: f64,
}

// ============================================
// volume status all detail
// ============================================

/// `gluster volume status all detail` 顶层输出
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeStatusOutput {
    pub op_ret: i32,
    pub op_errno: i32,
    #[serde(default)]
    pub op_errstr: String,
    pub vol_status: VolStatus,
}

/// 卷状态包装
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolStatus {
    pub volumes: StatusVolumes,
}

/// 卷状态列表包装
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusVolumes {
    #[serde(default)]
    pub volume: Vec<StatusVolume>,
}

/// 单个卷的节点状态明细
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusVolume {
    /// 卷名
    pub vol_name: String,
    /// 节点数量
    #[serde(default)]
    pub node_count: u32,
    /// 各节点（Brick）明细
    #[serde(default)]
    pub node: Vec<StatusNode>,
}

/// 单个节点（Brick）的状态明细
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusNode {
    /// 主机名
    pub hostname: String,
    /// Brick 路径
    pub path: String,
    /// 所在节点 UUID
    #[serde(default)]
    pub peerid: String,
    /// 状态码（1 = 在线）
    pub status: i32,
    /// 端口号（离线时为 "N/A"）
    #[serde(default)]
    pub port: String,
    /// TCP/RDMA 端口
    #[serde(default)]
    pub ports: NodePorts,
    /// 进程号
    #[serde(default)]
    pub pid: i64,
    /// 总容量（字节）
    pub size_total: u64,
    /// 可用容量（字节）
    pub size_free: u64,
    /// 底层设备
    #[serde(default)]
    pub device: String,
    /// 块大小
    #[serde(default)]
    pub block_size: u64,
    /// 挂载选项
    #[serde(default)]
    pub mnt_options: String,
    /// 底层文件系统
    #[serde(default)]
    pub fs_name: String,
}

impl StatusNode {
    /// 节点是否在线
    pub fn is_online(&self) -> bool {
        self.status == 1
    }

    /// 已用容量（字节）
    pub fn size_used(&self) -> u64 {
        self.size_total.saturating_sub(self.size_free)
    }
}

/// 节点端口信息（离线时为 "N/A"）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodePorts {
    #[serde(default)]
    pub tcp: String,
    #[serde(default)]
    pub rdma: String,
}

// ============================================
// volume heal <vol> info
// ============================================

/// `gluster volume heal <vol> info` 顶层输出
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeHealOutput {
    pub op_ret: i32,
    pub op_errno: i32,
    #[serde(default)]
    pub op_errstr: String,
    pub heal_info: HealInfo,
}

/// 修复信息包装
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealInfo {
    pub bricks: HealBricks,
}

/// 修复信息 Brick 列表包装
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealBricks {
    #[serde(default)]
    pub brick: Vec<HealBrick>,
}

/// 单个 Brick 的修复信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealBrick {
    /// Brick 标识（host:/path 格式）
    pub name: String,
    /// 连接状态（Connected/Transport endpoint is not connected 等）
    #[serde(default)]
    pub status: String,
    /// 待修复条目数，工具以文本输出（Brick 离线时为 "-" 或 "N/A"），
    /// 聚合时转换
    pub number_of_entries: String,
}

// ============================================
// volume quota <vol> list
// ============================================

/// `gluster volume quota <vol> list` 顶层输出
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeQuotaOutput {
    pub op_ret: i32,
    pub op_errno: i32,
    #[serde(default)]
    pub op_errstr: String,
    pub vol_quota: VolQuota,
}

/// 配额列表包装
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolQuota {
    #[serde(default)]
    pub limit: Vec<QuotaLimit>,
}

/// 单个目录的配额信息（该命令的 XML 元素名为 snake_case）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaLimit {
    /// 目录路径
    pub path: String,
    /// 硬限制（字节）
    pub hard_limit: u64,
    /// 软限制百分比（如 "80%"）
    #[serde(default)]
    pub soft_limit_percent: String,
    /// 软限制（字节）
    #[serde(default)]
    pub soft_limit_value: u64,
    /// 已用空间（字节）
    pub used_space: u64,
    /// 可用空间（字节）
    pub avail_space: u64,
    /// 是否超过软限制（Yes/No）
    #[serde(default)]
    pub sl_exceeded: String,
    /// 是否超过硬限制（Yes/No）
    #[serde(default)]
    pub hl_exceeded: String,
}

impl QuotaLimit {
    /// 是否超过软限制
    pub fn soft_limit_exceeded(&self) -> bool {
        self.sl_exceeded.eq_ignore_ascii_case("yes")
    }

    /// 是否超过硬限制
    pub fn hard_limit_exceeded(&self) -> bool {
        self.hl_exceeded.eq_ignore_ascii_case("yes")
    }
}

// ============================================
// 挂载点
// ============================================

/// 本机的 glusterfs 挂载点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlusterMount {
    /// 挂载源（host:/volume 格式）
    pub device: String,
    /// 挂载点路径
    pub mount_point: String,
}

impl GlusterMount {
    /// 创建新的挂载点信息
    pub fn new(device: impl Into<String>, mount_point: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            mount_point: mount_point.into(),
        }
    }
}
