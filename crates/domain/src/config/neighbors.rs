use serde::{Deserialize, Serialize};

/// Neighbor (ARP/NDP table) discovery settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NeighborsConfig {
    /// Disable to skip source selection entirely (IP-only client identification)
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Upper bound for one `ip neigh` / `arp -a` execution
    #[serde(default = "default_command_timeout")]
    pub command_timeout_secs: u64,

    /// Directory the kernel table path is resolved against
    #[serde(default = "default_fs_root")]
    pub fs_root: String,

    /// Kernel neighbor table, relative to `fs_root`
    #[serde(default = "default_arp_file")]
    pub arp_file: String,
}

impl Default for NeighborsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            refresh_interval_secs: default_refresh_interval(),
            command_timeout_secs: default_command_timeout(),
            fs_root: default_fs_root(),
            arp_file: default_arp_file(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_refresh_interval() -> u64 {
    60
}

fn default_command_timeout() -> u64 {
    5
}

fn default_fs_root() -> String {
    "/".to_string()
}

fn default_arp_file() -> String {
    "proc/net/arp".to_string()
}
