//! Hardware-specific information structures

/// Hardware information
#[derive(Debug, Clone)]
pub struct HardwareInfo {
    pub host_model: String,
    pub cpu_model: String,
    pub cpu_cores: String,
    pub gpu_model: String,
    pub memory: String,
    pub disk: String,
    pub disk_encryption: String,
}
