use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::internal::common::error::PackingError;
use crate::internal::common::resources::{ByteAmount, ResourceVector};

pub const DEFAULT_PADDING_PERCENTAGE: u32 = 10;

fn default_instance_resources() -> ResourceVector {
    ResourceVector::new(
        1.0,
        ByteAmount::from_gigabytes(1),
        ByteAmount::from_gigabytes(1),
        0,
    )
}

fn default_container_padding() -> ResourceVector {
    ResourceVector::new(
        1.0,
        ByteAmount::from_megabytes(512),
        ByteAmount::from_gigabytes(1),
        0,
    )
}

fn default_padding_percentage() -> u32 {
    DEFAULT_PADDING_PERCENTAGE
}

/// Resource settings used when instances are packed into containers.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct PackingConfiguration {
    /// Resources of an instance that does not request anything explicitly.
    #[serde(default = "default_instance_resources")]
    pub instance_default: ResourceVector,
    /// Fixed overhead reserved in every container.
    #[serde(default = "default_container_padding")]
    pub container_padding: ResourceVector,
    /// Cpu and ram padding relative to the container contents.
    /// The larger of this and the fixed padding is used.
    #[serde(default = "default_padding_percentage")]
    pub padding_percentage: u32,
    /// Largest container that can be provisioned, padding included.
    #[serde(default)]
    pub container_max: Option<ResourceVector>,
}

impl Default for PackingConfiguration {
    fn default() -> Self {
        Self {
            instance_default: default_instance_resources(),
            container_padding: default_container_padding(),
            padding_percentage: DEFAULT_PADDING_PERCENTAGE,
            container_max: None,
        }
    }
}

impl PackingConfiguration {
    pub fn from_toml(input: &str) -> crate::Result<Self> {
        let config: PackingConfiguration = toml::from_str(input)?;
        if let Some(max) = config.container_max {
            let shape = max.subtract_absolute(&config.container_padding);
            if shape.cpu() == 0.0 || shape.ram().is_zero() || shape.disk().is_zero() {
                log::warn!(
                    "Container padding {} leaves no room for instances in container {}",
                    config.container_padding,
                    max
                );
            }
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> crate::Result<Self> {
        log::debug!("Loading packing configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn instance_resources(&self, request: Option<ResourceVector>) -> ResourceVector {
        request.unwrap_or(self.instance_default)
    }

    /// Returns the resources of a container that holds `used` once padding is added.
    pub fn pad_container(&self, used: &ResourceVector) -> ResourceVector {
        let percentage = self.padding_percentage;
        let cpu_padding = self
            .container_padding
            .cpu()
            .max(used.cpu() * percentage as f64 / 100.0);
        let ram_padding = self
            .container_padding
            .ram()
            .max(used.ram().increase_by_percentage(percentage) - used.ram());
        let padding = self
            .container_padding
            .with_cpu(cpu_padding)
            .with_ram(ram_padding);
        used.plus(&padding)
    }

    /// Space of the maximal container that remains for instances after padding.
    pub fn usable_container_shape(&self) -> Option<ResourceVector> {
        self.container_max
            .map(|max| max.subtract_absolute(&self.container_padding))
    }

    /// Number of maximal containers needed to host `demand`.
    pub fn required_containers(&self, demand: &ResourceVector) -> crate::Result<u32> {
        let shape = self.usable_container_shape().ok_or_else(|| {
            PackingError::GenericError("Maximal container size is not configured".to_string())
        })?;
        let factor = demand.divide_by(&shape)?;
        log::debug!("Demand {demand} needs {factor} container(s) of usable shape {shape}");
        Ok(factor as u32)
    }
}
