use crate::internal::common::resources::{ByteAmount, CpuAmount, GpuCount, ResourceVector};
pub use ResourceVectorBuilder as ResVecBuilder;

#[derive(Default, Clone)]
pub struct ResourceVectorBuilder {
    cpu: CpuAmount,
    ram: ByteAmount,
    disk: ByteAmount,
    gpu: GpuCount,
}

impl ResourceVectorBuilder {
    pub fn cpu(mut self, cpu: CpuAmount) -> Self {
        self.cpu = cpu;
        self
    }

    pub fn ram_mb(mut self, mb: u64) -> Self {
        self.ram = ByteAmount::from_megabytes(mb);
        self
    }

    pub fn ram_gb(mut self, gb: u64) -> Self {
        self.ram = ByteAmount::from_gigabytes(gb);
        self
    }

    pub fn disk_mb(mut self, mb: u64) -> Self {
        self.disk = ByteAmount::from_megabytes(mb);
        self
    }

    pub fn disk_gb(mut self, gb: u64) -> Self {
        self.disk = ByteAmount::from_gigabytes(gb);
        self
    }

    pub fn gpu(mut self, gpu: GpuCount) -> Self {
        self.gpu = gpu;
        self
    }

    pub fn finish(self) -> ResourceVector {
        ResourceVector::new(self.cpu, self.ram, self.disk, self.gpu)
    }
}

/// A handful of vectors with different shapes, used by property-style tests.
pub fn sample_vectors() -> Vec<ResourceVector> {
    vec![
        ResourceVector::EMPTY,
        ResVecBuilder::default().cpu(1.0).ram_gb(1).disk_gb(1).finish(),
        ResVecBuilder::default().cpu(0.25).ram_mb(300).gpu(2).finish(),
        ResVecBuilder::default().cpu(16.0).ram_gb(64).disk_mb(10).gpu(8).finish(),
        ResVecBuilder::default().disk_gb(500).finish(),
        ResVecBuilder::default().cpu(3.5).ram_mb(1).disk_mb(1).gpu(1).finish(),
    ]
}
