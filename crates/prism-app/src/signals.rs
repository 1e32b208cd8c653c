//! Device signals for tier classification, with command-line overrides.

use prism_scene::{DeviceSignals, GpuInfo};

use crate::cli::Args;

pub fn from_args(args: &Args) -> DeviceSignals {
    let mut signals = DeviceSignals::detect();
    if let Some(cores) = args.cores {
        signals.cores = Some(cores);
    }
    if let Some(memory) = args.memory_gb {
        signals.memory_gb = Some(memory);
    }
    if let Some(renderer) = &args.renderer {
        signals.gpu = if renderer.is_empty() {
            GpuInfo::Masked
        } else {
            GpuInfo::Renderer(renderer.clone())
        };
    }
    signals.mobile |= args.mobile;
    signals
}
