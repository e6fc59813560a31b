use anyhow::Result;
use triangle_engine::device::GpuInit;
use triangle_engine::logging::{init_logging, LoggingConfig};
use triangle_engine::render::TriangleRenderer;
use triangle_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Hello Triangle".to_string(),
        ..RuntimeConfig::default()
    };

    log::debug!("starting triangle viewer");
    Runtime::run(config, GpuInit::default(), TriangleRenderer::default())
}
