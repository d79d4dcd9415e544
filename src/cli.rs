// Options and output handling shared by the three binaries.
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use log::warn;

use crate::{
    common::Color,
    compositor::Render,
    config::RenderConfig,
    helpers::parse_hex_color,
    overlay::draw_labels,
    persist::{save_json, save_png},
};

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// JSON render config (defaults to the per-user config file, if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Background color as RRGGBB, overriding the config
    #[arg(long, value_parser = parse_hex_color)]
    pub background: Option<Color>,

    /// Write every diagnostic to this JSON file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl CommonArgs {
    pub fn render_config(&self) -> Result<RenderConfig> {
        let mut config = RenderConfig::load(self.config.as_deref())?;
        if let Some(bg) = self.background {
            config.background = bg;
        }
        Ok(config)
    }
}

/// Stamp labels, write the image and the optional diagnostic report.
/// Returns false if the canvas was empty and no image was written.
pub fn write_outputs(
    mut render: Render,
    output: &Path,
    common: &CommonArgs,
    config: &RenderConfig,
) -> Result<bool> {
    draw_labels(&mut render.canvas, &render.labels, config.label_scale);

    if !render.diagnostics.is_empty() {
        for k in render.diagnostics.summary() {
            warn!("{:?}: {}", k.kind, k.count);
        }
    }
    if let Some(report) = &common.report {
        save_json(report, &render.diagnostics.to_report())?;
    }

    if render.canvas.width() == 0 || render.canvas.height() == 0 {
        warn!("Nothing to draw, not writing {}", output.display());
        return Ok(false);
    }
    save_png(output, &render.canvas)?;
    Ok(true)
}
