use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use canvas_illustrator::canvas::{decode, CanvasFormat};
use canvas_illustrator::config::Config;
use canvas_illustrator::render::{render_canvas, RenderOptions};
use canvas_illustrator::validation::Validator;

/// Read, decode and render one canvas file
async fn render_file(
    path: PathBuf,
    options: Arc<RenderOptions>,
    validator: Option<Validator>,
) -> Result<String> {
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let canvas = decode(&content, CanvasFormat::from_path(&path))
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    log::debug!(
        "rendering '{}' ({}x{}, {} drawings)",
        canvas.name,
        canvas.width,
        canvas.height,
        canvas.drawings.len()
    );

    // Rasterization is CPU-bound; keep it off the async workers
    let rendered = tokio::task::spawn_blocking(move || {
        render_canvas(&canvas, &options, validator.as_ref())
    })
    .await??;

    Ok(rendered)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse configuration from command line and config file
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let validator = config.validate.then(|| Validator::new(config.limits));
    let options = Arc::new(config.render.clone());

    let tasks: Vec<_> = config
        .inputs
        .iter()
        .cloned()
        .map(|path| tokio::spawn(render_file(path, options.clone(), validator)))
        .collect();

    let total = tasks.len();
    let mut failures = 0;
    for (path, task) in config.inputs.iter().zip(tasks) {
        match task.await? {
            Ok(rendered) => {
                if total > 1 {
                    println!("# {}", path.display());
                }
                println!("{}", rendered);
            }
            Err(e) => {
                log::error!("{}: {:#}", path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} canvases failed to render", failures, total);
    }

    log::info!("rendered {} canvases", total);
    Ok(())
}
