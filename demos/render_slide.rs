use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use slide_layout::background::{data_url_background, file_background};
use slide_layout::{hide_insertion_points, HtmlProjector, Slide};

// Usage: render_slide [snapshot.json] [output dir] [background.png]
fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let snapshot_path = args
        .next()
        .unwrap_or_else(|| "demos/example_slide.json".to_string());
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    let background_png = args.next();

    log::info!("Loading slide snapshot from {}", snapshot_path);
    let json = fs::read_to_string(&snapshot_path)
        .with_context(|| format!("Unable to read {}", snapshot_path))?;
    let mut slide = Slide::from_json(&json)?;

    let points = slide.insertion_points();
    log::info!("Found {} insertion point(s)", points.len());

    let mut projector = HtmlProjector::builder()
        .set_page_size(slide.page_size)
        .set_fit_within(1280, 720)
        .build()?;
    projector.add_shapes(&points)?;

    let page_path = output_dir.join("HtmlPage.html");
    fs::write(&page_path, projector.html_text(Some(&file_background("Background.png"))))
        .with_context(|| format!("Unable to write {}", page_path.display()))?;
    log::info!("Page saved to {}", page_path.display());

    // What the host would render into Background.png.
    hide_insertion_points(&points, &mut slide)?;
    let hidden_path = output_dir.join("hidden_slide.json");
    fs::write(&hidden_path, slide.to_json_pretty()?)
        .with_context(|| format!("Unable to write {}", hidden_path.display()))?;
    log::info!("Snapshot with hidden insertion points saved to {}", hidden_path.display());

    if let Some(png_path) = background_png {
        let png = fs::read(&png_path).with_context(|| format!("Unable to read {}", png_path))?;
        let embedded_path = output_dir.join("HtmlPage2.html");
        fs::write(&embedded_path, projector.html_text(Some(&data_url_background(&png))))
            .with_context(|| format!("Unable to write {}", embedded_path.display()))?;
        log::info!("Self-contained page saved to {}", embedded_path.display());
    }

    Ok(())
}
