//! project-gallery: render a categorized project gallery into host HTML, or
//! preview it in a desktop window.

mod app;
mod ui;

use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use eframe::egui;

use project_gallery::config::{GalleryConfig, LayoutPreference};
use project_gallery::engine::{GalleryEngine, Interaction};

#[derive(Parser, Debug)]
#[command(name = "project-gallery", version)]
#[command(about = "Render a categorized project gallery into host HTML pages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the gallery into a host page and write the resulting HTML
    Render(RenderArgs),
    /// Open the preview window
    View(ViewArgs),
}

#[derive(Args, Debug)]
struct GalleryArgs {
    /// Project list location, relative to the host page
    #[arg(long)]
    data: Option<String>,

    /// Layout to mount
    #[arg(long, value_enum)]
    layout: Option<Layout>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Host page: a file path or an http(s) URL
    #[arg(long)]
    page: String,

    #[command(flatten)]
    gallery: GalleryArgs,

    /// Select this category after rendering (two-pane layout)
    #[arg(long)]
    select: Option<String>,

    /// Open this section after rendering (sections layout, 0-based)
    #[arg(long)]
    open: Option<usize>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Host page; the stock page is used when omitted
    #[arg(long)]
    page: Option<String>,

    #[command(flatten)]
    gallery: GalleryArgs,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Layout {
    Auto,
    TwoPane,
    Grid,
    Sections,
    Carousel,
}

impl From<Layout> for LayoutPreference {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Auto => LayoutPreference::Auto,
            Layout::TwoPane => LayoutPreference::TwoPane,
            Layout::Grid => LayoutPreference::Grid,
            Layout::Sections => LayoutPreference::Sections,
            Layout::Carousel => LayoutPreference::Carousel,
        }
    }
}

impl GalleryArgs {
    /// Defaults, then the config file, then flags.
    fn load_config(&self) -> Result<GalleryConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => GalleryConfig::from_json_file(path)?,
            None => GalleryConfig::default(),
        };
        if let Some(data) = &self.data {
            config = config.with_data_path(data.as_str());
        }
        if let Some(layout) = self.layout {
            config = config.with_layout(layout.into());
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => render(args),
        Command::View(args) => view(args),
    }
}

fn render(args: RenderArgs) -> Result<(), Box<dyn Error>> {
    let engine = GalleryEngine::new(args.gallery.load_config()?);
    let mut page = engine.load_page(&args.page)?;

    if let Some(category) = args.select {
        page.apply(Interaction::SelectCategory(category));
    }
    if let Some(index) = args.open {
        page.apply(Interaction::ToggleSection(index));
    }
    if let Some(err) = page.error() {
        log::warn!("gallery rendered with an inline error: {}", err);
    }

    let html = page.to_html();
    match &args.out {
        Some(path) => {
            std::fs::write(path, html)?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}

fn view(args: ViewArgs) -> Result<(), Box<dyn Error>> {
    let config = args.gallery.load_config()?;
    let page = args.page;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Project Gallery",
        options,
        Box::new(move |cc| {
            let mut app = app::GalleryApp::new(config, page);
            app.reload(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| format!("preview window failed: {}", e))?;
    Ok(())
}
