use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "retouch", version)]
struct Cli {
    /// Editor config JSON overriding the built-in limits.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a session's edits to an image and write the result.
    Render(RenderArgs),
    /// Print the histogram of an (optionally edited) image as JSON.
    Histogram(HistogramArgs),
    /// List the built-in presets.
    Presets(PresetsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input image (JPEG, PNG or WebP).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Session JSON whose operations are applied.
    #[arg(long)]
    session: Option<PathBuf>,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,

    /// JPEG quality in [0, 1].
    #[arg(long, default_value_t = 0.92)]
    quality: f32,

    /// Seed for the grain field; omit for fresh noise.
    #[arg(long)]
    grain_seed: Option<u64>,

    /// Directory to write the applied session into, as `session_<millis>.json`.
    #[arg(long)]
    save_session: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct HistogramArgs {
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long)]
    session: Option<PathBuf>,

    #[arg(long)]
    grain_seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct PresetsArgs {
    /// Print the catalog as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Jpeg,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(p) => retouch::EditorConfig::from_path(p)?,
        None => retouch::EditorConfig::default(),
    };
    match cli.cmd {
        Command::Render(args) => cmd_render(args, config),
        Command::Histogram(args) => cmd_histogram(args, config),
        Command::Presets(args) => cmd_presets(args),
    }
}

fn render_opts(seed: Option<u64>) -> retouch::RenderOpts {
    match seed {
        Some(s) => retouch::RenderOpts::default().with_grain_seed(s),
        None => retouch::RenderOpts::default(),
    }
}

fn open_editor(
    config: retouch::EditorConfig,
    image: &Path,
    session: Option<&Path>,
) -> anyhow::Result<retouch::Editor> {
    let bytes =
        std::fs::read(image).with_context(|| format!("read image '{}'", image.display()))?;
    let mut editor = retouch::Editor::new(config)?;
    editor.load_bytes(&bytes, None)?;

    if let Some(path) = session {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read session '{}'", path.display()))?;
        let n = editor.import_session(&text)?;
        eprintln!("imported {n} operations from {}", path.display());
    }
    Ok(editor)
}

fn cmd_render(args: RenderArgs, config: retouch::EditorConfig) -> anyhow::Result<()> {
    let editor = open_editor(config, &args.in_path, args.session.as_deref())?;
    let surface = editor.render(&render_opts(args.grain_seed))?;

    let opts = retouch::ExportOptions {
        format: match args.format {
            FormatChoice::Png => retouch::ExportFormat::Png,
            FormatChoice::Jpeg => retouch::ExportFormat::Jpeg,
        },
        quality: args.quality,
    };
    let encoded = retouch::encode_surface(&surface, &opts)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &encoded.bytes)
        .with_context(|| format!("write image '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{})",
        args.out.display(),
        surface.width,
        surface.height
    );

    if let Some(dir) = &args.save_session {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create session dir '{}'", dir.display()))?;
        let path = dir.join(retouch::session::file::session_file_name(
            retouch::session::clock::unix_millis(),
        ));
        editor
            .export_session(retouch::session::clock::now_iso8601())?
            .write_to(&path)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_histogram(args: HistogramArgs, config: retouch::EditorConfig) -> anyhow::Result<()> {
    let editor = open_editor(config, &args.in_path, args.session.as_deref())?;
    let hist = editor.histogram(&render_opts(args.grain_seed))?;
    let json = serde_json::to_string(&hist).context("serialize histogram")?;
    println!("{json}");
    Ok(())
}

fn cmd_presets(args: PresetsArgs) -> anyhow::Result<()> {
    if args.json {
        let json =
            serde_json::to_string_pretty(&retouch::PRESETS[..]).context("serialize presets")?;
        println!("{json}");
        return Ok(());
    }
    for category in retouch::PresetCategory::ALL {
        println!("{}", category.label());
        for p in retouch::model::preset::presets_in(category) {
            println!("  {:<20} {}", p.id, p.name);
        }
    }
    Ok(())
}
