use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

use inkframe::{
    Canvas, FrameSink, InkResult, ModuleGrid, OverlayStatus, PackedFileSink, PngPreviewSink,
    Presenter, RenderConfig,
};

#[derive(Parser, Debug)]
#[command(name = "inkframe", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Render configuration JSON (defaults to the 800x480 panel).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output path. A `.png` extension writes a preview, anything else the raw packed frame.
    #[arg(long, global = true, default_value = "frame.bin")]
    out: PathBuf,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Present a pre-packed 4bpp frame, optionally with the battery badge.
    Frame(FrameArgs),
    /// Present a centred text message.
    Message(MessageArgs),
    /// Present the device setup screen.
    Setup(SetupArgs),
    /// Quantize an RGB image (PNG or raw RGB888) and present it.
    Quantize(QuantizeArgs),
    /// Present the seven-colour test pattern.
    Colors,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Packed frame file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Battery percentage to overlay.
    #[arg(long, allow_hyphen_values = true)]
    battery: Option<i32>,
}

#[derive(Args, Debug)]
struct MessageArgs {
    /// Text to show. Lowercase letters have no glyphs and render blank.
    text: String,
}

#[derive(Args, Debug)]
struct SetupArgs {
    /// Module grid text file (`#` dark, `.` light, one row per line).
    #[arg(long)]
    grid: Option<PathBuf>,

    /// Print the WiFi join payload for this network so it can be encoded into a grid.
    #[arg(long)]
    ssid: Option<String>,

    /// Network password for `--ssid`.
    #[arg(long, default_value = "")]
    password: String,
}

#[derive(Args, Debug)]
struct QuantizeArgs {
    /// PNG/JPEG image, or a raw RGB888 file for any other extension.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Battery percentage to overlay.
    #[arg(long, allow_hyphen_values = true)]
    battery: Option<i32>,
}

/// Forwards to the output sink and remembers a digest of what was presented.
struct DigestSink {
    inner: Box<dyn FrameSink>,
    last: Option<(Canvas, String)>,
}

impl FrameSink for DigestSink {
    fn present(&mut self, canvas: Canvas, packed: &[u8]) -> InkResult<()> {
        self.inner.present(canvas, packed)?;
        self.last = Some((canvas, sha256_hex(packed)));
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.common.verbose);

    let config = match &cli.common.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("load render config '{}'", path.display()))?,
        None => RenderConfig::default(),
    };

    let sink = DigestSink {
        inner: make_sink(&cli.common.out),
        last: None,
    };
    let mut presenter = Presenter::new(sink, config)?;

    match cli.cmd {
        Command::Frame(args) => cmd_frame(&mut presenter, args)?,
        Command::Message(args) => {
            presenter.show_message(&args.text)?;
        }
        Command::Setup(args) => cmd_setup(&mut presenter, args)?,
        Command::Quantize(args) => cmd_quantize(&mut presenter, args)?,
        Command::Colors => {
            presenter.show_color_blocks()?;
        }
    }

    let sink = presenter.into_sink();
    let (canvas, sha) = sink.last.context("no frame was presented")?;
    eprintln!("wrote {}", cli.common.out.display());
    eprintln!("  canvas: {}x{}", canvas.width, canvas.height);
    eprintln!("  sha256: {sha}");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn make_sink(out: &Path) -> Box<dyn FrameSink> {
    let is_png = out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        Box::new(PngPreviewSink::new(out))
    } else {
        Box::new(PackedFileSink::new(out))
    }
}

fn present(
    presenter: &mut Presenter<DigestSink>,
    packed: &[u8],
    battery: Option<i32>,
) -> anyhow::Result<()> {
    match battery {
        Some(pct) => {
            if presenter.display_frame_with_badge(packed, pct)? == OverlayStatus::Skipped {
                eprintln!("battery badge skipped: not enough memory for a scratch frame");
            }
        }
        None => presenter.display_frame(packed)?,
    }
    Ok(())
}

fn cmd_frame(presenter: &mut Presenter<DigestSink>, args: FrameArgs) -> anyhow::Result<()> {
    let packed = std::fs::read(&args.in_path)
        .with_context(|| format!("read packed frame '{}'", args.in_path.display()))?;
    present(presenter, &packed, args.battery)
}

fn cmd_setup(presenter: &mut Presenter<DigestSink>, args: SetupArgs) -> anyhow::Result<()> {
    if let Some(ssid) = &args.ssid {
        println!("{}", inkframe::wifi_payload(ssid, &args.password));
    }
    let grid = match &args.grid {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read module grid '{}'", path.display()))?;
            Some(ModuleGrid::parse(&text)?)
        }
        None => None,
    };
    let shown = presenter.show_setup(grid.as_ref())?;
    tracing::debug!(?shown, "setup command finished");
    Ok(())
}

fn cmd_quantize(presenter: &mut Presenter<DigestSink>, args: QuantizeArgs) -> anyhow::Result<()> {
    let canvas = presenter.config().canvas;
    let rgb = read_rgb(&args.in_path, canvas)?;
    let buf = inkframe::pack_rgb888(&rgb, canvas)?;
    present(presenter, buf.as_bytes(), args.battery)
}

fn read_rgb(path: &Path, canvas: Canvas) -> anyhow::Result<Vec<u8>> {
    let is_image = path.extension().is_some_and(|ext| {
        ["png", "jpg", "jpeg", "bmp"]
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
    });
    if !is_image {
        return std::fs::read(path).with_context(|| format!("read raw rgb '{}'", path.display()));
    }

    let img = image::open(path)
        .with_context(|| format!("decode image '{}'", path.display()))?
        .to_rgb8();
    if img.dimensions() != (canvas.width, canvas.height) {
        anyhow::bail!(
            "image '{}' is {}x{}, panel is {}x{}",
            path.display(),
            img.width(),
            img.height(),
            canvas.width,
            canvas.height
        );
    }
    Ok(img.into_raw())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
