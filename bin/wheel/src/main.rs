//! Render the color wheel and inspect points on it from the command line.

use std::io::Write;
use std::path::PathBuf;

use chromawheel::{
    math::fmt_fixed,
    models::Srgb,
    tint_shade_ladder, Harmony, Palette, Point, Raster, Sample, WheelGeometry,
};
use clap::{Args as ClapArgs, CommandFactory, Parser, Subcommand, ValueEnum};
use image::RgbaImage;
use owo_colors::{OwoColorize as _, Stream};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Wheel(#[from] chromawheel::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("point ({0}, {1}) is outside the {2}x{2} wheel")]
    OutOfBounds(u32, u32, u32),
    #[error("raster does not match its dimensions")]
    RasterSize,
}

type Result<T> = std::result::Result<T, CliError>;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Procedural color wheel probe", long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    /// Side length of the wheel in pixels.
    #[clap(long, global = true, default_value_t = chromawheel::wheel::DEFAULT_SIZE)]
    size: u32,

    /// Radius of the hole. Defaults to the reference proportion of the size.
    #[clap(long, global = true)]
    inner: Option<f64>,

    /// Radius of the color field. Defaults to the reference proportion of the
    /// size.
    #[clap(long, global = true)]
    outer: Option<f64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Args {
    fn geometry(&self) -> Result<WheelGeometry> {
        let reference = WheelGeometry::new(self.size);
        if self.inner.is_none() && self.outer.is_none() {
            return Ok(reference);
        }

        Ok(WheelGeometry::with_radii(
            self.size,
            self.inner.unwrap_or(reference.inner_radius()),
            self.outer.unwrap_or(reference.outer_radius()),
        )?)
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

/// Where on the wheel to look.
#[derive(ClapArgs, Debug, Clone)]
struct Location {
    /// Angle in degrees, clockwise from the top.
    #[arg(long, default_value_t = 0.0)]
    angle: f64,

    /// Distance from the center in pixels. Defaults to the middle of the band.
    #[arg(long)]
    radius: Option<f64>,
}

impl Location {
    fn sample(&self, geometry: &WheelGeometry) -> Sample {
        let radius = self
            .radius
            .unwrap_or((geometry.inner_radius() + geometry.outer_radius()) / 2.0);
        Sample::probe_at(geometry, self.angle, radius)
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Write the wheel to a PNG file.
    Render {
        #[arg(default_value = "wheel.png")]
        out: PathBuf,
    },
    /// Describe the color at a point of the wheel.
    Probe {
        #[command(flatten)]
        location: Location,

        /// Read a pixel of the rendered wheel instead of the analytic color.
        #[arg(long, requires = "y", conflicts_with_all = ["angle", "radius"])]
        x: Option<u32>,

        #[arg(long, requires = "x")]
        y: Option<u32>,
    },
    /// List the colors of a harmony around a point.
    Harmony {
        #[command(flatten)]
        location: Location,

        /// One of Complementary, "Split Complementary", Analogous, Triadic
        /// or Tetradic.
        #[arg(long, default_value = "Complementary")]
        kind: Harmony,
    },
    /// Print tints and shades of a color.
    Tints {
        /// The base color as a hex string.
        hex: String,

        #[arg(long, default_value_t = 7)]
        steps: usize,
    },
    /// Collect a point and its harmony into a palette and print it as CSS.
    Css {
        #[command(flatten)]
        location: Location,

        #[arg(long)]
        kind: Option<Harmony>,
    },
}

fn main() {
    let args = Args::parse();
    args.color.init();

    let Some(command) = args.command.clone() else {
        let _ = Args::command().print_help();
        std::process::exit(1);
    };

    let mut stdout = std::io::stdout();
    if let Err(e) = run(&args, command, &mut stdout) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run<W: Write>(args: &Args, command: Commands, stdout: &mut W) -> Result<()> {
    let geometry = args.geometry()?;

    match command {
        Commands::Render { out } => render(&geometry, out, stdout),
        Commands::Probe { location, x, y } => {
            let sample = match (x, y) {
                (Some(x), Some(y)) => probe_pixel(&geometry, x, y)?,
                _ => location.sample(&geometry),
            };
            print_sample(&sample, stdout)
        }
        Commands::Harmony { location, kind } => {
            let sample = location.sample(&geometry);
            writeln!(stdout, "{} of {}", kind, sample.hex)?;
            for harmony in kind.angles(sample.angle) {
                let rgb = geometry.color_at(harmony.angle, sample.radius);
                write!(stdout, "{} ", swatch(&rgb))?;
                writeln!(
                    stdout,
                    "{:<8} {:>7}° {}",
                    harmony.label,
                    fmt_fixed(harmony.angle, 1),
                    rgb.to_hex()
                )?;
            }
            Ok(())
        }
        Commands::Tints { hex, steps } => {
            let base = Srgb::from_hex(&hex)?;
            for step in tint_shade_ladder(&base, steps) {
                writeln!(stdout, "{} {:<10} {}", swatch(&step.rgb), step.label, step.hex)?;
            }
            Ok(())
        }
        Commands::Css { location, kind } => {
            let sample = location.sample(&geometry);
            let mut palette = Palette::new();
            palette.add(&sample);
            if let Some(kind) = kind {
                palette.add_harmony(&geometry, &sample, kind);
            }
            writeln!(stdout, "{}", palette.export_css())?;
            Ok(())
        }
    }
}

fn render<W: Write>(geometry: &WheelGeometry, out: PathBuf, stdout: &mut W) -> Result<()> {
    let raster = Raster::synthesize(geometry);
    let size = raster.size();
    let image = RgbaImage::from_raw(size, size, raster.into_bytes()).ok_or(CliError::RasterSize)?;
    image.save(&out)?;

    writeln!(
        stdout,
        "{} {}",
        "Wrote".if_supports_color(Stream::Stdout, |s| s.green()),
        out.display().if_supports_color(Stream::Stdout, |s| s.bold()),
    )?;
    Ok(())
}

fn probe_pixel(geometry: &WheelGeometry, x: u32, y: u32) -> Result<Sample> {
    let raster = Raster::synthesize(geometry);
    let rgb = raster
        .color(x, y)
        .ok_or(CliError::OutOfBounds(x, y, raster.size()))?;
    let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
    Ok(Sample::probe(geometry, rgb, center))
}

/// A two character block painted in the color, when the terminal allows.
fn swatch(rgb: &Srgb) -> String {
    let [r, g, b] = rgb.to_bytes();
    format!(
        "{}",
        "  ".if_supports_color(Stream::Stdout, |s| s.on_truecolor(r, g, b))
    )
}

fn print_sample<W: Write>(s: &Sample, stdout: &mut W) -> Result<()> {
    let f = |v: f64| fmt_fixed(v, 3);

    writeln!(
        stdout,
        "{} {}  {}",
        swatch(&s.rgb),
        s.hex.if_supports_color(Stream::Stdout, |h| h.bold()),
        s.css
    )?;
    writeln!(
        stdout,
        "point     ({}, {})  θ {}°  r {}  {}",
        fmt_fixed(s.point.x, 1),
        fmt_fixed(s.point.y, 1),
        fmt_fixed(s.angle, 2),
        fmt_fixed(s.radius, 1),
        if s.inside { "inside" } else { "outside" }
    )?;
    writeln!(
        stdout,
        "linear    {} {} {}",
        f(s.linear.red),
        f(s.linear.green),
        f(s.linear.blue)
    )?;
    writeln!(
        stdout,
        "hsl       {}° {}% {}%",
        fmt_fixed(s.hsl.hue, 1),
        fmt_fixed(s.hsl.saturation * 100.0, 1),
        fmt_fixed(s.hsl.lightness * 100.0, 1)
    )?;
    writeln!(
        stdout,
        "hsv       {}° {}% {}%",
        fmt_fixed(s.hsv.hue, 1),
        fmt_fixed(s.hsv.saturation * 100.0, 1),
        fmt_fixed(s.hsv.value * 100.0, 1)
    )?;
    writeln!(
        stdout,
        "hwb       {}° {}% {}%",
        fmt_fixed(s.hwb.hue, 1),
        fmt_fixed(s.hwb.whiteness * 100.0, 1),
        fmt_fixed(s.hwb.blackness * 100.0, 1)
    )?;
    writeln!(
        stdout,
        "cmyk      {}% {}% {}% {}%",
        fmt_fixed(s.cmyk.cyan * 100.0, 1),
        fmt_fixed(s.cmyk.magenta * 100.0, 1),
        fmt_fixed(s.cmyk.yellow * 100.0, 1),
        fmt_fixed(s.cmyk.key * 100.0, 1)
    )?;
    writeln!(stdout, "xyz       {} {} {}", f(s.xyz.x), f(s.xyz.y), f(s.xyz.z))?;
    writeln!(stdout, "xyY       {} {} {}", f(s.xyy.x), f(s.xyy.y), f(s.xyy.luminance))?;
    writeln!(stdout, "u'v'      {} {}", f(s.uv.u), f(s.uv.v))?;
    writeln!(
        stdout,
        "lab       {} {} {}",
        fmt_fixed(s.lab.lightness, 2),
        fmt_fixed(s.lab.a, 2),
        fmt_fixed(s.lab.b, 2)
    )?;
    writeln!(
        stdout,
        "lch       {} {} {}°",
        fmt_fixed(s.lch.lightness, 2),
        fmt_fixed(s.lch.chroma, 2),
        fmt_fixed(s.lch.hue, 1)
    )?;
    writeln!(
        stdout,
        "oklab     {} {} {}",
        f(s.oklab.lightness),
        f(s.oklab.a),
        f(s.oklab.b)
    )?;
    writeln!(
        stdout,
        "oklch     {} {} {}°",
        f(s.oklch.lightness),
        f(s.oklch.chroma),
        fmt_fixed(s.oklch.hue, 1)
    )?;
    writeln!(stdout, "cct       {} K", fmt_fixed(s.cct, 0))?;
    writeln!(
        stdout,
        "artist    {}, {}, value {}, chroma {}",
        s.descriptors.hue_name,
        s.descriptors.temperature,
        fmt_fixed(s.descriptors.value, 1),
        fmt_fixed(s.descriptors.chroma, 1)
    )?;

    let a = &s.accessibility;
    writeln!(
        stdout,
        "contrast  white {}:1 {}  black {}:1 {}  luminance {}",
        fmt_fixed(a.contrast_white, 2),
        a.level_white,
        fmt_fixed(a.contrast_black, 2),
        a.level_black,
        f(a.luminance)
    )?;

    if let Some(c) = &s.complement {
        writeln!(
            stdout,
            "opposite  {} {} at {}°  ΔE76 {}",
            swatch(&c.rgb),
            c.hex,
            fmt_fixed(c.angle, 1),
            fmt_fixed(c.delta_e76, 2)
        )?;
    }

    Ok(())
}
