use anyhow::{anyhow, Context};
use cantilever::{
    timed, Coordinate, Hexagon, MaterialConfig, Materials, Scale, Triangle,
};
use config::{Config, File};
use log::{info, LevelFilter};
use serde::Serialize;
use serde_json::json;
use simple_logger::SimpleLogger;
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;

/// CLI for inspecting the Cantilever lattice: grids, profiles and topology
/// of single triangles, printed as JSON.
#[derive(Debug, StructOpt)]
#[structopt(name = "cantilever")]
struct Opt {
    /// Path to a config file that defines material colors. Supported
    /// formats: JSON, TOML. Defaults are used for any missing fields
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// If given, output is written to this file instead of stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The logging level to use. Logs are printed to stdout, so anything
    /// above warn will be mixed in with the output unless `--output` is
    /// given. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

/// A triangle to operate on. Coordinates are written `x,y,z` or `[x, y, z]`
#[derive(Debug, StructOpt)]
struct TriangleArgs {
    /// Anchor of the triangle, read at `--scale`
    #[structopt(long, allow_hyphen_values = true)]
    coordinate: Coordinate,

    /// tile, chunk or region
    #[structopt(long, default_value = "tile")]
    scale: Scale,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// List the raster of tile triangles laid over a triangle
    Triangulate {
        #[structopt(flatten)]
        triangle: TriangleArgs,

        /// Drop repeated triangles from the output
        #[structopt(long)]
        dedup: bool,
    },
    /// List the tile vertices used to edit a triangle
    Handles {
        #[structopt(flatten)]
        triangle: TriangleArgs,

        /// Drop repeated handles from the output
        #[structopt(long)]
        dedup: bool,
    },
    /// List the 15 profile points of a triangle, in world space
    Profile {
        #[structopt(flatten)]
        triangle: TriangleArgs,
    },
    /// Describe a triangle's corners, neighbours, perimeter and material
    Inspect {
        #[structopt(flatten)]
        triangle: TriangleArgs,
    },
    /// List the corners and triangles of the hexagon around a vertex
    Hexagon {
        /// The center vertex. Components must sum to -1
        #[structopt(long, allow_hyphen_values = true)]
        coordinate: Coordinate,
    },
    /// Convert a coordinate between scales
    Convert {
        #[structopt(long, allow_hyphen_values = true)]
        coordinate: Coordinate,

        #[structopt(long)]
        from: Scale,

        #[structopt(long)]
        to: Scale,
    },
}

fn load_config(config_path: &Path) -> anyhow::Result<MaterialConfig> {
    // Load config
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("error serializing output")
}

/// Describe a single triangle, with every piece of topology and the
/// material it would be drawn with.
fn inspect(
    triangle: Triangle,
    scale: Scale,
    materials: &Materials,
) -> serde_json::Value {
    let color = materials.triangle_color(&triangle, scale);
    json!({
        "coordinate": triangle.coordinate(),
        "id": triangle.coordinate().id(),
        "scale": scale,
        "orientation": triangle.orientation(),
        "corners": triangle.corners(),
        "neighbours": triangle.neighbours(),
        "perimeter": triangle.perimeter(),
        "vertices": triangle.vertices(scale),
        "centroid": triangle.centroid(scale),
        "material": triangle.material_key(scale),
        "color": color.to_html(),
    })
}

/// Run the selected command, producing the text to output
fn gen_output(
    command: Command,
    materials: &Materials,
) -> anyhow::Result<String> {
    match command {
        Command::Triangulate {
            triangle: TriangleArgs { coordinate, scale },
            dedup,
        } => {
            let triangulation = timed!(
                format!("Triangulating {} at {} scale", coordinate, scale),
                log::Level::Info,
                Triangle::new(coordinate).triangulation(scale)
            );
            if dedup {
                to_json(&triangulation.deduplicated())
            } else {
                to_json(&triangulation)
            }
        }
        Command::Handles {
            triangle: TriangleArgs { coordinate, scale },
            dedup,
        } => {
            let handles = timed!(
                format!(
                    "Generating handles for {} at {} scale",
                    coordinate, scale
                ),
                log::Level::Info,
                Triangle::new(coordinate).handles(scale)
            );
            if dedup {
                to_json(&handles.deduplicated())
            } else {
                to_json(&handles)
            }
        }
        Command::Profile {
            triangle: TriangleArgs { coordinate, scale },
        } => to_json(&Triangle::new(coordinate).profile(scale)),
        Command::Inspect {
            triangle: TriangleArgs { coordinate, scale },
        } => to_json(&inspect(Triangle::new(coordinate), scale, materials)),
        Command::Hexagon { coordinate } => {
            if !coordinate.sums_to_negative_one() {
                log::warn!(
                    "{} doesn't sum to -1, so it isn't a lattice vertex",
                    coordinate
                );
            }
            let hexagon = Hexagon::new(coordinate);
            to_json(&json!({
                "coordinate": hexagon.coordinate(),
                "corners": hexagon.corners(),
                "triangles": hexagon.triangles(),
            }))
        }
        Command::Convert {
            coordinate,
            from,
            to,
        } => to_json(&coordinate.convert(from, to)),
    }
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => {
            let config = load_config(config_path)?;
            info!("Loaded material config from {:?}", config_path);
            config
        }
        None => MaterialConfig::default(),
    };
    let materials =
        Materials::new(&config).context("invalid material config")?;

    let mut output = gen_output(opt.command, &materials)?;
    output.push('\n');

    match opt.output {
        Some(output_path) => {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_path)
                })?;
            file.write_all(output.as_bytes()).with_context(|| {
                format!("error writing to file {:?}", &output_path)
            })?;
            info!("Wrote output to {:?}", &output_path);
        }
        None => io::stdout()
            .write_all(output.as_bytes())
            .context("error writing to stdout")?,
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
