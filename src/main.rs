//! Latticenoise CLI - seeded noise sampling and export.
//!
//! Samples value/Perlin noise over parametric surfaces and writes the result
//! as colour PNG, 16-bit PNG or RAW heightmaps.

use clap::{Args, Parser, Subcommand};
use glam::{Mat4, Vec3};
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use latticenoise::export::{export_color_png, export_raw, export_scalar_png16, ExportError, RawFormat};
use latticenoise::geometry::Shape;
use latticenoise::noise::{
    evaluate_fractal, evaluate_noise, seed_hash, Dimension, NoiseError, NoiseKind, TopologyKind,
};
use latticenoise::sampling::{
    generate_samples, load_config, save_config, ConfigError, SampleError, SampleMode, VisualizationConfig,
};

/// Seeded lattice noise sampler.
#[derive(Parser)]
#[command(name = "latticenoise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a surface and export images.
    Render {
        #[command(flatten)]
        settings: Settings,

        /// Output directory for generated files.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "noise")]
        name: String,

        /// Number of animation frames; the domain moves by its motion between frames.
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        frames: u32,

        /// Seconds between frames.
        #[arg(long, default_value = "0.0333")]
        dt: f32,

        /// Also write the noise values as a 16-bit grayscale PNG.
        #[arg(long)]
        png16: bool,

        /// Also write the noise values as RAW in this format.
        #[arg(long)]
        raw: Option<RawFormat>,
    },

    /// Evaluate the noise at a single position.
    Sample {
        #[command(flatten)]
        settings: Settings,

        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        y: f32,
        #[arg(allow_negative_numbers = true)]
        z: f32,
    },

    /// Display the resolved configuration as JSON.
    Info {
        #[command(flatten)]
        settings: Settings,

        /// Write the configuration to this file instead of stdout.
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

/// Configuration overrides shared by all subcommands.
#[derive(Args)]
struct Settings {
    /// JSON configuration file; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible noise. Random when neither this nor a config file is given.
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i32>,

    #[arg(long)]
    noise: Option<NoiseKind>,

    #[arg(long)]
    topology: Option<TopologyKind>,

    #[arg(long)]
    dimension: Option<Dimension>,

    #[arg(long)]
    shape: Option<Shape>,

    #[arg(long)]
    mode: Option<SampleMode>,

    /// Grid points per side (1-512).
    #[arg(short, long)]
    resolution: Option<u32>,

    #[arg(long)]
    octaves: Option<u32>,

    /// Lattice frequency of the first octave.
    #[arg(long)]
    frequency: Option<i32>,

    #[arg(long)]
    lacunarity: Option<i32>,

    #[arg(long)]
    persistence: Option<f32>,

    /// Displacement along the surface normal per unit of noise.
    #[arg(long)]
    displacement: Option<f32>,

    /// Uniform scale of the noise domain.
    #[arg(long)]
    domain_scale: Option<f32>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error(transparent)]
    Noise(#[from] NoiseError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Settings {
    fn resolve(&self) -> Result<VisualizationConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => VisualizationConfig {
                fractal: latticenoise::FractalConfig::with_seed(rand::random()),
                ..Default::default()
            },
        };

        if let Some(seed) = self.seed {
            config.fractal.seed = seed;
        }
        if let Some(noise) = self.noise {
            config.noise = noise;
        }
        if let Some(topology) = self.topology {
            config.topology = topology;
        }
        if let Some(dimension) = self.dimension {
            config.dimension = dimension;
        }
        if let Some(shape) = self.shape {
            config.shape = shape;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(resolution) = self.resolution {
            config.resolution = resolution;
        }
        if let Some(octaves) = self.octaves {
            config.fractal.octaves = octaves;
        }
        if let Some(frequency) = self.frequency {
            config.fractal.frequency = frequency;
        }
        if let Some(lacunarity) = self.lacunarity {
            config.fractal.lacunarity = lacunarity;
        }
        if let Some(persistence) = self.persistence {
            config.fractal.persistence = persistence;
        }
        if let Some(displacement) = self.displacement {
            config.displacement = displacement;
        }
        if let Some(scale) = self.domain_scale {
            config.domain.scale = Vec3::splat(scale);
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            settings,
            output,
            name,
            frames,
            dt,
            png16,
            raw,
        } => run_render(&settings, &output, &name, frames, dt, png16, raw),
        Commands::Sample { settings, x, y, z } => run_sample(&settings, Vec3::new(x, y, z)),
        Commands::Info { settings, save } => run_info(&settings, save.as_deref()),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_render(
    settings: &Settings,
    output: &Path,
    name: &str,
    frames: u32,
    dt: f32,
    png16: bool,
    raw: Option<RawFormat>,
) -> Result<(), CliError> {
    let mut config = settings.resolve()?;

    println!("Latticenoise - Surface Sampler");
    println!("==============================");
    println!("Shape: {:?}", config.shape);
    println!("Resolution: {}x{}", config.resolution, config.resolution);
    println!("Noise: {:?} ({:?}, {}D)", config.noise, config.topology, u8::from(config.dimension));
    println!("Seed: {}", config.fractal.seed);
    println!("Output: {}", output.display());

    std::fs::create_dir_all(output)?;
    let start = Instant::now();

    for frame in 0..frames {
        let grid = generate_samples(&config, Mat4::IDENTITY)?;
        let (min, max) = grid.value_range();

        let stem = if frames == 1 {
            name.to_string()
        } else {
            format!("{}_{:04}", name, frame)
        };

        let color_path = output.join(format!("{}.png", stem));
        export_color_png(&grid, &color_path)?;
        println!("\nFrame {}: value range [{:.4}, {:.4}]", frame, min, max);
        println!("  Colour: {}", color_path.display());

        if png16 {
            let path = output.join(format!("{}_values.png", stem));
            export_scalar_png16(grid.resolution, &grid.values(), &path, -1.0, 1.0)?;
            println!("  16-bit: {}", path.display());
        }
        if let Some(format) = raw {
            let path = output.join(format!("{}.raw", stem));
            export_raw(&grid.values(), &path, format, -1.0, 1.0)?;
            println!("  RAW:    {}", path.display());
        }

        config = config.advanced(dt);
    }

    println!("\nDone in {:.2?}", start.elapsed());
    Ok(())
}

fn run_sample(settings: &Settings, position: Vec3) -> Result<(), CliError> {
    let config = settings.resolve()?;
    let hash = seed_hash(config.fractal.seed);

    let value = match config.mode {
        SampleMode::Single => evaluate_noise(
            config.noise,
            config.topology,
            config.dimension,
            hash,
            position,
            config.fractal.frequency,
        )?,
        SampleMode::Fractal => evaluate_fractal(
            &config.fractal,
            config.noise,
            config.topology,
            config.dimension,
            hash,
            position,
        )?,
    };

    println!("{}", value);
    Ok(())
}

fn run_info(settings: &Settings, save: Option<&Path>) -> Result<(), CliError> {
    let config = settings.resolve()?;
    match save {
        Some(path) => {
            save_config(&config, path)?;
            println!("Configuration written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}
