use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels exposed on the command line.
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "lumaray")]
#[command(about = "A minimal diffuse-sphere ray tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "800", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "600", help = "Image height in pixels")]
    pub height: u32,

    /// Horizontal field of view in degrees
    #[arg(long, default_value = "90.0", help = "Horizontal field of view in degrees")]
    pub fov: f64,

    /// Device pixel ratio applied to both raster dimensions
    #[arg(long, default_value = "1.0", help = "Device pixel ratio applied to both raster dimensions")]
    pub scale: f64,

    /// Output file path (PNG)
    #[arg(short, long, default_value = "output.png", help = "Output file path (PNG)")]
    pub output: String,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,
}
