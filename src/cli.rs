use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Preset to simulate (name or slug, e.g. "soft-spring")
    #[arg(long, default_value = "Soft Spring")]
    pub preset: String,

    /// List built-in presets and exit
    #[arg(long, default_value_t = false)]
    pub list_presets: bool,

    /// Path to engine config JSON
    #[arg(long)]
    pub config: Option<String>,

    /// Override the preset's damping coefficient
    #[arg(long)]
    pub damping: Option<f64>,

    /// Override the preset's simulation speed
    #[arg(long)]
    pub speed: Option<f64>,

    /// Grid intervals of the generated series (overrides config)
    #[arg(long)]
    pub samples: Option<usize>,

    /// Periods spanned by the generated series (overrides config)
    #[arg(long)]
    pub periods: Option<f64>,

    /// Write the generated series to a CSV file
    #[arg(long)]
    pub csv: Option<String>,

    /// Run a headless live session at 60 fps for this many wall-clock seconds,
    /// paced by the system clock
    #[arg(long)]
    pub live: Option<f64>,
}
