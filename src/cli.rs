/*!
simpler-eda Command Line Interface

Builds an exploratory chart from a table file (or a built-in dataset) and
prints it as Vega-Lite JSON or a standalone HTML page.
*/

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use simpler_eda::reader::{BuiltinReader, FileReader, Reader};
use simpler_eda::writer::{HtmlWriter, VegaLiteWriter, Writer};
use simpler_eda::{
    categorical_plot, corr_map, numerical_plot, CategoricalOptions, Chart, CorrMapOptions,
    DataFrame, NumericalOptions, VERSION,
};

#[derive(Parser)]
#[command(name = "simpler-eda")]
#[command(about = "Exploratory data analysis charts as Vega-Lite specifications")]
#[command(version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the table comes from and where the chart goes
#[derive(Args)]
pub struct IoArgs {
    /// Table file (csv, parquet, arrow, ipc or feather)
    #[arg(long, conflicts_with = "builtin", required_unless_present = "builtin")]
    data: Option<PathBuf>,

    /// Built-in dataset name (cars)
    #[arg(long)]
    builtin: Option<String>,

    /// Output format (vegalite, html)
    #[arg(long, default_value = "vegalite")]
    format: String,

    /// Output file path (stdout if absent)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Histogram or density plot of one feature
    Categorical {
        /// Feature on the x-axis
        #[arg(long)]
        xval: String,

        /// Plot type (histogram, density)
        #[arg(long, default_value = "histogram")]
        plot_type: String,

        /// Column to color by
        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, default_value_t = 10)]
        font_size: u32,

        #[arg(long, default_value = "tableau20")]
        color_scheme: String,

        #[arg(long, default_value_t = 150)]
        plot_height: u32,

        #[arg(long, default_value_t = 200)]
        plot_width: u32,

        /// Density area opacity, in (0, 1]
        #[arg(long, default_value_t = 1.0)]
        opacity: f64,

        /// Column to facet by (requires --facet-col)
        #[arg(long)]
        facet_factor: Option<String>,

        /// Facet panels per row (requires --facet-factor)
        #[arg(long)]
        facet_col: Option<u32>,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Scatter or line chart of two numeric features
    Numerical {
        #[arg(long)]
        xval: String,

        #[arg(long)]
        yval: String,

        /// Plot type (scatter, line)
        #[arg(long, default_value = "scatter")]
        plot_type: String,

        /// Column to color by, or a fixed CSS color
        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, default_value_t = 10)]
        font_size: u32,

        #[arg(long, default_value = "yellowgreenblue")]
        color_scheme: String,

        #[arg(long, default_value_t = 400)]
        plot_width: u32,

        #[arg(long, default_value_t = 300)]
        plot_height: u32,

        /// Natural log of the x values
        #[arg(long)]
        x_transform: bool,

        /// Natural log of the y values
        #[arg(long)]
        y_transform: bool,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Correlation heatmap of numeric features
    Corr {
        /// Comma-separated list of numeric features
        #[arg(long, value_delimiter = ',', required = true)]
        features: Vec<String>,

        /// Correlation method (pearson, kendall, spearman)
        #[arg(long, default_value = "pearson")]
        corr_method: String,

        #[arg(long, default_value = "blueorange")]
        color_scheme: String,

        #[arg(long, default_value_t = 450)]
        plot_width: u32,

        #[arg(long, default_value_t = 450)]
        plot_height: u32,

        #[arg(long, default_value = "Correlation Map")]
        title: String,

        #[command(flatten)]
        io: IoArgs,
    },
}

fn load_table(io: &IoArgs) -> anyhow::Result<DataFrame> {
    let df = match (&io.data, &io.builtin) {
        (Some(path), _) => FileReader::new(path)?.read()?,
        (None, Some(name)) => BuiltinReader::new(name).read()?,
        (None, None) => anyhow::bail!("Either --data or --builtin must be given"),
    };
    Ok(df)
}

fn render(chart: &Chart, format: &str) -> anyhow::Result<String> {
    let output = match format {
        "vegalite" => VegaLiteWriter::new().write(chart)?,
        "html" => HtmlWriter::new().write(chart)?,
        other => anyhow::bail!("Unsupported output format '{}' (expected vegalite or html)", other),
    };
    Ok(output)
}

fn emit(chart: &Chart, io: &IoArgs) -> anyhow::Result<()> {
    // warnings were already logged by the library when they were recorded
    tracing::debug!(warnings = chart.warnings().len(), "Rendering chart");
    let output = render(chart, &io.format)?;
    match &io.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            tracing::info!(path = %path.display(), format = %io.format, "Chart written");
        }
        None => println!("{}", output),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Categorical {
            xval,
            plot_type,
            color,
            title,
            font_size,
            color_scheme,
            plot_height,
            plot_width,
            opacity,
            facet_factor,
            facet_col,
            io,
        } => {
            let options = CategoricalOptions {
                xval,
                plot_type: plot_type.parse()?,
                color,
                title,
                font_size,
                color_scheme,
                plot_height,
                plot_width,
                opacity,
                facet_factor,
                facet_col,
            };
            let data = load_table(&io)?;
            emit(&categorical_plot(&data, &options)?, &io)
        }

        Commands::Numerical {
            xval,
            yval,
            plot_type,
            color,
            title,
            font_size,
            color_scheme,
            plot_width,
            plot_height,
            x_transform,
            y_transform,
            io,
        } => {
            let options = NumericalOptions {
                xval,
                yval,
                plot_type: plot_type.parse()?,
                color,
                title,
                font_size,
                color_scheme,
                plot_width,
                plot_height,
                x_transform,
                y_transform,
            };
            let data = load_table(&io)?;
            emit(&numerical_plot(&data, &options)?, &io)
        }

        Commands::Corr {
            features,
            corr_method,
            color_scheme,
            plot_width,
            plot_height,
            title,
            io,
        } => {
            let options = CorrMapOptions {
                features,
                corr_method: corr_method.parse()?,
                color_scheme,
                plot_width,
                plot_height,
                title,
            };
            let data = load_table(&io)?;
            emit(&corr_map(&data, &options)?, &io)
        }
    }
}
