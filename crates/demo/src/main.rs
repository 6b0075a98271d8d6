// File: crates/demo/src/main.rs
// Summary: Demo CLI: renders sample figures, JSON parameter files and CSV columns with the skia renderer.

mod cli;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use prettyplot_core::template::{hist_template, imshow_template, plot_template};
use prettyplot_core::{
    single_hist, single_imshow, single_plot, version, AxisValue, Bins, ColorbarParams, ErrorBar,
    Grid, HistParams, ImageFormat, ImshowParams, Interpolation, LegendLoc, LegendPosition,
    LineStyle, Marker, OutputParams, PlotParams, RecordingRenderer, Renderer, SeriesSet,
    StyleValue, XData, XYData,
};
use prettyplot_render_skia::SkiaRenderer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, CsvArgs, Kind, RenderArgs, SamplesArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Samples(args) => samples(&args),
        Commands::Render(args) => render(&args),
        Commands::Csv(args) => csv_columns(&args),
        Commands::Template { kind } => {
            let text = match kind {
                Kind::Plot => plot_template()?,
                Kind::Hist => hist_template()?,
                Kind::Imshow => imshow_template()?,
            };
            println!("{text}");
            Ok(())
        }
        Commands::Info => {
            println!("{}", version::summary());
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed by an embedding host.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().try_init();
}

fn output_to(path: PathBuf, img_fmt: ImageFormat) -> OutputParams {
    OutputParams { filename: Some(path), img_fmt, show: false }
}

fn samples(args: &SamplesArgs) -> Result<()> {
    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let file = |stem: &str| args.out.join(format!("{stem}.{}", args.format.extension()));
    let mut renderer = SkiaRenderer::new();

    // Dual-axis line + scatter plot with error bars.
    let x: Vec<f64> = (0..60).map(|i| i as f64 * 0.1).collect();
    let damped = XYData::new(x.clone(), x.iter().map(|t| (-t / 3.0).exp() * (3.0 * t).cos()).collect())?;
    let envelope = XYData::new(x.clone(), x.iter().map(|t| (-t / 3.0).exp()).collect())?;
    let xs: Vec<f64> = (1..=6).map(|i| i as f64).collect();
    let measured = XYData::new(xs.clone(), xs.iter().map(|t| 10f64.powf(*t / 2.0)).collect())?
        .with_yerr(ErrorBar::Asymmetric { lower: vec![0.5; 6], upper: vec![2.0; 6] })?;
    let mut plot = PlotParams {
        xy_data_sets: SeriesSet::Dual(vec![damped, envelope], vec![measured]),
        scatterplot: AxisValue::Split(false, true),
        linestyles: Some(StyleValue::PerGroup(vec![LineStyle::Solid, LineStyle::Dashed], vec![LineStyle::None])),
        markers: Some(StyleValue::PerGroup(vec![Marker::None, Marker::None], vec![Marker::Square])),
        legend_labels: Some(StyleValue::PerSeries(vec!["signal".into(), "envelope".into(), "counts".into()])),
        y_log_scale: AxisValue::Split(false, true),
        x_label: "time (s)".into(),
        y_label: AxisValue::Split("amplitude".into(), "counts".into()),
        hlines: vec![0.0],
        grid_linewidth: 1.0,
        output: output_to(file("plot"), args.format),
        ..PlotParams::default()
    };
    plot.legend.legend_loc = LegendLoc::Named(LegendPosition::UpperRight);
    plot.figure.title = "Damped oscillation".into();
    plot.figure.fig_label = "(a)".into();
    single_plot(&mut renderer, &plot).context("rendering sample plot")?;
    info!(path = %file("plot").display(), "wrote sample plot");

    // Two overlapping histograms.
    let wide: Vec<f64> = (0..2000).map(|i| pseudo_normal(i, 0.0, 1.5)).collect();
    let narrow: Vec<f64> = (0..2000).map(|i| pseudo_normal(i + 7919, 1.0, 0.7)).collect();
    let mut hist = HistParams {
        x_data_sets: vec![XData::new(wide), XData::new(narrow)],
        bins: Bins::Count(30),
        alphas: StyleValue::Scalar(0.6),
        normalized: true,
        legend_labels: Some(vec!["wide".into(), "narrow".into()]),
        x_label: "value".into(),
        y_label: "density".into(),
        output: output_to(file("hist"), args.format),
        ..HistParams::default()
    };
    hist.figure.fig_label = "(b)".into();
    single_hist(&mut renderer, &hist).context("rendering sample histogram")?;
    info!(path = %file("hist").display(), "wrote sample histogram");

    // Image with a labelled colorbar.
    let z = Grid::from_fn(24, 32, |r, c| {
        let (y, x) = (r as f64 / 4.0 - 3.0, c as f64 / 4.0 - 4.0);
        (x * y).sin() + 0.2 * x
    });
    let mut imshow = ImshowParams {
        interpolation: Interpolation::Bilinear,
        colorbar: ColorbarParams { label: "height".into(), ..ColorbarParams::default() },
        xticks: Some(vec![0.0, 8.0, 16.0, 24.0]),
        xticklabels: Some(vec!["-4".into(), "-2".into(), "0".into(), "2".into()]),
        x_label: "x".into(),
        y_label: "y".into(),
        output: output_to(file("imshow"), args.format),
        ..ImshowParams::new(z)
    };
    imshow.figure.fig_label = "(c)".into();
    single_imshow(&mut renderer, &imshow).context("rendering sample image")?;
    info!(path = %file("imshow").display(), "wrote sample image");
    Ok(())
}

/// Deterministic, roughly normal samples (sum of uniform hashes).
fn pseudo_normal(seed: usize, mean: f64, sd: f64) -> f64 {
    let mut state = (seed as u64).wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut sum = 0.0;
    for _ in 0..12 {
        state ^= state >> 33;
        state = state.wrapping_mul(0xff51afd7ed558ccd);
        state ^= state >> 29;
        sum += (state >> 11) as f64 / (1u64 << 53) as f64;
    }
    mean + sd * (sum - 6.0)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn render(args: &RenderArgs) -> Result<()> {
    if args.dry_run {
        let mut recorder = RecordingRenderer::new();
        dispatch(&mut recorder, args)?;
        for call in recorder.call_names() {
            println!("{call}");
        }
        return Ok(());
    }
    let mut renderer = SkiaRenderer::new().with_window_title(args.params.display().to_string());
    dispatch(&mut renderer, args)
}

/// Load the parameter file for `args.kind`, apply the command line overrides and draw.
fn dispatch<R: Renderer>(renderer: &mut R, args: &RenderArgs) -> Result<()> {
    let patch = |output: &mut OutputParams| {
        if let Some(out) = &args.out {
            output.filename = Some(out.clone());
        }
        if args.no_show || args.dry_run {
            output.show = false;
        }
    };
    let what = args.params.display();
    match args.kind {
        Kind::Plot => {
            let mut params: PlotParams = read_json(&args.params)?;
            patch(&mut params.output);
            single_plot(renderer, &params).with_context(|| format!("plotting {what}"))
        }
        Kind::Hist => {
            let mut params: HistParams = read_json(&args.params)?;
            patch(&mut params.output);
            single_hist(renderer, &params).with_context(|| format!("histogramming {what}"))
        }
        Kind::Imshow => {
            let mut params: ImshowParams = read_json(&args.params)?;
            patch(&mut params.output);
            single_imshow(renderer, &params).with_context(|| format!("imaging {what}"))
        }
    }
}

/// Columns of a CSV file: the header names and one `Vec` per column.
/// Cells that do not parse as numbers become NaN and break the drawn line.
struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<f64>>,
}

fn read_table(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut columns = vec![Vec::new(); headers.len()];
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("{}: record {}", path.display(), line + 1))?;
        for (col, values) in columns.iter_mut().enumerate() {
            let cell = record.get(col).unwrap_or("");
            values.push(cell.parse::<f64>().unwrap_or(f64::NAN));
        }
    }
    Ok(Table { headers, columns })
}

fn csv_columns(args: &CsvArgs) -> Result<()> {
    let table = read_table(&args.file)?;
    let Some((x, rest)) = table.columns.split_first() else {
        anyhow::bail!("{} has no columns", args.file.display());
    };
    let mut series = Vec::new();
    let mut labels = Vec::new();
    for (name, y) in table.headers.iter().skip(1).zip(rest) {
        if y.iter().all(|v| v.is_nan()) {
            warn!(column = %name, "skipping column without numeric values");
            continue;
        }
        series.push(XYData::new(x.clone(), y.clone())?);
        labels.push(name.clone());
    }
    if series.is_empty() {
        anyhow::bail!("{} has no numeric columns besides the first", args.file.display());
    }

    let out = args.out.clone().unwrap_or_else(|| args.file.with_extension("svg"));
    let img_fmt = out
        .extension()
        .and_then(|e| e.to_str())
        .and_then(|e| e.parse::<ImageFormat>().ok())
        .unwrap_or(ImageFormat::Svg);
    let params = PlotParams {
        xy_data_sets: SeriesSet::Single(series),
        scatterplot: AxisValue::Both(args.scatter),
        legend_labels: Some(StyleValue::PerSeries(labels)),
        y_log_scale: AxisValue::Both(args.log_y),
        x_label: table.headers.first().cloned().unwrap_or_default(),
        output: output_to(out.clone(), img_fmt),
        ..PlotParams::default()
    };
    let mut renderer = SkiaRenderer::new();
    single_plot(&mut renderer, &params).with_context(|| format!("plotting {}", args.file.display()))?;
    info!(path = %out.display(), series = params.xy_data_sets.sizes().left, "wrote csv plot");
    Ok(())
}
