use clap::{Parser, Subcommand};
use ds_app::{AppError, AppResult, RunOptions, RunRequest, project_service, query, run_service};
use ds_sim::{StepOutcome, derive};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use uom::si::angular_velocity::radian_per_second;
use uom::si::time::second;

#[derive(Parser)]
#[command(name = "ds-cli")]
#[command(about = "dampsim CLI - damped harmonic oscillator simulation tool", long_about = None)]
struct Cli {
    /// Print wall-clock timings of run stages
    #[arg(long, global = true)]
    timing: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and parameters
    Validate {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
    },
    /// Show natural frequency, damping ratio and related quantities
    Derive {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Override an editable parameter (name=value), repeatable
        #[arg(long = "set", value_parser = parse_override)]
        overrides: Vec<(String, f64)>,
    },
    /// Compute the full trajectory (cached per parameter set)
    Run {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
        /// Override an editable parameter (name=value), repeatable
        #[arg(long = "set", value_parser = parse_override)]
        overrides: Vec<(String, f64)>,
    },
    /// List cached runs for a project
    Runs {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
    },
    /// Export a cached trajectory as CSV
    ExportSeries {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write window.DAMP_PARAMS for a browser front-end
    ParamsJs {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Output file
        #[arg(short, long, default_value = "params.js")]
        output: PathBuf,
    },
    /// Drive the live animation headless and print the mass position
    Animate {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Frame rate of the simulated display
        #[arg(long, default_value_t = 60.0)]
        fps: f64,
        /// Stop after this many frames even if still playing
        #[arg(long, default_value_t = 10_000)]
        frames: usize,
        /// Pace frames against the wall clock instead of a fixed frame time
        #[arg(long)]
        realtime: bool,
        /// Print every N-th frame
        #[arg(long, default_value_t = 6)]
        print_every: usize,
        /// Override an editable parameter (name=value), repeatable
        #[arg(long = "set", value_parser = parse_override)]
        overrides: Vec<(String, f64)>,
    },
}

fn parse_override(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid number for {}: {e}", name.trim()))?;
    Ok((name.trim().to_string(), value))
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.timing {
        ds_core::timing::enable_timing();
    }

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Derive {
            project_path,
            overrides,
        } => cmd_derive(&project_path, &overrides),
        Commands::Run {
            project_path,
            no_cache,
            overrides,
        } => cmd_run(&project_path, !no_cache, &overrides),
        Commands::Runs { project_path } => cmd_runs(&project_path),
        Commands::ExportSeries {
            project_path,
            run_id,
            output,
        } => cmd_export_series(&project_path, &run_id, output.as_deref()),
        Commands::ParamsJs {
            project_path,
            output,
        } => cmd_params_js(&project_path, &output),
        Commands::Animate {
            project_path,
            fps,
            frames,
            realtime,
            print_every,
            overrides,
        } => cmd_animate(
            &project_path,
            fps,
            frames,
            realtime,
            print_every,
            &overrides,
        ),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    let params = project.parameters()?;
    println!("✓ Project is valid");
    if project.parameters.duration.is_none() {
        println!(
            "  duration not set, using 1% settling estimate: {:.3} s",
            params.duration
        );
    }
    Ok(())
}

fn cmd_derive(project_path: &Path, overrides: &[(String, f64)]) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let params = project_service::resolve_parameters(&project, overrides)?;
    let d = derive(&params);

    println!("Derived quantities for '{}':", project.name);
    println!(
        "  Natural frequency: {:.6} rad/s",
        d.natural_frequency().get::<radian_per_second>()
    );
    println!("  Damping ratio:     {:.6}", d.damping_ratio);
    println!("  Regime:            {}", d.regime().label());
    match d.period() {
        Some(period) => println!("  Damped period:     {:.6} s", period.get::<second>()),
        None => println!("  Damped period:     (not oscillatory)"),
    }
    match d.settling_time(ds_project::SETTLING_FRACTION) {
        Some(t) => println!("  1% settling time:  {:.3} s", t),
        None => println!("  1% settling time:  (no damping)"),
    }
    println!(
        "  Horizon:           {:.3} s ({} steps of {} s)",
        params.horizon().get::<second>(),
        ds_sim::step_count(params.duration, params.dt, project.limits.max_steps)?,
        params.dt
    );
    Ok(())
}

fn cmd_run(project_path: &Path, use_cache: bool, overrides: &[(String, f64)]) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let params = project_service::resolve_parameters(&project, overrides)?;
    println!("Computing trajectory for: {}", project.name);
    println!("  dt = {} s, duration = {:.3} s", params.dt, params.duration);

    let request = RunRequest {
        project_path,
        project_name: &project.name,
        params,
        options: RunOptions {
            use_cache,
            integrate: project.integrate_options(),
        },
    };
    let response = run_service::ensure_run(&request)?;

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Trajectory computed: {}", response.run_id);
    }

    let timing = &response.timing;
    println!("\nTiming summary:");
    println!("  Steps:   {}", timing.steps);
    if response.loaded_from_cache {
        println!("  Cache load: {:.3}s", timing.load_cache_time_s);
    } else {
        println!("  Solve:   {:.3}s", timing.solve_time_s);
        println!("  Save:    {:.3}s", timing.save_time_s);
    }
    println!("  Total:   {:.3}s", timing.total_time_s);

    print_summary(&query::summarize(&response.trajectory));
    Ok(())
}

fn print_summary(summary: &query::ResponseSummary) {
    println!("\nResponse:");
    println!("  Samples:        {}", summary.samples);
    println!(
        "  Time range:     {:.3} - {:.3} s",
        summary.time_range.0, summary.time_range.1
    );
    println!("  Peak |x|:       {:.6} m", summary.peak_abs_x);
    println!(
        "  Final state:    x = {:.6} m, v = {:.6} m/s",
        summary.final_x, summary.final_v
    );
    println!("  Zero crossings: {}", summary.zero_crossings);
    if let Some(t) = summary.first_zero_crossing {
        println!("  First crossing: {:.4} s", t);
    }
    if let Some(period) = summary.mean_period {
        println!("  Mean period:    {:.4} s", period);
    }
    println!(
        "  Envelope:       {}",
        if summary.envelope_decays {
            "non-increasing"
        } else {
            "grows"
        }
    );
}

fn cmd_runs(project_path: &Path) -> AppResult<()> {
    let runs = run_service::list_runs(project_path)?;

    if runs.is_empty() {
        println!("No cached runs found for: {}", project_path.display());
    } else {
        println!("Cached runs:");
        for manifest in runs {
            let p = &manifest.parameters;
            println!(
                "  {} ({})  m={} c={} k={} y0={} v0={} duration={} dt={}  [{} samples]",
                manifest.run_id,
                manifest.timestamp,
                p.m,
                p.c,
                p.k,
                p.y0,
                p.v0,
                p.duration,
                p.dt,
                manifest.samples
            );
        }
    }
    Ok(())
}

fn cmd_export_series(project_path: &Path, run_id: &str, output: Option<&Path>) -> AppResult<()> {
    let (_manifest, trajectory) = run_service::load_run(project_path, run_id)?;
    let csv = ds_results::trajectory_to_csv(&trajectory);

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} data points to {}",
            trajectory.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn cmd_params_js(project_path: &Path, output: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let params = project.parameters()?;
    ds_project::write_params_js(output, &params)?;
    println!("✓ Wrote {}", output.display());
    Ok(())
}

fn cmd_animate(
    project_path: &Path,
    fps: f64,
    frames: usize,
    realtime: bool,
    print_every: usize,
    overrides: &[(String, f64)],
) -> AppResult<()> {
    if !(fps.is_finite() && fps > 0.0) {
        return Err(AppError::InvalidInput(format!(
            "fps must be positive, got {fps}"
        )));
    }
    let project = project_service::load_project(project_path)?;
    let mut session = project_service::session_from_project(&project, overrides)?;
    let frame_time = 1.0 / fps;
    let print_every = print_every.max(1);

    println!(
        "Animating '{}' at {} fps (scale {})",
        project.name,
        fps,
        session.parameters().scale
    );
    session.reset(true);

    let mut last = Instant::now();
    for frame_no in 0..frames {
        let elapsed = if realtime {
            std::thread::sleep(Duration::from_secs_f64(frame_time));
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f64();
            last = now;
            dt
        } else {
            frame_time
        };

        let outcome = session.tick(elapsed);
        let frame = session.frame();
        if frame_no % print_every == 0 || matches!(outcome, StepOutcome::Finished { .. }) {
            render_frame(&frame, session.parameters().duration);
        }
        if !frame.playing {
            break;
        }
    }
    println!();
    let frame = session.frame();
    println!(
        "✓ Stopped at t = {:.3} s, x = {:.6} m, v = {:.6} m/s",
        frame.t, frame.x, frame.v
    );
    Ok(())
}

fn render_frame(frame: &ds_app::FrameSnapshot, duration: f64) {
    let width = 41usize;
    let center = (width / 2) as f64;
    let col = (center + frame.display_offset.clamp(-center, center)).round() as usize;
    let mut track: Vec<char> = vec!['-'; width];
    track[width / 2] = '|';
    track[col.min(width - 1)] = '#';
    let track: String = track.into_iter().collect();
    print!(
        "\r[{}] t={:>7.3}/{:.3}s  x={:>+9.5}  v={:>+9.5}",
        track, frame.t, duration, frame.x, frame.v
    );
    let _ = io::stdout().flush();
}
