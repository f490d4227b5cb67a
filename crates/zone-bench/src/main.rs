use std::hint::black_box;
use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use term_window::geometry::{CursorPoint, Rect, ZoneChecks, ZoneHit, ZoneSizes, classify};

#[derive(Parser, Debug)]
#[command(
    name = "zone-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Measures how many cursor positions per second the zone classifier handles"
)]
struct BenchCli {
    /// How long to run the benchmark.
    #[arg(
        short = 'd',
        long = "duration",
        value_name = "SECONDS",
        default_value_t = 2.0
    )]
    duration_seconds: f64,

    /// Window width; the probe grid extends a quarter of it past each side.
    #[arg(long, default_value_t = 200)]
    width: i32,

    #[arg(long, default_value_t = 100)]
    height: i32,

    #[arg(long, default_value_t = 12)]
    corner_size: i32,

    #[arg(long, default_value_t = 8)]
    edge_size: i32,
}

struct BenchConfig {
    duration: Duration,
    window: Rect,
    title: Rect,
    sizes: ZoneSizes,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(0.1..=600.0).contains(&cli.duration_seconds) {
            return Err("duration must be between 0.1 and 600 seconds".to_string());
        }
        if cli.width <= 0 || cli.height <= 0 {
            return Err("window size must be positive".to_string());
        }
        if cli.corner_size <= 0 || cli.edge_size <= 0 {
            return Err("zone sizes must be positive".to_string());
        }
        let window = Rect::new(0, 0, cli.width, cli.height);
        Ok(Self {
            duration: Duration::from_secs_f64(cli.duration_seconds),
            window,
            title: Rect::new(1, 1, cli.width - 2, cli.edge_size.max(1)),
            sizes: ZoneSizes {
                corner: cli.corner_size,
                edge: cli.edge_size,
            },
        })
    }
}

#[derive(Default)]
struct BenchStats {
    passes: u64,
    probes: u64,
    corners: u64,
    edges: u64,
    drag: u64,
    elapsed: Duration,
}

impl BenchStats {
    fn record(&mut self, hit: ZoneHit) {
        self.probes += 1;
        self.corners += hit.corner.is_some() as u64;
        self.edges += hit.edge.is_some() as u64;
        self.drag += hit.in_drag_zone as u64;
    }

    fn final_report(&self, config: &BenchConfig) -> String {
        let secs = self.elapsed.as_secs_f64();
        let rate = if secs > 0.0 {
            self.probes as f64 / secs
        } else {
            0.0
        };
        indoc::formatdoc!(
            r#"
            Zone bench completed.
            Window: {w}x{h} | corner {c} | edge {e}
            Duration: {secs:.2}s | Passes: {passes}
            Probes: {probes} (~{rate:.0}/s)
            Hits per pass: corner {corners} | edge {edges} | drag {drag}
            "#,
            w = config.window.width,
            h = config.window.height,
            c = config.sizes.corner,
            e = config.sizes.edge,
            secs = secs,
            passes = self.passes,
            probes = self.probes,
            rate = rate,
            corners = self.corners / self.passes.max(1),
            edges = self.edges / self.passes.max(1),
            drag = self.drag / self.passes.max(1),
        )
    }
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;
    let stats = run_benchmark(&config);
    println!("{}", stats.final_report(&config));
    Ok(())
}

fn run_benchmark(config: &BenchConfig) -> BenchStats {
    let mut stats = BenchStats::default();
    let margin_x = config.window.width / 4;
    let margin_y = config.window.height / 4;
    let start = Instant::now();
    while start.elapsed() < config.duration {
        for y in config.window.y - margin_y..=config.window.bottom() + margin_y {
            for x in config.window.x - margin_x..=config.window.right() + margin_x {
                let hit = classify(
                    black_box(config.window),
                    Some(config.title),
                    black_box(CursorPoint::new(x, y)),
                    ZoneChecks::ALL,
                    config.sizes,
                );
                stats.record(black_box(hit));
            }
        }
        stats.passes += 1;
    }
    stats.elapsed = start.elapsed();
    stats
}
