use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use dotwin::pager::SOCKET_PATH;
use dotwin::{Frame, Indicator, IndicatorSettings, Motion, PagerCommand};
use std::io::Write;
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "dotwin", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Settle on a sequence of pages and print the dot window after each one.
    Simulate {
        /// Number of pages
        #[arg(short = 'n', long)]
        items: usize,

        #[command(flatten)]
        style: StyleArgs,

        /// Pages to settle on, in order
        #[arg(allow_negative_numbers = true)]
        pages: Vec<isize>,
    },
    /// Send a command to a running pagerdots window (next, prev, page N, count N, show, hide).
    Send {
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct StyleArgs {
    #[arg(long)]
    selected_radius: Option<f64>,
    #[arg(long)]
    normal_radius: Option<f64>,
    #[arg(long)]
    medium_radius: Option<f64>,
    #[arg(long)]
    small_radius: Option<f64>,
    /// Gap between two normal dots
    #[arg(long)]
    spacing: Option<f64>,
    /// Fewer pages than this show no indicator at all
    #[arg(long)]
    min_visible: Option<usize>,
}

impl From<StyleArgs> for IndicatorSettings {
    fn from(args: StyleArgs) -> Self {
        Self {
            selected_radius: args.selected_radius,
            normal_radius: args.normal_radius,
            medium_radius: args.medium_radius,
            small_radius: args.small_radius,
            spacing: args.spacing,
            padding: None,
            min_visible_dots: args.min_visible,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            items,
            style,
            pages,
        } => simulate(items, IndicatorSettings::from(style), &pages),
        Commands::Send { command } => send_command(&command.join(" ")),
    }
}

fn simulate(items: usize, settings: IndicatorSettings, pages: &[isize]) -> anyhow::Result<()> {
    let mut indicator = Indicator::new(settings.resolve());

    let Some(frame) = indicator.set_item_count(items) else {
        anyhow::bail!(
            "{} pages are fewer than the minimum of {} visible dots",
            items,
            indicator.config().min_visible_dot_count()
        );
    };
    print_frame(0, &frame);

    for &page in pages {
        let settled = indicator
            .on_page_settled(page)
            .with_context(|| format!("Failed to settle on page {}", page))?;
        match settled {
            Some(frame) => print_frame(page, &frame),
            None => println!("page {:>3}  unchanged", page),
        }
    }
    Ok(())
}

fn print_frame(page: isize, frame: &Frame) {
    let mut line = format!("page {:>3}  {}", page, frame);
    if let Motion::Slide(direction) = frame.motion {
        line.push_str(&format!("  slide {}", direction));
    }
    if let Some(recycled) = frame.recycled {
        line.push_str(&format!("  recycled slot {}", recycled.id));
    }
    println!("{}", line);

    if let Some(selected) = frame.selected() {
        log::debug!("selected slot {} at x={:.1}", selected.id, selected.center.x);
    }

    for target in &frame.targets {
        log::debug!(
            "slot {}: x={:.1} y={:.1} r={:.1} {}",
            target.id,
            target.center.x,
            target.center.y,
            target.radius,
            target.dot_type
        );
    }
}

fn send_command(line: &str) -> anyhow::Result<()> {
    let command: PagerCommand = line.parse()?;

    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to pagerdots at {}: {}. Is it running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", command)?;
    Ok(())
}
