//! diptych CLI: Command-line interface for the split-view demo

use clap::{Args, Parser, Subcommand, ValueEnum};
use diptych_core::{
    ConfigError, Container, DisplayState, FixedFormFactor, Idiom, LayoutConfig, Orientation,
    SplitViewController,
};
use diptych_tui::DemoOptions;
use std::path::{Path, PathBuf};

/// Split-view controller demo with TUI
#[derive(Parser)]
#[command(name = "diptych")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI demo (default when no command specified)
    Tui(DemoArgs),

    /// Print the frames the layout pass resolves for a configuration
    Layout {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        args: DemoArgs,
    },

    /// Validate a layout config file
    Check {
        /// Path to the layout config JSON file
        #[arg(long)]
        layout: PathBuf,
    },
}

/// Options shared by the TUI and layout commands.
#[derive(Args, Clone)]
struct DemoArgs {
    /// Device idiom to simulate
    #[arg(long, value_enum, default_value = "pad")]
    idiom: IdiomArg,

    /// Initial interface orientation
    #[arg(long, value_enum, default_value = "landscape")]
    orientation: OrientationArg,

    /// Display state presented by default on the pad idiom
    #[arg(long, value_enum, default_value = "master")]
    default_state: StateArg,

    /// Path to a layout config JSON file
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Complete transitions immediately
    #[arg(long)]
    instant: bool,

    /// ASCII borders and a high-contrast palette
    #[arg(long)]
    ascii: bool,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            idiom: IdiomArg::Pad,
            orientation: OrientationArg::Landscape,
            default_state: StateArg::Master,
            layout: None,
            instant: false,
            ascii: false,
        }
    }
}

impl DemoArgs {
    fn into_options(self) -> Result<DemoOptions, ConfigError> {
        let mut layout = match &self.layout {
            Some(path) => LayoutConfig::load(path)?,
            None => LayoutConfig::default(),
        };
        if self.instant {
            layout.flip_duration_ms = 0;
            layout.nav_duration_ms = 0;
        }

        Ok(DemoOptions {
            idiom: self.idiom.into(),
            orientation: self.orientation.into(),
            default_state: self.default_state.into(),
            layout,
            ascii: self.ascii,
        })
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum IdiomArg {
    Pad,
    Phone,
}

impl From<IdiomArg> for Idiom {
    fn from(arg: IdiomArg) -> Self {
        match arg {
            IdiomArg::Pad => Idiom::Pad,
            IdiomArg::Phone => Idiom::Phone,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Landscape,
    Portrait,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Landscape => Orientation::LandscapeLeft,
            OrientationArg::Portrait => Orientation::Portrait,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StateArg {
    Master,
    Detail,
    Split,
}

impl From<StateArg> for DisplayState {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Master => DisplayState::Master,
            StateArg::Detail => DisplayState::Detail,
            StateArg::Split => DisplayState::Split,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => cmd_tui(DemoArgs::default()),
        Some(Commands::Tui(args)) => cmd_tui(args),
        Some(Commands::Layout { json, args }) => cmd_layout(json, args),
        Some(Commands::Check { layout }) => cmd_check(&layout),
    }
}

fn cmd_tui(args: DemoArgs) {
    let options = match args.into_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(diptych_tui::run_tui(options)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_layout(json: bool, args: DemoArgs) {
    let options = match args.into_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Build a real controller so idiom clamping and corner radius rules
    // apply, exactly as the TUI would see them.
    let controller = match SplitViewController::builder((), ())
        .layout(options.layout)
        .form_factor(FixedFormFactor::from(options.idiom))
        .orientation(options.orientation)
        .default_state(options.default_state)
        .build()
    {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if json {
        let output = serde_json::json!({
            "idiom": controller.idiom().to_string(),
            "orientation": controller.orientation().to_string(),
            "side": controller.current_side().to_string(),
            "state": controller.current_state().to_string(),
            "container": controller.container(),
            "master": controller.master_container(),
            "detail": controller.detail_container(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("failed to serialize")
        );
        return;
    }

    println!(
        "Resolved layout ({}, {}, {})\n",
        controller.idiom(),
        controller.orientation(),
        controller.current_state()
    );
    print_container("container", controller.container());
    print_container("master", controller.master_container());
    print_container("detail", controller.detail_container());
}

fn print_container(name: &str, container: &Container) {
    if container.is_visible() {
        let frame = container.frame();
        println!(
            "  {name:<10} ({},{}) {}x{}  radius {}",
            frame.x,
            frame.y,
            frame.width,
            frame.height,
            container.corner_radius()
        );
    } else {
        println!("  {name:<10} hidden");
    }
}

fn cmd_check(layout: &Path) {
    let config = match LayoutConfig::load(layout) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let landscape = config.landscape_size();
    let portrait = config.portrait_size();
    println!("{} is valid", layout.display());
    println!("  landscape {}x{}", landscape.width, landscape.height);
    println!("  portrait  {}x{}", portrait.width, portrait.height);
    println!(
        "  flip {}ms, nav {}ms",
        config.flip_duration_ms, config.nav_duration_ms
    );
}
