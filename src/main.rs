use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wizard_nav::cli::{handle_buttons_command, handle_label_command, StepArgs};
use wizard_nav::config::{paths::WizardPaths, settings::OutputFormat, settings::Settings};
use wizard_nav::tui::{run_demo, DemoOutcome};

/// Environment variable holding the log filter
const LOG_ENV: &str = "WIZARD_NAV_LOG";

#[derive(Parser)]
#[command(
    name = "wizard-nav",
    author = "Kaylee Beyene",
    version,
    about = "Navigation buttons and progress labels for multi-step form wizards",
    long_about = "wizard-nav decides which navigation buttons (First, Previous, Next, \
                  Finish) a multi-step form wizard shows on each step, and formats \
                  the matching 'Step X of Y' label."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the button row for a step
    #[command(alias = "btn")]
    Buttons {
        #[command(flatten)]
        step: StepArgs,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the progress label for a step
    Label {
        #[command(flatten)]
        step: StepArgs,
    },

    /// Walk through a wizard interactively
    #[command(alias = "tui")]
    Demo(DemoArgs),

    /// Write default settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

#[derive(Args)]
struct DemoArgs {
    /// Number of steps
    #[arg(short = 'n', long, default_value = "4", conflicts_with = "keys")]
    count: usize,

    /// Ordered step keys, comma separated
    #[arg(short, long, value_delimiter = ',')]
    keys: Option<Vec<String>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The demo owns the terminal, so it only logs when asked to
    let is_demo = matches!(cli.command, Some(Commands::Demo(_)));
    if !is_demo || cli.verbose {
        init_logging(cli.verbose);
    }

    match cli.command {
        Some(Commands::Buttons { step, format }) => {
            let (_, settings) = load_settings()?;
            handle_buttons_command(&settings, &step, format)?;
        }
        Some(Commands::Label { step }) => {
            handle_label_command(&step)?;
        }
        Some(Commands::Demo(args)) => {
            let (_, settings) = load_settings()?;
            let steps = match args.keys {
                Some(keys) => keys,
                None => (1..=args.count).map(|i| format!("Step {}", i)).collect(),
            };
            match run_demo(&settings, &steps)? {
                DemoOutcome::Finished => println!("Wizard finished after {} steps.", steps.len()),
                DemoOutcome::Cancelled => println!("Wizard cancelled."),
            }
        }
        Some(Commands::Init) => {
            let (paths, settings) = load_settings()?;
            settings.save(&paths)?;
            println!("Wrote settings to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            let (paths, settings) = load_settings()?;
            println!("wizard-nav Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Labels:");
            println!("  First:    {}", settings.labels.first);
            println!("  Previous: {}", settings.labels.previous);
            println!("  Next:     {}", settings.labels.next);
            println!("  Finish:   {}", settings.labels.finish);
            println!();
            println!("Classes:");
            println!("  Primary: {}", settings.style_classes.primary);
            println!("  Plain:   {}", settings.style_classes.plain);
            println!();
            println!("Fields:");
            println!("  Navigate: {}", settings.field_names.navigate);
            println!("  Submit:   {}", settings.field_names.submit);
            println!();
            println!("Output format: {}", settings.output_format);
        }
        None => {
            println!("wizard-nav - Navigation buttons for multi-step form wizards");
            println!();
            println!("Run 'wizard-nav --help' for usage information.");
            println!("Run 'wizard-nav demo' to try the interactive walkthrough.");
        }
    }

    Ok(())
}

/// Resolve the config directory and load settings from it
fn load_settings() -> Result<(WizardPaths, Settings)> {
    let paths = WizardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    Ok((paths, settings))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
