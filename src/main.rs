use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use upi_checkout::application::controller::CheckoutController;
use upi_checkout::config::CheckoutConfig;
use upi_checkout::domain::environment::ClientEnvironment;
use upi_checkout::domain::ports::PaymentGatewayBox;
use upi_checkout::infrastructure::console::{ConsoleNavigator, ConsoleStatusPanel, ConsoleTrigger};
use upi_checkout::infrastructure::scripted::{ProbeScript, ScriptedGateway, SheetScript};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 \
                                  (KHTML, like Gecko) Chrome/119.0.0.0 Mobile Safari/537.36";

/// How the simulated payment sheet should behave.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Outcome {
    Complete,
    AckFails,
    Cancel,
    Unsupported,
    Fail,
    Timeout,
    ProbeFalse,
    ProbeError,
    Unavailable,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON checkout configuration. Defaults are used if omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scripted behavior of the simulated payment sheet.
    #[arg(long, value_enum, default_value = "complete")]
    outcome: Outcome,

    /// User agent the eligibility hint is evaluated against.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Override the sheet timeout in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,
}

fn build_gateway(outcome: Outcome) -> ScriptedGateway {
    match outcome {
        Outcome::Complete => ScriptedGateway::new(SheetScript::Complete),
        Outcome::AckFails => ScriptedGateway::new(SheetScript::CompleteAckFails),
        Outcome::Cancel => ScriptedGateway::new(SheetScript::Cancel),
        Outcome::Unsupported => ScriptedGateway::new(SheetScript::MethodUnsupported),
        Outcome::Fail => ScriptedGateway::new(SheetScript::Fail),
        Outcome::Timeout => ScriptedGateway::new(SheetScript::NeverSettles),
        Outcome::ProbeFalse => {
            ScriptedGateway::new(SheetScript::Complete).with_probe(ProbeScript::Unsupported)
        }
        Outcome::ProbeError => {
            ScriptedGateway::new(SheetScript::Complete).with_probe(ProbeScript::Fails)
        }
        Outcome::Unavailable => ScriptedGateway::unavailable(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path).into_diagnostic()?;
            CheckoutConfig::from_json(&raw).into_diagnostic()?
        }
        None => CheckoutConfig::default(),
    };
    if let Some(timeout_ms) = cli.timeout_ms {
        config.sheet_timeout_ms = timeout_ms;
        config.validate().into_diagnostic()?;
    }

    let gateway: PaymentGatewayBox = Box::new(build_gateway(cli.outcome));
    let controller = CheckoutController::new(
        gateway,
        Box::new(ConsoleStatusPanel),
        Box::new(ConsoleTrigger::default()),
        Box::new(ConsoleNavigator),
        config,
    );

    controller.on_page_load(&ClientEnvironment::new(cli.user_agent));
    let outcome = controller.start_attempt().await;
    println!("attempt settled: {outcome:?}");

    Ok(())
}
