//! SOS subcommand.
//!
//! `quick` and `hold` run one dispatch flow directly. `press` drives the full
//! control loop with a timed press, so the hold threshold decides the flow.

use std::io::StdinLock;
use std::time::Duration;

use clap::Subcommand;
use haven_core::{
    AlertDispatcher, AlertIntent, AlertResolution, ApiClient, Config, DispatchOutcome, FixedLocation,
    GeoPoint, GestureClassifier, InputEvent, InputSource, SosControl,
};
use tokio::sync::mpsc;

use super::{api_client, runtime};
use crate::terminal::TerminalPlatform;

#[derive(Subcommand)]
pub enum SosAction {
    /// Quick alert: confirm, send, then offer an emergency call
    Quick {
        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sustained alert: ask for name/phone, attach location, send
    Hold {
        /// Position to attach, as "lat,lng" (overrides config)
        #[arg(long, allow_hyphen_values = true)]
        at: Option<GeoPoint>,
        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Simulate pressing the SOS control for a given time
    Press {
        /// How long the control is held down
        #[arg(long, default_value_t = 200)]
        hold_ms: u64,
        /// Use touch input instead of pointer input
        #[arg(long)]
        touch: bool,
        /// Position to attach, as "lat,lng" (overrides config)
        #[arg(long, allow_hyphen_values = true)]
        at: Option<GeoPoint>,
        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SosAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    match action {
        SosAction::Quick { json } => {
            let resolution = dispatch_once(&config, AlertIntent::QuickAlert, None)?;
            report(&resolution, json)
        }
        SosAction::Hold { at, json } => {
            let resolution = dispatch_once(&config, AlertIntent::EnrichedAlert, at)?;
            report(&resolution, json)
        }
        SosAction::Press {
            hold_ms,
            touch,
            at,
            json,
        } => {
            let source = if touch {
                InputSource::Touch
            } else {
                InputSource::Pointer
            };
            for resolution in simulate_press(&config, source, hold_ms, at)? {
                report(&resolution, json)?;
            }
            Ok(())
        }
    }
}

type TerminalDispatcher = AlertDispatcher<ApiClient, TerminalPlatform<StdinLock<'static>>, FixedLocation>;

fn dispatcher(
    config: &Config,
    at: Option<GeoPoint>,
) -> Result<TerminalDispatcher, Box<dyn std::error::Error>> {
    Ok(AlertDispatcher::new(
        api_client(config)?,
        TerminalPlatform::stdin(),
        FixedLocation::new(at.or_else(|| config.fixed_location())),
        config.dispatch_settings(),
    ))
}

fn dispatch_once(
    config: &Config,
    intent: AlertIntent,
    at: Option<GeoPoint>,
) -> Result<AlertResolution, Box<dyn std::error::Error>> {
    let mut dispatcher = dispatcher(config, at)?;
    Ok(runtime()?.block_on(dispatcher.dispatch(intent)))
}

fn simulate_press(
    config: &Config,
    source: InputSource,
    hold_ms: u64,
    at: Option<GeoPoint>,
) -> Result<Vec<AlertResolution>, Box<dyn std::error::Error>> {
    let mut control = SosControl::new(
        GestureClassifier::new(config.sos.hold_threshold_ms),
        dispatcher(config, at)?,
    );
    let (tx, rx) = mpsc::channel(4);

    let resolutions = runtime()?.block_on(async move {
        let feeder = tokio::spawn(async move {
            if tx.send(InputEvent::Press { source }).await.is_err() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(hold_ms)).await;
            let _ = tx.send(InputEvent::Release).await;
        });
        let resolutions = control.run(rx).await;
        let _ = feeder.await;
        resolutions
    });
    Ok(resolutions)
}

fn report(resolution: &AlertResolution, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(resolution)?);
        return Ok(());
    }
    match resolution {
        AlertResolution::Declined => println!("SOS cancelled."),
        AlertResolution::Submitted { outcome, .. } => {
            if let DispatchOutcome::Failure(reason) = outcome {
                eprintln!("  reason: {reason}");
            }
        }
    }
    Ok(())
}
