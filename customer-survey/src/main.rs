//! Customer satisfaction kiosk.
//!
//! Runs the five-question survey in the terminal, one customer after another,
//! and logs every completed submission as JSON.
//!
//! ```bash
//! cargo run -p customer-survey -- --reset-delay-ms 8000 --log-dir /var/log/kiosk
//! ```

mod logging;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use kiosk_ratatui::RatatuiKiosk;
use kiosk_survey::{LoggingSink, SurveyController, SystemClock, catalog};

#[derive(Debug, Parser)]
#[command(name = "customer-survey", version, about = "Customer satisfaction survey kiosk")]
struct Args {
    /// Milliseconds the thank-you screen stays up before the next customer
    #[arg(long, default_value_t = 5000)]
    reset_delay_ms: u64,

    /// Title shown on the kiosk border
    #[arg(long, default_value = "Customer Feedback")]
    title: String,

    /// Directory for the daily log files
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = logging::init_logging(&args.log_dir, args.verbose)?;

    let mut survey = SurveyController::new(
        catalog::customer_satisfaction(),
        SystemClock,
        LoggingSink,
    )?
    .with_reset_delay(Duration::from_millis(args.reset_delay_ms));

    tracing::info!(reset_delay_ms = args.reset_delay_ms, "starting kiosk");

    RatatuiKiosk::new()
        .with_title(args.title)
        .run(&mut survey)
        .context("kiosk terminated abnormally")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["customer-survey"]);
        assert_eq!(args.reset_delay_ms, 5000);
        assert_eq!(args.title, "Customer Feedback");
        assert_eq!(args.log_dir, PathBuf::from("logs"));
        assert!(!args.verbose);
    }

    #[test]
    fn flags() {
        let args = Args::parse_from([
            "customer-survey",
            "--reset-delay-ms",
            "1500",
            "--title",
            "Store 12",
            "--log-dir",
            "/tmp/kiosk",
            "-v",
        ]);
        assert_eq!(args.reset_delay_ms, 1500);
        assert_eq!(args.title, "Store 12");
        assert_eq!(args.log_dir, PathBuf::from("/tmp/kiosk"));
        assert!(args.verbose);
    }

    #[test]
    fn rejects_negative_delay() {
        assert!(Args::try_parse_from(["customer-survey", "--reset-delay-ms", "-1"]).is_err());
    }
}
