//! Read barcodes from a DE2120 module and print them to stdout.

use clap::{Parser, ValueEnum};
use de2120::{
    open, BaudRate, Config, ScanBuffer, Scanner, Sensitivity, StaleTerminatorPolicy, Status,
    SystemClock,
};
use log::{error, info, warn};
use std::time::Duration;

const BUFFER_SIZE: usize = 40;

#[derive(Debug, Parser)]
#[command(about = "Read barcodes from a DE2120 scanner module.")]
struct Args {
    #[arg(index = 1, help = "serial port the module is attached to")]
    tty: String,
    #[arg(long, default_value_t = 50, help = "motion sensitivity: 15, 20, 30, 50 or 100")]
    sensitivity: u8,
    #[arg(long, help = "keep the illumination LED off")]
    no_illumination: bool,
    #[arg(long, default_value_t = 200, help = "delay between two polls in milliseconds")]
    poll_interval_ms: u64,
    #[arg(long, value_enum, default_value_t = StalePolicy::DiscardBuffer)]
    stale_policy: StalePolicy,
    #[arg(long, value_enum, help = "bit rate to switch the module to after startup")]
    baud_rate: Option<BaudRate>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StalePolicy {
    DiscardBuffer,
    DiscardCompletedRecord,
}

impl From<StalePolicy> for StaleTerminatorPolicy {
    fn from(policy: StalePolicy) -> Self {
        match policy {
            StalePolicy::DiscardBuffer => Self::DiscardBuffer,
            StalePolicy::DiscardCompletedRecord => Self::DiscardCompletedRecord,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let sensitivity = match Sensitivity::try_from(args.sensitivity) {
        Ok(sensitivity) => sensitivity,
        Err(error) => {
            error!("{error}");
            return;
        }
    };

    let serial_port = match open(&args.tty, BaudRate::LOW) {
        Ok(serial_port) => serial_port,
        Err(error) => {
            error!("{error}");
            return;
        }
    };

    let config = Config {
        illumination: !args.no_illumination,
        sensitivity,
    };
    let mut scanner = Scanner::with_config(serial_port, SystemClock, config)
        .assuming_baud_rate(BaudRate::LOW)
        .with_status_sink(|status: Status| match status {
            Status::Failed => warn!("Scanner status: {status:?}"),
            _ => info!("Scanner status: {status:?}"),
        });

    if !scanner.initialize() {
        return;
    }

    if let Some(baud_rate) = args.baud_rate {
        match scanner.set_module_baud_rate(baud_rate) {
            Ok(response) if response.is_acknowledged() => info!("Switched module to {baud_rate}."),
            Ok(response) => warn!("Module did not switch to {baud_rate}: {response}"),
            Err(error) => {
                error!("{error}");
                return;
            }
        }
    }

    let mut buffer = ScanBuffer::<BUFFER_SIZE>::with_policy(args.stale_policy.into());
    let poll_interval = Duration::from_millis(args.poll_interval_ms);

    loop {
        if scanner.read_barcode(&mut buffer) {
            println!("{}", String::from_utf8_lossy(buffer.as_slice()).trim_end());
        }

        std::thread::sleep(poll_interval);
    }
}
