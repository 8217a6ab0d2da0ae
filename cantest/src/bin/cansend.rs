use std::{io, process, thread, time::Duration};
use clap::Parser;
use env_logger::Env;
use cantest::{send_counter_burst, send_stream, CanAddr, RawCanSocket};
use rawcan::{wire_id_from_hex, Pacer, NO_CAN_ID};

/// Send raw CAN frames: a fixed burst of counter frames, or stdin
/// repackaged into a frame stream.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Interface to send on
    #[arg(short, long, default_value = "can0")]
    interface: String,

    /// Number of counter frames to send (0 = stream stdin instead)
    #[arg(short, long, default_value_t = 0)]
    count: u32,

    /// Source CAN id in hex
    #[arg(short, long)]
    source: Option<String>,

    /// Destination CAN id in hex
    #[arg(short, long)]
    dest: Option<String>,

    /// Microseconds to wait between frames (non-zero values are raised to
    /// at least 100)
    #[arg(short = 't', long, default_value_t = 0)]
    interval: u64,

    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,

    /// Protocol number for the raw socket
    #[arg(short = 'z', long, default_value_t = libc::CAN_RAW)]
    protocol: i32,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let source = args.source.as_deref().map(wire_id_from_hex);
    let dest = args.dest.as_deref().map(wire_id_from_hex);

    let mut addr = CanAddr::from_iface(&args.interface)?;
    addr.set_tp_ids(source.unwrap_or(NO_CAN_ID), dest.unwrap_or(NO_CAN_ID));

    let mut socket = RawCanSocket::open(args.protocol, &addr)?;
    log::debug!("socket opened on {}", args.interface);

    let pacer = Pacer::from_micros(args.interval);
    let can_id = dest.unwrap_or(NO_CAN_ID);

    let sent = if args.count > 0 {
        send_counter_burst(&mut socket, can_id, args.count, &pacer)?
    } else {
        log::debug!("ready to read");
        send_stream(&mut socket, can_id, &pacer, io::stdin().lock())?
    };
    log::debug!("sent {} frames", sent);

    // let the kernel tx queue drain before the socket closes
    thread::sleep(Duration::from_secs(1));

    Ok(())
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init();

    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
