use std::{io, process};
use clap::Parser;
use env_logger::Env;
use cantest::{receive_frames, CanAddr, IdChangeReporter, RawCanSocket};
use rawcan::CanFilter;

/// Receive raw CAN frames and write their payloads to stdout.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Interface to listen on (all CAN interfaces when omitted)
    #[arg(short, long)]
    interface: Option<String>,

    /// Stop after this many frames (0 = receive forever)
    #[arg(short, long, default_value_t = 0)]
    count: u32,

    /// Receive filter, `id[,mask]` in hex
    #[arg(short, long)]
    filter: Option<String>,

    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,

    /// Report the frame id on stderr whenever it changes
    #[arg(short = 'p', long)]
    print_ids: bool,

    /// Protocol number for the raw socket
    #[arg(short = 'z', long, default_value_t = libc::CAN_RAW)]
    protocol: i32,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let addr = match &args.interface {
        Some(iface) => CanAddr::from_iface(iface)?,
        None => CanAddr::new(0),
    };
    let mut socket = RawCanSocket::open(args.protocol, &addr)?;

    if let Some(spec) = &args.filter {
        let filter = CanFilter::from_spec(spec);
        log::debug!(
            "set filter can_id {:08x}, mask {:08x}",
            filter.can_id,
            filter.can_mask
        );
        socket.set_filters(&[filter])?;
    }

    let mut reporter = args.print_ids.then(IdChangeReporter::new);
    let received = receive_frames(
        &mut socket,
        args.count,
        &mut io::stdout().lock(),
        reporter.as_mut(),
    )?;
    log::debug!("received {} frames", received);

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
