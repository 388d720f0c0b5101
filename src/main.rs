use bpmtoms::{
    config::Settings,
    create_scheduler,
    event_loop::{EventLoop, HostMessage},
    host,
    logging::{self, LogTarget},
    outlet::PrintOutlet,
    Args, BpmError, BpmToMs, Result,
};
use clap::Parser;
use crossbeam::channel;
use std::io;

fn main() {
    let args = Args::parse();

    if args.assist {
        for line in host::assist_lines() {
            println!("{}", line);
        }
        return;
    }

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => exit_with_error(e),
    };
    initialize_logging(&args, &settings);

    if let Err(e) = run(&args, &settings) {
        exit_with_error(e);
    }
    log::info!("Application finished");
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = Settings::load(args.config.as_deref())?;
    settings.apply_overrides(args.beat, args.steps, args.tempo);
    Ok(settings)
}

fn initialize_logging(args: &Args, settings: &Settings) {
    let target = if args.log_stderr {
        LogTarget::Stderr
    } else {
        LogTarget::File
    };
    if let Err(e) = logging::init_logger(target, settings.log_level) {
        eprintln!("Logging disabled: {}", e);
    }
    log::info!("Application starting");
}

fn run(args: &Args, settings: &Settings) -> Result<()> {
    let state = settings.initial_state()?;
    let object = BpmToMs::with_state(state, PrintOutlet::stdout());
    let (tx, rx) = channel::unbounded();

    if !args.send.is_empty() {
        for message in args.send_messages()? {
            tx.send(HostMessage::Inlet(message))
                .map_err(|_| BpmError::Outlet("event loop has stopped".to_string()))?;
        }
        drop(tx);
        EventLoop::new(object, rx).run()?;
        return Ok(());
    }

    let scheduler = create_scheduler();
    let handle = if args.interactive {
        host::spawn_interactive(&scheduler, tx)?
    } else {
        host::spawn_reader(&scheduler, io::BufReader::new(io::stdin()), tx)?
    };

    let final_state = EventLoop::new(object, rx).run()?;
    log::info!("Final state: {:?}", final_state);
    if handle.join().is_err() {
        log::error!("Input thread panicked");
        eprintln!("Input thread panicked");
    }
    Ok(())
}

fn exit_with_error(e: BpmError) -> ! {
    log::error!("{}", e);
    eprintln!("Error: {}", e);
    std::process::exit(1);
}
