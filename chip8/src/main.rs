extern crate clap;

use crossbeam_channel::bounded;
use ctrlc;
use env_logger;
use log::{error, info};

use chip8_core::cpu::Chip8Cpu;
use chip8_core::mem::rom;

use std::fs::File;
use std::time::{Duration, Instant};

const DEFAULT_HZ: u32 = 700;
const TIMER_PERIOD_US: u128 = 1_000_000 / 60;

fn fetch_config<'a>() -> clap::ArgMatches<'a> {
    let about = "A CHIP-8 virtual machine written entirely in Rust";
    let c = clap::App::new("CHIP-8")
        .version("0.1")
        .about(about)
        .arg(
            clap::Arg::with_name("filename")
                .index(1)
                .required(true)
                .help("Filename of the CHIP-8 ROM to load"),
        )
        .arg(
            clap::Arg::with_name("hz")
                .long("hz")
                .takes_value(true)
                .help("Instruction rate in steps per second (default 700)"),
        );
    let a = c.get_matches();
    a
}

fn load_rom_file(filename: &str) -> Option<Vec<u8>> {
    // Check to make sure we are able to open the file. If we are not able
    // to, throw the issue up to the caller to know we failed at opening
    // the file.
    let fp = File::open(filename);
    let mut f = match fp {
        Ok(f) => f,
        _ => {
            error!("Unable to open file: {:?}", filename);
            return None;
        }
    };

    let expected = match f.metadata() {
        Ok(m) => m.len() as usize,
        Err(x) => {
            error!("Unable to read metadata for {:?}: {:?}", filename, x);
            return None;
        }
    };

    match rom::read_rom(&mut f, expected) {
        Ok(rom) => Some(rom),
        Err(e) => {
            error!("Unable to stage ROM {:?}: {}", filename, e);
            None
        }
    }
}

fn main() {
    env_logger::init();

    // Register for a ctrlc handler which will push a signal to the
    // application. If the signal arrives multiple times without being
    // consumed, force close the application.
    let (ctrlc_tx, ctrlc_rx) = bounded(1);
    let res = ctrlc::set_handler(move || {
        if ctrlc_tx.is_full() == true {
            std::process::exit(-1);
        }
        let _res = ctrlc_tx.send(());
    });

    match res {
        Err(x) => {
            error!("Unable to register signal handler. {:?}.", x);
            return;
        }
        _ => {}
    }

    let matches = fetch_config();
    let filename = matches.value_of("filename").unwrap();
    let hz = match matches.value_of("hz") {
        Some(v) => match v.parse::<u32>() {
            Ok(hz) if hz > 0 => hz,
            _ => {
                error!("Invalid --hz value: {:?}. Exiting", v);
                return;
            }
        },
        None => DEFAULT_HZ,
    };

    let rom = match load_rom_file(filename) {
        Some(rom) => rom,
        None => {
            return;
        }
    };

    let mut cpu = Chip8Cpu::new();
    match cpu.load_rom(&rom) {
        Ok(_) => {
            info!("Loaded {} byte ROM from {:?}", rom.len(), filename);
        }
        Err(e) => {
            error!("Unable to load ROM {:?}: {}", filename, e);
            return;
        }
    }

    let mut last_timestamp = Instant::now();
    let mut timer_budget_us: u128 = 0;
    loop {
        // Check to see if we received a ctrlc signal. If we have, we need
        // to exit out of the loop and exit the application.
        if ctrlc_rx.len() > 0 {
            break;
        }

        if last_timestamp.elapsed().as_millis() == 0 {
            std::thread::sleep(Duration::new(0, 5000000));
            continue;
        }

        let elapsed_us = last_timestamp.elapsed().as_micros();
        last_timestamp = Instant::now();

        // Timers run at their own 60 Hz cadence, independent of the
        // instruction rate.
        timer_budget_us += elapsed_us;
        while timer_budget_us >= TIMER_PERIOD_US {
            cpu.tick_timers();
            timer_budget_us -= TIMER_PERIOD_US;
        }

        let expected_steps = (elapsed_us * hz as u128) / 1_000_000;
        let mut step_counter = 0;
        while step_counter < expected_steps {
            match cpu.step() {
                Ok(_) => {}
                Err(e) => {
                    error!("Machine fault at {:#05x}: {}", cpu.pc, e);
                    cpu.print_state();
                    print!("{}", cpu.framebuffer().to_ascii());
                    return;
                }
            }
            step_counter += 1;
        }
    }

    cpu.print_state();
    print!("{}", cpu.framebuffer().to_ascii());
}
