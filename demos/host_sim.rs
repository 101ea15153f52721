//! Host simulation of the two-context drive.
//!
//! The motor loop runs on its own thread with console-backed coil pins; the
//! control loop runs on the main thread and reads commands typed on stdin.
//!
//! Run with: `cargo run --example host_sim -- [config.toml] [seconds]`
//!
//! In the default acceleration mode type `250` + Enter for 2.5 rev/s², `-250`
//! to ramp back, `0` to coast at the current speed.

use std::io::Read as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use embedded_hal_nb::serial::{ErrorKind, ErrorType, Read};
use velocity_stepper::{
    load_config, CoilPins, ControlLoop, Monotonic, Result, SharedState, StdClock, StdoutSink,
    StepSequencer, SystemConfig,
};

/// Output pin that only remembers its level.
struct SimPin {
    high: bool,
}

impl SimPin {
    fn new() -> Self {
        Self { high: false }
    }
}

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for SimPin {
    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }
}

/// Serial receiver backed by the stdin reader thread.
struct StdinRx {
    bytes: Receiver<u8>,
}

impl ErrorType for StdinRx {
    type Error = ErrorKind;
}

impl Read<u8> for StdinRx {
    fn read(&mut self) -> nb::Result<u8, ErrorKind> {
        match self.bytes.try_recv() {
            Ok(byte) => Ok(byte),
            Err(TryRecvError::Empty) => Err(nb::Error::WouldBlock),
            // stdin closed: nothing more will arrive.
            Err(TryRecvError::Disconnected) => Err(nb::Error::WouldBlock),
        }
    }
}

fn spawn_stdin_reader() -> StdinRx {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for byte in std::io::stdin().lock().bytes() {
            match byte {
                Ok(b) if tx.send(b).is_ok() => {}
                _ => break,
            }
        }
    });
    StdinRx { bytes: rx }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(path)?,
        None => SystemConfig::default(),
    };
    let seconds: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);

    println!("=== Host Simulation ===\n");
    println!("  Steps/rev: {}", config.drive.steps_per_revolution);
    println!("  Command mode: {:?}", config.control.mode);
    println!("  Running for {} s\n", seconds);

    let mut state = SharedState::new();
    let (control, motor) = state.split();
    let stop = AtomicBool::new(false);
    let deadline = Instant::now() + Duration::from_secs(seconds);

    std::thread::scope(|scope| {
        let drive = &config.drive;
        let stop = &stop;

        let motor_thread = scope.spawn(move || {
            let clock = StdClock::new();
            let coils = CoilPins::new(SimPin::new(), SimPin::new(), SimPin::new(), SimPin::new());
            let mut sequencer = StepSequencer::new(coils, motor, drive);
            let mut steps = 0u64;
            while !stop.load(Ordering::Relaxed) {
                match sequencer.poll(clock.now_us()) {
                    Ok(outcome) if outcome.step.is_some() => steps += 1,
                    Ok(_) => {}
                    Err(e) => eprintln!("motor: {}", e),
                }
            }
            let (a, b, c, d) = sequencer.into_outputs().into_inner();
            (steps, [a.high, b.high, c.high, d.high])
        });

        let clock = StdClock::new();
        let mut control_loop = ControlLoop::new(
            control,
            spawn_stdin_reader(),
            StdoutSink,
            &config.control,
            clock.now_us_32(),
        );
        while Instant::now() < deadline {
            control_loop.poll(clock.now_us_32());
            std::thread::sleep(Duration::from_micros(200));
        }
        stop.store(true, Ordering::Relaxed);

        match motor_thread.join() {
            Ok((steps, lines)) => {
                println!("\n=== Done ===");
                println!("  Steps taken: {}", steps);
                println!("  Final position: {}", control_loop.control().position());
                println!("  Final velocity: {:.3} rev/s", control_loop.control().velocity().value());
                println!("  Lines A..D: {:?}", lines);
            }
            Err(_) => eprintln!("motor thread panicked"),
        }
    });

    Ok(())
}
