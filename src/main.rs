use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use life_rule30::app::{App, Command, Control, HELP};
use life_rule30::config::{DEFAULT_LOG_FILTER, TICK_INTERVAL_MS};
use life_rule30::simulation::Grid;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    if let Err(e) = run() {
        log::error!("Terminal error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let mut app = App::new(rand::thread_rng());

    // Stdin is blocking, so lines are read on their own thread
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    log::info!("Type `help` for commands");
    draw(app.grid(), &app.status())?;

    let interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut input_open = true;
    loop {
        let received = if input_open {
            rx.recv_timeout(interval)
        } else {
            // Input is gone: keep a running Life session going until it stops
            if !app.is_ticking() {
                log::info!("Input closed, exiting...");
                break;
            }
            thread::sleep(interval);
            Err(RecvTimeoutError::Timeout)
        };

        match received {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => match app.handle(command) {
                        Control::Redraw => draw(app.grid(), &app.status())?,
                        Control::Ignored => {}
                        Control::ShowHelp => println!("{}", HELP),
                        Control::Quit => {
                            log::info!("Quit requested, exiting...");
                            break;
                        }
                    },
                    Err(e) => log::warn!("{}", e),
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if app.tick() {
                    draw(app.grid(), &app.status())?;
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                log::debug!("Input disconnected");
                input_open = false;
            }
        }
    }

    Ok(())
}

/// Clear the terminal and print one snapshot
fn draw(grid: &Grid, status: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "\x1b[2J\x1b[H{}{}\n> ", grid, status)?;
    out.flush()
}
