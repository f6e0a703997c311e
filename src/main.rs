use std::io::{stdout, BufWriter, Write};
use std::process::ExitCode;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event},
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use space_invaders::difficulty::Difficulty;
use space_invaders::session::Session;
use space_invaders::{display, input, TICKS_PER_SECOND};

const FRAME: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND);

#[derive(Parser)]
#[command(name = "space-invaders", version)]
#[command(about = "A Space Invaders game in the terminal")]
struct Args {
    /// Easy mode: slower enemies, five lives. Wins over --hard.
    #[arg(short = 'e', long)]
    easy: bool,
    /// Hard mode: faster enemies and shots, two lives
    #[arg(short = 'd', long)]
    hard: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let difficulty = Difficulty::from_flags(args.easy, args.hard);

    match run(difficulty) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(difficulty: Difficulty) -> Result<()> {
    let mut out = BufWriter::new(stdout());

    if let Err(err) = enter_terminal(&mut out) {
        leave_terminal(&mut out);
        return Err(err).context("failed to start terminal session");
    }

    // Dedicate a thread to blocking event reads so the game loop never
    // blocks on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                warn!("input reader stopped: {err}");
                break;
            }
        }
    });

    let result = game_loop(&mut out, Session::new(difficulty), &rx);

    // Always restore the terminal
    leave_terminal(&mut out);

    result
}

fn enter_terminal<W: Write>(out: &mut W) -> std::io::Result<()> {
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    Ok(())
}

fn leave_terminal<W: Write>(out: &mut W) {
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Fixed-cadence loop: drain input, tick once, fire the quit timer, draw.
fn game_loop<W: Write>(
    out: &mut W,
    mut session: Session,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let mut rng = thread_rng();
    info!("starting {} game", session.difficulty().name());

    loop {
        let frame_start = Instant::now();

        loop {
            match rx.try_recv() {
                Ok(Event::Key(key)) => {
                    if let Some(intent) = input::intent_for(&key) {
                        session.apply(intent, frame_start);
                    }
                }
                Ok(_) => {}
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => bail!("input reader disconnected"),
            }
        }

        session.tick(&mut rng);
        session.poll(Instant::now());

        if session.is_exited() {
            info!("exiting with score {}", session.game().score);
            return Ok(());
        }

        display::render(out, &session).context("failed to draw frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}
