use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vfs_shell::{
    Identity, OutputMessage, OutputSink, OutputType, SchedulerOptions, ScriptOutcome,
    ScriptScheduler, Session, SessionOptions,
};

const BANNER: &str = "Welcome to the shell emulator.\nType 'help' for a list of commands.";

#[derive(Parser)]
#[command(name = "vfs-shell")]
#[command(about = "A minimal shell over a JSON-described virtual file system")]
#[command(version)]
struct Cli {
    /// VFS manifest (JSON) to load at startup
    #[arg(long = "vfs")]
    vfs: Option<PathBuf>,

    /// Startup script to replay before the interactive prompt
    #[arg(long = "script")]
    script: Option<PathBuf>,

    /// User name shown in the prompt (default: $USER)
    #[arg(long = "user")]
    user: Option<String>,

    /// Host name shown in the prompt
    #[arg(long = "host", default_value = "localhost")]
    host: String,

    /// Delay between scripted commands, in milliseconds
    #[arg(long = "delay-ms", default_value_t = 500)]
    delay_ms: u64,

    /// Exit after the startup script instead of prompting
    #[arg(long = "no-interactive")]
    no_interactive: bool,
}

/// Writes stdout messages to stdout and stderr messages to stderr.
struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn emit(&mut self, message: OutputMessage) {
        match message.output_type {
            OutputType::Stdout => println!("{}", message.data),
            OutputType::Stderr => eprintln!("{}", message.data),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_time().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: cannot start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let identity = Identity {
        user: cli
            .user
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .unwrap_or_else(|| Identity::default().user),
        host: cli.host.clone(),
    };

    let mut out = ConsoleSink;
    out.emit_all(BANNER.lines().map(OutputMessage::stdout).collect());

    let mut session = Session::open(
        SessionOptions { identity, cwd: None },
        cli.vfs.as_deref(),
        &mut out,
    );

    if let Some(script) = &cli.script {
        let scheduler = ScriptScheduler::new(SchedulerOptions {
            command_delay: Duration::from_millis(cli.delay_ms),
            ..SchedulerOptions::default()
        });
        let outcome = runtime.block_on(scheduler.run_file(&mut session, script, &mut out));
        if outcome == ScriptOutcome::Exited {
            return ExitCode::SUCCESS;
        }
    }

    if cli.no_interactive {
        return ExitCode::SUCCESS;
    }

    match interactive(&runtime, &mut session, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Read-eval loop: one line fully processed before the next is read.
fn interactive(
    runtime: &tokio::runtime::Runtime,
    session: &mut Session,
    out: &mut ConsoleSink,
) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(&session.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        tracing::warn!("Failed to add history entry: {}", e);
                    }
                }
                let result = runtime.block_on(session.exec(&line));
                out.emit_all(result.messages());
                if result.exit_requested {
                    return Ok(());
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }
}
