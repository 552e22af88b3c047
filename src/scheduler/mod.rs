//! Script Scheduler
//!
//! Replays a startup script one line at a time. Each line is a step of an
//! explicit step machine (`ScriptRun`); the scheduler awaits a timer between
//! steps instead of recursing, so at most one command is in flight and
//! stopping is just "schedule nothing further".
//!
//! Per line:
//! - blank: skipped after the short delay
//! - `#...`: echoed without the marker, never executed
//! - anything else: echoed behind a prompt, executed, then the command delay
//!
//! `exit` stops the run after a grace delay and ends the whole session.

use std::path::Path;
use std::time::Duration;

use crate::interpreter::{OutputMessage, OutputSink, ScriptReadError};
use crate::session::Session;

/// Printed when a script runs to its end without `exit`.
pub const COMPLETION_MARKER: &str = "--- script finished ---";

/// Pacing of scripted replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerOptions {
    /// Pause after an executed command
    pub command_delay: Duration,
    /// Pause after a blank or comment line
    pub skip_delay: Duration,
    /// Pause between `exit` and the end of the run
    pub exit_grace: Duration,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            command_delay: Duration::from_millis(500),
            skip_delay: Duration::from_millis(10),
            exit_grace: Duration::from_millis(300),
        }
    }
}

impl SchedulerOptions {
    /// No pacing at all.
    pub fn immediate() -> Self {
        Self {
            command_delay: Duration::ZERO,
            skip_delay: Duration::ZERO,
            exit_grace: Duration::ZERO,
        }
    }
}

/// How a script run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOutcome {
    /// Reached the last line; control returns to interactive mode.
    Completed,
    /// Hit `exit`; the session is over.
    Exited,
    /// The script could not be read; nothing ran.
    Unreadable,
}

/// What the scheduler should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Wait, then run the next step.
    Continue(Duration),
    /// `exit` ran: wait out the grace delay, then stop.
    Exit(Duration),
    /// No lines left.
    Done,
}

/// Read a script file into lines. Fails before any step runs.
pub fn read_script(path: impl AsRef<Path>) -> Result<Vec<String>, ScriptReadError> {
    let path = path.as_ref();
    std::fs::read_to_string(path)
        .map(|text| text.lines().map(String::from).collect())
        .map_err(|source| ScriptReadError {
            path: path.display().to_string(),
            source,
        })
}

/// Step machine over the lines of one script.
#[derive(Debug)]
pub struct ScriptRun {
    lines: Vec<String>,
    next: usize,
    stopped: bool,
}

impl ScriptRun {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, next: 0, stopped: false }
    }

    /// Index of the next line to run.
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Run exactly one line and report what comes next.
    pub async fn step(
        &mut self,
        session: &mut Session,
        out: &mut dyn OutputSink,
        options: &SchedulerOptions,
    ) -> Step {
        if self.stopped {
            return Step::Done;
        }
        let Some(line) = self.lines.get(self.next) else {
            self.stopped = true;
            out.emit(OutputMessage::stdout(COMPLETION_MARKER));
            return Step::Done;
        };
        self.next += 1;

        let line = line.trim();
        if line.is_empty() {
            return Step::Continue(options.skip_delay);
        }
        if let Some(comment) = line.strip_prefix('#') {
            out.emit(OutputMessage::stdout(comment.trim_start()));
            return Step::Continue(options.skip_delay);
        }

        tracing::debug!(step = self.next, line, "script step");
        out.emit(OutputMessage::stdout(format!("{}{}", session.prompt(), line)));
        let result = session.exec(line).await;
        out.emit_all(result.messages());

        if result.exit_requested {
            self.stopped = true;
            return Step::Exit(options.exit_grace);
        }
        Step::Continue(options.command_delay)
    }
}

/// Drives a `ScriptRun` with timer-based pacing.
#[derive(Debug, Clone, Default)]
pub struct ScriptScheduler {
    options: SchedulerOptions,
}

impl ScriptScheduler {
    pub fn new(options: SchedulerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SchedulerOptions {
        &self.options
    }

    /// Replay `lines` against `session`, strictly in order.
    pub async fn run(
        &self,
        session: &mut Session,
        lines: Vec<String>,
        out: &mut dyn OutputSink,
    ) -> ScriptOutcome {
        let mut run = ScriptRun::new(lines);
        loop {
            match run.step(session, out, &self.options).await {
                Step::Continue(delay) => pause(delay).await,
                Step::Exit(grace) => {
                    pause(grace).await;
                    tracing::debug!(line = run.position(), "script ended by exit");
                    return ScriptOutcome::Exited;
                }
                Step::Done => return ScriptOutcome::Completed,
            }
        }
    }

    /// Read the script at `path` and replay it.
    pub async fn run_file(
        &self,
        session: &mut Session,
        path: impl AsRef<Path>,
        out: &mut dyn OutputSink,
    ) -> ScriptOutcome {
        match read_script(path) {
            Ok(lines) => self.run(session, lines, out).await,
            Err(e) => {
                tracing::warn!(error = %e, "startup script unreadable");
                out.emit(OutputMessage::stderr(format!("script: {}", e)));
                ScriptOutcome::Unreadable
            }
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VfsManifest;
    use crate::interpreter::{OutputType, SessionOptions};

    fn make_session() -> Session {
        let mut session = Session::new(SessionOptions::default());
        let vfs = VfsManifest::from_json(
            r#"{"files": [{"path": "/docs/a.txt", "type": "file", "content": "A"}]}"#,
            "test",
        )
        .unwrap();
        session.attach_vfs(vfs, &mut Vec::<OutputMessage>::new());
        session
    }

    fn lines(script: &[&str]) -> Vec<String> {
        script.iter().map(|s| s.to_string()).collect()
    }

    fn stdout(out: &[OutputMessage]) -> Vec<&str> {
        out.iter()
            .filter(|m| m.output_type == OutputType::Stdout)
            .map(|m| m.data.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_runs_in_order_and_completes() {
        let mut session = make_session();
        let mut out: Vec<OutputMessage> = Vec::new();
        let outcome = ScriptScheduler::new(SchedulerOptions::immediate())
            .run(&mut session, lines(&["cd docs", "", "pwd", "ls"]), &mut out)
            .await;
        assert_eq!(outcome, ScriptOutcome::Completed);
        assert_eq!(
            stdout(&out),
            vec![
                "user@localhost:/$ cd docs",
                "user@localhost:/docs$ pwd",
                "/docs",
                "user@localhost:/docs$ ls",
                "- a.txt",
                COMPLETION_MARKER,
            ]
        );
    }

    #[tokio::test]
    async fn test_comment_is_echoed_not_executed() {
        let mut session = make_session();
        let mut out: Vec<OutputMessage> = Vec::new();
        ScriptScheduler::new(SchedulerOptions::immediate())
            .run(&mut session, lines(&["#cd docs", "  # indented note", "pwd"]), &mut out)
            .await;
        assert_eq!(out[0], OutputMessage::stdout("cd docs"));
        assert_eq!(out[1], OutputMessage::stdout("indented note"));
        assert_eq!(session.cwd(), "/");
    }

    #[tokio::test]
    async fn test_exit_stops_remaining_steps() {
        let mut session = make_session();
        let mut out: Vec<OutputMessage> = Vec::new();
        let outcome = ScriptScheduler::new(SchedulerOptions::immediate())
            .run(&mut session, lines(&["exit", "cd docs", "ls"]), &mut out)
            .await;
        assert_eq!(outcome, ScriptOutcome::Exited);
        assert_eq!(session.cwd(), "/");
        assert!(!stdout(&out).contains(&COMPLETION_MARKER));
        assert!(!out.iter().any(|m| m.data.contains("cd docs")));
    }

    #[tokio::test]
    async fn test_errors_do_not_stop_script() {
        let mut session = make_session();
        let mut out: Vec<OutputMessage> = Vec::new();
        let outcome = ScriptScheduler::new(SchedulerOptions::immediate())
            .run(&mut session, lines(&["bogus", "cd nowhere", "cat", "pwd"]), &mut out)
            .await;
        assert_eq!(outcome, ScriptOutcome::Completed);
        let errors: Vec<&str> = out
            .iter()
            .filter(|m| m.output_type == OutputType::Stderr)
            .map(|m| m.data.as_str())
            .collect();
        assert_eq!(
            errors,
            vec![
                "unknown command 'bogus'",
                "cd: nowhere: no such file or directory",
                "usage: cat <file>",
            ]
        );
        assert!(stdout(&out).contains(&"/"));
    }

    #[tokio::test]
    async fn test_step_machine_positions() {
        let mut session = make_session();
        let mut out: Vec<OutputMessage> = Vec::new();
        let options = SchedulerOptions::default();
        let mut run = ScriptRun::new(lines(&["", "# note", "pwd", "exit", "ls"]));

        assert_eq!(run.step(&mut session, &mut out, &options).await, Step::Continue(options.skip_delay));
        assert_eq!(run.step(&mut session, &mut out, &options).await, Step::Continue(options.skip_delay));
        assert_eq!(run.step(&mut session, &mut out, &options).await, Step::Continue(options.command_delay));
        assert_eq!(run.step(&mut session, &mut out, &options).await, Step::Exit(options.exit_grace));
        assert!(run.is_stopped());
        assert_eq!(run.position(), 4);

        let before = out.len();
        assert_eq!(run.step(&mut session, &mut out, &options).await, Step::Done);
        assert_eq!(out.len(), before);
        assert_eq!(run.position(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pacing_uses_configured_delays() {
        let mut session = make_session();
        let mut out: Vec<OutputMessage> = Vec::new();
        let options = SchedulerOptions {
            command_delay: Duration::from_millis(500),
            skip_delay: Duration::from_millis(10),
            exit_grace: Duration::from_millis(300),
        };
        let start = tokio::time::Instant::now();
        let outcome = ScriptScheduler::new(options)
            .run(&mut session, lines(&["pwd", "# c", "", "pwd", "exit", "pwd"]), &mut out)
            .await;
        assert_eq!(outcome, ScriptOutcome::Exited);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500 + 10 + 10 + 500 + 300), "{:?}", elapsed);
        assert!(elapsed < Duration::from_millis(1400), "{:?}", elapsed);
    }

    #[tokio::test]
    async fn test_unreadable_script_runs_nothing() {
        let mut session = make_session();
        let mut out: Vec<OutputMessage> = Vec::new();
        let outcome = ScriptScheduler::default()
            .run_file(&mut session, "/no/such/script.sh", &mut out)
            .await;
        assert_eq!(outcome, ScriptOutcome::Unreadable);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].output_type, OutputType::Stderr);
        assert!(out[0].data.starts_with("script: cannot read script '/no/such/script.sh'"));
    }

    #[test]
    fn test_default_options() {
        let options = SchedulerOptions::default();
        assert!(options.command_delay > options.skip_delay);
        assert_eq!(SchedulerOptions::immediate().command_delay, Duration::ZERO);
    }
}
