//! Linear command sequencing
//!
//! Executes the fixed rebuild sequence one command at a time: each command is
//! echoed to stdout before it runs, then spawned directly from its argument
//! vector with inherited stdio. No shell is involved, so the echoed line is
//! exactly the argv that runs.

use std::fmt;

use crate::{
    compose::CompileSpec,
    constants::{CLEAR_SCREEN_PROGRAM, REMOVE_PROGRAM},
    error::Error,
    utils::execute_argv,
};

/// Per-command execution state, with the exit code where one was observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandState {
    Pending,
    Running,
    /// Exited with status zero
    Completed(Option<i32>),
    /// Exited non-zero, was killed by a signal, or failed to spawn
    Failed(Option<i32>),
}

/// Sequence-level execution state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    NotStarted,
    InProgress,
    Done,
}

/// A single executable command, constructed once and run exactly once
#[derive(Debug, Clone)]
pub struct Command {
    argv: Vec<String>,
    state: CommandState,
}

impl Command {
    pub fn from_argv(argv: Vec<String>) -> Result<Self, Error> {
        if argv.is_empty() || argv[0].is_empty() {
            return Err(Error::InvalidConfiguration(
                "a command needs at least a program name".into(),
            ));
        }
        Ok(Self {
            argv,
            state: CommandState::Pending,
        })
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn state(&self) -> &CommandState {
        &self.state
    }
}

impl fmt::Display for Command {
    /// The literal command line, as echoed before execution
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}

/// An ordered list of commands executed in declaration order
///
/// By default a failed step is recorded and skipped over, never escalated:
/// a rebuild sequence must survive `rm` failing on an artifact that does not
/// exist yet. Strict mode is the opt-in stronger contract that aborts at the
/// first failure.
#[derive(Debug)]
pub struct CommandSequence {
    commands: Vec<Command>,
    state: SequenceState,
    is_strict: bool,
}

impl CommandSequence {
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            commands,
            state: SequenceState::NotStarted,
            is_strict: false,
        }
    }

    /// Abort the sequence at the first failed command
    pub fn strict(mut self, value: bool) -> Self {
        self.is_strict = value;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.is_strict
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// The literal command lines, in execution order
    pub fn render(&self) -> Vec<String> {
        self.commands.iter().map(|cmd| cmd.to_string()).collect()
    }

    /// Run every command in order, blocking on each until it finishes
    ///
    /// Returns the exit code of the last executed command. Execution is
    /// strictly sequential with no timeout: a stuck process stalls the whole
    /// sequence. Stdout and stderr are inherited, so failures of individual
    /// steps are visible on the console even though they are not escalated.
    pub fn run(&mut self) -> Result<Option<i32>, Error> {
        self.state = SequenceState::InProgress;

        let mut last_code = None;
        for command in &mut self.commands {
            // Echo before execution, for auditability
            println!("{}", command);
            command.state = CommandState::Running;

            match execute_argv(&command.argv) {
                Ok(status) => {
                    let code = status.code();
                    log::debug!("`{}` exited with {}", command, status);
                    command.state = if status.success() {
                        CommandState::Completed(code)
                    } else {
                        CommandState::Failed(code)
                    };
                    last_code = code;
                    if self.is_strict && !status.success() {
                        return Err(Error::ExecutionFailure(format!(
                            "`{}` exited with {}",
                            command, status
                        )));
                    }
                }
                Err(err) => {
                    log::warn!("failed to spawn `{}`: {}", command, err);
                    command.state = CommandState::Failed(None);
                    last_code = None;
                    if self.is_strict {
                        return Err(Error::ExecutionFailure(format!(
                            "failed to spawn `{}`: {}",
                            command, err
                        )));
                    }
                }
            }
        }

        self.state = SequenceState::Done;
        Ok(last_code)
    }
}

/// Assemble the fixed clean-and-rebuild sequence for one compile spec:
/// remove the previous artifact, clear the screen, compile.
///
/// Composition happens here, so a bad configuration fails before the
/// artifact-removal step ever runs.
pub fn rebuild_sequence(spec: &CompileSpec) -> Result<CommandSequence, Error> {
    let compile = Command::from_argv(spec.tokens()?)?;
    let commands = vec![
        Command::from_argv(vec![
            REMOVE_PROGRAM.to_string(),
            spec.output_path().to_string(),
        ])?,
        Command::from_argv(vec![CLEAR_SCREEN_PROGRAM.to_string()])?,
        compile,
    ];
    Ok(CommandSequence::new(commands))
}
