//! Terminal surface for the notepad core.
//!
//! # Responsibility
//! - Read one command per stdin line and dispatch it as an intent.
//! - Print the resulting view after every dispatch.

mod command;
mod surface;

use clap::Parser;
use command::{parse_line, Command, NoteRef, HELP};
use notepad_core::{
    default_log_level, init_logging, ControllerConfig, Dispatch, Intent, MarkupPolicy,
    NoteController, NoteId, SurfaceView,
};
use std::io::{self, BufRead, IsTerminal, Write};
use surface::{OutputFormat, TerminalSurface};

#[derive(Parser)]
#[command(name = "notepad", version, about = "In-memory markdown notes")]
struct Args {
    /// Log level: trace|debug|info|warn|error (needs `--log-dir`)
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,
    /// Escape `<`, `&` and quotes in note content before rendering
    #[arg(long)]
    escape_markup: bool,
    /// Print views as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let markup_policy = if args.escape_markup {
        MarkupPolicy::EscapeTags
    } else {
        MarkupPolicy::Raw
    };
    let mut controller = NoteController::new(ControllerConfig {
        markup_policy,
        ..ControllerConfig::default()
    });
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let surface = TerminalSurface::new(format);
    controller.subscribe(surface.clone());
    log::info!(
        "event=cli_start module=cli status=ok version={} markup_policy={:?}",
        notepad_core::core_version(),
        markup_policy
    );

    run(&mut controller, &surface)
}

fn run(controller: &mut NoteController, surface: &TerminalSurface) -> io::Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        let view = controller.view();
        let intent = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Show => {
                println!("{}", surface.render(&view));
                continue;
            }
            Command::New => Intent::Create,
            Command::Save => Intent::Save,
            Command::Edit => Intent::BeginEdit,
            Command::Theme => Intent::ToggleTheme,
            Command::Title(text) => Intent::SetDraftTitle(text),
            Command::Content(text) => Intent::SetDraftContent(text),
            Command::Select(note) => match resolve_or_report(note, &view) {
                Some(id) => Intent::Select(id),
                None => continue,
            },
            Command::Delete(note) => match resolve_or_report(note, &view) {
                Some(id) => Intent::Delete(id),
                None => continue,
            },
        };

        if let Dispatch::Ignored(reason) = controller.dispatch(intent) {
            eprintln!("ignored: {reason}");
        }
    }

    log::info!(
        "event=cli_exit module=cli status=ok notes={}",
        controller.store().len()
    );
    Ok(())
}

fn resolve_or_report(note: NoteRef, view: &SurfaceView) -> Option<NoteId> {
    note.resolve(view)
        .map_err(|err| eprintln!("{err}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn log_level_requires_log_dir() {
        assert!(Args::try_parse_from(["notepad", "--log-level", "debug"]).is_err());

        let args =
            Args::try_parse_from(["notepad", "--log-level", "debug", "--log-dir", "/tmp/np"])
                .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.log_dir.as_deref(), Some("/tmp/np"));
    }

    #[test]
    fn flags_default_to_off() {
        let args = Args::try_parse_from(["notepad"]).unwrap();
        assert!(!args.json);
        assert!(!args.escape_markup);
        assert!(args.log_dir.is_none());
    }
}
