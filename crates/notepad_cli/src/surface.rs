//! Terminal rendering surface.
//!
//! Prints every view it is notified with, either as text or as JSON lines.

use notepad_core::{Intent, NoteDetail, SurfaceObserver, SurfaceView};
use std::cell::Cell;
use std::fmt::{self, Display, Formatter};
use std::io::Write;
use std::rc::Rc;

/// Output format of the terminal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Light,
    Dark,
}

/// Observer that redraws the whole view on stdout after each dispatch.
///
/// Clones share the theme, so a clone kept outside the controller renders
/// with the theme the subscribed copy has toggled to.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    format: OutputFormat,
    theme: Rc<Cell<Theme>>,
}

impl TerminalSurface {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            theme: Rc::new(Cell::new(Theme::Light)),
        }
    }

    /// Renders `view` the way it is printed after a dispatch.
    pub fn render(&self, view: &SurfaceView) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string(view).unwrap_or_else(|err| {
                log::error!("event=view_encode module=cli status=error error={err}");
                String::from("{}")
            }),
            OutputFormat::Text => TextView {
                view,
                theme: self.theme.get(),
            }
            .to_string(),
        }
    }
}

impl SurfaceObserver for TerminalSurface {
    fn on_view(&mut self, view: &SurfaceView) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{}", self.render(view)) {
            log::warn!("event=view_print module=cli status=error error={err}");
        }
    }

    fn on_pass_through(&mut self, intent: &Intent) {
        if *intent == Intent::ToggleTheme {
            let next = match self.theme.get() {
                Theme::Light => Theme::Dark,
                Theme::Dark => Theme::Light,
            };
            self.theme.set(next);
        }
    }
}

/// Plain-text layout of one view.
struct TextView<'a> {
    view: &'a SurfaceView,
    theme: Theme,
}

impl Display for TextView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rule = match self.theme {
            Theme::Light => "-",
            Theme::Dark => "=",
        }
        .repeat(40);

        writeln!(f, "{rule}")?;
        writeln!(f, "Notes ({})", self.view.notes.len())?;
        for (index, item) in self.view.notes.iter().enumerate() {
            let marker = if item.is_active { '*' } else { ' ' };
            write!(f, "{marker} {}. {}", index + 1, item.title)?;
            if let Some(preview) = item.preview.as_deref() {
                write!(f, " | {preview}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{rule}")?;
        match self.view.detail.as_ref() {
            None => write!(f, "(no note selected)"),
            Some(NoteDetail::Editing {
                draft_title,
                draft_content,
            }) => write!(
                f,
                "[editing]\ntitle: {draft_title}\ncontent:\n{draft_content}"
            ),
            Some(NoteDetail::Viewing { title, markup }) => {
                write!(f, "[viewing] {title}\n{markup}")
            }
        }
    }
}
