use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, ProgressMode};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub progress: bool,
    pub notices: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(flags, std::io::stderr().is_terminal()));
}

fn resolve(flags: &GlobalFlags, stderr_is_tty: bool) -> UiPrefs {
    // Progress is drawn on stderr, so it only depends on stderr being a tty.
    let progress = match flags.progress {
        ProgressMode::On => !flags.quiet,
        ProgressMode::Off => false,
        ProgressMode::Auto => stderr_is_tty && !flags.quiet,
    };

    UiPrefs {
        progress,
        notices: !flags.quiet,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        progress: false,
        notices: true,
    })
}
