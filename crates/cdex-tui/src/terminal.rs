//! Terminal setup and restoration

use cdex_core::prelude::*;
use ratatui::DefaultTerminal;

/// Enter raw mode and the alternate screen
///
/// Installs the panic hook first so a panic anywhere after this point
/// leaves the user's shell usable.
pub fn enter() -> Result<DefaultTerminal> {
    install_panic_hook();
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave the alternate screen; safe to call more than once
pub fn leave() {
    ratatui::restore();
    debug!("Terminal restored");
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
