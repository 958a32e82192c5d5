use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use clap::ValueEnum;
use smartrx_core::state::ModalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModalAction {
    Open,
    Close,
    Toggle,
}

pub fn run(modal: &Arc<ModalState>, action: ModalAction, out: &mut impl Write) -> Result<()> {
    let notices = Arc::new(Mutex::new(Vec::new()));
    let id = {
        let observed = Arc::clone(modal);
        let notices = Arc::clone(&notices);
        modal.subscribe(move || {
            let state = if observed.is_open() { "open" } else { "closed" };
            notices
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(format!("modal is now {}", state));
            Ok(())
        })
    };

    let result = match action {
        ModalAction::Open => modal.open(),
        ModalAction::Close => modal.close(),
        ModalAction::Toggle => modal.toggle(),
    };
    modal.unsubscribe(id);

    for notice in notices.lock().unwrap_or_else(PoisonError::into_inner).iter() {
        writeln!(out, "  -> notified: {}", notice)?;
    }
    if !result.context("Modal change listener failed")? {
        writeln!(out, "Modal unchanged, no notification sent")?;
    }
    writeln!(out, "Modal open: {}", modal.is_open())?;
    Ok(())
}
