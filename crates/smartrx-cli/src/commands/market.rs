use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use smartrx_core::state::MarketState;

/// Prints the selected market, optionally selecting a new one first.
///
/// A listener is attached for the duration of the write so the output shows
/// whether a change notification fired.
pub fn run(market: &Arc<MarketState>, set: Option<String>, out: &mut impl Write) -> Result<()> {
    if let Some(new_market) = set {
        let notices = Arc::new(Mutex::new(Vec::new()));
        let id = {
            let observed = Arc::clone(market);
            let notices = Arc::clone(&notices);
            market.subscribe(move || {
                notices
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(format!("market is now '{}'", observed.selected_market()));
                Ok(())
            })
        };

        let changed = market.set_selected_market(new_market.as_str());
        market.unsubscribe(id);

        for notice in notices.lock().unwrap_or_else(PoisonError::into_inner).iter() {
            writeln!(out, "  -> notified: {}", notice)?;
        }
        if changed.context("Market change listener failed")? {
            tracing::info!(market = %new_market, "Market selection changed");
        } else {
            writeln!(out, "Market already '{}', no notification sent", new_market)?;
        }
    }

    writeln!(out, "Selected market: {}", market.selected_market())?;
    Ok(())
}
