use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub mod error;
pub mod game;

pub use error::{Error, Result};
use game::{Session, SessionConfig};

thread_local! {
    static SESSION: RefCell<Option<Session>> = RefCell::new(None);
}

fn with_session_mut<R>(f: impl FnOnce(&mut Session) -> R) -> Result<R> {
    SESSION.with(|cell| {
        let mut opt = cell.borrow_mut();
        match opt.as_mut() {
            Some(session) => Ok(f(session)),
            None => Err(Error::NotInitialized),
        }
    })
}

#[derive(Serialize)]
struct ErrorView {
    error: String,
}

fn to_json<T: Serialize>(result: Result<T>) -> String {
    let encoded = result.and_then(|value| serde_json::to_string(&value).map_err(Error::from));
    match encoded {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(%err, "web call failed");
            let view = ErrorView {
                error: err.to_string(),
            };
            serde_json::to_string(&view).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

fn console_log(lines: &[String]) {
    for line in lines {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&JsValue::from_str(line));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!(target: "comms", "{line}");
    }
}

fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Starts (or replaces) the dashboard's session and returns its first snapshot.
#[wasm_bindgen]
pub fn init_session(seed: u64, auto_next: bool) -> String {
    set_panic_hook();
    let config = SessionConfig {
        seed,
        auto_next_planet: auto_next,
        ..SessionConfig::default()
    };
    SESSION.with(|s| {
        *s.borrow_mut() = Some(Session::new(config));
    });
    snapshot()
}

#[wasm_bindgen]
pub fn snapshot() -> String {
    let view = with_session_mut(|session| serde_json::to_value(session.snapshot()));
    to_json(view.and_then(|encoded| encoded.map_err(Error::from)))
}

#[wasm_bindgen]
pub fn new_planet() -> String {
    to_json(with_session_mut(|session| session.new_planet().clone()))
}

#[wasm_bindgen]
pub fn explore() -> String {
    to_json(with_session_mut(|session| {
        let outcome = session.explore();
        if let Some(out) = &outcome {
            console_log(&out.messages);
        }
        outcome
    }))
}

#[wasm_bindgen]
pub fn scan() -> String {
    to_json(with_session_mut(|session| {
        let outcome = session.scan();
        if let Some(out) = &outcome {
            console_log(&out.messages);
        }
        outcome
    }))
}

#[wasm_bindgen]
pub fn leave() -> String {
    to_json(with_session_mut(|session| {
        let outcome = session.leave();
        if let Some(out) = &outcome {
            console_log(&out.messages);
        }
        outcome
    }))
}

#[wasm_bindgen]
pub fn buy(qty: u32) -> String {
    to_json(with_session_mut(|session| {
        let outcome = session.buy(qty);
        console_log(&outcome.messages);
        outcome
    }))
}

#[wasm_bindgen]
pub fn sell(qty: u32) -> String {
    to_json(with_session_mut(|session| {
        let outcome = session.sell(qty);
        console_log(&outcome.messages);
        outcome
    }))
}

#[wasm_bindgen]
pub fn set_auto_next(enabled: bool) -> String {
    if let Err(err) = with_session_mut(|session| session.set_auto_next_planet(enabled)) {
        return to_json::<()>(Err(err));
    }
    snapshot()
}

#[wasm_bindgen]
pub fn restart() -> String {
    if let Err(err) = with_session_mut(Session::restart) {
        return to_json::<()>(Err(err));
    }
    snapshot()
}

#[wasm_bindgen]
pub fn clear_log() -> String {
    if let Err(err) = with_session_mut(Session::clear_log) {
        return to_json::<()>(Err(err));
    }
    snapshot()
}

/// One-off planet for previews; doesn't touch the session.
#[wasm_bindgen]
pub fn generate_planet_json(seed: u64) -> String {
    use rand::SeedableRng;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    to_json(Ok(game::generate_planet(&mut rng)))
}

/// Danger tier, risk and trade lock for a planet the page already holds as JSON.
#[wasm_bindgen]
pub fn assess_planet(planet_json: &str) -> String {
    let planet = serde_json::from_str::<game::Planet>(planet_json).map_err(Error::from);
    to_json(planet.map(|planet| planet.assess()))
}
