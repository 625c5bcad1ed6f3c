//! Login screen — Tauri IPC commands.
//!
//! The gate is the only thing that drives the login → conversation
//! transition. Failure reasons stay distinguishable ("enter your code" vs
//! "invalid code") so the frontend can toast accordingly and clear the
//! input on a wrong code.

use std::sync::Arc;

use tauri::State;

use crate::access;
use crate::state::{AppState, Screen};

/// Check the entered access code; on success advance to the conversation
/// screen. The error string is the user-visible toast message.
#[tauri::command]
pub fn verify_access_code(
    code: String,
    state: State<'_, Arc<AppState>>,
) -> Result<(), String> {
    access::check(&code).map_err(|e| e.to_string())?;
    state.advance_screen(Screen::Home).map_err(|e| e.to_string())?;
    tracing::info!("Access granted");
    Ok(())
}

/// Which screen the app is currently on.
#[tauri::command]
pub fn current_screen(state: State<'_, Arc<AppState>>) -> Screen {
    state.current_screen()
}

#[cfg(test)]
mod tests {
    use crate::access::{self, AccessDenied};
    use crate::state::{AppState, Screen};

    // Command wrappers take `tauri::State`; the logic they compose is
    // exercised directly here.

    #[test]
    fn granted_code_advances_to_home() {
        let state = AppState::new();
        assert!(access::check("DGSK-2838").is_ok());
        state.advance_screen(Screen::Home).unwrap();
        assert_eq!(state.current_screen(), Screen::Home);
    }

    #[test]
    fn refused_code_leaves_screen_on_login() {
        let state = AppState::new();
        assert_eq!(access::check("WRONG"), Err(AccessDenied::Invalid));
        assert_eq!(state.current_screen(), Screen::Login);
    }
}
