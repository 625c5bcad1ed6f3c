pub mod access;
pub mod chat;
pub mod commands;
pub mod completion;
pub mod composer;
pub mod config;
pub mod conversation;
pub mod emergency;
pub mod models;
pub mod onboarding;
pub mod speech;
pub mod state;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("DiagnoAide starting v{}", config::APP_VERSION);

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(Arc::new(state::AppState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::access::verify_access_code,
            commands::access::current_screen,
            commands::onboarding::onboarding_state,
            commands::onboarding::set_onboarding_age,
            commands::onboarding::set_onboarding_gender,
            commands::onboarding::set_onboarding_info,
            commands::onboarding::toggle_medical_condition,
            commands::onboarding::advance_onboarding,
            commands::onboarding::retreat_onboarding,
            commands::onboarding::medical_conditions,
            commands::onboarding::gender_options,
            commands::chat::send_message,
            commands::chat::get_messages,
            commands::chat::set_draft,
            commands::chat::toggle_quick_symptom,
            commands::chat::composer_state,
            commands::chat::quick_symptoms,
            commands::chat::is_generating,
            commands::chat::emergency_available,
            commands::chat::place_emergency_call,
            commands::chat::start_listening,
            commands::chat::stop_listening,
        ])
        .run(tauri::generate_context!())
        .expect("error while running DiagnoAide");
}
