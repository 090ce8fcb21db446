use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env as std_env;

lazy_static! {
    pub static ref DEFAULT_LOG_FILTER: String =
        load_or_default(env::LOG_FILTER_ENV_VAR, "error_tracker=info");
}

fn load_env() {
    dotenv().ok();
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const LOG_FILTER_ENV_VAR: &str = "ERROR_TRACKER_LOG";
}
