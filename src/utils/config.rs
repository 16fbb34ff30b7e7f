use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads an environment variable, falling back to a default when it is
/// missing or does not parse as `T`.
///
/// # Arguments
///
/// * `env_var` - Name of the environment variable
/// * `default` - Value used when the variable is absent or unparseable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|_| {
            warn!("Could not parse {env_var}={raw}, using default");
            default
        }),
        Err(_) => default,
    }
}
