use ladeplan_core::error::LadeplanError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), LadeplanError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
