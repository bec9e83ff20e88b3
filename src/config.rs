use std::collections::HashMap;
use std::fs;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            match parse_line(line) {
                Ok(Some((key, value))) => {
                    values.insert(key, value);
                }
                Ok(None) => {}
                Err(()) => return Err(format!("Invalid config line {}: {}", idx + 1, line)),
            }
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

// Accepts KEY=VALUE, an optional "export " prefix, and single or double
// quotes around the value. Blank lines and '#' comments are skipped.
fn parse_line(line: &str) -> Result<Option<(String, String)>, ()> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
    let Some((key, value)) = trimmed.split_once('=') else {
        return Err(());
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(());
    }
    let mut value = value.trim();
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        value = &value[1..value.len() - 1];
    }
    Ok(Some((key.to_string(), value.to_string())))
}
