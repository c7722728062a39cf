use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Pick script for headless-ish replays: the same game can be replayed by
/// pinning the seed and listing offer indices to pick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickScript {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub rounds: Option<u8>,
    #[serde(default)]
    pub picks: Vec<usize>,
}

pub fn load_script_file(path: &Path) -> anyhow::Result<PickScript> {
    let raw = fs::read_to_string(path)?;
    let script = serde_json::from_str(&raw)?;
    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_script() {
        let script: PickScript =
            serde_json::from_str(r#"{"seed": 9, "rounds": 3, "picks": [0, 2, 1]}"#).unwrap();
        assert_eq!(script.seed, Some(9));
        assert_eq!(script.rounds, Some(3));
        assert_eq!(script.picks, vec![0, 2, 1]);
    }

    #[test]
    fn missing_fields_default() {
        let script: PickScript = serde_json::from_str("{}").unwrap();
        assert_eq!(script.seed, None);
        assert!(script.picks.is_empty());
    }
}
