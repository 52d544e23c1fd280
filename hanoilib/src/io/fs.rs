//! A module responsible for the solver's file system operations.
use super::*;

use itertools::Itertools;

use std::io::prelude::*;
use std::path::{Path, PathBuf};

/// Convert a string to sanitized JSON filename.
pub fn name_to_json(name: &str) -> String {
    let name = name.split_whitespace().join("-");
    let name = name + ".json";
    sanitize_filename::sanitize(name)
}

/// Given a `serde_json::Value`, read it from the path it specifies if it's a
/// string, relative to the given `path`.
pub fn read_json_value_from_file<P: AsRef<Path>>(
    value: &mut serde_json::Value,
    path: P,
) -> std::io::Result<bool> {
    if let serde_json::Value::String(s) = value {
        let mut target_path = PathBuf::new();
        target_path.push(path);
        target_path.pop();
        target_path.push(s);
        *value = {
            let content = std::fs::read_to_string(&target_path)?;
            serde_json::from_str(&content)?
        };
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Given a `serde_json::Value`, read its given `field` from the path it
/// specifies if it's a string, relative to the given `path`.
pub fn read_field_from_file<P: AsRef<Path>>(
    value: &mut serde_json::Value,
    field: &str,
    path: P,
) -> std::io::Result<bool> {
    let field = value.get_mut(field);
    if let Some(v) = field {
        read_json_value_from_file(v, path)
    } else {
        Ok(false)
    }
}

impl HanoiProblem {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<HanoiProblem> {
        let content = std::fs::read_to_string(&path)?;
        let mut value: serde_json::Value = serde_json::from_str(&content)?;
        // Either arrangement may be kept in a separate file.
        read_field_from_file(&mut value, "start", &path)?;
        read_field_from_file(&mut value, "goal", &path)?;
        let problem: HanoiProblem = serde_json::from_value(value)?;
        Ok(problem)
    }
}

/// Save a solved problem as a human-readable (pretty) JSON file.
pub fn save_solution<P: AsRef<Path>>(
    problem: HanoiProblem,
    solution: &Solution,
    path: P,
) -> std::io::Result<()> {
    let content = serde_json::json!({
        "problem": problem,
        "solution": solution,
    });
    let content = match serde_json::to_string_pretty(&content) {
        Ok(s) => s,
        Err(e) => {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
        }
    };
    let mut file = std::fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    log::info!("Saved solution: {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_to_json() {
        assert_eq!(
            name_to_json("Nine disks on 5 pegs"),
            "Nine-disks-on-5-pegs.json"
        );
        assert_eq!(
            name_to_json("/Nine    disks on 5 pegs"),
            "Nine-disks-on-5-pegs.json"
        );
        assert_eq!(
            name_to_json("\\/?Nine    disks?on 5    pegs"),
            "Nine-diskson-5-pegs.json"
        );
    }
}
