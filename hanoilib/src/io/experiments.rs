use std::path::Path;

use super::*;

/// A named batch of problems to solve in one run.
#[derive(Serialize, Deserialize, Debug)]
pub struct Experiment {
    pub name: Option<String>,
    pub problems: Vec<HanoiProblem>,
}

pub fn serialize_benchmark_result<S>(
    result: &Result<BenchmarkResult, SolveFailure>,
    s: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match result {
        Ok(result) => {
            let mut ser = s.serialize_map(Some(1))?;
            ser.serialize_entry("success", result)?;
            ser.end()
        }
        Err(failure) => {
            let mut ser = s.serialize_map(Some(2))?;
            ser.serialize_entry("error", failure)?;
            ser.serialize_entry("description", format!("{}", failure).as_str())?;
            ser.end()
        }
    }
}

/// The outcome of solving a single problem of an [`Experiment`].
#[derive(Serialize, Debug)]
pub struct ProblemBenchmarkResult {
    pub name: Option<String>,
    #[serde(serialize_with = "serialize_benchmark_result")]
    pub result: Result<BenchmarkResult, SolveFailure>,
}

pub fn read_experiment_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Experiment> {
    let content = std::fs::read_to_string(&path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    read_experiment_from_value(value, path)
}

/// Parse an [`Experiment`] from a JSON value. An entry of the `problems`
/// array may be a string: the path of a problem file, relative to the
/// experiment file at `path`.
pub fn read_experiment_from_value<P: AsRef<Path>>(
    value: serde_json::Value,
    path: P,
) -> std::io::Result<Experiment> {
    if let serde_json::Value::Object(mut map) = value {
        let name = if let Some(serde_json::Value::String(s)) = map.get("name") {
            Some(s.clone())
        } else {
            None
        };
        if let Some(problems) = map.get_mut("problems") {
            if let serde_json::Value::Array(a) = problems.take() {
                let problems = a
                    .into_iter()
                    .map(|mut v| -> std::io::Result<HanoiProblem> {
                        fs::read_json_value_from_file(&mut v, &path)?;
                        let problem: HanoiProblem = serde_json::from_value(v)?;
                        Ok(problem)
                    })
                    .collect::<std::io::Result<Vec<HanoiProblem>>>()?;
                Ok(Experiment { name, problems })
            } else {
                Err(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "problems field is not array",
                ))
            }
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "Missing field: problems",
            ))
        }
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "Experiment must be a JSON object",
        ))
    }
}
