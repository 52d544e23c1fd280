use super::*;

fn basic_problem() -> HanoiProblem {
    HanoiProblem {
        name: Some(String::from("Basic two-disk case")),
        start: vec![vec![2, 1], vec![], vec![]],
        goal: vec![vec![], vec![], vec![2, 1]],
        memory_limit: None,
    }
}

#[test]
fn prepare_builds_states() {
    let (problem, config) = basic_problem().prepare().unwrap();
    assert_eq!(problem.start.peg_count(), 3);
    assert_eq!(problem.start.pegs[0].as_slice(), &[1, 2]);
    assert!(problem.start.pegs[1].is_empty());
    assert_eq!(problem.goal.pegs[2].as_slice(), &[1, 2]);
    assert_eq!(config.max_memory, usize::MAX);
}

#[test]
fn prepare_honors_memory_limit() {
    let mut problem = basic_problem();
    problem.memory_limit = Some(1 << 30);
    let (_, config) = problem.prepare().unwrap();
    assert_eq!(config.max_memory, 1 << 30);
}

#[test]
fn prepare_rejects_peg_count_mismatch() {
    let mut problem = basic_problem();
    problem.goal = vec![vec![], vec![2, 1]];
    assert!(matches!(
        problem.prepare(),
        Err(SolveFailure::BadInput(_))
    ));
}

#[test]
fn prepare_rejects_duplicate_disk_on_a_peg() {
    let mut problem = basic_problem();
    problem.start = vec![vec![2, 1, 1], vec![], vec![]];
    assert!(matches!(
        problem.prepare(),
        Err(SolveFailure::BadInput(_))
    ));
}

#[test]
fn prepare_rejects_disk_on_two_pegs() {
    let mut problem = basic_problem();
    problem.goal = vec![vec![2], vec![2], vec![1]];
    assert!(matches!(
        problem.prepare(),
        Err(SolveFailure::BadInput(_))
    ));
}

#[test]
fn prepare_rejects_different_universes() {
    let mut problem = basic_problem();
    problem.goal = vec![vec![], vec![], vec![3, 1]];
    assert!(matches!(
        problem.prepare(),
        Err(SolveFailure::BadInput(_))
    ));
}

#[test]
fn prepare_rejects_zero_disk_identifiers() {
    let mut problem = basic_problem();
    problem.start = vec![vec![0, 1], vec![], vec![]];
    assert!(matches!(
        problem.prepare(),
        Err(SolveFailure::BadInput(_))
    ));
}

#[test]
fn problem_deserializes_from_json() {
    let problem: HanoiProblem = serde_json::from_str(
        r#"{
            "name": "Basic two-disk case",
            "start": [[2, 1], [], []],
            "goal": [[], [], [2, 1]]
        }"#,
    )
    .unwrap();
    assert_eq!(problem, basic_problem());
    assert_eq!(problem.memory_limit, None);
}

#[test]
fn solution_serializes_with_camel_case_keys() {
    let solution = basic_problem().solve().unwrap();
    let value = serde_json::to_value(&solution).unwrap();
    assert_eq!(value["found"], serde_json::Value::Bool(true));
    assert!(value["totalTime"].is_number());
    assert!(value["searchTime"].is_number());
    assert!(value["maxMemory"].is_number());
    assert_eq!(value["path"]["moves"].as_array().unwrap().len(), 3);
    assert_eq!(value["path"]["states"].as_array().unwrap().len(), 4);
    // Pegs serialize as sorted disk lists.
    assert_eq!(
        value["path"]["states"][0],
        serde_json::json!([[1, 2], [], []])
    );
    assert_eq!(
        value["path"]["moves"][0],
        serde_json::json!({"disk": 1, "source": 0, "dest": 1})
    );
}

#[test]
fn unreachable_solution_serializes_as_not_found() {
    let problem = HanoiProblem {
        name: None,
        start: vec![vec![1, 2], vec![]],
        goal: vec![vec![1], vec![2]],
        memory_limit: None,
    };
    let solution = problem.solve().unwrap();
    let value = serde_json::to_value(&solution).unwrap();
    assert_eq!(value["found"], serde_json::Value::Bool(false));
    assert!(value["path"]["states"].as_array().unwrap().is_empty());
}

#[test]
fn benchmark_result_round_trip() {
    let result = BenchmarkResult {
        total_time: 1.5,
        search_time: 1.25,
        max_memory: 4096,
        states: 27,
        moves: Some(7),
    };
    let serialized = serde_json::to_string(&result).unwrap();
    assert!(serialized.contains("\"searchTime\""));
    assert!(serialized.contains("\"maxMemory\""));
    let parsed: BenchmarkResult = serde_json::from_str(&serialized).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn failed_benchmark_serializes_with_description() {
    let result = ProblemBenchmarkResult {
        name: Some(String::from("oom")),
        result: Err(SolveFailure::OutOfMemory {
            used: 2048,
            limit: 1024,
        }),
    };
    let value = serde_json::to_value(&result).unwrap();
    assert!(value["result"]["error"].is_object());
    assert_eq!(
        value["result"]["description"],
        serde_json::Value::String(String::from("Out of memory! Used 2048 of 1024."))
    );
}
