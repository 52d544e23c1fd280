/// Commands related to running experiments and solving problems.
use super::*;

use hanoilib::hanoi::Solution;

fn read_problem<P: AsRef<Path>>(path: P) -> HanoiProblem {
    match HanoiProblem::read_from_file(path) {
        Ok(x) => x,
        Err(err) => fatal_error!(1, "Cannot read problem: {}", err),
    }
}

fn print_benchmark_result(result: &Result<BenchmarkResult, SolveFailure>) {
    match result {
        Ok(result) => {
            println!("{:18}{}", "Explored States:".bold(), result.states);
            println!("{:18}{}", "Max Memory:".bold(), result.max_memory);
            println!("{:18}{}", "Search Time:".bold(), result.search_time);
            println!("{:18}{}", "Total Time:".bold(), result.total_time);
            match result.moves {
                Some(moves) => println!("{:18}{}", "Moves:".bold(), moves),
                None => println!("{}", "No solution: the goal is unreachable.".yellow().bold()),
            }
        }
        Err(failure) => {
            println!("{}", "Solve failed!".red().bold());
            println!("{}", failure);
        }
    }
}

fn print_moves(solution: &Solution) {
    for (i, action) in solution.path.actions().iter().enumerate() {
        println!("{:>4}. {}", i + 1, action);
    }
}

impl Solve {
    pub fn run(self) {
        let Solve {
            path,
            memory_limit,
            json,
        } = self;

        let mut problem = read_problem(&path);
        if memory_limit.is_some() {
            problem.memory_limit = memory_limit;
        }
        let name = problem.name.clone().unwrap_or_else(|| "-".to_string());

        println!("{:18}{}", "Problem Name:".bold(), name);

        let solution = match problem.solve() {
            Ok(s) => s,
            Err(err) => fatal_error!(1, "Cannot solve problem: {}", err),
        };

        print_benchmark_result(&Ok(solution.get_benchmark_result()));
        print_moves(&solution);

        if json {
            let serialized = match serde_json::to_string_pretty(&solution) {
                Ok(s) => s,
                Err(e) => fatal_error!(1, "Error while serializing solution: {}", e),
            };
            println!("{}", serialized);
        }
    }
}

/// Solve a single problem of an experiment, saving the solution if a
/// directory is given.
fn run_experiment_problem(
    problem: HanoiProblem,
    solutions_dir: Option<&PathBuf>,
    current: usize,
) -> serde_json::Value {
    let name = problem.name.clone();
    println!(
        "{:18}{}",
        "Problem Name:".bold(),
        name.as_deref().unwrap_or("-")
    );

    let solution = problem.clone().solve();
    let result = ProblemBenchmarkResult {
        name,
        result: match &solution {
            Ok(s) => Ok(s.get_benchmark_result()),
            Err(e) => Err(e.clone()),
        },
    };

    print_benchmark_result(&result.result);
    println!();

    let mut value = match serde_json::to_value(&result) {
        Ok(v) => v,
        Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
    };

    // Save solution
    if let Ok(solution) = solution {
        if let Some(solutions_dir) = solutions_dir {
            let mut path = solutions_dir.clone();
            path.push(format!("{:03}.soln.json", current));
            if let Err(e) = fs::save_solution(problem, &solution, &path) {
                log::error!("Failed to save solution {}: {}", current, e);
            } else if let Some(obj) = value.as_object_mut() {
                obj.insert(
                    "solution".to_string(),
                    serde_json::Value::String(path.to_string_lossy().to_string()),
                );
            }
        }
    }

    value
}

/// Run all problems in experiment.
fn run_experiment(
    experiment: Experiment,
    solutions_dir: Option<&PathBuf>,
) -> Vec<serde_json::Value> {
    println!(
        "{:18}{}\n",
        "Experiment Name:".bold(),
        experiment.name.as_deref().unwrap_or("-")
    );

    let total = experiment.problems.len();
    let mut results: Vec<serde_json::Value> = Vec::new();

    for (current, problem) in experiment.problems.into_iter().enumerate() {
        let current = current + 1;
        println!("{}", format!("Solving {}/{}...", current, total).green().bold());
        results.push(run_experiment_problem(problem, solutions_dir, current));
    }

    results
}

impl Run {
    pub fn run(self) {
        let Run { path } = self;

        let mut results_path = match std::env::current_dir() {
            Ok(p) => p,
            Err(e) => fatal_error!(1, "Cannot open current working directory: {}", e),
        };

        results_path.push(RESULTS_DIR);
        if let Err(e) = std::fs::create_dir_all(&results_path) {
            fatal_error!(1, "Cannot create results directory: {e}");
        }
        results_path.push(path.file_name().unwrap());
        if results_path.exists() {
            fatal_error!(
                1,
                "Results file is present: {}",
                results_path.to_string_lossy()
            );
        }
        let results_path = results_path;

        let solutions_dir = results_path.with_extension("d");
        if let Err(e) = std::fs::create_dir_all(&solutions_dir) {
            fatal_error!(1, "Cannot create solutions directory: {e}");
        }

        let experiment = match read_experiment_from_file(&path) {
            Ok(s) => s,
            Err(err) => fatal_error!(1, "Cannot parse experiment: {}", err),
        };

        let results = run_experiment(experiment, Some(&solutions_dir));

        let serialized = match serde_json::to_string_pretty(&results) {
            Ok(s) => s,
            Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
        };

        // Save to file.
        if let Err(e) = std::fs::write(&results_path, serialized + "\n") {
            fatal_error!(1, "Cannot write results file: {}", e);
        }

        println!("{}", "Done!".green().bold());
    }
}
