/// Printing problem information: the start state and its legal first moves.
use super::*;

fn print_actions(problem: HanoiProblem) {
    let name = problem.name.clone().unwrap_or_else(|| "-".to_string());
    let (problem, _config) = match problem.prepare() {
        Ok(x) => x,
        Err(err) => fatal_error!(1, "Error while parsing problem: {}", err),
    };

    println!("{:14}{}", "Problem Name:".bold(), name);
    println!("{:14}{}", "Start State:".bold(), problem.start);
    println!("{:14}{}", "Goal State:".bold(), problem.goal);

    let actions = problem.start.actions();
    println!("{}", "Legal first moves:".bold());
    for action in actions {
        println!("    {}", action);
    }
}

impl Actions {
    pub fn run(self) {
        let Actions { path } = self;

        let problem = match HanoiProblem::read_from_file(path) {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Cannot read problem: {}", err),
        };
        print_actions(problem);
    }
}
