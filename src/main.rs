use std::process::ExitCode;

fn main() -> ExitCode {
    match healthcare_scheduler::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hcs: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
