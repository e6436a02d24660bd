//! till - denomination inventory and change calculation tools.

fn main() -> std::process::ExitCode {
    tillkit::cmd::main()
}
