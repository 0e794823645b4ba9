/// Ends the process from the fatal path of the validation gate.
pub trait Terminator: Send + Sync + std::fmt::Debug {
    fn terminate(&self, code: i32) -> !;
}

/// Exits the real process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessTerminator;

impl Terminator for ProcessTerminator {
    fn terminate(&self, code: i32) -> ! {
        std::process::exit(code)
    }
}

/// Panics instead of exiting, for hosts that must not lose the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicTerminator;

impl Terminator for PanicTerminator {
    fn terminate(&self, code: i32) -> ! {
        panic!("Missing or invalid environment property (exit code {code})")
    }
}
