use crate::output::exit;
use memmap::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use triage::desk::script::{self, Command};

fn report_os_error<T: std::fmt::Display>(what: &str, err: T) -> ! {
    println!("% failed to read {}: {}", what, err);
    exit::failure()
}

fn read_stdin() -> String {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .unwrap_or_else(|err| report_os_error("stdin", err));
    buffer
}

fn read_path(path: &Path) -> String {
    let display = path.display().to_string();
    let file =
        File::open(path).unwrap_or_else(|err| report_os_error(&display, err));
    let length = file
        .metadata()
        .unwrap_or_else(|err| report_os_error(&display, err))
        .len();
    if length == 0 {
        return String::new();
    }

    let map = unsafe { Mmap::map(&file) }
        .unwrap_or_else(|err| report_os_error(&display, err));
    std::str::from_utf8(&map)
        .unwrap_or_else(|err| report_os_error(&display, err))
        .to_owned()
}

pub(crate) fn load_script(path: Option<&Path>) -> Vec<Command> {
    let source = match path {
        Some(path) => read_path(path),
        None => read_stdin(),
    };
    script::parse(&source).unwrap_or_else(|err| {
        println!("% invalid script: {}", err);
        exit::failure()
    })
}
