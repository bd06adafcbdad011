mod input;
mod options;
mod output;

use log::{info, warn};
use options::Options;
use output::exit;
use output::record::PrintStatistics;
use triage::desk::script::Command;
use triage::desk::{ServiceDesk, DEFAULT_MAX_SIZE};

fn run(desk: &mut ServiceDesk, commands: Vec<Command>) {
    for command in commands {
        match command {
            Command::Add { customer, priority } => {
                let name = customer.name.clone();
                match desk.add_customer(customer, priority) {
                    Ok(()) => info!("admitted {} at priority {}", name, priority),
                    Err(err) => warn!("turned away {}: {}", name, err),
                }
            }
            Command::Serve => match desk.serve_customer() {
                Ok(customer) => println!("{}", customer),
                Err(err) => warn!("nobody to serve: {}", err),
            },
            Command::Show => println!("{}", desk),
        }
    }
}

fn main() {
    let options = Options::parse();
    output::log::start_logging(options.quiet);
    if options.max_size <= 0 {
        warn!(
            "maximum size {} is not positive, using {}",
            options.max_size, DEFAULT_MAX_SIZE
        );
    }

    let commands = input::load_script(options.path.as_deref());
    let mut desk = ServiceDesk::new(options.max_size);
    run(&mut desk, commands);
    if !desk.is_empty() {
        info!("{} customers still waiting", desk.len());
    }
    desk.statistics().record(&mut PrintStatistics);
    exit::success()
}
