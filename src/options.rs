use std::path::PathBuf;
use structopt::StructOpt;

const NAME: &str = "triage";

const ABOUT: &str = "
triage runs a priority service desk.
Customers are served highest priority first, and first come first served
within a priority. Commands are read from a script file, or stdin:

    add <priority> <name> | <account id> | <problem>
    serve
    show
";

#[derive(StructOpt)]
#[structopt(name = NAME, author, about = ABOUT)]
pub(crate) struct Options {
    #[structopt(
        parse(from_os_str),
        help = "path to desk script, stdin if omitted"
    )]
    pub(crate) path: Option<PathBuf>,

    #[structopt(
        long,
        help = "maximum number of waiting customers, non-positive for default",
        default_value = "10",
        allow_hyphen_values = true
    )]
    pub(crate) max_size: i64,

    #[structopt(long, help = "only log warnings")]
    pub(crate) quiet: bool,
}

impl Options {
    pub(crate) fn parse() -> Self {
        Self::from_args()
    }
}
