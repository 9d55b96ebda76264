use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use shunting::{evaluate, ShuntingParser};

#[derive(Parser, Debug)]
#[clap(name = "rpn", version, about = "Infix to reverse polish notation converter and evaluator")]
struct Args {
    /// Log verbosity (off, error, warn, info, debug, trace)
    #[clap(long, env = "RPN_LOG", default_value = "warn")]
    log_level: LevelFilter,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the postfix form of an infix expression
    Convert {
        #[clap(required = true, allow_hyphen_values = true)]
        infix: Vec<String>,
    },
    /// Evaluate a postfix expression
    Eval {
        #[clap(required = true, allow_hyphen_values = true)]
        postfix: Vec<String>,
    },
    /// Convert an infix expression and evaluate it
    Calc {
        #[clap(required = true, allow_hyphen_values = true)]
        infix: Vec<String>,
    },
}

mod repl {
    use shunting::{evaluate, RpnError, ShuntingParser};

    pub fn calc(input: &str) -> Result<String, RpnError> {
        let rpn = ShuntingParser::parse_str(input)?;
        let result = evaluate(&rpn.to_string())?;
        Ok(format!("{} = {}", rpn, result))
    }

    pub fn run() {
        let histpath = dirs::home_dir().map(|h| h.join(".rpn_history"));
        let mut rl = match rustyline::DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                log::error!("can't start line editor: {}", e);
                return;
            }
        };
        if let Some(path) = &histpath {
            if rl.load_history(path).is_err() {
                log::info!("no history yet at {}", path.display());
            }
        }
        while let Ok(input) = rl.readline(">> ") {
            if input.trim().is_empty() {
                continue;
            }
            if let Err(e) = rl.add_history_entry(input.as_str()) {
                log::warn!("history: {}", e);
            }
            match ShuntingParser::parse_str(&input).and_then(|rpn| rpn.eval()) {
                Ok(result) => println!("{}", result),
                Err(e) => println!("Error: {}", e),
            }
        }
        if let Some(path) = &histpath {
            if let Err(e) = rl.save_history(path) {
                log::warn!("couldn't save history to {}: {}", path.display(), e);
            }
        }
    }
}

fn main() {
    let args = Args::parse();
    if let Err(e) = SimpleLogger::new().with_level(args.log_level).init() {
        eprintln!("logger setup failed: {}", e);
    }

    let outcome = match args.command {
        None => {
            repl::run();
            return;
        }
        Some(Command::Convert { infix }) => {
            ShuntingParser::parse_str(&infix.join(" ")).map(|rpn| rpn.to_string())
        }
        Some(Command::Eval { postfix }) => evaluate(&postfix.join(" ")).map(|r| r.to_string()),
        Some(Command::Calc { infix }) => repl::calc(&infix.join(" ")),
    };
    match outcome {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
