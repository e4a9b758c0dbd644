use lingo::ui::output;

fn main() {
    if let Err(err) = lingo::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
