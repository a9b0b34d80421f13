use flashcard_core::request_exit;

fn main() {
    let exit = match flashcard_terminal::run() {
        Ok(exit) => exit,
        Err(e) => {
            eprintln!("error: {e:#}");
            request_exit(1)
        }
    };
    std::process::exit(exit.code);
}
