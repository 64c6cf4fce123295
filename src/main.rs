fn main() {
    if let Err(e) = freebie_scout::cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
