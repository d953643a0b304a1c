fn main() {
    if let Err(e) = calendar_dimension::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
