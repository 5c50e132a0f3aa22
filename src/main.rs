fn main() {
    if let Err(err) = wave_labels::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
