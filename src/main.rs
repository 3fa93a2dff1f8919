fn main() {
    if let Err(err) = workflow_layout::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
