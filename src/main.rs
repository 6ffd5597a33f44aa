fn main() {
    if let Err(err) = halo_layout::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
