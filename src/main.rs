fn main() {
    if let Err(err) = skinpack_lib::run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
