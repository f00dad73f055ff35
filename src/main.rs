//! Default binary: launches the native media library UI.

fn main() {
    if let Err(err) = medialib_gui::run() {
        eprintln!("media library error: {}", err);
        std::process::exit(1);
    }
}
