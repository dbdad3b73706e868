#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = catalog_ui::run() {
        eprintln!("Catalog failed: {err}");
        std::process::exit(1);
    }
}
